#[cfg(test)]
mod tests {
    use crate::types::new_object_id;
    use crate::validate::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("x"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_is_object_id() {
        assert!(is_object_id("507f1f77bcf86cd799439011"));
        assert!(is_object_id("ABCDEF0123456789abcdef01"));
        assert!(!is_object_id("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_object_id("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_object_id("507f1f77bcf86cd79943901g")); // non-hex
        assert!(!is_object_id(""));
    }

    #[test]
    fn test_new_object_id_shape() {
        let a = new_object_id();
        let b = new_object_id();
        assert_eq!(a.len(), 24);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(is_object_id(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_valid_isbn() {
        // 10 and 13 digits, with or without hyphens
        assert!(is_valid_isbn("0441013593"));
        assert!(is_valid_isbn("978-0441013593"));
        assert!(is_valid_isbn("9780441013593"));
        assert!(is_valid_isbn("0-441-01359-3"));

        assert!(!is_valid_isbn("044101359")); // 9 digits
        assert!(!is_valid_isbn("04410135931")); // 11 digits
        assert!(!is_valid_isbn("978044101359")); // 12 digits
        assert!(!is_valid_isbn("97804410135931")); // 14 digits
        assert!(!is_valid_isbn("978 0441013593")); // space separator
        assert!(!is_valid_isbn("044101359X")); // letters not accepted
        assert!(!is_valid_isbn(""));
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("Fiction"));
        assert!(is_alphabetic("Science Fiction"));
        assert!(!is_alphabetic("Sci-Fi"));
        assert!(!is_alphabetic("Top10"));
        assert!(!is_alphabetic(""));
        assert!(!is_alphabetic("   "));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2021-09-17"));
        assert!(is_valid_date("2000-02-29")); // leap year
        assert!(!is_valid_date("2021-02-30"));
        assert!(!is_valid_date("2021-13-01"));
        assert!(!is_valid_date("17-09-2021"));
        assert!(!is_valid_date("2021/09/17"));
        assert!(!is_valid_date("not a date"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("userexample.com")); // no @
        assert!(!is_valid_email("user@@example.com")); // two @
        assert!(!is_valid_email("@example.com")); // empty local part
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_rating() {
        for r in 1..=5 {
            assert!(is_valid_rating(r));
        }
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
        assert!(!is_valid_rating(-3));
    }
}
