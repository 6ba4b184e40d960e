#[cfg(test)]
mod tests {
    use crate::config::{ensure_sqlite_parent_dir, load, AppConfig};

    #[test]
    fn test_default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.database.url, "sqlite://data/bookvault.db");
        assert_eq!(cfg.auth.jwt_secret, "change-me-development-secret");
        assert_eq!(cfg.auth.token_expiry_hours, 24);
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_creates_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c/app.db");
        let url = format!("sqlite://{}", nested.display());

        ensure_sqlite_parent_dir(&url).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_ignores_other_schemes() {
        ensure_sqlite_parent_dir("postgres://localhost/db").unwrap();
        ensure_sqlite_parent_dir(":memory:").unwrap();
    }

    // Environment overrides share process-global state, so every case runs
    // inside this single test instead of racing in parallel ones.
    #[test]
    fn test_env_overrides() {
        let clear = || {
            std::env::remove_var("BOOKVAULT__SERVER__PORT");
            std::env::remove_var("BOOKVAULT__AUTH__JWT_SECRET");
        };
        clear();

        std::env::set_var("BOOKVAULT__SERVER__PORT", "8080");
        let cfg = load().unwrap();
        assert_eq!(cfg.server.port, 8080);

        std::env::set_var("BOOKVAULT__SERVER__PORT", "0");
        assert!(load().is_err());
        std::env::remove_var("BOOKVAULT__SERVER__PORT");

        std::env::set_var("BOOKVAULT__AUTH__JWT_SECRET", "too-short");
        assert!(load().is_err());

        clear();
        let cfg = load().unwrap();
        assert_eq!(cfg.server.port, 3000);
    }
}
