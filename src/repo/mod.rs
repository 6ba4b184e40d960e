//! Persistence operations, one module per collection.
//!
//! Handlers never build SQL themselves; they call these functions with the
//! shared pool. Uniqueness of book title/ISBN is a read-then-write pre-check
//! in the handlers, so nothing here takes locks or opens transactions.

pub mod books;
pub mod reviews;
pub mod users;
