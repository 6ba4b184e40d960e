//! HTTP route handlers for the Bookvault API.
//!
//! Each sub-module handles one domain of functionality:
//!
//! - `books`: book CRUD with soft-delete and ownership checks
//! - `reviews`: reviews attached to a book
//! - `users`: registration and login (token issuance)
//! - `health`: health check, metrics and version endpoints

pub mod books;
pub mod health;
pub mod reviews;
pub mod users;
