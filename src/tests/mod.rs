//! Integration and unit tests for the Bookvault application.
//!
//! ## Test Modules
//!
//! - **books_api_tests**: book CRUD, ownership and soft-delete behavior
//! - **auth_tests**: register/login and bearer token verification
//! - **review_api_tests**: review endpoints and the review counter
//! - **error_tests**: error-to-response mapping and the envelope shape
//! - **config_tests**: configuration loading and validation
//! - **db_tests**: schema initialization and persistence round-trips
//! - **validate_tests**: field validator predicates and id generation

pub mod config_tests;
pub mod db_tests;
pub mod validate_tests;

mod helpers;
