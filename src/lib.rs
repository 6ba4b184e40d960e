//! # Bookvault Backend Library
//!
//! Core library for Bookvault, a REST API for managing books, reviews and
//! user accounts.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **jsonwebtoken / argon2**: Bearer tokens and password hashing
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`auth`]: Bearer token verification and the caller-identity extractor
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Domain counters exposed on /metrics
//! - [`repo`]: Persistence operations per collection
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Data transfer objects, response envelope, id generation
//! - [`validate`]: Stateless field validators

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod repo;
pub mod routes;
pub mod state;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;
