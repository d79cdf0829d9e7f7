//! # election-gateway
//!
//! REST API over an embedded SQLite election database.
//!
//! This crate is a thin HTTP-to-SQL adapter: every request maps to exactly
//! one parameterized SQL statement against a single shared store connection,
//! and the result is shaped into a JSON envelope. There is no business logic
//! beyond referential joins (candidate → party name) and one aggregate
//! (vote counts grouped by candidate).
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │       candidates, parties, voters, votes
//!     │
//!     ├── Field Validator (validate)
//!     │
//!     └── Store (store/)
//!             single SQLite connection, schema bootstrap
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod store;
pub mod validate;
