//! Persistence layer: a single shared handle to the embedded SQLite store.
//!
//! Exposes three operations ([`Store::query_all`], [`Store::query_one`],
//! and [`Store::execute`]), all taking a parameterized statement with
//! positional `?` placeholders bound from [`SqlArg`] values. Each call is
//! its own implicit transaction; there is no retry and no multi-statement
//! coordination.

pub mod schema;
pub mod sqlite;

pub use sqlite::{ExecResult, JsonRow, SqlArg, Store, StoreError};
