//! Core types and logic for the cinecal ecosystem.
//!
//! This crate provides everything cinecal-cli needs short of actual I/O:
//! - `Movie` and related types for fetched release records
//! - `selection` and `sort` for the table view over those records
//! - `ics` for calendar document generation
//! - `protocol` for the backend fetch envelope
//! - `session` for the state container tying the above together

pub mod config;
pub mod error;
pub mod ics;
pub mod movie;
pub mod protocol;
pub mod selection;
pub mod session;
pub mod sort;

// Re-export the most commonly used types at crate root for convenience
pub use error::{CinecalError, CinecalResult};
pub use movie::{Movie, MovieId, ReleaseType};
