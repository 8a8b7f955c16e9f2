//! Functional core for the consultants API.
//!
//! Pure data types and functions with no I/O. The imperative shell lives in
//! the `consultants` crate.

pub mod consultant;
pub mod storage;
