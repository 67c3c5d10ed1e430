//! Functional core for carstore.
//!
//! Pure data types and storage contracts shared by the service. Nothing in
//! this crate performs I/O.

pub mod car;
pub mod storage;
