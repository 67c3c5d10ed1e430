//! In-memory storage backend.
//!
//! Stores cars in a HashMap wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use carstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
