//! Saved canvas data and its storage
//!
//! This module handles everything that outlives a single run:
//! - The saved canvas record and its validation
//! - String-keyed stores (file-backed and in-memory)

pub mod record;
pub mod storage;

pub use record::{DecodeError, SavedCanvas};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecordStore};
