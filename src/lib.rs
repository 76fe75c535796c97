//! Pagesim - A virtual-memory LRU page cache simulator in Rust
//!
//! This crate simulates a fixed-capacity page cache applying
//! Least-Recently-Used replacement to a stream of virtual addresses,
//! reporting after each reference which pages reside in the frames.
//!
//! # Architecture
//!
//! The system is organized into three layers:
//!
//! - **Cache** (`cache`): The eviction core
//!   - `LruPageCache`: fixed-capacity recency-ordered set of resident
//!     pages with touch/snapshot/is_resident operations
//!   - `TouchResult`: hit/miss outcome carrying the evicted page, if any
//!
//! - **Trace** (`trace`): Everything around the core
//!   - `AddressDecoder`: fixed-width hex tokens to page references
//!   - `TraceFile`: loads and tokenizes an address trace from disk
//!   - `TraceRunner`: feeds references to the cache and records each
//!     resulting frame snapshot and the running hit/miss statistics
//!
//! - **Common** (`common`): Shared types, constants, and errors
//!
//! # Example
//!
//! ```rust
//! use pagesim::cache::LruPageCache;
//! use pagesim::common::PageNumber;
//!
//! // A cache with 5 frames, as in a small virtual-memory system
//! let cache = LruPageCache::new(5).unwrap();
//!
//! for page in [1, 2, 1, 3, 7] {
//!     cache.touch(PageNumber::new(page));
//! }
//!
//! // Resident pages, most recently used first
//! let frames = cache.snapshot();
//! assert_eq!(frames[0], PageNumber::new(7));
//! assert_eq!(cache.len(), 4);
//! ```

pub mod cache;
pub mod common;
pub mod trace;

// Re-export commonly used types at the crate root
pub use cache::{LruPageCache, TouchResult};
pub use common::{PageNumber, PageReference, Result, SimError};
pub use trace::{AddressDecoder, TraceFile, TraceRunner};
