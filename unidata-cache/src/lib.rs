//! Cache store implementations for unidata.
//!
//! Two implementations of the `unidata_core::CacheStore` interface:
//!
//! - [`RedisStore`] — the production store, one Redis key per lookup term
//!   with a store-enforced TTL.
//! - [`MemoryStore`] — an in-process TTL map for tests and cache-less
//!   development runs.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;
