//! Directory provider client and lookup service for unidata.
//!
//! [`DirectoryClient`] talks to the external university directory API;
//! [`LookupService`] wraps it in the cache-aside flow: check the store,
//! fetch on miss, fill the store, return either path as the same JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod lookup;

pub use client::{DirectoryClient, DirectoryConfig};
pub use lookup::{LookupConfig, LookupService};
