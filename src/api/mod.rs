//! Remote API access
//!
//! This module contains everything that talks to the upstream API:
//! - HTTP client construction with the fixed header pair
//! - Fetching a primary character record by id
//! - Resolving linked sub-resources into display values
//! - The shared URL -> value resource cache

mod cache;
mod client;
mod fetcher;
mod resolver;

pub use cache::ResourceCache;
pub use client::{build_http_client, ApiClient, ACCEPT_JSON, USER_AGENT};
pub use fetcher::Fetcher;
pub use resolver::{resolve_list, resolve_single};
