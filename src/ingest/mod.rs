//! Ingest module for batch fetching and persistence
//!
//! This module contains the batch orchestration logic: chunked concurrent
//! fetching, not-found filtering, and background persistence dispatch.

mod coordinator;

pub use coordinator::{id_chunks, Coordinator, CHUNK_SIZE, FIRST_PERSON_ID, LAST_PERSON_ID};

use crate::config::Config;
use crate::Result;

/// Runs a complete ingest over the fixed id range
///
/// This is the main entry point for an ingest. It will:
/// 1. Open the storage database
/// 2. Build the HTTP client and shared resource cache
/// 3. Fetch and enrich every character, chunk by chunk
/// 4. Join all background persistence work
///
/// # Arguments
///
/// * `config` - The ingester configuration
///
/// # Returns
///
/// * `Ok(count)` - Ingest completed; `count` characters persisted
/// * `Err(HolocronError)` - Ingest failed
pub async fn ingest(config: &Config) -> Result<u64> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
