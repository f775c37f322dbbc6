//! Ingest coordinator - main batch orchestration logic
//!
//! This module contains the main ingest loop that coordinates all aspects
//! of the pipeline, including:
//! - Partitioning the id space into fixed-size chunks
//! - Fetching every id in a chunk concurrently
//! - Filtering not-found sentinels while preserving order
//! - Dispatching record groups to background persistence tasks
//! - Draining all outstanding persistence work before returning

use crate::api::{ApiClient, Fetcher, ResourceCache};
use crate::config::Config;
use crate::record::CharacterRecord;
use crate::storage::{SqliteStorage, Storage};
use crate::Result;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;
use url::Url;

/// First person id fetched from the API
pub const FIRST_PERSON_ID: u32 = 1;

/// Last person id fetched from the API (inclusive)
pub const LAST_PERSON_ID: u32 = 50;

/// Number of ids fetched concurrently per chunk
pub const CHUNK_SIZE: usize = 10;

/// Main ingest coordinator structure
///
/// Owns the storage handle, the fetcher (with its injected shared cache),
/// and - while running - the set of background persistence tasks.
pub struct Coordinator {
    storage: Arc<Mutex<SqliteStorage>>,
    fetcher: Fetcher,
    first_id: u32,
    last_id: u32,
    chunk_size: usize,
}

impl Coordinator {
    /// Creates a coordinator over the fixed id range
    ///
    /// # Arguments
    ///
    /// * `config` - The ingester configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HolocronError)` - Failed to initialize
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_id_range(config, FIRST_PERSON_ID, LAST_PERSON_ID, CHUNK_SIZE)
    }

    /// Creates a coordinator over an explicit id range
    ///
    /// The fixed-constant range of [`new`](Self::new) is the normal entry;
    /// this exists so an ingest can be pointed at a small range, e.g.
    /// against a local mock server.
    pub fn with_id_range(
        config: &Config,
        first_id: u32,
        last_id: u32,
        chunk_size: usize,
    ) -> Result<Self> {
        let storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
        let base_url = Url::parse(&config.api.base_url)?;
        let client = ApiClient::new(base_url)?;

        // The cache is owned here and injected into the fetcher; every
        // concurrent fetch shares this one instance.
        let cache = Arc::new(ResourceCache::new());
        let fetcher = Fetcher::new(client, cache);

        Ok(Self {
            storage: Arc::new(Mutex::new(storage)),
            fetcher,
            first_id,
            last_id,
            chunk_size,
        })
    }

    /// Runs the main ingest loop
    ///
    /// One pass per chunk of the id range:
    /// 1. Fetch phase: spawn one fetch per id, then await the handles in
    ///    submission order
    /// 2. Filter phase: drop not-found sentinels, keeping survivor order
    /// 3. Dispatch phase: spawn the group's batch insert as a background
    ///    task and move on to the next chunk without waiting
    ///
    /// After the last chunk, every outstanding persistence task is joined
    /// before this method returns; the first failure anywhere aborts the
    /// run.
    ///
    /// # Returns
    ///
    /// The number of characters handed to persistence.
    pub async fn run(&mut self) -> Result<u64> {
        let chunks = id_chunks(self.first_id, self.last_id, self.chunk_size);
        let total_chunks = chunks.len();
        tracing::info!(
            "Starting ingest of ids {}..={} in {} chunks",
            self.first_id,
            self.last_id,
            total_chunks
        );

        let mut persist_tasks: JoinSet<Result<()>> = JoinSet::new();
        let mut kept: u64 = 0;

        for (index, chunk) in chunks.into_iter().enumerate() {
            let mut handles = Vec::with_capacity(chunk.len());
            for person_id in chunk.iter().copied() {
                let fetcher = self.fetcher.clone();
                handles.push(tokio::spawn(async move {
                    fetcher.fetch_character(person_id).await
                }));
            }

            // Awaiting in submission order means the surviving records come
            // out id-ascending no matter which fetches finished first.
            let mut group: Vec<CharacterRecord> = Vec::with_capacity(handles.len());
            for handle in handles {
                if let Some(record) = handle.await?? {
                    group.push(record);
                }
            }

            kept += group.len() as u64;
            tracing::info!(
                "Chunk {}/{}: fetched {}, kept {}",
                index + 1,
                total_chunks,
                chunk.len(),
                group.len()
            );

            // Fire-and-forget relative to the fetch loop; the group moves
            // into the task by value and is joined in the drain below.
            let storage = Arc::clone(&self.storage);
            persist_tasks.spawn(async move {
                let mut storage = storage.lock().unwrap();
                storage.insert_characters(&group)?;
                tracing::debug!("Persisted group of {}", group.len());
                Ok(())
            });
        }

        // Drain: the coordinator owns every persistence task it spawned,
        // and joins the whole set exactly once here.
        while let Some(joined) = persist_tasks.join_next().await {
            joined??;
        }

        tracing::info!(
            "Ingest complete: {} characters persisted ({} sub-resources cached)",
            kept,
            self.fetcher.cache().len()
        );

        Ok(kept)
    }
}

/// Partitions the inclusive id range [first, last] into contiguous chunks
///
/// Every chunk has `chunk_size` ids except possibly the last.
pub fn id_chunks(first: u32, last: u32, chunk_size: usize) -> Vec<Vec<u32>> {
    assert!(chunk_size > 0, "chunk size must be positive");

    if first > last {
        return Vec::new();
    }

    (first..=last)
        .collect::<Vec<_>>()
        .chunks(chunk_size)
        .map(<[u32]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_partition_evenly() {
        let chunks = id_chunks(1, 100, 10);

        assert_eq!(chunks.len(), 10);
        for (i, chunk) in chunks.iter().enumerate() {
            let first = 10 * i as u32 + 1;
            let expected: Vec<u32> = (first..first + 10).collect();
            assert_eq!(chunk, &expected);
        }
    }

    #[test]
    fn test_last_chunk_may_be_short() {
        let chunks = id_chunks(1, 7, 3);
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn test_single_id_range() {
        let chunks = id_chunks(5, 5, 10);
        assert_eq!(chunks, vec![vec![5]]);
    }

    #[test]
    fn test_empty_range() {
        let chunks = id_chunks(10, 1, 10);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunks_cover_default_range() {
        let chunks = id_chunks(FIRST_PERSON_ID, LAST_PERSON_ID, CHUNK_SIZE);

        let flattened: Vec<u32> = chunks.into_iter().flatten().collect();
        let expected: Vec<u32> = (FIRST_PERSON_ID..=LAST_PERSON_ID).collect();
        assert_eq!(flattened, expected);
    }
}
