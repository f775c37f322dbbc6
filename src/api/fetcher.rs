//! Record fetching and enrichment
//!
//! This module fetches one primary character record by numeric id and
//! resolves all of its linked sub-resources concurrently:
//! - films, species, starships, vehicles via list resolution
//! - homeworld via single resolution
//!
//! A record is either fully enriched or not produced at all: the enriched
//! record is assembled from the five independently resolved values only
//! after every resolution has succeeded, so partial enrichment never
//! reaches a caller.

use crate::api::resolver::{resolve_list, resolve_single};
use crate::api::{ApiClient, ResourceCache};
use crate::record::{CharacterRecord, PersonPayload};
use crate::{HolocronError, Result};
use serde_json::Value;
use std::sync::Arc;

/// Fetches and enriches primary character records
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ApiClient,
    cache: Arc<ResourceCache>,
}

impl Fetcher {
    /// Creates a fetcher over the given client and injected shared cache
    pub fn new(client: ApiClient, cache: Arc<ResourceCache>) -> Self {
        Self { client, cache }
    }

    /// Fetches one character and resolves all its linked fields
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - the fully enriched character
    /// * `Ok(None)` - the API reported no such id
    /// * `Err(_)` - any fetch or resolution failure; nothing partial is kept
    pub async fn fetch_character(&self, person_id: u32) -> Result<Option<CharacterRecord>> {
        let url = self.client.person_url(person_id);
        let (status, body) = self.client.get_raw(&url).await?;

        let json: Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(source) => {
                if !status.is_success() {
                    return Err(HolocronError::UnexpectedStatus {
                        url,
                        status: status.as_u16(),
                    });
                }
                return Err(HolocronError::MalformedResource { url, source });
            }
        };

        // The API's not-found convention is a "detail" marker in the body.
        if json.get("detail").is_some() {
            tracing::debug!("Person {} not found", person_id);
            return Ok(None);
        }

        if !status.is_success() {
            return Err(HolocronError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let payload: PersonPayload = serde_json::from_value(json)
            .map_err(|source| HolocronError::MalformedResource { url, source })?;

        // The five resolutions hit disjoint resources and produce
        // independent values; running them concurrently needs no
        // coordination beyond joining here.
        let (films, species, starships, vehicles, homeworld) = tokio::try_join!(
            resolve_list(&self.client, &self.cache, &payload.films, "title"),
            resolve_list(&self.client, &self.cache, &payload.species, "name"),
            resolve_list(&self.client, &self.cache, &payload.starships, "name"),
            resolve_list(&self.client, &self.cache, &payload.vehicles, "name"),
            resolve_single(&self.client, &self.cache, &payload.homeworld, "name"),
        )?;

        Ok(Some(CharacterRecord {
            id: i64::from(person_id),
            name: payload.name,
            birth_year: payload.birth_year,
            eye_color: payload.eye_color,
            gender: payload.gender,
            hair_color: payload.hair_color,
            height: payload.height,
            mass: payload.mass,
            skin_color: payload.skin_color,
            homeworld,
            films,
            species,
            starships,
            vehicles,
        }))
    }

    /// The shared cache this fetcher consults
    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }
}
