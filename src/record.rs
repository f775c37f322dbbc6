//! Record types for the ingestion pipeline
//!
//! `PersonPayload` is the wire shape of one character resource, with its
//! link-bearing fields still holding raw resource URLs. `CharacterRecord`
//! is the fully enriched form handed to storage: every field is a plain
//! display string.

use serde::Deserialize;

/// Raw character payload as served by the API.
///
/// Server-internal fields (`created`, `edited`, `url`) are intentionally
/// absent: typed deserialization drops them, and they are not part of the
/// persisted schema.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonPayload {
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub mass: String,
    pub skin_color: String,

    /// Single resource URL
    pub homeworld: String,

    /// Ordered resource URL lists
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
}

/// A fully enriched character, ready for persistence.
///
/// Only constructed once all five link-bearing fields have resolved, so a
/// partially enriched record is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub mass: String,
    pub skin_color: String,
    pub homeworld: String,
    pub films: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload_json() -> &'static str {
        r#"{
            "name": "Luke Skywalker",
            "birth_year": "19BBY",
            "eye_color": "blue",
            "gender": "male",
            "hair_color": "blond",
            "height": "172",
            "mass": "77",
            "skin_color": "fair",
            "homeworld": "https://swapi.py4e.com/api/planets/1/",
            "films": ["https://swapi.py4e.com/api/films/1/"],
            "species": [],
            "starships": ["https://swapi.py4e.com/api/starships/12/"],
            "vehicles": ["https://swapi.py4e.com/api/vehicles/14/"],
            "created": "2014-12-09T13:50:51.644000Z",
            "edited": "2014-12-20T21:17:56.891000Z",
            "url": "https://swapi.py4e.com/api/people/1/"
        }"#
    }

    #[test]
    fn test_payload_deserializes_and_drops_internals() {
        let payload: PersonPayload = serde_json::from_str(sample_payload_json()).unwrap();

        assert_eq!(payload.name, "Luke Skywalker");
        assert_eq!(payload.homeworld, "https://swapi.py4e.com/api/planets/1/");
        assert_eq!(payload.films.len(), 1);
        assert!(payload.species.is_empty());

        // The struct has no created/edited/url fields; deserialization
        // succeeding at all is the stripping behavior.
    }

    #[test]
    fn test_payload_requires_link_fields() {
        let json = r#"{"name": "Luke Skywalker", "birth_year": "19BBY"}"#;
        let result: Result<PersonPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_preserves_list_order() {
        let json = r#"{
            "name": "x", "birth_year": "x", "eye_color": "x", "gender": "x",
            "hair_color": "x", "height": "x", "mass": "x", "skin_color": "x",
            "homeworld": "h",
            "films": ["f3", "f1", "f2"],
            "species": [], "starships": [], "vehicles": []
        }"#;
        let payload: PersonPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.films, vec!["f3", "f1", "f2"]);
    }
}
