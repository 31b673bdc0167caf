//! Near-Earth object metadata from the NASA NeoWs API.
//!
//! A lookup returns a [`NeoRecord`], of which only a handful of fields are
//! consumed and mapped into an [`ObjectDescription`] for the info panel.

mod error;
mod fetch;

use std::time::Duration;

use serde::Deserialize;

pub use self::error::{NeoError, NeoResult};
pub use self::fetch::{
    DescriptionSource, FetchResult, MetadataFetcher, MetadataPlugin, ObjectInfo, poll_metadata,
    request_metadata,
};

use crate::config::OrreryConfig;

/// Per-request timeout for NeoWs calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback text for a missing discovery date.
pub const UNKNOWN_DISCOVERY: &str = "Unknown";

/// The subset of a NeoWs `neo/{id}` response that the orrery reads.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NeoRecord {
    pub name: String,
    #[serde(default)]
    pub discovery_date: Option<String>,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default)]
    pub orbital_data: Option<OrbitalData>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiameterRange {
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrbitalData {
    #[serde(default)]
    pub first_observation_date: Option<String>,
}

/// Display record for the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDescription {
    pub name: String,
    pub discovery: String,
    pub description: String,
}

impl From<&NeoRecord> for ObjectDescription {
    fn from(record: &NeoRecord) -> Self {
        let discovery = record
            .discovery_date
            .clone()
            .or_else(|| {
                record
                    .orbital_data
                    .as_ref()
                    .and_then(|o| o.first_observation_date.as_ref())
                    .map(|date| format!("First observed {date}"))
            })
            .unwrap_or_else(|| UNKNOWN_DISCOVERY.to_string());

        let mut description = format!(
            "Absolute magnitude (H): {:.2}. Estimated maximum diameter: {:.3} km.",
            record.absolute_magnitude_h, record.estimated_diameter.kilometers.estimated_diameter_max
        );
        if record.is_potentially_hazardous_asteroid == Some(true) {
            description.push_str(" Potentially hazardous.");
        }

        Self {
            name: record.name.clone(),
            discovery,
            description,
        }
    }
}

/// Decode a NeoWs lookup body.
pub fn parse_record(body: &str) -> NeoResult<NeoRecord> {
    Ok(serde_json::from_str(body)?)
}

/// Blocking NeoWs client.
pub struct NeoClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl NeoClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    /// Lookup URL for `neo_id`, without the API key.
    pub fn lookup_url(&self, neo_id: &str) -> String {
        format!("{}/neo/{}", self.base_url, neo_id)
    }

    /// Lookup request for `neo_id`, with the API key attached.
    pub fn request(&self, neo_id: &str) -> ureq::Request {
        self.agent
            .get(&self.lookup_url(neo_id))
            .query("api_key", &self.api_key)
    }

    /// Fetch and decode the record for `neo_id`.
    pub fn fetch(&self, neo_id: &str) -> NeoResult<NeoRecord> {
        let body = self.request(neo_id).call()?.into_string()?;
        parse_record(&body)
    }
}

impl DescriptionSource for NeoClient {
    fn describe(&self, neo_id: &str) -> NeoResult<ObjectDescription> {
        self.fetch(neo_id).map(|record| ObjectDescription::from(&record))
    }
}
