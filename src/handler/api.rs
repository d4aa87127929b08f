//! JSON status endpoints
//!
//! `/health`, `/api/info`, and the green-only `/api/features`. Payloads are
//! assembled fresh on every call from the release constants and a
//! [`Snapshot`].

use serde::Serialize;

use crate::release::{Environment, Feature, Release};
use crate::snapshot::{self, Snapshot};

/// `GET /health` body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: Environment,
    pub timestamp: String,
}

/// `GET /api/info` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub version: &'static str,
    pub environment: Environment,
    pub status: &'static str,
    pub timestamp: String,
    pub hostname: String,
    pub platform: &'static str,
    /// Kept under the historical `nodeVersion` key for existing clients
    #[serde(rename = "nodeVersion")]
    pub runtime_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<&'static [&'static str]>,
}

/// `GET /api/features` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesResponse {
    pub version: &'static str,
    pub new_features: &'static [Feature],
}

pub fn health(release: &Release) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        version: release.version,
        environment: release.environment,
        timestamp: snapshot::now_iso8601(),
    }
}

pub fn info(release: &Release, snapshot: Snapshot) -> InfoResponse {
    InfoResponse {
        version: release.version,
        environment: release.environment,
        status: release.status,
        timestamp: snapshot.timestamp,
        hostname: snapshot.hostname,
        platform: snapshot::platform(),
        runtime_version: snapshot::runtime_version(),
        features: release.info_features,
    }
}

/// `None` when the release has no feature catalog (the route is then a 404)
pub fn features(release: &Release) -> Option<FeaturesResponse> {
    release.new_features.map(|new_features| FeaturesResponse {
        version: release.version,
        new_features,
    })
}
