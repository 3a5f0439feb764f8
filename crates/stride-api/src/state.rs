//! Application state.

use stride_media::LandmarkerConfig;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Analyses are stateless; the state only carries configuration. Each
/// request spawns its own landmarker process and writes to its own
/// analysis directory, so concurrent uploads never share anything.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub landmarker: LandmarkerConfig,
}

impl AppState {
    /// Create new application state.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        tokio::fs::create_dir_all(&config.results_dir).await?;

        Ok(Self {
            config,
            landmarker: LandmarkerConfig::from_env(),
        })
    }
}
