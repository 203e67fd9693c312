use serde::{Deserialize, Serialize};

/// Runtime settings for the text-generation client.
///
/// Everything has a working default; env vars override individual fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub endpoint: String,
    pub model: String,
    /// Pinned generation seed. `None` means a fresh seed per request.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://text.pollinations.ai".to_string(),
            model: "openai".to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("DECK_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }

        if let Ok(model) = std::env::var("DECK_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }

        if let Ok(seed) = std::env::var("DECK_SEED") {
            config.seed = seed.parse().ok();
        }

        config
    }
}
