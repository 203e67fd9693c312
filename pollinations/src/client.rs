use anyhow::{anyhow, Result};

/// Client for the pollinations.ai text endpoint. No authentication; the
/// prompt travels URL-encoded in the request path.
pub struct PollinationsClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    /// Pinned seed, or `None` for a fresh seed per request.
    seed: Option<u64>,
}

impl PollinationsClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            seed,
        }
    }

    fn request_url(&self, prompt: &str) -> String {
        let seed = self
            .seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
        format!(
            "{}/{}?model={}&seed={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            self.model,
            seed
        )
    }

    /// Single-attempt text generation. A non-success status is an error; the
    /// caller decides what failure means.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = self.request_url(prompt);
        tracing::debug!(model = %self.model, "requesting text generation");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("text generator returned http {status}"));
        }

        let text = resp.text().await?;
        tracing::debug!(bytes = text.len(), "text generation response received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_url_encoded_into_the_path() {
        let client = PollinationsClient::new("https://text.example.org/", "openai", Some(7));
        let url = client.request_url("два слова & символ");
        assert!(url.starts_with("https://text.example.org/"));
        assert!(url.ends_with("?model=openai&seed=7"));
        assert!(!url.contains(' '));
        // The ampersand inside the prompt is encoded; the only raw one left
        // is the query separator.
        assert_eq!(url.matches('&').count(), 1);
    }

    #[test]
    fn pinned_seed_makes_urls_stable() {
        let client = PollinationsClient::new("https://text.example.org", "openai", Some(42));
        assert_eq!(client.request_url("тема"), client.request_url("тема"));
    }
}
