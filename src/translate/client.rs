use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{Language, Translator};
use crate::config::TranslationConfig;

/// Translator backed by Google's public web translation endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &TranslationConfig) -> anyhow::Result<Self> {
        let client = crate::utils::http::build_client(config.request_timeout_secs)?;
        Ok(Self::new(client, config.base_url.clone()))
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, anyhow::Error> {
        let url = format!("{}/translate_a/single", self.base_url);
        debug!("Sending translation request: {} -> {}, {} chars", source, target, text.chars().count());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("translation service returned HTTP {}", status);
        }

        let payload: Value = response.json().await?;
        parse_translation(&payload)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists one
/// `[translated, original, ...]` entry per sentence.
fn parse_translation(payload: &Value) -> anyhow::Result<String> {
    let segments = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("unexpected translation response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translated.trim().is_empty() {
        anyhow::bail!("translation service returned no text");
    }
    Ok(translated)
}
