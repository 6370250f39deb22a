use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::interface::{TTSInterface, TTSRequest};
use crate::config::TTSConfig;
use crate::translate::Language;
use crate::utils::text_chunker::split_for_speech;

const NORMAL_SPEED: f32 = 1.0;
const SLOW_SPEED: f32 = 0.24;

/// TTS client that talks to Google's web text-to-speech endpoint
#[derive(Debug, Clone)]
pub struct TTSClient {
    client: Client,
    base_url: String,
    slow: bool,
    max_chunk_chars: usize,
}

impl TTSClient {
    /// Create a new TTS client
    pub fn new(client: Client, base_url: String, slow: bool, max_chunk_chars: usize) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            slow,
            max_chunk_chars,
        }
    }

    pub fn from_config(config: &TTSConfig) -> anyhow::Result<Self> {
        let client = crate::utils::http::build_client(config.request_timeout_secs)?;
        Ok(Self::new(
            client,
            config.base_url.clone(),
            config.slow,
            config.max_chunk_chars,
        ))
    }

    fn speed(&self) -> f32 {
        if self.slow {
            SLOW_SPEED
        } else {
            NORMAL_SPEED
        }
    }

    async fn fetch_chunk(&self, request: &TTSRequest<'_>) -> anyhow::Result<Vec<u8>> {
        let url = format!("{}/translate_tts", self.base_url);
        let response = self.client.get(&url).query(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "speech service returned HTTP {} for chunk {}/{}",
                status,
                request.idx + 1,
                request.total
            );
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl TTSInterface for TTSClient {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, anyhow::Error> {
        let chunks = split_for_speech(text, self.max_chunk_chars);
        if chunks.is_empty() {
            anyhow::bail!("no text to speak");
        }

        debug!("Sending TTS request: lang={}, chunks={}", language, chunks.len());

        // MP3 frames are self-delimiting, so chunk audio concatenates into one stream
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let request = TTSRequest {
                ie: "UTF-8",
                q: chunk.as_str(),
                tl: language.code(),
                client: "tw-ob",
                ttsspeed: self.speed(),
                total: chunks.len(),
                idx,
                textlen: chunk.chars().count(),
            };
            audio.extend(self.fetch_chunk(&request).await?);
        }

        if audio.is_empty() {
            anyhow::bail!("speech service returned no audio");
        }
        debug!("TTS synthesis successful: {} bytes", audio.len());
        Ok(audio)
    }
}
