use async_trait::async_trait;
use serde::Serialize;

use crate::translate::Language;

/// Query parameters of one `translate_tts` call
#[derive(Debug, Clone, Serialize)]
pub struct TTSRequest<'a> {
    pub ie: &'static str,
    pub q: &'a str,
    pub tl: &'static str,
    pub client: &'static str,
    pub ttsspeed: f32,
    pub total: usize,
    pub idx: usize,
    pub textlen: usize,
}

/// TTS interface trait - speech synthesis is delegated to an external service
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize speech for `text` spoken in `language`
    ///
    /// # Returns
    /// MP3 encoded audio
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, anyhow::Error>;
}
