use async_trait::async_trait;
use serde::Serialize;

/// Languages the gateway translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Kannada,
}

impl Language {
    /// ISO 639-1 code understood by both the translation and speech services
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kannada => "kn",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One translated text, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub english: String,
    pub kannada: String,
}

/// Text translation capability backed by an external service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` into `target`
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, anyhow::Error>;
}
