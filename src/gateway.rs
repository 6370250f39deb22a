use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::audio::{AudioArtifact, AudioStore};
use crate::error::GatewayError;
use crate::translate::{Language, TranslationResult, Translator};
use crate::tts::TTSInterface;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter English text to translate";
pub const EMPTY_BATCH_MESSAGE: &str = "Please provide a list of texts";

/// Result of an optional synthesis step. Failures are recorded, never propagated.
#[derive(Debug)]
pub enum SynthesisOutcome {
    Written(PathBuf),
    Failed(String),
}

impl SynthesisOutcome {
    #[cfg(test)]
    pub fn is_written(&self) -> bool {
        matches!(self, SynthesisOutcome::Written(_))
    }
}

impl std::fmt::Display for SynthesisOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthesisOutcome::Written(path) => write!(f, "written to {}", path.display()),
            SynthesisOutcome::Failed(reason) => write!(f, "not written ({})", reason),
        }
    }
}

/// Audio reference returned to clients. The URL is fixed whether or not this
/// request's synthesis succeeded, so it may point at another request's audio.
#[derive(Debug)]
pub struct AudioLink {
    pub artifact: AudioArtifact,
    pub outcome: SynthesisOutcome,
}

impl AudioLink {
    pub fn url(&self) -> String {
        self.artifact.url()
    }
}

#[derive(Debug)]
pub struct SpokenTranslation {
    pub translation: TranslationResult,
    pub audio: AudioLink,
}

#[derive(Debug)]
pub struct VoiceTranslation {
    pub translation: TranslationResult,
    pub english_audio: AudioLink,
    pub kannada_audio: AudioLink,
}

/// Validates requests and delegates to the translation and speech services
pub struct Gateway {
    translator: Arc<dyn Translator>,
    tts: Arc<dyn TTSInterface>,
    audio: AudioStore,
    max_text_chars: usize,
}

impl Gateway {
    pub fn new(
        translator: Arc<dyn Translator>,
        tts: Arc<dyn TTSInterface>,
        audio: AudioStore,
        max_text_chars: usize,
    ) -> Self {
        Self {
            translator,
            tts,
            audio,
            max_text_chars,
        }
    }

    /// Trim `text` and check it is non-empty and within the length limit
    pub fn validate_text(&self, text: &str) -> Result<String, GatewayError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GatewayError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
        }
        if trimmed.chars().count() > self.max_text_chars {
            return Err(GatewayError::Validation(format!(
                "Text is too long. Maximum {} characters allowed.",
                self.max_text_chars
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Translate one text and write its Kannada audio to the shared output file
    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn translate_single(&self, text: &str) -> Result<SpokenTranslation, GatewayError> {
        let english = self.validate_text(text)?;
        let kannada = self.translate(&english).await?;

        let audio = self
            .synthesize_to(AudioArtifact::Single, &kannada, Language::Kannada)
            .await;

        info!("Translated {} chars, audio {}", english.chars().count(), audio.outcome);
        Ok(SpokenTranslation {
            translation: TranslationResult { english, kannada },
            audio,
        })
    }

    /// Translate each non-blank entry in order. Blank entries are dropped
    /// without a placeholder; the first failure aborts the whole batch.
    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), size = texts.len()))]
    pub async fn translate_batch(
        &self,
        texts: &[String],
    ) -> Result<Vec<TranslationResult>, GatewayError> {
        if texts.is_empty() {
            return Err(GatewayError::Validation(EMPTY_BATCH_MESSAGE.to_string()));
        }

        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            if text.trim().is_empty() {
                continue;
            }
            let kannada = self.translate(text).await?;
            translations.push(TranslationResult {
                english: text.clone(),
                kannada,
            });
        }

        info!("Translated batch of {} entries", translations.len());
        Ok(translations)
    }

    /// Translate one text and write both English and Kannada audio.
    /// Each synthesis is attempted independently.
    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn translate_with_voice(&self, text: &str) -> Result<VoiceTranslation, GatewayError> {
        let english = self.validate_text(text)?;
        let kannada = self.translate(&english).await?;

        let english_audio = self
            .synthesize_to(AudioArtifact::English, &english, Language::English)
            .await;
        let kannada_audio = self
            .synthesize_to(AudioArtifact::Kannada, &kannada, Language::Kannada)
            .await;

        info!(
            "Translated {} chars, english audio {}, kannada audio {}",
            english.chars().count(),
            english_audio.outcome,
            kannada_audio.outcome
        );
        Ok(VoiceTranslation {
            translation: TranslationResult { english, kannada },
            english_audio,
            kannada_audio,
        })
    }

    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        self.translator
            .translate(text, Language::English, Language::Kannada)
            .await
            .map_err(|e| {
                error!("Translation error: {:#}", e);
                GatewayError::Translation(e)
            })
    }

    async fn synthesize_to(
        &self,
        artifact: AudioArtifact,
        text: &str,
        language: Language,
    ) -> AudioLink {
        let result = match self.tts.synthesize(text, language).await {
            Ok(audio) => self.audio.save(artifact, &audio).await,
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(path) => SynthesisOutcome::Written(path),
            Err(e) => {
                warn!("Audio generation warning ({}): {:#}", artifact.file_name(), e);
                SynthesisOutcome::Failed(e.to_string())
            }
        };

        AudioLink { artifact, outcome }
    }
}
