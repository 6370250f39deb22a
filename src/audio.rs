use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

/// URL prefix generated audio is served under
pub const STATIC_URL_PREFIX: &str = "/static";

/// Fixed audio outputs. Every request of a kind overwrites the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioArtifact {
    /// Kannada audio produced by single translation
    Single,
    /// English audio produced by voice translation
    English,
    /// Kannada audio produced by voice translation
    Kannada,
}

impl AudioArtifact {
    pub fn file_name(&self) -> &'static str {
        match self {
            AudioArtifact::Single => "output.mp3",
            AudioArtifact::English => "english_audio.mp3",
            AudioArtifact::Kannada => "kannada_audio.mp3",
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", STATIC_URL_PREFIX, self.file_name())
    }
}

/// Writes audio artifacts into the static directory
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, artifact: AudioArtifact) -> PathBuf {
        self.dir.join(artifact.file_name())
    }

    /// Overwrite the artifact's file with `audio`. No locking: concurrent writers race.
    pub async fn save(&self, artifact: AudioArtifact, audio: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(artifact);
        tokio::fs::write(&path, audio).await?;
        debug!("Wrote {} bytes of audio to {}", audio.len(), path.display());
        Ok(path)
    }
}
