//! Test doubles for the external services

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::translate::{Language, Translator};
use crate::tts::TTSInterface;

/// Translator that tags its input instead of calling a service
pub struct FakeTranslator {
    fail_on: Option<String>,
    fail_all: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeTranslator {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            fail_on: None,
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_on: None,
            fail_all: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_on(text: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some(text.to_string()),
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: Language,
        target: Language,
    ) -> Result<String, anyhow::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.fail_all || self.fail_on.as_deref() == Some(text) {
            anyhow::bail!("translation service unreachable");
        }
        Ok(format!("[{}] {}", target, text.trim()))
    }
}

/// Speech synthesizer returning a few fixed bytes
pub struct FakeTts {
    fail_for: Option<Language>,
    fail_all: bool,
    calls: Mutex<Vec<(String, Language)>>,
}

impl FakeTts {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            fail_for: None,
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_for: None,
            fail_all: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_for(language: Language) -> Arc<Self> {
        Arc::new(Self {
            fail_for: Some(language),
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TTSInterface for FakeTts {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, anyhow::Error> {
        self.calls.lock().unwrap().push((text.to_string(), language));
        if self.fail_all || self.fail_for == Some(language) {
            anyhow::bail!("speech service returned HTTP 503");
        }
        Ok(b"ID3fake-mp3".to_vec())
    }
}

/// Directory under the system temp dir, removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("kannada-translator-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Serve `router` on an ephemeral local port, returning its base URL
pub async fn serve_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
