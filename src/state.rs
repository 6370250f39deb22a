use std::sync::Arc;

use crate::audio::AudioStore;
use crate::config::Config;
use crate::gateway::Gateway;
use crate::translate::GoogleTranslateClient;
use crate::tts::TTSClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<Gateway>,
}

impl AppState {
    /// Build the process-wide service clients from configuration.
    /// They are created once and shared by every request.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = Arc::new(GoogleTranslateClient::from_config(&config.translation_config)?);
        let tts = Arc::new(TTSClient::from_config(&config.tts_config)?);
        let audio = AudioStore::new(&config.system_config.static_dir);

        let gateway = Gateway::new(
            translator,
            tts,
            audio,
            config.system_config.max_text_chars,
        );
        Ok(Self::with_gateway(config, gateway))
    }

    pub fn with_gateway(config: Config, gateway: Gateway) -> Self {
        Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        }
    }
}
