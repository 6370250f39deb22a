pub mod interface;
pub mod client;

pub use interface::{Language, TranslationResult, Translator};
pub use client::GoogleTranslateClient;
