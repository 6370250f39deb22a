pub mod interface;
pub mod client;

pub use interface::TTSInterface;
pub use client::TTSClient;
