pub mod http;
pub mod text_chunker;
