pub mod llm;
pub mod host;
pub mod download;
