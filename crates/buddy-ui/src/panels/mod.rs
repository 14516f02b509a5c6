pub mod chat;
pub mod landing;
pub mod matching;
pub mod settings;
pub mod timer;
pub mod workspace;
