pub mod message;
pub mod buddy;
pub mod stage;
pub mod event;
pub mod config;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::BuddyError;
pub type Result<T> = std::result::Result<T, BuddyError>;
