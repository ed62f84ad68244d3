//! API endpoint handlers.

pub mod conversations;
pub mod directory;
pub mod health;
