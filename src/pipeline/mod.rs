pub mod assembly;
pub mod extraction;
pub mod resolver;
pub mod router;
