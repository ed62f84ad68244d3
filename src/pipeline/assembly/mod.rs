pub mod orchestrator;

pub use orchestrator::{compose_medical_info, MedicalInfoAssembler};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::MedicalInfo;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Medical info source failed: {0}")]
    Source(String),
}

/// Produces a `MedicalInfo` card for a free-text query.
#[async_trait]
pub trait MedicalInfoSource: Send + Sync {
    async fn assemble(&self, query: &str) -> Result<MedicalInfo, AssemblyError>;
}
