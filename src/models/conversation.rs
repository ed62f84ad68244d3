use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::directory::DiseaseDirectory;
use super::enums::MessageRole;
use super::medical_info::MedicalInfo;

/// One transcript entry. Built completely before it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Time-ordered (UUIDv7).
    pub id: Uuid,
    pub text: String,
    pub role: MessageRole,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_info: Option<MedicalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<DiseaseDirectory>,
}

impl Message {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            role,
            timestamp: Local::now().naive_local(),
            medical_info: None,
            directory: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, text)
    }

    pub fn with_medical_info(mut self, info: MedicalInfo) -> Self {
        self.medical_info = Some(info);
        self
    }

    pub fn with_directory(mut self, directory: DiseaseDirectory) -> Self {
        self.directory = Some(directory);
        self
    }
}
