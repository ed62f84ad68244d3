//! Transport-agnostic application state.
//!
//! `CoreState` owns the shared medical info assembler and the registry of
//! live conversations. It is wrapped in `Arc` at startup and handed to the
//! HTTP layer.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::config::AppConfig;
use crate::pipeline::assembly::MedicalInfoAssembler;
use crate::pipeline::resolver::{ResolverError, WikipediaClient};
use crate::pipeline::router::{ControllerConfig, DialogueController};

/// Assembler backed by the encyclopedia client.
pub type HealthAssembler = MedicalInfoAssembler<WikipediaClient>;

/// One live conversation.
pub type Assistant = DialogueController<HealthAssembler>;

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    /// Shared by every conversation (one pooled HTTP client).
    source: Arc<HealthAssembler>,
    controller_config: ControllerConfig,
    max_conversations: usize,
    conversations: RwLock<HashMap<Uuid, Arc<Assistant>>>,
}

impl CoreState {
    pub fn new(
        source: HealthAssembler,
        controller_config: ControllerConfig,
        max_conversations: usize,
    ) -> Self {
        Self {
            source: Arc::new(source),
            controller_config,
            max_conversations,
            conversations: RwLock::new(HashMap::new()),
        }
    }

    /// Build state from runtime configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        let client = WikipediaClient::from_config(config)?;
        Ok(Self::new(
            MedicalInfoAssembler::with_builtin_knowledge(client),
            ControllerConfig::from_app_config(config),
            config.max_conversations,
        ))
    }

    // ── Conversation registry ───────────────────────────────

    /// Open a conversation seeded with the welcome message.
    ///
    /// Fails once `max_conversations` are open; closing one frees a slot.
    pub fn start_conversation(&self) -> Result<(Uuid, Arc<Assistant>), CoreError> {
        let mut conversations = self
            .conversations
            .write()
            .map_err(|_| CoreError::LockPoisoned)?;
        if conversations.len() >= self.max_conversations {
            tracing::warn!(max = self.max_conversations, "Conversation limit reached");
            return Err(CoreError::ConversationLimit(self.max_conversations));
        }

        let id = Uuid::new_v4();
        let assistant = Arc::new(DialogueController::new(
            self.source.clone(),
            self.controller_config,
        ));
        conversations.insert(id, assistant.clone());
        drop(conversations);

        tracing::info!(conversation_id = %id, "Conversation started");
        Ok((id, assistant))
    }

    pub fn conversation(&self, id: &Uuid) -> Result<Arc<Assistant>, CoreError> {
        let guard = self
            .conversations
            .read()
            .map_err(|_| CoreError::LockPoisoned)?;
        guard
            .get(id)
            .cloned()
            .ok_or(CoreError::ConversationNotFound(*id))
    }

    /// Drop a conversation. Turns already in flight finish on their own `Arc`.
    pub fn end_conversation(&self, id: &Uuid) -> Result<(), CoreError> {
        let removed = self
            .conversations
            .write()
            .map_err(|_| CoreError::LockPoisoned)?
            .remove(id);

        match removed {
            Some(_) => {
                tracing::info!(conversation_id = %id, "Conversation ended");
                Ok(())
            }
            None => Err(CoreError::ConversationNotFound(*id)),
        }
    }

    #[cfg(test)]
    pub fn conversation_count(&self) -> Result<usize, CoreError> {
        Ok(self
            .conversations
            .read()
            .map_err(|_| CoreError::LockPoisoned)?
            .len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(Uuid),
    #[error("Conversation limit reached ({0} open)")]
    ConversationLimit(usize),
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Summary resolver setup failed: {0}")]
    Resolver(#[from] ResolverError),
}
