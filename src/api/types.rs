//! Shared types for the API layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::error::ApiError;
use crate::core_state::CoreState;

/// Longest accepted user message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// Parse a conversation id from a path segment.
pub fn parse_conversation_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid conversation id: {raw}")))
}

/// Reject blank or oversized free text.
pub fn validate_text(field: &str, text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} cannot be empty")));
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "{field} too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_conversation_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_uuid() {
        assert!(matches!(
            parse_conversation_id("not-a-uuid"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn text_limits() {
        assert!(validate_text("Message", "flu").is_ok());
        assert!(validate_text("Message", "  \t").is_err());
        assert!(validate_text("Message", &"a".repeat(MAX_MESSAGE_CHARS)).is_ok());
        assert!(validate_text("Message", &"a".repeat(MAX_MESSAGE_CHARS + 1)).is_err());
        // Counted in characters, not bytes.
        assert!(validate_text("Message", &"é".repeat(MAX_MESSAGE_CHARS)).is_ok());
    }
}
