use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use rand::Rng;

use super::classify::{classify_utterance, Intent};
use crate::config::{AppConfig, DEFAULT_THINKING_DELAY_MS};
use crate::knowledge::disease_directory;
use crate::knowledge::replies::{
    clinical_overview_intro, CONNECTION_TROUBLE, DEFAULT_RESPONSE, DIRECTORY_INTRO,
    EMERGENCY_MESSAGE, GREETING_REPLY, INSIGHTS_UNAVAILABLE, WELCOME_MESSAGE, WELLNESS_ADVICE,
};
use crate::models::Message;
use crate::pipeline::assembly::MedicalInfoSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Pause before a locally produced reply.
    pub thinking_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            thinking_delay: Duration::from_millis(DEFAULT_THINKING_DELAY_MS),
        }
    }
}

impl ControllerConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            thinking_delay: config.thinking_delay,
        }
    }
}

/// Sets the responding flag for its lifetime.
struct RespondingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RespondingGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for RespondingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// One conversation: transcript, responding flag and turn handling.
///
/// Every turn appends exactly one user message followed by exactly one
/// assistant message. Turns are serialized by `turn_lock`.
pub struct DialogueController<S> {
    source: Arc<S>,
    config: ControllerConfig,
    transcript: RwLock<Vec<Message>>,
    responding: AtomicBool,
    turn_lock: tokio::sync::Mutex<()>,
}

impl<S: MedicalInfoSource + 'static> DialogueController<S> {
    /// New conversation, seeded with the welcome message.
    pub fn new(source: Arc<S>, config: ControllerConfig) -> Self {
        Self {
            source,
            config,
            transcript: RwLock::new(vec![Message::assistant(WELCOME_MESSAGE)]),
            responding: AtomicBool::new(false),
            turn_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Classify `utterance` and append the user message and the reply.
    ///
    /// The turn runs on its own task, so dropping the returned future does
    /// not stop it: the reply is still appended. Blank utterances are
    /// ignored and return `None`.
    pub async fn respond(self: &Arc<Self>, utterance: &str) -> Option<Message> {
        if utterance.trim().is_empty() {
            return None;
        }

        let this = Arc::clone(self);
        let utterance = utterance.to_string();
        let turn = tokio::spawn(async move { this.run_turn(&utterance).await });

        match turn.await {
            Ok(reply) => Some(reply),
            Err(e) => {
                tracing::error!(error = %e, "Conversation turn aborted");
                Some(self.settle_aborted(format!("{CONNECTION_TROUBLE}{DEFAULT_RESPONSE}")))
            }
        }
    }

    /// Assemble a card for `query` directly, skipping classification.
    ///
    /// Appends a single assistant message and no user message. Like
    /// `respond`, the lookup completes even if the caller goes away.
    pub async fn health_insights(self: &Arc<Self>, query: &str) -> Message {
        let this = Arc::clone(self);
        let query = query.to_string();
        let turn = tokio::spawn(async move { this.run_insights(&query).await });

        match turn.await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Health insights turn aborted");
                self.settle_aborted(INSIGHTS_UNAVAILABLE.to_string())
            }
        }
    }

    async fn run_turn(&self, utterance: &str) -> Message {
        let _turn = self.turn_lock.lock().await;
        self.append(Message::user(utterance));
        let _responding = RespondingGuard::engage(&self.responding);

        let intent = classify_utterance(utterance);
        tracing::debug!(?intent, local = intent.is_local(), "Utterance classified");

        let reply = match local_reply(intent) {
            Some(reply) => {
                tokio::time::sleep(self.config.thinking_delay).await;
                reply
            }
            None => self.lookup_reply(utterance).await,
        };

        self.append(reply.clone());
        reply
    }

    async fn run_insights(&self, query: &str) -> Message {
        let _turn = self.turn_lock.lock().await;
        let _responding = RespondingGuard::engage(&self.responding);

        let reply = match self.source.assemble(query).await {
            Ok(info) => Message::assistant("").with_medical_info(info),
            Err(e) => {
                tracing::warn!(error = %e, "Health insights lookup failed");
                Message::assistant(INSIGHTS_UNAVAILABLE)
            }
        };

        self.append(reply.clone());
        reply
    }

    /// Close out a turn whose task panicked before appending its reply.
    fn settle_aborted(&self, text: String) -> Message {
        let reply = Message::assistant(text);
        self.append(reply.clone());
        reply
    }

    async fn lookup_reply(&self, utterance: &str) -> Message {
        match self.source.assemble(utterance).await {
            Ok(info) if !info.is_no_match() => {
                Message::assistant(clinical_overview_intro(&info.title)).with_medical_info(info)
            }
            Ok(_) => {
                tracing::debug!("No curated or remote match, sending default response");
                Message::assistant(DEFAULT_RESPONSE)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Medical info assembly failed");
                Message::assistant(format!("{CONNECTION_TROUBLE}{DEFAULT_RESPONSE}"))
            }
        }
    }

    /// Snapshot of the transcript in append order.
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_responding(&self) -> bool {
        self.responding.load(Ordering::SeqCst)
    }

    fn append(&self, message: Message) {
        self.transcript
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

/// Reply for intents answered without the assembler.
fn local_reply(intent: Intent) -> Option<Message> {
    let message = match intent {
        Intent::Directory => {
            Message::assistant(DIRECTORY_INTRO).with_directory(disease_directory().clone())
        }
        Intent::Emergency => Message::assistant(EMERGENCY_MESSAGE),
        Intent::Wellness(topic) => Message::assistant(WELLNESS_ADVICE[topic.advice_index()]),
        Intent::GeneralWellness => {
            let index = rand::thread_rng().gen_range(0..WELLNESS_ADVICE.len());
            Message::assistant(WELLNESS_ADVICE[index])
        }
        Intent::Greeting => Message::assistant(GREETING_REPLY),
        Intent::DiseaseLookup => return None,
    };
    Some(message)
}
