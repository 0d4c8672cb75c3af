
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::config::ChatConfig;
use crate::embeddings::Embedder;
use crate::generation::Generator;
use crate::index::VectorIndex;
use crate::prompt;
use crate::{CatechistError, Result};

/// Reserved probe command and its fixed reply. Exact match only; a body
/// with trailing whitespace is a pipeline query.
pub const PING_COMMAND: &str = "!ping";
pub const PING_REPLY: &str = "pong";

/// Query prefix honored when `require_ask_prefix` is enabled.
pub const ASK_PREFIX: &str = "!ask ";

/// Reply sent when the pipeline fails mid-flight. Failures never reach
/// the transport as errors.
pub const FAILURE_REPLY: &str = "An error occurred while processing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRole {
    User,
    Assistant,
}

/// One exchange in a chat. Appended in arrival order, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    #[inline]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Per-conversation state. Created on the first message from a
/// conversation id and kept for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub conversation_id: String,
    pub turns: Vec<ConversationTurn>,
}

impl ChatSession {
    #[inline]
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            turns: Vec::new(),
        }
    }

    #[inline]
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }
}

/// Drives the full pipeline for each inbound message: command routing,
/// retrieval, prompt assembly, generation, and session bookkeeping.
pub struct Orchestrator {
    index: Arc<VectorIndex>,
    embedder: Arc<dyn Embedder>,
    generator: Arc<dyn Generator>,
    config: ChatConfig,
    sessions: Mutex<HashMap<String, Arc<Mutex<ChatSession>>>>,
}

impl Orchestrator {
    #[inline]
    pub fn new(
        index: Arc<VectorIndex>,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn Generator>,
        config: ChatConfig,
    ) -> Self {
        info!(
            "Chat orchestrator ready ({} indexed documents, top_k={})",
            index.len(),
            config.top_k
        );
        Self {
            index,
            embedder,
            generator,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Entry point for one inbound message. `None` means no reply is sent.
    ///
    /// The per-session lock is held across the whole pipeline invocation,
    /// so at most one request is in flight per conversation id while
    /// distinct conversations proceed independently.
    #[inline]
    pub async fn handle_message(&self, conversation_id: &str, body: &str) -> Option<String> {
        if body == PING_COMMAND {
            debug!("Ping from conversation {conversation_id}");
            return Some(PING_REPLY.to_string());
        }

        let query = if self.config.require_ask_prefix {
            match body.strip_prefix(ASK_PREFIX) {
                Some(rest) if !rest.trim().is_empty() => rest,
                _ => return None,
            }
        } else {
            body
        };

        let session = self.session(conversation_id).await;
        let mut session = session.lock().await;

        match self.run_pipeline(&session, query) {
            Ok(answer) => {
                session.append(ConversationTurn::user(query));
                session.append(ConversationTurn::assistant(answer.clone()));
                Some(answer)
            }
            Err(e) => {
                // No partial turn is appended; the session stays as it was
                error!("Pipeline failure for conversation {conversation_id}: {e}");
                Some(FAILURE_REPLY.to_string())
            }
        }
    }

    /// Number of turns recorded for a conversation, if it exists.
    #[inline]
    pub async fn session_turn_count(&self, conversation_id: &str) -> Option<usize> {
        let sessions = self.sessions.lock().await;
        match sessions.get(conversation_id) {
            Some(session) => Some(session.lock().await.turns.len()),
            None => None,
        }
    }

    async fn session(&self, conversation_id: &str) -> Arc<Mutex<ChatSession>> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ChatSession::new(conversation_id))));
        Arc::clone(session)
    }

    fn run_pipeline(&self, session: &ChatSession, query: &str) -> Result<String> {
        let documents = self
            .index
            .retrieve(self.embedder.as_ref(), query, self.config.top_k)?;

        let messages = prompt::assemble(&documents, &session.turns, query);

        self.generator
            .generate(&messages)
            .map_err(|e| CatechistError::Generation(e.to_string()))
    }
}
