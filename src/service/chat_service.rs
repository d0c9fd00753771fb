use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::agent::ChatAgent;
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::service::resume_service::ResumeService;

const MAX_MESSAGE_LENGTH: usize = 2000;

const SYSTEM_PROMPT_TEMPLATE: &str = "\
You are the assistant on {name}'s personal portfolio site. You answer visitors' \
questions about {name}, warmly and professionally.

Rules:
1. Never mention where your knowledge comes from. Do not say \"JSON\", \"resume\", \
\"portfolio\", \"context\", \"data\" or \"fields\".
2. Never attribute. No \"According to...\", \"Based on...\" or \"His profile says...\". \
Speak as someone who knows {name} first-hand.
3. Use everything below, including hobbies, work style and behind-the-scenes notes \
on projects, naturally in conversation.
4. If something is genuinely not covered, say you don't have that detail and invite \
the visitor to reach out to {name} through the contact section.
5. Do not say you are an AI unless asked directly. Keep answers short, friendly and \
engaging.

--- BACKGROUND ---
{resume}
";

/// Handles one chat exchange: validate, resolve the session, prompt, reply.
#[derive(Clone)]
pub struct ChatService {
    resume: Arc<ResumeService>,
    agent: Arc<dyn ChatAgent>,
}

impl ChatService {
    pub fn new(resume: ResumeService, agent: Arc<dyn ChatAgent>) -> Self {
        Self {
            resume: Arc::new(resume),
            agent,
        }
    }

    pub fn resume(&self) -> &ResumeService {
        &self.resume
    }

    pub fn system_prompt(&self) -> String {
        SYSTEM_PROMPT_TEMPLATE
            .replace("{name}", self.resume.candidate_name())
            .replace("{resume}", &self.resume.prompt_context())
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        let message = request.message.trim();
        if message.is_empty() {
            return Err(AppError::EmptyField {
                field_name: "message".to_string(),
            });
        }
        let length = message.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "message".to_string(),
                max_length: MAX_MESSAGE_LENGTH,
                actual_length: length,
            });
        }

        // ── Resolve session ───────────────────────────────────────────────────
        let session_id = request
            .session_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        // ── Ask the model ─────────────────────────────────────────────────────
        let reply = self.agent.reply(&self.system_prompt(), message).await?;

        info!(
            session_id = %session_id,
            message = %message,
            reply = %reply,
            "Chat exchange ({length} chars in, {} chars out)",
            reply.chars().count()
        );
        Ok(ChatResponse { reply, session_id })
    }
}
