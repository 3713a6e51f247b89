use serde::{Deserialize, Serialize};

use crate::agents::answer::{Answers, IdSequence, QueryOutcome};
use crate::agents::intent::IntentClassifier;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

/// Query page chat history. Append-only.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    ids: IdSequence,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Records the question, answers it and records the reply.
    ///
    /// Blank queries are rejected before anything is appended.
    pub fn ask(
        &mut self,
        query: &str,
        classifier: &dyn IntentClassifier,
        answers: &Answers,
    ) -> Result<QueryOutcome, CoreError> {
        if query.trim().is_empty() {
            return Err(CoreError::EmptyQuery);
        }

        self.push(Role::User, query.to_string());
        let outcome = answers.answer(classifier, query, self.ids.next_id());
        self.push(Role::Assistant, outcome.message().to_string());

        Ok(outcome)
    }

    fn push(&mut self, role: Role, content: String) {
        let id = self.ids.next_id();
        self.messages.push(ChatMessage { id, role, content });
    }
}
