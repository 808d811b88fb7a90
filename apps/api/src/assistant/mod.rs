/// Assistant endpoints — pass-through proxies to the chat-completion
/// providers. One handler serves both providers; the route picks which.
pub mod prompts;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, ChatProvider};
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub enum Provider {
    OpenAi,
    Claude,
}

/// Accepts either a single `message` or a full `messages` history.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// POST /api/assistant
pub async fn handle_openai(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;
    respond(state, Provider::OpenAi, request).await
}

/// POST /api/assistant/claude
pub async fn handle_claude(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;
    respond(state, Provider::Claude, request).await
}

async fn respond(
    state: AppState,
    provider: Provider,
    request: ChatRequest,
) -> Result<Response, AppError> {
    let stream = request.stream;
    let messages = conversation(request)?;
    let system = prompts::system_context(&state.profile);

    let client: &dyn ChatProvider = match provider {
        Provider::OpenAi => &state.openai,
        Provider::Claude => &state.claude,
    };

    if stream {
        // If the caller disconnects, axum drops the body, which drops the
        // upstream response stream and aborts the provider request.
        let fragments = client.stream(&system, &messages).await?;
        Ok((
            [(header::CONTENT_TYPE, "text/event-stream")],
            Body::from_stream(fragments),
        )
            .into_response())
    } else {
        let answer = client.complete(&system, &messages).await?;
        Ok(Json(ChatAnswer { answer }).into_response())
    }
}

/// Normalizes the request into an ordered conversation history. Exactly one
/// of `message` / `messages` must be present and non-empty.
fn conversation(request: ChatRequest) -> Result<Vec<ChatMessage>, AppError> {
    if request.message.is_some() && request.messages.is_some() {
        return Err(AppError::Validation(
            "provide either 'message' or 'messages', not both".to_string(),
        ));
    }

    if let Some(messages) = request.messages {
        if messages.is_empty() {
            return Err(AppError::Validation("'messages' must not be empty".to_string()));
        }
        if messages.iter().any(|m| m.content.trim().is_empty()) {
            return Err(AppError::Validation(
                "every message must have non-empty content".to_string(),
            ));
        }
        return Ok(messages);
    }

    match request.message {
        Some(message) if !message.trim().is_empty() => Ok(vec![ChatMessage::user(message)]),
        Some(_) => Err(AppError::Validation("'message' must not be empty".to_string())),
        None => Err(AppError::Validation(
            "either 'message' or 'messages' is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(message: Option<&str>, messages: Option<Vec<ChatMessage>>) -> ChatRequest {
        ChatRequest {
            message: message.map(String::from),
            messages,
            stream: false,
        }
    }

    #[test]
    fn single_message_becomes_user_turn() {
        let turns = conversation(chat(Some("hi there"), None)).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, "user");
        assert_eq!(turns[0].content, "hi there");
    }

    #[test]
    fn history_is_passed_through_in_order() {
        let history = vec![
            ChatMessage {
                role: "user".to_string(),
                content: "what do you do?".to_string(),
            },
            ChatMessage {
                role: "assistant".to_string(),
                content: "I answer questions about this portfolio.".to_string(),
            },
            ChatMessage::user("what stack?"),
        ];
        let turns = conversation(chat(None, Some(history))).unwrap();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].role, "assistant");
    }

    #[test]
    fn sending_both_message_and_messages_is_rejected() {
        let err = conversation(chat(
            Some("hello"),
            Some(vec![ChatMessage::user("also hello")]),
        ))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_both_fields_is_rejected() {
        let err = conversation(chat(None, None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn blank_message_is_rejected() {
        let err = conversation(chat(Some("   "), None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn empty_history_is_rejected() {
        let err = conversation(chat(None, Some(vec![]))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
