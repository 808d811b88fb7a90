/// Tool dispatcher — a single endpoint computing small deterministic text and
/// time utilities. Every operation is a pure function of the request body; no
/// external service or database is touched.
pub mod text;
pub mod timezone;

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::tools::timezone::TimezoneConversion;

/// The closed set of dispatchable actions. Adding an action is a
/// compile-time-checked change: the dispatcher matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    CharCount,
    WordCount,
    Hash,
    Timezone,
}

impl ToolAction {
    /// Resolves the wire-level action string. `None` means the action is
    /// unrecognized, which is reported distinctly from field validation
    /// failures.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "charcount" => Some(ToolAction::CharCount),
            "wordcount" => Some(ToolAction::WordCount),
            "hash" => Some(ToolAction::Hash),
            "timezone" => Some(ToolAction::Timezone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

/// Flat request body for `POST /api/tools`. Which fields are required depends
/// on `action`; the dispatcher validates per action.
#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    pub action: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "fromTimezone")]
    pub from_timezone: Option<String>,
    #[serde(rename = "toTimezone")]
    pub to_timezone: Option<String>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub ampm: Option<Meridiem>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Characters { characters: usize },
    Words { words: usize },
    Hash { hash: String },
    Timezone(TimezoneConversion),
}

/// POST /api/tools
pub async fn handle_tools(
    body: Result<Json<ToolRequest>, JsonRejection>,
) -> Result<Json<ToolResponse>, AppError> {
    let Json(request) = body?;
    Ok(Json(dispatch(request)?))
}

/// Resolves the action, validates the fields it needs, and computes the
/// result. Stateless; concurrent calls are fully independent.
pub fn dispatch(request: ToolRequest) -> Result<ToolResponse, AppError> {
    let action = request
        .action
        .as_deref()
        .ok_or_else(|| AppError::Validation("'action' is required".to_string()))?;

    let action = ToolAction::parse(action)
        .ok_or_else(|| AppError::InvalidAction(format!("unrecognized action '{action}'")))?;

    match action {
        ToolAction::CharCount => {
            let text = require_text(&request, "charcount")?;
            Ok(ToolResponse::Characters {
                characters: text::charcount(text),
            })
        }
        ToolAction::WordCount => {
            let text = require_text(&request, "wordcount")?;
            Ok(ToolResponse::Words {
                words: text::wordcount(text),
            })
        }
        ToolAction::Hash => {
            let text = require_text(&request, "hash")?;
            Ok(ToolResponse::Hash {
                hash: text::sha256_hex(text),
            })
        }
        ToolAction::Timezone => {
            let from = require_field(request.from_timezone.as_deref(), "fromTimezone")?;
            let to = require_field(request.to_timezone.as_deref(), "toTimezone")?;
            let hour = require_field(request.hour, "hour")?;
            let minute = require_field(request.minute, "minute")?;
            let ampm = require_field(request.ampm, "ampm")?;
            let conversion = timezone::convert(from, to, hour, minute, ampm)?;
            Ok(ToolResponse::Timezone(conversion))
        }
    }
}

fn require_text<'a>(request: &'a ToolRequest, action: &str) -> Result<&'a str, AppError> {
    request
        .text
        .as_deref()
        .ok_or_else(|| AppError::Validation(format!("'text' is required for action '{action}'")))
}

fn require_field<T>(field: Option<T>, name: &str) -> Result<T, AppError> {
    field.ok_or_else(|| {
        AppError::Validation(format!("'{name}' is required for action 'timezone'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(action: Option<&str>, text: Option<&str>) -> ToolRequest {
        ToolRequest {
            action: action.map(String::from),
            text: text.map(String::from),
            from_timezone: None,
            to_timezone: None,
            hour: None,
            minute: None,
            ampm: None,
        }
    }

    #[test]
    fn dispatch_charcount() {
        let response = dispatch(request(Some("charcount"), Some("hello"))).unwrap();
        assert!(matches!(response, ToolResponse::Characters { characters: 5 }));
    }

    #[test]
    fn dispatch_wordcount() {
        let response = dispatch(request(Some("wordcount"), Some("a b   c"))).unwrap();
        assert!(matches!(response, ToolResponse::Words { words: 3 }));
    }

    #[test]
    fn unknown_action_is_invalid_action_not_validation() {
        let err = dispatch(request(Some("bogus"), Some("hello"))).unwrap_err();
        assert!(matches!(err, AppError::InvalidAction(_)));
    }

    #[test]
    fn missing_action_is_validation_error() {
        let err = dispatch(request(None, Some("hello"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_text_for_hash_is_validation_error() {
        let err = dispatch(request(Some("hash"), None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn timezone_requires_all_fields() {
        let mut req = request(Some("timezone"), None);
        req.from_timezone = Some("UTC".to_string());
        // toTimezone, hour, minute, ampm all missing
        let err = dispatch(req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn meridiem_deserializes_uppercase() {
        let am: Meridiem = serde_json::from_str("\"AM\"").unwrap();
        let pm: Meridiem = serde_json::from_str("\"PM\"").unwrap();
        assert_eq!(am, Meridiem::Am);
        assert_eq!(pm, Meridiem::Pm);
        assert!(serde_json::from_str::<Meridiem>("\"am\"").is_err());
    }
}
