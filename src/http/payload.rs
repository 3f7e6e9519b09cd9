//! Typed request body for create and update.
//!
//! # Responsibilities
//! - Read the body once and capture `titulo` / `hecho` as raw JSON values
//! - Keep "absent" apart from "present but null"
//! - Turn the raw values into a `SubjectDraft` or a validation error
//!
//! # Design Decisions
//! - A missing body, a non-JSON content type and an empty body all yield an
//!   empty payload, which then fails title validation (400)
//! - Only syntactically broken JSON is rejected during extraction, so update
//!   can still answer 404 before validating the title

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::registry::Title;

/// How the `hecho` field is turned into a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// JavaScript truthiness: `false`, `null`, `0` and `""` are false,
    /// everything else is true.
    #[default]
    Truthy,
    /// Only booleans and the numbers 0/1 are accepted.
    Strict,
}

impl CompletionMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            CompletionMode::Strict
        } else {
            CompletionMode::Truthy
        }
    }

    /// Coerce a present `hecho` value.
    pub fn coerce(self, value: &Value) -> Result<bool, ApiError> {
        match self {
            CompletionMode::Truthy => Ok(truthy(value)),
            CompletionMode::Strict => match value {
                Value::Bool(b) => Ok(*b),
                Value::Number(n) if n.as_f64() == Some(0.0) => Ok(false),
                Value::Number(n) if n.as_f64() == Some(1.0) => Ok(true),
                _ => Err(ApiError::InvalidCompletion),
            },
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validated create/update input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub title: Title,
    /// `None` when the body did not mention `hecho`.
    pub done: Option<bool>,
}

/// Raw body fields of a create or update request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectPayload {
    pub titulo: Option<Value>,
    pub hecho: Option<Value>,
}

impl SubjectPayload {
    /// Pick the known fields out of a parsed body. Non-object bodies carry
    /// no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                titulo: map.remove("titulo"),
                hecho: map.remove("hecho"),
            },
            _ => Self::default(),
        }
    }

    /// Check the title and coerce the completion flag.
    pub fn validate(self, mode: CompletionMode) -> Result<SubjectDraft, ApiError> {
        let title = match self.titulo {
            Some(Value::String(raw)) => Title::parse(&raw).map_err(|_| ApiError::InvalidTitle)?,
            _ => return Err(ApiError::InvalidTitle),
        };
        let done = self.hecho.as_ref().map(|v| mode.coerce(v)).transpose()?;
        Ok(SubjectDraft { title, done })
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<S> FromRequest<S> for SubjectPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed JSON body");
            ApiError::MalformedJson
        })?;
        Ok(Self::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    fn payload(value: Value) -> SubjectPayload {
        SubjectPayload::from_value(value)
    }

    #[test]
    fn test_title_trimmed() {
        let draft = payload(json!({ "titulo": "  Biologia  " }))
            .validate(CompletionMode::Truthy)
            .unwrap();
        assert_eq!(draft.title.as_str(), "Biologia");
        assert_eq!(draft.done, None);
    }

    #[test]
    fn test_invalid_titles() {
        let bodies = [
            json!({}),
            json!({ "titulo": "" }),
            json!({ "titulo": "   " }),
            json!({ "titulo": 5 }),
            json!({ "titulo": null }),
            json!([1, 2]),
            json!("Historia"),
        ];
        for body in bodies {
            let err = payload(body.clone()).validate(CompletionMode::Truthy).unwrap_err();
            assert!(matches!(err, ApiError::InvalidTitle), "body {body} should be rejected");
        }
    }

    #[test]
    fn test_truthy_coercion() {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!("yes"), true),
            (json!("false"), true),
            (json!(""), false),
            (json!(0), false),
            (json!(0.0), false),
            (json!(2), true),
            (json!(null), false),
            (json!([]), true),
            (json!({}), true),
        ];
        for (value, expected) in cases {
            assert_eq!(CompletionMode::Truthy.coerce(&value).unwrap(), expected, "value {value}");
        }
    }

    #[test]
    fn test_strict_coercion() {
        assert!(CompletionMode::Strict.coerce(&json!(true)).unwrap());
        assert!(CompletionMode::Strict.coerce(&json!(1)).unwrap());
        assert!(!CompletionMode::Strict.coerce(&json!(0)).unwrap());
        for value in [json!("yes"), json!("false"), json!(2), json!(null), json!([])] {
            assert!(matches!(
                CompletionMode::Strict.coerce(&value),
                Err(ApiError::InvalidCompletion)
            ));
        }
    }

    #[test]
    fn test_null_hecho_is_present() {
        let draft = payload(json!({ "titulo": "X", "hecho": null }))
            .validate(CompletionMode::Truthy)
            .unwrap();
        assert_eq!(draft.done, Some(false));
    }

    #[test]
    fn test_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, "application/json; charset=utf-8".parse().unwrap());
        assert!(is_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, "application/merge-patch+json".parse().unwrap());
        assert!(is_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!is_json_content_type(&headers));
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<SubjectPayload, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/api/materias");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        SubjectPayload::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_extract_json_body() {
        let payload = extract(Some("application/json"), r#"{"titulo":"Historia","hecho":1}"#)
            .await
            .unwrap();
        assert_eq!(payload.titulo, Some(json!("Historia")));
        assert_eq!(payload.hecho, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_extract_without_json_content_type() {
        let payload = extract(None, r#"{"titulo":"Historia"}"#).await.unwrap();
        assert_eq!(payload, SubjectPayload::default());
    }

    #[tokio::test]
    async fn test_extract_empty_body() {
        let payload = extract(Some("application/json"), "  ").await.unwrap();
        assert_eq!(payload, SubjectPayload::default());
    }

    #[tokio::test]
    async fn test_extract_malformed_json() {
        let err = extract(Some("application/json"), r#"{"titulo":"#).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedJson));
    }
}
