//! Inbound request validation for the generation endpoint.

use chrono::{DateTime, Utc};

use crate::content;
use crate::error::CoreError;
use crate::types::DbId;

/// A generation request that has passed field validation.
///
/// `content_type` stays a raw string: the project row records whatever the
/// client sent, and parsing into [`crate::content::ContentType`] happens at
/// generation time, after the row exists.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub user_id: DbId,
    pub content_type: String,
    pub prompt: String,
    pub title: String,
    pub description: Option<String>,
}

/// Validate the raw fields of a generation request.
///
/// `user_id`, `type`, and `prompt` are required; blank strings count as
/// missing. `title` defaults to [`content::default_title`] when absent.
pub fn validate_generate(
    user_id: Option<DbId>,
    content_type: Option<String>,
    prompt: Option<String>,
    title: Option<String>,
    description: Option<String>,
    now: DateTime<Utc>,
) -> Result<GenerateParams, CoreError> {
    let user_id = user_id.ok_or(CoreError::MissingField { field: "user_id" })?;
    let content_type =
        non_blank(content_type).ok_or(CoreError::MissingField { field: "type" })?;
    let prompt = non_blank(prompt).ok_or(CoreError::MissingField { field: "prompt" })?;
    let title = non_blank(title).unwrap_or_else(|| content::default_title(now));

    Ok(GenerateParams {
        user_id,
        content_type,
        prompt,
        title,
        description,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 45).unwrap()
    }

    fn full_request() -> (
        Option<DbId>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
    ) {
        (
            Some(1),
            Some("text".to_string()),
            Some("hello".to_string()),
            Some("My Project".to_string()),
            Some("a description".to_string()),
        )
    }

    #[test]
    fn accepts_fully_populated_request() {
        let (user_id, ty, prompt, title, description) = full_request();
        let params =
            validate_generate(user_id, ty, prompt, title, description, fixed_now()).unwrap();

        assert_eq!(params.user_id, 1);
        assert_eq!(params.content_type, "text");
        assert_eq!(params.prompt, "hello");
        assert_eq!(params.title, "My Project");
        assert_eq!(params.description.as_deref(), Some("a description"));
    }

    #[test]
    fn missing_user_id_is_rejected() {
        let (_, ty, prompt, title, description) = full_request();
        let err = validate_generate(None, ty, prompt, title, description, fixed_now())
            .unwrap_err();
        assert_matches!(err, CoreError::MissingField { field: "user_id" });
    }

    #[test]
    fn missing_type_is_rejected() {
        let (user_id, _, prompt, title, description) = full_request();
        let err = validate_generate(user_id, None, prompt, title, description, fixed_now())
            .unwrap_err();
        assert_matches!(err, CoreError::MissingField { field: "type" });
    }

    #[test]
    fn missing_prompt_is_rejected() {
        let (user_id, ty, _, title, description) = full_request();
        let err = validate_generate(user_id, ty, None, title, description, fixed_now())
            .unwrap_err();
        assert_matches!(err, CoreError::MissingField { field: "prompt" });
    }

    #[test]
    fn blank_prompt_counts_as_missing() {
        let (user_id, ty, _, title, description) = full_request();
        let err = validate_generate(
            user_id,
            ty,
            Some("   ".to_string()),
            title,
            description,
            fixed_now(),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::MissingField { field: "prompt" });
    }

    #[test]
    fn absent_title_gets_timestamped_default() {
        let (user_id, ty, prompt, _, description) = full_request();
        let params =
            validate_generate(user_id, ty, prompt, None, description, fixed_now()).unwrap();
        assert_eq!(params.title, "AI Project 2024-03-15 10:30");
    }

    #[test]
    fn absent_description_passes_through_as_none() {
        let (user_id, ty, prompt, title, _) = full_request();
        let params = validate_generate(user_id, ty, prompt, title, None, fixed_now()).unwrap();
        assert_eq!(params.description, None);
    }

    #[test]
    fn unrecognized_type_passes_field_validation() {
        // Type recognition is deliberately not part of field validation;
        // the handler parses after the project row is created.
        let (user_id, _, prompt, title, description) = full_request();
        let params = validate_generate(
            user_id,
            Some("bogus".to_string()),
            prompt,
            title,
            description,
            fixed_now(),
        )
        .unwrap();
        assert_eq!(params.content_type, "bogus");
    }
}
