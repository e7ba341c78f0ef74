//! Resume generation — request validation, prompt assembly, and the
//! model call.

use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::prompts::{GENERATE_SYSTEM, RESUME_PROMPT_TEMPLATE};
use crate::llm_client::{LlmClient, LlmError};

/// Field limits enforced on the public API.
const MAX_NAME_CHARS: usize = 120;
const MAX_EMAIL_CHARS: usize = 120;
const MAX_PHONE_CHARS: usize = 40;
const MAX_ROLE_CHARS: usize = 200;

/// Request body for POST /api/v1/resumes/generate.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub jd: String,
    #[serde(default)]
    pub content: String,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_len("name", &self.name, MAX_NAME_CHARS)?;
        check_len("email", &self.email, MAX_EMAIL_CHARS)?;
        check_len("phone", &self.phone, MAX_PHONE_CHARS)?;
        check_len("role", &self.role, MAX_ROLE_CHARS)?;
        Ok(())
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::UnprocessableEntity(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Collapses internal whitespace runs to single spaces and trims.
pub fn sanitize_field(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Generates resume text via the model. The raw output still needs
/// `cleaner::clean_text` before scoring or structuring.
pub async fn generate_resume(
    llm: &LlmClient,
    request: &GenerateRequest,
) -> Result<String, LlmError> {
    let prompt = build_prompt(request);
    let response = llm.call(&prompt, GENERATE_SYSTEM).await?;
    let text = response.text().ok_or(LlmError::EmptyContent)?;
    Ok(text.to_string())
}

/// Scalar fields are whitespace-collapsed; the free-form background
/// keeps its line structure so the model sees the candidate's own
/// paragraph breaks.
fn build_prompt(request: &GenerateRequest) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{role}", &sanitize_field(&request.role))
        .replace("{name}", &sanitize_field(&request.name))
        .replace("{email}", &sanitize_field(&request.email))
        .replace("{phone}", &sanitize_field(&request.phone))
        .replace("{jd}", &sanitize_field(&request.jd))
        .replace("{content}", &request.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            name: "Jane  Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            role: "Platform Engineer".to_string(),
            jd: "Rust required.\nKafka a plus.".to_string(),
            content: "Built a renderer.\n\nShipped a cache.".to_string(),
        }
    }

    #[test]
    fn test_sanitize_field_collapses_whitespace() {
        assert_eq!(sanitize_field("  a \t b\n c  "), "a b c");
        assert_eq!(sanitize_field(""), "");
    }

    #[test]
    fn test_build_prompt_substitutes_all_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("role of Platform Engineer"));
        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("Email: jane@example.com"));
        assert!(prompt.contains("Phone: +1 555 0100"));
        // jd is collapsed, content keeps its newlines
        assert!(prompt.contains("Rust required. Kafka a plus."));
        assert!(prompt.contains("Built a renderer.\n\nShipped a cache."));
        assert!(!prompt.contains("{role}"));
    }

    #[test]
    fn test_validate_accepts_limits() {
        let mut req = request();
        req.name = "x".repeat(120);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_fields() {
        let mut req = request();
        req.phone = "5".repeat(41);
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        let mut req = request();
        // 120 two-byte characters is still 120 characters
        req.name = "é".repeat(120);
        assert!(req.validate().is_ok());
    }
}
