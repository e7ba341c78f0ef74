//! Offline fallback generator — a deterministic plain-text resume
//! assembled from the request fields alone.
//!
//! Used when the model call fails (quota, network, empty output) so
//! the generate endpoint still returns something scoreable. The
//! output uses the same section layout the structuring engine and
//! docx writer expect.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::generator::{sanitize_field, GenerateRequest};

/// JD keyword tokens: letters, digits, and the punctuation that shows
/// up inside real skill names (C++, C#, .NET, node.js).
static JD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z0-9_+#\-.]{2,}\b").unwrap());
static CONTENT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z0-9#+\-.]{2,}\b").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

const MAX_SUMMARY_KEYWORDS: usize = 6;
const MAX_SKILLS: usize = 8;
const MAX_PROJECT_CHUNKS: usize = 3;
const MAX_TITLE_CHARS: usize = 60;
const MAX_PROJECT_BULLET_CHARS: usize = 160;

/// Builds a short ATS-friendly plain-text resume from the input
/// fields, no model involved.
pub fn generate_local_resume(request: &GenerateRequest) -> String {
    let name = sanitize_field(&request.name);
    let email = sanitize_field(&request.email);
    let phone = sanitize_field(&request.phone);
    let role = sanitize_field(&request.role);
    let jd = sanitize_field(&request.jd);
    // content keeps its raw line structure so blank lines can still
    // separate project chunks below
    let content = request.content.trim();

    let mut lines: Vec<String> = Vec::new();

    if !name.is_empty() {
        lines.push(name.to_uppercase());
    }
    let contact: Vec<&str> = [email.as_str(), phone.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    lines.push(String::new());

    let keywords = jd_keywords(&jd);
    let mut summary = format!("Experienced candidate targeting {role}.");
    if !keywords.is_empty() {
        summary.push_str(&format!(" Key skills: {}.", keywords.join(", ")));
    }
    lines.push("SUMMARY".to_string());
    lines.push(format!("- {summary}"));
    lines.push(String::new());

    let mut skills = keywords;
    for token in CONTENT_TOKEN.find_iter(content) {
        if skills.len() >= MAX_SKILLS {
            break;
        }
        let token = token.as_str().to_string();
        if !skills.contains(&token) {
            skills.push(token);
        }
    }
    skills.truncate(MAX_SKILLS);
    lines.push("SKILLS".to_string());
    if skills.is_empty() {
        lines.push("- N/A".to_string());
    } else {
        for skill in &skills {
            lines.push(format!("- {skill}"));
        }
    }
    lines.push(String::new());

    lines.push("PROJECTS".to_string());
    if content.is_empty() {
        lines.push("- N/A".to_string());
    } else {
        for chunk in BLANK_LINES.split(content).filter(|c| !c.trim().is_empty()).take(MAX_PROJECT_CHUNKS) {
            let sublines: Vec<&str> = chunk.trim().split('\n').collect();
            let title: String = sublines[0].chars().take(MAX_TITLE_CHARS).collect();
            lines.push(title);
            let mut detail = sublines[1..]
                .iter()
                .map(|l| l.trim())
                .collect::<Vec<_>>()
                .join(" ");
            if detail.is_empty() {
                detail = sublines[0].to_string();
            }
            let bullet: String = detail.chars().take(MAX_PROJECT_BULLET_CHARS).collect();
            lines.push(format!("- {bullet}"));
        }
    }

    lines.push(String::new());
    lines.push("EDUCATION".to_string());
    lines.push("- N/A".to_string());

    lines.join("\n")
}

/// Picks up to 6 distinct, non-numeric JD tokens longer than two
/// characters, preserving first-seen order and original casing.
fn jd_keywords(jd: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut keywords = Vec::new();
    for token in JD_TOKEN.find_iter(jd) {
        let token = token.as_str();
        let lower = token.to_lowercase();
        if lower.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if lower.chars().count() <= 2 {
            continue;
        }
        if !seen.insert(lower) {
            continue;
        }
        keywords.push(token.to_string());
        if keywords.len() >= MAX_SUMMARY_KEYWORDS {
            break;
        }
    }
    keywords
}
