//! ATS Scoring — pluggable, trait-based scorer that measures resume
//! text against a job description.
//!
//! Default: `KeywordAtsScorer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn AtsScorer>` so a semantic
//! backend can be swapped in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const BASE_SCORE: f64 = 20.0;
const SKILL_WEIGHT: f64 = 70.0;
const FORMATTING_WEIGHT: f64 = 10.0;

/// Tokens too common to carry any signal.
const STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "for", "with", "in", "on", "of", "is", "are",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Per-component breakdown of a computed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub skill_weight: f64,
    /// matched JD tokens / total JD tokens, rounded to 4 decimals
    pub overlap_ratio: f64,
    pub formatting_score: f64,
    pub formatting_weight: f64,
    /// pre-clamp weighted sum, rounded to 2 decimals
    pub raw_score: f64,
}

/// The explanation object returned alongside every score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsExplanation {
    pub score_breakdown: ScoreBreakdown,
}

/// Full scoring result: a 0–100 score plus its breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub explanation: AtsExplanation,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The ATS scorer trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<AtsReport, AppError>;
}

/// Keyword-overlap scorer. No model call, no I/O.
///
/// score = base + skill_weight * overlap_ratio + formatting_weight * formatting
/// where overlap_ratio is the share of JD tokens (unigrams + bigrams)
/// also present in the resume, and formatting rewards the presence of
/// "skills" / "experience" section markers.
pub struct KeywordAtsScorer;

#[async_trait]
impl AtsScorer for KeywordAtsScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<AtsReport, AppError> {
        Ok(compute_keyword_score(resume_text, jd_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Tokenizes and normalizes text into meaningful tokens: lowercased,
/// punctuation stripped (hyphenated tokens kept), short tokens and
/// stopwords dropped, adjacent bigrams added for multi-word skills,
/// order-preserving dedup.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let parts: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|p| p.len() > 1 && !STOPWORDS.contains(p))
        .collect();

    let mut tokens: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
    for pair in parts.windows(2) {
        tokens.push(format!("{} {}", pair[0], pair[1]));
    }

    let mut seen = std::collections::HashSet::new();
    tokens.retain(|t| seen.insert(t.clone()));
    tokens
}

fn compute_keyword_score(resume_text: &str, jd_text: &str) -> AtsReport {
    let resume_tokens: std::collections::HashSet<String> = tokenize(resume_text).into_iter().collect();
    let jd_tokens: std::collections::HashSet<String> = tokenize(jd_text).into_iter().collect();

    let matched = jd_tokens.intersection(&resume_tokens).count();
    let overlap_ratio = if jd_tokens.is_empty() {
        0.0
    } else {
        matched as f64 / jd_tokens.len() as f64
    };

    let resume_lower = resume_text.to_lowercase();
    let has_skills = resume_lower.contains("skills");
    let has_experience = resume_lower.contains("experience");
    let formatting_score = match (has_skills, has_experience) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.6,
        (false, false) => 0.0,
    };

    let raw_score = BASE_SCORE + SKILL_WEIGHT * overlap_ratio + FORMATTING_WEIGHT * formatting_score;
    let score = (raw_score.round() as u32).min(100);

    AtsReport {
        score,
        explanation: AtsExplanation {
            score_breakdown: ScoreBreakdown {
                base: BASE_SCORE,
                skill_weight: SKILL_WEIGHT,
                overlap_ratio: round_to(overlap_ratio, 4),
                formatting_score,
                formatting_weight: FORMATTING_WEIGHT,
                raw_score: round_to(raw_score, 2),
            },
        },
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
