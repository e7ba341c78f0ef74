//! Block model — the typed output of the structuring engine.
//!
//! One `Block` per classified input line (bullet lines share one
//! `BulletList`). Consumers render one visual unit per block, in
//! sequence order: the docx writer maps blocks to paragraphs, the
//! structure endpoint serializes them for a frontend to map to DOM.

use serde::{Deserialize, Serialize};

/// The four recognized section headings. The label doubles as the
/// rendered heading text, always upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    Summary,
    Skills,
    Projects,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY",
            Section::Skills => "SKILLS",
            Section::Projects => "PROJECTS",
            Section::Education => "EDUCATION",
        }
    }
}

/// One classified unit of the structured resume document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Start of a named section; everything after it belongs to the
    /// section until the next heading.
    Heading { label: Section },
    /// Short skill tokens rendered as discrete pills. At most 12.
    SkillGroup { items: Vec<String> },
    /// Contiguous bullet lines. Broken by any non-bullet line.
    BulletList { items: Vec<String> },
    /// A single-line project/entry heading.
    ProjectTitle { text: String },
    /// Fallback for any line no other rule claims.
    Paragraph { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_label_is_uppercase() {
        assert_eq!(Section::Skills.as_str(), "SKILLS");
        assert_eq!(Section::Education.as_str(), "EDUCATION");
    }

    #[test]
    fn test_heading_serializes_with_uppercase_label() {
        let block = Block::Heading {
            label: Section::Summary,
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "heading", "label": "SUMMARY"})
        );
    }

    #[test]
    fn test_skill_group_round_trips_through_json() {
        let block = Block::SkillGroup {
            items: vec!["Rust".to_string(), "Go".to_string()],
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_variant_tags_are_snake_case() {
        let blocks = vec![
            Block::BulletList {
                items: vec!["one".to_string()],
            },
            Block::ProjectTitle {
                text: "Widget".to_string(),
            },
            Block::Paragraph {
                text: "hello".to_string(),
            },
        ];
        let json = serde_json::to_value(&blocks).unwrap();
        assert_eq!(json[0]["type"], "bullet_list");
        assert_eq!(json[1]["type"], "project_title");
        assert_eq!(json[2]["type"], "paragraph");
    }
}
