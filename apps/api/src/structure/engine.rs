//! Resume Structuring Engine — heuristic classification of raw resume
//! text into an ordered `Block` sequence.
//!
//! `structure` is a total function: it terminates on any input, never
//! fails, and degrades ambiguous lines to `Paragraph`. Rule precedence
//! is strict and order-dependent:
//!
//!   Heading > Skill-line (SKILLS-gated) > Bullet > ProjectTitle > Paragraph
//!
//! The skill-line rule runs before the bullet and project-title rules,
//! so under a SKILLS heading a line like `- Rust, Go` or
//! `Project-X rewrite` classifies as a skill group. That precedence is
//! intentional and load-bearing; callers depend on it.

use super::blocks::{Block, Section};

/// A `SkillGroup` keeps at most this many items; extra tokens on the
/// same line are dropped, never split into a second group.
pub const MAX_SKILL_ITEMS: usize = 12;

const SECTION_KEYWORDS: [(&str, Section); 4] = [
    ("SUMMARY", Section::Summary),
    ("SKILLS", Section::Skills),
    ("PROJECTS", Section::Projects),
    ("EDUCATION", Section::Education),
];

/// Word-character prefix length a project-title line may carry before
/// its em-dash (the leading word char plus up to 40 more).
const PROJECT_DASH_MAX_PREFIX: usize = 40;

/// Converts raw multi-line resume text into an ordered block sequence.
///
/// Carries exactly two pieces of state across lines: the current
/// section (gates skill-line detection) and the index of the open
/// bullet list. A bullet list is pushed into the output when its first
/// bullet arrives and mutated in place as further contiguous bullets
/// append — so a skill line, which leaves the list open, can land
/// *after* the list it interrupts.
pub fn structure(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut current_section: Option<Section> = None;
    let mut open_list: Option<usize> = None;

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = match_heading(line) {
            blocks.push(Block::Heading { label: section });
            current_section = Some(section);
            open_list = None;
            continue;
        }

        if current_section == Some(Section::Skills) && has_skill_gate(line) {
            blocks.push(Block::SkillGroup {
                items: split_skill_items(line),
            });
            // skill lines leave any open bullet list open
            continue;
        }

        if let Some(item) = strip_bullet_marker(line) {
            let idx = match open_list {
                Some(idx) => idx,
                None => {
                    blocks.push(Block::BulletList { items: Vec::new() });
                    let idx = blocks.len() - 1;
                    open_list = Some(idx);
                    idx
                }
            };
            if let Block::BulletList { items } = &mut blocks[idx] {
                items.push(item.to_string());
            }
            continue;
        }

        open_list = None;
        if is_project_title(line) {
            blocks.push(Block::ProjectTitle {
                text: line.to_string(),
            });
        } else {
            blocks.push(Block::Paragraph {
                text: line.to_string(),
            });
        }
    }

    blocks
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A heading is a leading whole-word section keyword, case-insensitive.
/// The optional trailing `:` or `-` and everything after the keyword
/// are discarded, so boundary-checking the keyword is all that matters.
fn match_heading(line: &str) -> Option<Section> {
    for (keyword, section) in SECTION_KEYWORDS {
        let len = keyword.len();
        let bytes = line.as_bytes();
        if bytes.len() < len || !bytes[..len].eq_ignore_ascii_case(keyword.as_bytes()) {
            continue;
        }
        // keyword is ASCII, so `len` is a char boundary
        match line[len..].chars().next() {
            Some(c) if is_word_char(c) => continue,
            _ => return Some(section),
        }
    }
    None
}

/// The skill gate: a comma, hyphen, or slash anywhere in the line.
/// Hyphen and slash only gate — they are not split delimiters.
fn has_skill_gate(line: &str) -> bool {
    line.contains([',', '-', '/'])
}

fn split_skill_items(line: &str) -> Vec<String> {
    line.split([';', ',', '|'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .take(MAX_SKILL_ITEMS)
        .map(str::to_string)
        .collect()
}

/// A bullet is `-`, `•`, or `*` followed by at least one whitespace
/// character. Returns the item text with marker and whitespace removed.
fn strip_bullet_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['-', '•', '*'])?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Two project-title shapes:
/// 1. the line starts with `Project` (case-insensitive, no trailing
///    word-boundary check — `Projections ...` qualifies);
/// 2. a leading word character, then up to 40 word characters or
///    whitespace, then an em-dash.
fn is_project_title(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() >= 7 && bytes[..7].eq_ignore_ascii_case(b"project") {
        return true;
    }

    let mut chars = line.chars();
    match chars.next() {
        Some(c) if is_word_char(c) => {}
        _ => return false,
    }
    for (i, c) in chars.enumerate() {
        if c == '—' {
            return true;
        }
        if i >= PROJECT_DASH_MAX_PREFIX || !(is_word_char(c) || c.is_whitespace()) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(label: Section) -> Block {
        Block::Heading { label }
    }

    fn skills(items: &[&str]) -> Block {
        Block::SkillGroup {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn bullets(items: &[&str]) -> Block {
        Block::BulletList {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn project(text: &str) -> Block {
        Block::ProjectTitle {
            text: text.to_string(),
        }
    }

    fn para(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(structure("").is_empty());
        assert!(structure("\n\n\n").is_empty());
        assert!(structure("   \n\t\n  \n").is_empty());
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            structure("SUMMARY\nHello world"),
            vec![heading(Section::Summary), para("Hello world")]
        );
    }

    #[test]
    fn test_heading_is_case_insensitive_and_normalized() {
        assert_eq!(structure("summary"), vec![heading(Section::Summary)]);
        assert_eq!(structure("Education"), vec![heading(Section::Education)]);
    }

    #[test]
    fn test_heading_discards_rest_of_line() {
        assert_eq!(
            structure("EDUCATION: MIT, 2019"),
            vec![heading(Section::Education)]
        );
        assert_eq!(
            structure("skills - overview"),
            vec![heading(Section::Skills)]
        );
    }

    #[test]
    fn test_heading_requires_whole_leading_word() {
        // keyword running into another word character is not a heading
        assert_eq!(structure("SKILLSET overview"), vec![para("SKILLSET overview")]);
        // mid-line keywords never match
        assert_eq!(structure("My SKILLS"), vec![para("My SKILLS")]);
    }

    #[test]
    fn test_skill_line_splits_on_commas() {
        assert_eq!(
            structure("SKILLS\nPython, Go, Rust"),
            vec![heading(Section::Skills), skills(&["Python", "Go", "Rust"])]
        );
    }

    #[test]
    fn test_skill_line_splits_on_semicolons_and_pipes() {
        assert_eq!(
            structure("SKILLS\nPython; Go | Rust"),
            vec![heading(Section::Skills), skills(&["Python", "Go", "Rust"])]
        );
    }

    #[test]
    fn test_hyphen_and_slash_gate_but_do_not_split() {
        // hyphen admits the line as a skill line; only ; , | split it
        assert_eq!(
            structure("SKILLS\nsystems - design"),
            vec![heading(Section::Skills), skills(&["systems - design"])]
        );
        assert_eq!(
            structure("SKILLS\nCI/CD"),
            vec![heading(Section::Skills), skills(&["CI/CD"])]
        );
    }

    #[test]
    fn test_skill_line_without_gate_falls_through() {
        assert_eq!(
            structure("SKILLS\nJust plain words"),
            vec![heading(Section::Skills), para("Just plain words")]
        );
    }

    #[test]
    fn test_skill_group_truncates_to_twelve_items() {
        let line = (1..=15)
            .map(|n| format!("skill{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let got = structure(&format!("SKILLS\n{line}"));
        match &got[1] {
            Block::SkillGroup { items } => {
                assert_eq!(items.len(), MAX_SKILL_ITEMS);
                assert_eq!(items[0], "skill1");
                assert_eq!(items[11], "skill12");
            }
            other => panic!("expected SkillGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_skill_line_of_only_delimiters_yields_empty_group() {
        assert_eq!(
            structure("SKILLS\n, ,"),
            vec![heading(Section::Skills), skills(&[])]
        );
    }

    #[test]
    fn test_skill_gate_only_applies_inside_skills_section() {
        assert_eq!(
            structure("PROJECTS\nPython, Go, Rust"),
            vec![heading(Section::Projects), para("Python, Go, Rust")]
        );
        // no section at all
        assert_eq!(structure("Python, Go, Rust"), vec![para("Python, Go, Rust")]);
    }

    #[test]
    fn test_new_heading_resets_skill_section() {
        let got = structure("SKILLS\nRust, Go\nPROJECTS\nRust, Go");
        assert_eq!(
            got,
            vec![
                heading(Section::Skills),
                skills(&["Rust", "Go"]),
                heading(Section::Projects),
                para("Rust, Go"),
            ]
        );
    }

    #[test]
    fn test_bullets_accumulate_into_single_list() {
        assert_eq!(
            structure("- item one\n- item two"),
            vec![bullets(&["item one", "item two"])]
        );
    }

    #[test]
    fn test_all_three_bullet_markers() {
        assert_eq!(
            structure("- dash\n• dot\n* star"),
            vec![bullets(&["dash", "dot", "star"])]
        );
    }

    #[test]
    fn test_interrupting_line_forces_new_list() {
        assert_eq!(
            structure("- item one\nPlain line\n- item two"),
            vec![bullets(&["item one"]), para("Plain line"), bullets(&["item two"])]
        );
    }

    #[test]
    fn test_heading_closes_open_list() {
        assert_eq!(
            structure("- one\nSUMMARY\n- two"),
            vec![bullets(&["one"]), heading(Section::Summary), bullets(&["two"])]
        );
    }

    #[test]
    fn test_blank_lines_do_not_close_open_list() {
        // empty lines are skipped entirely, state untouched
        assert_eq!(
            structure("- one\n\n\n- two"),
            vec![bullets(&["one", "two"])]
        );
    }

    #[test]
    fn test_bullet_marker_requires_trailing_whitespace() {
        assert_eq!(structure("-item"), vec![para("-item")]);
        assert_eq!(structure("*bold*"), vec![para("*bold*")]);
    }

    #[test]
    fn test_bullet_with_empty_item_text() {
        assert_eq!(structure("- "), vec![bullets(&[""])]);
    }

    #[test]
    fn test_project_title_by_leading_word() {
        assert_eq!(
            structure("Project 1 — Widget"),
            vec![project("Project 1 — Widget")]
        );
        assert_eq!(structure("project alpha"), vec![project("project alpha")]);
        // no trailing word boundary on the keyword
        assert_eq!(
            structure("Projections for 2026"),
            vec![project("Projections for 2026")]
        );
    }

    #[test]
    fn test_project_title_by_em_dash_shape() {
        assert_eq!(
            structure("Widget engine — batch renderer"),
            vec![project("Widget engine — batch renderer")]
        );
    }

    #[test]
    fn test_em_dash_shape_rejects_long_prefix() {
        // 42 word characters before the dash exceeds the limit
        let long = format!("{} — details", "x".repeat(42));
        assert_eq!(structure(&long), vec![para(&long)]);
        // 41 is still within it
        let ok = format!("{} — details", "x".repeat(40));
        assert_eq!(structure(&ok), vec![project(&ok)]);
    }

    #[test]
    fn test_em_dash_shape_rejects_punctuation_before_dash() {
        assert_eq!(
            structure("Widget (v2) — renderer"),
            vec![para("Widget (v2) — renderer")]
        );
    }

    #[test]
    fn test_hyphen_is_not_an_em_dash() {
        assert_eq!(
            structure("Widget engine - batch renderer"),
            vec![para("Widget engine - batch renderer")]
        );
    }

    #[test]
    fn test_project_title_closes_open_list() {
        assert_eq!(
            structure("- one\nProject 2 — CLI\n- two"),
            vec![bullets(&["one"]), project("Project 2 — CLI"), bullets(&["two"])]
        );
    }

    // Precedence: the skill rule runs before the bullet and
    // project-title rules and wins any overlap under SKILLS.

    #[test]
    fn test_skill_gate_preempts_bullet_under_skills() {
        assert_eq!(
            structure("SKILLS\n- Rust, Go"),
            vec![heading(Section::Skills), skills(&["- Rust", "Go"])]
        );
    }

    #[test]
    fn test_skill_gate_preempts_project_title_under_skills() {
        assert_eq!(
            structure("SKILLS\nProject-X rewrite"),
            vec![heading(Section::Skills), skills(&["Project-X rewrite"])]
        );
    }

    #[test]
    fn test_project_title_without_gate_chars_wins_under_skills() {
        // an em-dash is not a hyphen, so the skill gate does not fire
        assert_eq!(
            structure("SKILLS\nProject 1 — Widget"),
            vec![heading(Section::Skills), project("Project 1 — Widget")]
        );
    }

    #[test]
    fn test_skill_line_leaves_bullet_list_open() {
        // the skill line lands after the list it interrupts, and the
        // next bullet still appends to that earlier list
        assert_eq!(
            structure("SKILLS\n• one\nPython, Go\n• two"),
            vec![
                heading(Section::Skills),
                bullets(&["one", "two"]),
                skills(&["Python", "Go"]),
            ]
        );
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        // multibyte chars adjacent to keyword prefixes must not split
        // a char boundary during matching
        let got = structure("SKILLé\nProjeçt — ok\n— dash first\nрезюме");
        assert_eq!(
            got,
            vec![
                para("SKILLé"),
                para("Projeçt — ok"),
                para("— dash first"),
                para("резюме"),
            ]
        );
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        assert_eq!(
            structure("SUMMARY\r\nHello\r\n"),
            vec![heading(Section::Summary), para("Hello")]
        );
    }

    #[test]
    fn test_idempotent_across_invocations() {
        let text = "SUMMARY\nSeasoned engineer\nSKILLS\nRust, Go\n- item\nProject 1 — Widget";
        assert_eq!(structure(text), structure(text));
    }

    #[test]
    fn test_full_resume_walkthrough() {
        let text = "\
JANE DOE
jane@example.com | +1 555 0100

SUMMARY
Systems engineer with a storage background.

SKILLS
Rust, Go, Postgres, Kafka

PROJECTS
Project 1 — Widget
- Built the widget pipeline
- Cut render latency

EDUCATION
- BSc Computer Science";
        assert_eq!(
            structure(text),
            vec![
                para("JANE DOE"),
                para("jane@example.com | +1 555 0100"),
                heading(Section::Summary),
                para("Systems engineer with a storage background."),
                heading(Section::Skills),
                skills(&["Rust", "Go", "Postgres", "Kafka"]),
                heading(Section::Projects),
                project("Project 1 — Widget"),
                bullets(&["Built the widget pipeline", "Cut render latency"]),
                heading(Section::Education),
                bullets(&["BSc Computer Science"]),
            ]
        );
    }
}
