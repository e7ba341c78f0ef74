//! Docx writer — renders a block sequence into a minimal OOXML
//! package: `[Content_Types].xml`, `_rels/.rels`, and
//! `word/document.xml` inside a zip container.
//!
//! One visual unit per block, in sequence order: headings render as
//! bold 12pt paragraphs, project titles bold 11pt, bullet items as
//! indented `• `-prefixed 11pt paragraphs, skill groups as one 11pt
//! paragraph of pipe-joined items, paragraphs as plain 11pt text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::structure::Block;

/// Font sizes in OOXML half-points.
const HEADING_SIZE: u32 = 24; // 12pt
const BODY_SIZE: u32 = 22; // 11pt

/// Left indent for bullet items, in twentieths of a point.
const BULLET_INDENT: u32 = 360;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Renders the blocks and saves them under `output_dir`, returning the
/// bare filename the download endpoint accepts.
pub fn save_resume_docx(output_dir: &Path, name: &str, blocks: &[Block]) -> Result<String> {
    let filename = format!("{}.docx", sanitize_filename(name));
    let path = output_dir.join(&filename);
    write_docx(blocks, &path)?;
    Ok(filename)
}

/// Writes the full docx package to `path`.
pub fn write_docx(blocks: &[Block], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(PACKAGE_RELS_XML.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml(blocks).as_bytes())?;

    zip.finish().context("finalize docx container")?;
    Ok(())
}

/// Builds `word/document.xml` for the block sequence.
fn document_xml(blocks: &[Block]) -> String {
    let mut body = String::new();
    for block in blocks {
        match block {
            Block::Heading { label } => {
                push_paragraph(&mut body, label.as_str(), HEADING_SIZE, true, false);
            }
            Block::SkillGroup { items } => {
                push_paragraph(&mut body, &items.join(" | "), BODY_SIZE, false, false);
            }
            Block::BulletList { items } => {
                for item in items {
                    push_paragraph(&mut body, &format!("• {item}"), BODY_SIZE, false, true);
                }
            }
            Block::ProjectTitle { text } => {
                push_paragraph(&mut body, text, BODY_SIZE, true, false);
            }
            Block::Paragraph { text } => {
                push_paragraph(&mut body, text, BODY_SIZE, false, false);
            }
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

fn push_paragraph(out: &mut String, text: &str, size: u32, bold: bool, indented: bool) {
    out.push_str("<w:p>");
    if indented {
        out.push_str(&format!(r#"<w:pPr><w:ind w:left="{BULLET_INDENT}"/></w:pPr>"#));
    }
    out.push_str("<w:r><w:rPr>");
    if bold {
        out.push_str("<w:b/>");
    }
    out.push_str(&format!(r#"<w:sz w:val="{size}"/></w:rPr>"#));
    out.push_str(&format!(
        r#"<w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape(text)
    ));
}

/// Keeps the candidate's name usable as a filename: path separators
/// and control characters become hyphens, and an empty name falls
/// back to "resume".
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | ':' | '"') || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}
