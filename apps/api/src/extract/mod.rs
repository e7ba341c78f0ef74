//! Text extraction from uploaded resume files.
//!
//! Best-effort by contract: unsupported extensions and unreadable
//! files yield an empty string, never an error. Callers score
//! whatever text comes back.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

/// Extracts text from a `.pdf` or `.docx` file. Returns an empty
/// string for anything else or on any extraction failure.
pub fn extract_text(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let result = match ext.as_deref() {
        Some("pdf") => pdf_extract::extract_text(path).map_err(|e| anyhow::anyhow!("{e}")),
        Some("docx") => extract_docx_text(path),
        _ => return String::new(),
    };

    match result {
        Ok(text) => text,
        Err(err) => {
            warn!("text extraction failed for {}: {err:#}", path.display());
            String::new()
        }
    }
}

/// A docx is a zip container; the visible text lives in
/// `word/document.xml` run elements.
fn extract_docx_text(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file).context("read docx container")?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("docx has no word/document.xml")?
        .read_to_string(&mut document_xml)
        .context("read word/document.xml")?;

    Ok(document_text(&document_xml))
}

/// Pulls run text (`<w:t>`) out of document.xml, one output line per
/// paragraph (`<w:p>`).
fn document_text(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                if let Ok(text) = e.decode() {
                    out.push_str(&text);
                }
            }
            // entity references are reported as separate events
            Ok(Event::GeneralRef(ref e)) if in_run_text => {
                if let Ok(Some(c)) = e.resolve_char_ref() {
                    out.push(c);
                } else if let Some(c) = resolve_predefined_entity(e.as_ref()) {
                    out.push(c);
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    out
}

fn resolve_predefined_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"apos" => Some('\''),
        b"quot" => Some('"'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_text_joins_runs_and_breaks_paragraphs() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>
                <w:p><w:r><w:t>SUMMARY</w:t></w:r></w:p>
                <w:p><w:r><w:t xml:space="preserve">Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>
            </w:body>
        </w:document>"#;
        assert_eq!(document_text(xml), "SUMMARY\nHello world\n");
    }

    #[test]
    fn test_document_text_unescapes_entities() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>C &amp; C++ &lt;systems&gt;</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_text(xml), "C & C++ <systems>\n");
    }

    #[test]
    fn test_unknown_extension_yields_empty_string() {
        assert_eq!(extract_text(Path::new("resume.txt")), "");
        assert_eq!(extract_text(Path::new("resume")), "");
    }

    #[test]
    fn test_missing_file_yields_empty_string() {
        assert_eq!(extract_text(Path::new("/nonexistent/resume.pdf")), "");
        assert_eq!(extract_text(Path::new("/nonexistent/resume.docx")), "");
    }
}
