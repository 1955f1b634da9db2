//! Document text extraction for uploaded resumes.
//!
//! Only PDF and DOCX uploads are accepted. DOCX is an OOXML zip container;
//! the text lives in `word/document.xml`, so extraction reads that entry
//! and strips the markup.

use std::io::{Cursor, Read};

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Shown to the user when the upload is neither PDF nor DOCX.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload a PDF or Word document.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{}", UNSUPPORTED_FORMAT_MESSAGE)]
    UnsupportedFormat,

    #[error("Failed to extract text: {0}")]
    Parse(String),
}

/// Extracts plain text from an uploaded document, dispatching on MIME type.
pub fn extract_text(content_type: &str, data: &[u8]) -> Result<String, ExtractError> {
    match content_type {
        PDF_MIME => extract_pdf_text(data),
        DOCX_MIME => extract_docx_text(data),
        _ => Err(ExtractError::UnsupportedFormat),
    }
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Parse(e.to_string()))
}

fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    Ok(strip_ooxml_markup(&xml))
}

/// Reduces `word/document.xml` to plain text: paragraph ends become
/// newlines, all other tags are dropped, basic entities are decoded.
fn strip_ooxml_markup(xml: &str) -> String {
    let with_breaks = xml.replace("</w:p>", "\n");
    let mut text = String::with_capacity(with_breaks.len());
    let mut in_tag = false;
    for c in with_breaks.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn minimal_docx(body_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer.write_all(body_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_strip_ooxml_markup_paragraphs_become_lines() {
        let xml = "<w:document><w:p><w:r><w:t>My Resume</w:t></w:r></w:p>\
                   <w:p><w:r><w:t>Skills: Rust, SQL</w:t></w:r></w:p></w:document>";
        let text = strip_ooxml_markup(xml);
        assert_eq!(text, "My Resume\nSkills: Rust, SQL");
    }

    #[test]
    fn test_strip_ooxml_markup_decodes_entities() {
        let xml = "<w:p><w:t>C &amp; C++ &lt;embedded&gt;</w:t></w:p>";
        assert_eq!(strip_ooxml_markup(xml), "C & C++ <embedded>");
    }

    #[test]
    fn test_extract_docx_roundtrip() {
        let data = minimal_docx("<w:p><w:t>Resume of Ada</w:t></w:p><w:p><w:t>Skills: Rust</w:t></w:p>");
        let text = extract_text(DOCX_MIME, &data).unwrap();
        assert!(text.contains("Resume of Ada"));
        assert!(text.contains("Skills: Rust"));
    }

    #[test]
    fn test_extract_rejects_unknown_mime() {
        let err = extract_text("image/png", &[]).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat));
    }

    #[test]
    fn test_extract_docx_garbage_is_parse_error() {
        let err = extract_text(DOCX_MIME, b"not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
