//! DOCX content extractor.
//!
//! Reads `word/document.xml` out of the archive and emits body paragraphs
//! first, then the text of every table cell (tables, rows, cells, in document
//! order), one item per line.

use dircsv_core::{DocumentExtractor, ExtractError};
use std::path::Path;
use tracing::debug;

const FORMAT: &str = "DOCX";

/// Extractor for Word (OOXML) documents.
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether DOCX support was compiled in.
    #[must_use]
    pub fn is_available() -> bool {
        cfg!(feature = "docx")
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for DocxExtractor {
    fn name(&self) -> &str {
        "docx"
    }

    fn extensions(&self) -> &[&str] {
        &[".docx"]
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        debug!("Extracting DOCX: {:?}", path);
        read_docx(path)
    }
}

#[cfg(not(feature = "docx"))]
fn read_docx(_path: &Path) -> Result<String, ExtractError> {
    Err(ExtractError::Unavailable {
        format: FORMAT,
        hint: "DOCX support not compiled in. Build with the 'docx' feature",
    })
}

#[cfg(feature = "docx")]
fn read_docx(path: &Path) -> Result<String, ExtractError> {
    use std::io::BufReader;

    let file = std::fs::File::open(path).map_err(|e| ExtractError::read(FORMAT, e))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExtractError::read(FORMAT, e))?;
    let entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::read(FORMAT, e))?;

    let body = parse_document(BufReader::new(entry)).map_err(|e| ExtractError::read(FORMAT, e))?;
    Ok(body.into_text())
}

/// Text pulled from `word/document.xml`.
#[cfg(feature = "docx")]
#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentBody {
    /// Paragraphs outside any table
    paragraphs: Vec<String>,
    /// Cells of top-level tables, each the cell's paragraphs joined by newlines
    cells: Vec<String>,
}

#[cfg(feature = "docx")]
impl DocumentBody {
    /// File a finished paragraph under the body, the open cell, or nowhere.
    fn push_paragraph(&mut self, text: String, table_depth: usize, cell: &mut Option<Vec<String>>) {
        match table_depth {
            0 => self.paragraphs.push(text),
            1 => {
                if let Some(cell) = cell.as_mut() {
                    cell.push(text);
                }
            }
            _ => {}
        }
    }

    fn into_text(self) -> String {
        let mut parts = self.paragraphs;
        parts.extend(self.cells);
        parts.join("\n").trim().to_string()
    }
}

/// Walk WordprocessingML events.
///
/// Only `w:t` runs of outermost paragraphs contribute text, so text boxes
/// nested inside a paragraph and tables nested inside a cell are skipped.
#[cfg(feature = "docx")]
fn parse_document<R: std::io::BufRead>(input: R) -> Result<DocumentBody, quick_xml::Error> {
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    let mut reader = Reader::from_reader(input);
    reader.trim_text(false);

    let mut body = DocumentBody::default();
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut paragraph = String::new();
    let mut cell: Option<Vec<String>> = None;
    let mut in_text = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:tc" if table_depth == 1 => cell = Some(Vec::new()),
                b"w:p" => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 {
                        paragraph.clear();
                    }
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 => {
                    body.push_paragraph(String::new(), table_depth, &mut cell);
                }
                b"w:tab" if paragraph_depth == 1 => paragraph.push('\t'),
                b"w:br" | b"w:cr" if paragraph_depth == 1 => paragraph.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:tc" if table_depth == 1 => {
                    if let Some(paragraphs) = cell.take() {
                        body.cells.push(paragraphs.join("\n"));
                    }
                }
                b"w:p" => {
                    if paragraph_depth == 1 {
                        body.push_paragraph(std::mem::take(&mut paragraph), table_depth, &mut cell);
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text && paragraph_depth == 1 => {
                paragraph.push_str(&t.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(body)
}
