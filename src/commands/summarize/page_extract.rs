use lopdf::Document;
use tracing::{debug, warn};

use crate::model::ExtractionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub allow_empty_pages: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    pub empty_page_count: usize,
}

/// Concatenates the text layer of every page, in page order, one line break
/// between pages.
pub fn extract_text(
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<ExtractedText, ExtractionError> {
    let document = Document::load_mem(bytes)
        .map_err(|error| ExtractionError::InvalidPdf(error.to_string()))?;

    let page_numbers = document.get_pages().into_keys().collect::<Vec<u32>>();
    if page_numbers.is_empty() {
        return Err(ExtractionError::NoPages);
    }

    let mut pages = Vec::with_capacity(page_numbers.len());
    let mut empty_page_count = 0usize;

    for page_number in page_numbers {
        let raw = document
            .extract_text(&[page_number])
            .map_err(|error| ExtractionError::PageText {
                page: page_number,
                reason: error.to_string(),
            })?;
        let page = raw.replace('\u{0000}', "");

        let chars = non_whitespace_char_count(&page);
        if chars == 0 {
            if !options.allow_empty_pages {
                return Err(ExtractionError::EmptyTextLayer { page: page_number });
            }
            warn!(page = page_number, "page has no extractable text layer");
            empty_page_count += 1;
        }

        debug!(page = page_number, chars, "extracted page text");
        pages.push(page);
    }

    Ok(ExtractedText {
        page_count: pages.len(),
        empty_page_count,
        text: pages.join("\n"),
    })
}

fn non_whitespace_char_count(text: &str) -> usize {
    text.chars()
        .filter(|character| !character.is_whitespace())
        .count()
}
