use tracing::info;

use super::normalize::normalize_all;
use super::page_extract::{ExtractOptions, extract_text};
use super::record_match::RecordMatcher;
use crate::model::{AggregateResult, Exclusion, ExtractionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    Found(AggregateResult),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: ProcessingResult,
    pub exclusions: Vec<Exclusion>,
    pub candidate_count: usize,
    pub page_count: usize,
    pub empty_page_count: usize,
}

pub fn process_document(
    bytes: &[u8],
    matcher: &dyn RecordMatcher,
    options: &ExtractOptions,
) -> Result<Outcome, ExtractionError> {
    let extracted = extract_text(bytes, options)?;
    info!(
        pages = extracted.page_count,
        empty_pages = extracted.empty_page_count,
        chars = extracted.text.len(),
        "extracted document text"
    );

    Ok(Outcome {
        page_count: extracted.page_count,
        empty_page_count: extracted.empty_page_count,
        ..process_text(&extracted.text, matcher)
    })
}

pub fn process_text(text: &str, matcher: &dyn RecordMatcher) -> Outcome {
    let matches = matcher.find_matches(text);
    let candidate_count = matches.len();
    let (aggregate, exclusions) = normalize_all(matches);

    info!(
        candidates = candidate_count,
        records = aggregate.records.len(),
        excluded = exclusions.len(),
        "normalized blockage candidates"
    );

    let result = if aggregate.records.is_empty() {
        ProcessingResult::Empty
    } else {
        ProcessingResult::Found(aggregate)
    };

    Outcome {
        result,
        exclusions,
        candidate_count,
        page_count: 0,
        empty_page_count: 0,
    }
}
