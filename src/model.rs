use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMatch {
    pub tax_id: String,
    pub name: String,
    pub amount_text: String,
    pub offset: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TaxIdKind {
    Individual,
    Organization,
}

impl TaxIdKind {
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            11 => Some(Self::Individual),
            14 => Some(Self::Organization),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Organization => "CNPJ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockageRecord {
    pub name: String,
    pub tax_id: String,
    pub tax_id_kind: TaxIdKind,
    pub tax_id_formatted: String,
    pub amount_text: String,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub records: Vec<BlockageRecord>,
    pub total_cents: i64,
}

impl AggregateResult {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_cents: 0,
        }
    }

    /// Appends the record unless its amount would overflow the running total.
    pub fn push(&mut self, record: BlockageRecord) -> Result<(), ExclusionReason> {
        self.total_cents = self
            .total_cents
            .checked_add(record.amount_cents)
            .ok_or(ExclusionReason::TotalOverflow(record.amount_cents))?;
        self.records.push(record);
        Ok(())
    }

    pub fn from_records(records: Vec<BlockageRecord>) -> Result<Self, ExclusionReason> {
        let mut aggregate = Self::empty();
        for record in records {
            aggregate.push(record)?;
        }
        Ok(aggregate)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Found,
    Empty,
}

/// Why a matched candidate was left out of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ExclusionReason {
    #[error("tax id has {0} digits, expected 11 (CPF) or 14 (CNPJ)")]
    InvalidTaxIdLength(usize),
    #[error("amount '{0}' is not a valid decimal value")]
    UnparsableAmount(String),
    #[error("amount of {0} cents is not positive")]
    NonPositiveAmount(i64),
    #[error("amount of {0} cents overflows the blockage total")]
    TotalOverflow(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub tax_id: String,
    pub name: String,
    pub amount_text: String,
    pub offset: usize,
    pub reason: ExclusionReason,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("input is not a readable PDF document: {0}")]
    InvalidPdf(String),
    #[error("PDF document has no pages")]
    NoPages,
    #[error("failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },
    #[error("page {page} has no extractable text layer")]
    EmptyTextLayer { page: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub sentences: Vec<String>,
    pub total_cents: i64,
    pub total_formatted: String,
    pub total_words: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub report_version: u32,
    pub status: ReportStatus,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub page_count: usize,
    pub empty_page_count: usize,
    pub record_count: usize,
    pub total_cents: i64,
    pub total_formatted: String,
    pub total_words: String,
    pub records: Vec<BlockageRecord>,
    pub summaries: Vec<String>,
    pub exclusions: Vec<Exclusion>,
}
