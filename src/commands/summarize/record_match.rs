use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::model::RawMatch;

/// Tax id, colon, uppercase name, `R$`, amount in Brazilian notation.
///
/// The name cannot hold digits and the amount stops after at most two cents
/// digits, so records glued together without whitespace still split cleanly.
pub const SISBAJUD_PATTERN: &str = r"(?P<tax_id>[0-9]{11,14}):\s*(?P<name>[A-ZÀ-Ú][A-ZÀ-Ú\s]*?)\s+R\$\s*(?P<amount>[0-9]+(?:\.[0-9]{3})*(?:,[0-9]{1,2})?)";

const REQUIRED_GROUPS: [&str; 3] = ["tax_id", "name", "amount"];

pub trait RecordMatcher {
    /// Non-overlapping candidates, left to right.
    fn find_matches(&self, text: &str) -> Vec<RawMatch>;
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid record pattern: {0}")]
    Invalid(#[from] regex::Error),
    #[error("record pattern is missing the named group '{0}'")]
    MissingGroup(&'static str),
}

#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;

        for group in REQUIRED_GROUPS {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(PatternError::MissingGroup(group));
            }
        }

        Ok(Self { regex })
    }

    pub fn sisbajud() -> Result<Self, PatternError> {
        Self::new(SISBAJUD_PATTERN)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl RecordMatcher for PatternMatcher {
    fn find_matches(&self, text: &str) -> Vec<RawMatch> {
        let matches = self
            .regex
            .captures_iter(text)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                Some(RawMatch {
                    tax_id: captures.name("tax_id")?.as_str().to_string(),
                    name: captures.name("name")?.as_str().to_string(),
                    amount_text: captures.name("amount")?.as_str().to_string(),
                    offset: whole.start(),
                })
            })
            .collect::<Vec<RawMatch>>();

        debug!(candidates = matches.len(), "record pattern scan complete");
        matches
    }
}
