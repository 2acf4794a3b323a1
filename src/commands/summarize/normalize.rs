use tracing::warn;

use crate::model::{
    AggregateResult, BlockageRecord, Exclusion, ExclusionReason, RawMatch, TaxIdKind,
};

/// Records keep source order; the total is checked as each record is added.
pub fn normalize_all(matches: Vec<RawMatch>) -> (AggregateResult, Vec<Exclusion>) {
    let mut aggregate = AggregateResult::empty();
    let mut exclusions = Vec::new();

    for raw in matches {
        match normalize(&raw).and_then(|record| aggregate.push(record)) {
            Ok(()) => {}
            Err(reason) => {
                warn!(
                    offset = raw.offset,
                    tax_id = %raw.tax_id,
                    amount = %raw.amount_text,
                    reason = %reason,
                    "excluded blockage candidate"
                );
                exclusions.push(Exclusion {
                    tax_id: raw.tax_id,
                    name: normalize_whitespace(&raw.name),
                    amount_text: raw.amount_text,
                    offset: raw.offset,
                    reason,
                });
            }
        }
    }

    (aggregate, exclusions)
}

pub fn normalize(raw: &RawMatch) -> Result<BlockageRecord, ExclusionReason> {
    let tax_id = raw
        .tax_id
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    let tax_id_kind = TaxIdKind::from_digit_count(tax_id.len())
        .ok_or(ExclusionReason::InvalidTaxIdLength(tax_id.len()))?;

    let amount_text = raw.amount_text.trim().to_string();
    let amount_cents = parse_amount_cents(&amount_text)
        .ok_or_else(|| ExclusionReason::UnparsableAmount(amount_text.clone()))?;
    if amount_cents <= 0 {
        return Err(ExclusionReason::NonPositiveAmount(amount_cents));
    }

    Ok(BlockageRecord {
        name: normalize_whitespace(&raw.name),
        tax_id_formatted: format_tax_id(&tax_id, tax_id_kind),
        tax_id,
        tax_id_kind,
        amount_text,
        amount_cents,
    })
}

/// `###.###.###-##` for CPF, `##.###.###/####-##` for CNPJ.
pub fn format_tax_id(digits: &str, kind: TaxIdKind) -> String {
    match kind {
        TaxIdKind::Individual => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        TaxIdKind::Organization => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
    }
}

/// Parses `1.234,567` style text into cents, rounding half up past the
/// second fractional digit.
pub fn parse_amount_cents(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let compact = unsigned.replace('.', "");
    let (integer_text, fraction_text) = match compact.split_once(',') {
        Some((integer, fraction)) => (integer, fraction),
        None => (compact.as_str(), ""),
    };

    if integer_text.is_empty() && fraction_text.is_empty() {
        return None;
    }
    if !integer_text.chars().all(|character| character.is_ascii_digit())
        || !fraction_text.chars().all(|character| character.is_ascii_digit())
    {
        return None;
    }

    let integer = if integer_text.is_empty() {
        0
    } else {
        integer_text.parse::<i64>().ok()?
    };

    let digits = fraction_text.as_bytes();
    let digit_at = |index: usize| digits.get(index).map(|byte| i64::from(byte - b'0'));
    let mut fraction = digit_at(0).unwrap_or(0) * 10 + digit_at(1).unwrap_or(0);
    if digit_at(2).is_some_and(|digit| digit >= 5) {
        fraction += 1;
    }

    let cents = integer.checked_mul(100)?.checked_add(fraction)?;
    Some(if negative { -cents } else { cents })
}

pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
