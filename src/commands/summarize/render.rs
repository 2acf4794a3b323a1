use super::spell_out::{UNRECOGNIZED_AMOUNT, spell_out_cents};
use crate::model::{AggregateResult, BlockageRecord, Summary};

pub const DOCUMENT_HEADER: &str = "RESUMOS DOS BLOQUEIOS BANCÁRIOS - SISBAJUD";
const RULE_WIDTH: usize = 80;

pub fn render_sentence(record: &BlockageRecord) -> String {
    format!(
        "R$ {} ({}), bloqueados via Sisbajud, de titularidade de {} ({} {})",
        record.amount_text,
        spell_amount_cents(record.amount_cents),
        record.name,
        record.tax_id_kind.label(),
        record.tax_id_formatted
    )
}

fn spell_amount_cents(cents: i64) -> String {
    u64::try_from(cents)
        .map(spell_out_cents)
        .unwrap_or_else(|_| UNRECOGNIZED_AMOUNT.to_string())
}

pub fn summarize(aggregate: &AggregateResult) -> Summary {
    Summary {
        sentences: aggregate.records.iter().map(render_sentence).collect(),
        total_cents: aggregate.total_cents,
        total_formatted: format_brl(aggregate.total_cents),
        total_words: spell_amount_cents(aggregate.total_cents),
    }
}

/// `1234567` cents becomes `12.345,67`.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let digits = (magnitude / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped},{:02}", magnitude % 100)
}

pub fn total_line(summary: &Summary) -> String {
    format!(
        "VALOR TOTAL BLOQUEADO: R$ {} ({})",
        summary.total_formatted, summary.total_words
    )
}

pub fn render_download_text(summary: &Summary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut text = String::new();

    text.push_str(DOCUMENT_HEADER);
    text.push('\n');
    text.push_str(&rule);
    text.push_str("\n\n");

    for (index, sentence) in summary.sentences.iter().enumerate() {
        text.push_str(&format!("{}. {}\n\n", index + 1, sentence));
    }

    text.push_str(&rule);
    text.push('\n');
    text.push_str(&total_line(summary));
    text.push('\n');
    text.push_str(&rule);
    text.push('\n');

    text
}
