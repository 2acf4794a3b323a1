use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::page_extract::ExtractOptions;
use super::pipeline::{Outcome, ProcessingResult, process_document};
use super::record_match::PatternMatcher;
use super::render::{render_download_text, summarize, total_line};
use crate::cli::SummarizeArgs;
use crate::model::{AggregateResult, ReportStatus, Summary, SummaryReport};
use crate::util::{now_utc_string, sha256_bytes, write_json_pretty, write_text};

const REPORT_VERSION: u32 = 1;
pub const NO_BLOCKAGE_MESSAGE: &str =
    "Nenhum bloqueio identificado no arquivo. Verifique se o arquivo está no formato correto.";

pub fn run(args: SummarizeArgs) -> Result<()> {
    let matcher = match &args.pattern {
        Some(pattern) => PatternMatcher::new(pattern),
        None => PatternMatcher::sisbajud(),
    }
    .context("failed to build record matcher")?;

    let bytes = fs::read(&args.pdf_path)
        .with_context(|| format!("failed to read {}", args.pdf_path.display()))?;
    info!(
        path = %args.pdf_path.display(),
        bytes = bytes.len(),
        pattern = matcher.as_str(),
        "processing document"
    );

    let options = ExtractOptions {
        allow_empty_pages: args.allow_empty_pages,
    };
    let outcome = process_document(&bytes, &matcher, &options)
        .context("Erro ao processar o arquivo")?;

    let aggregate = match outcome.result.clone() {
        ProcessingResult::Found(aggregate) => aggregate,
        ProcessingResult::Empty => AggregateResult::empty(),
    };
    let summary = summarize(&aggregate);
    let report = build_report(&args.pdf_path, &bytes, &outcome, aggregate, &summary);

    let found = report.status == ReportStatus::Found;
    if !found {
        warn!(candidates = outcome.candidate_count, "no blockage identified");
    }

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote summary report");
    }

    if let Some(output_path) = &args.output {
        if found {
            write_text(output_path, &render_download_text(&summary))?;
            info!(path = %output_path.display(), "wrote summary document");
        } else {
            warn!(path = %output_path.display(), "no blockages found, summary document not written");
        }
    }

    if args.json {
        write_json_response(&report)
    } else if found {
        write_text_response(&summary)
    } else {
        let mut output = io::stdout().lock();
        writeln!(output, "{NO_BLOCKAGE_MESSAGE}")?;
        Ok(())
    }
}

pub(super) fn build_report(
    source_path: &Path,
    bytes: &[u8],
    outcome: &Outcome,
    aggregate: AggregateResult,
    summary: &Summary,
) -> SummaryReport {
    let status = match outcome.result {
        ProcessingResult::Found(_) => ReportStatus::Found,
        ProcessingResult::Empty => ReportStatus::Empty,
    };

    SummaryReport {
        report_version: REPORT_VERSION,
        status,
        generated_at: now_utc_string(),
        source_path: source_path.display().to_string(),
        source_sha256: sha256_bytes(bytes),
        page_count: outcome.page_count,
        empty_page_count: outcome.empty_page_count,
        record_count: aggregate.records.len(),
        total_cents: aggregate.total_cents,
        total_formatted: summary.total_formatted.clone(),
        total_words: summary.total_words.clone(),
        records: aggregate.records,
        summaries: summary.sentences.clone(),
        exclusions: outcome.exclusions.clone(),
    }
}

fn write_json_response(report: &SummaryReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize summary json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_response(summary: &Summary) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Total de bloqueios: {}", summary.sentences.len())?;
    writeln!(output, "Valor total bloqueado: R$ {}", summary.total_formatted)?;
    writeln!(output)?;

    for (index, sentence) in summary.sentences.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, sentence)?;
        writeln!(output)?;
    }

    writeln!(output, "{}", total_line(summary))?;
    output.flush()?;
    Ok(())
}
