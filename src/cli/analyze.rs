// src/cli/analyze.rs
// One-shot analysis of a single journal entry

use anyhow::Result;
use emotions::pipeline::{AnalysisPipeline, AnalysisRecord};

use super::render;

/// Text printed for a finished analysis, either the snapshot or pretty JSON
pub fn format_record(record: &AnalysisRecord, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(record)?)
    } else {
        Ok(render::snapshot(record))
    }
}

pub async fn run_analyze(pipeline: &AnalysisPipeline, text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        println!("{}", render::EMPTY_INPUT_WARNING);
        return Ok(());
    }

    let record = pipeline.run(text.trim()).await;
    println!("{}", format_record(&record, json)?);
    Ok(())
}
