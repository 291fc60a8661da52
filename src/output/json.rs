use serde::Serialize;

use crate::checker::{MatchLog, MatchRecord};
use crate::error::Result;
use crate::instruction::Direction;
use crate::summary::Summary;

/// Machine-readable conclusion plus the full match log of a batch check.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary<'a>,
    match_log: Option<JsonMatchLog<'a>>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    matched: usize,
    applicable: usize,
    participants: Vec<JsonParticipantResult<'a>>,
}

#[derive(Serialize)]
struct JsonParticipantResult<'a> {
    participant: &'a str,
    files: Vec<JsonFileResult<'a>>,
}

#[derive(Serialize)]
struct JsonFileResult<'a> {
    file: &'a str,
    matched: usize,
    applicable: usize,
}

#[derive(Serialize)]
struct JsonMatchLog<'a> {
    participants: Vec<JsonParticipantMatches<'a>>,
}

#[derive(Serialize)]
struct JsonParticipantMatches<'a> {
    participant: &'a str,
    files: Vec<JsonFileMatches<'a>>,
}

#[derive(Serialize)]
struct JsonFileMatches<'a> {
    file: &'a str,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    instruction: usize,
    local_index: usize,
    pattern: &'a str,
    direction: Direction,
    matched: bool,
    hits: Vec<JsonHit<'a>>,
}

#[derive(Serialize)]
struct JsonHit<'a> {
    line_index: usize,
    text: &'a str,
}

impl JsonFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format(&self, summary: &Summary, log: Option<&MatchLog>) -> Result<String> {
        let output = JsonOutput {
            summary: convert_summary(summary),
            match_log: log.map(convert_log),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_summary(summary: &Summary) -> JsonSummary<'_> {
    JsonSummary {
        matched: summary.matched_rules(),
        applicable: summary.applicable_rules(),
        participants: summary
            .participants()
            .iter()
            .map(|p| JsonParticipantResult {
                participant: &p.participant,
                files: p
                    .files
                    .iter()
                    .map(|f| JsonFileResult {
                        file: &f.file,
                        matched: f.matched,
                        applicable: f.applicable,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn convert_log(log: &MatchLog) -> JsonMatchLog<'_> {
    JsonMatchLog {
        participants: log
            .participants
            .iter()
            .map(|p| JsonParticipantMatches {
                participant: &p.participant,
                files: p
                    .files
                    .iter()
                    .map(|f| JsonFileMatches {
                        file: &f.file,
                        records: f.records.iter().map(convert_record).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn convert_record(record: &MatchRecord) -> JsonRecord<'_> {
    JsonRecord {
        instruction: record.instruction,
        local_index: record.local_index,
        pattern: &record.pattern,
        direction: record.direction,
        matched: record.matched(),
        hits: record
            .hits
            .iter()
            .map(|h| JsonHit {
                line_index: h.line_index,
                text: &h.text,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
