//! Turns the screening service's JSON into a validated, ranked result list.
//!
//! The client hands over the raw success body. Every record is decoded on its
//! own and every field is optional on the wire, so a missing or wrong-typed
//! field is reported with its record index instead of as an opaque decode
//! error.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::screening::{ResultId, ScreeningResult};
use crate::screening::rank;

#[derive(Debug, Clone, Deserialize)]
struct WireResult {
    #[serde(default)]
    id: Option<ResultId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    matched_skills: Option<Vec<String>>,
    #[serde(default)]
    semantic_similarity: Option<f64>,
    #[serde(default)]
    skill_match_ratio: Option<f64>,
    #[serde(default)]
    final_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("result #{index} is malformed: {reason}")]
pub struct MalformedResult {
    /// 0-based position in the response array.
    pub index: usize,
    pub reason: String,
}

impl MalformedResult {
    fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedResponse {
    #[error("response is not a JSON array of results: {0}")]
    NotAList(String),

    #[error(transparent)]
    Record(#[from] MalformedResult),
}

/// Parses a success body from the screening service into ranked results.
pub fn ingest(body: &[u8]) -> Result<Vec<ScreeningResult>, MalformedResponse> {
    let records: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| MalformedResponse::NotAList(e.to_string()))?;
    Ok(ingest_records(records)?)
}

/// Validates each record, fills in missing ids from arrival order and ranks
/// the results best-first.
fn ingest_records(records: Vec<Value>) -> Result<Vec<ScreeningResult>, MalformedResult> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut results = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let record: WireResult = serde_json::from_value(record)
            .map_err(|e| MalformedResult::new(index, e.to_string()))?;
        let result = validate_record(index, record)?;
        if !seen.insert(result.id.clone()) {
            return Err(MalformedResult::new(
                index,
                format!("duplicate id {}", result.id),
            ));
        }
        results.push(result);
    }

    Ok(rank(results))
}

fn validate_record(index: usize, record: WireResult) -> Result<ScreeningResult, MalformedResult> {
    let name = record
        .name
        .ok_or_else(|| MalformedResult::new(index, "missing `name`"))?;
    let matched_skills = record
        .matched_skills
        .ok_or_else(|| MalformedResult::new(index, "missing `matched_skills`"))?;
    let semantic_similarity = require_ratio(index, "semantic_similarity", record.semantic_similarity)?;
    let skill_match_ratio = require_ratio(index, "skill_match_ratio", record.skill_match_ratio)?;
    let final_score = record
        .final_score
        .ok_or_else(|| MalformedResult::new(index, "missing `final_score`"))?;
    if !final_score.is_finite() {
        return Err(MalformedResult::new(index, "`final_score` is not a finite number"));
    }

    Ok(ScreeningResult {
        id: record.id.unwrap_or(ResultId::Number(index as u64 + 1)),
        name,
        matched_skills,
        semantic_similarity,
        skill_match_ratio,
        final_score,
    })
}

fn require_ratio(index: usize, field: &str, value: Option<f64>) -> Result<f64, MalformedResult> {
    let value = value.ok_or_else(|| MalformedResult::new(index, format!("missing `{field}`")))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(MalformedResult::new(
            index,
            format!("`{field}` = {value} is outside 0..=1"),
        ));
    }
    Ok(value)
}
