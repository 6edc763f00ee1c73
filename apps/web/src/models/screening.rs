use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a result within its set. The screening service may send
/// either a number or a string; when it sends nothing the 1-based arrival
/// index is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(n) => write!(f, "{n}"),
            ResultId::Text(s) => f.write_str(s),
        }
    }
}

/// One resume's match data against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub id: ResultId,
    pub name: String,
    pub matched_skills: Vec<String>,
    pub semantic_similarity: f64, // 0.0 – 1.0
    pub skill_match_ratio: f64,   // 0.0 – 1.0
    pub final_score: f64,
}

/// The ranked results of one submission plus the job description that
/// produced them. Never mutated once stored.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    pub id: Uuid,
    pub job_description: String,
    pub results: Vec<ScreeningResult>,
    pub created_at: DateTime<Utc>,
}

impl ResultSet {
    pub fn new(job_description: String, results: Vec<ScreeningResult>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_description,
            results,
            created_at: Utc::now(),
        }
    }
}
