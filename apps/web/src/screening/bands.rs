use serde::Serialize;

/// Qualitative label for a score, used to colour cells and summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Weak,
    Poor,
}

impl ScoreBand {
    /// Bands for the 0–1 ratio columns (semantic similarity, skill match).
    pub fn for_ratio(value: f64) -> Self {
        if value >= 0.8 {
            ScoreBand::Excellent
        } else if value >= 0.6 {
            ScoreBand::Good
        } else if value >= 0.4 {
            ScoreBand::Fair
        } else if value >= 0.2 {
            ScoreBand::Weak
        } else {
            ScoreBand::Poor
        }
    }

    pub fn for_final_score(value: f64) -> Self {
        if value >= 0.75 {
            ScoreBand::Excellent
        } else if value >= 0.6 {
            ScoreBand::Good
        } else if value >= 0.4 {
            ScoreBand::Weak
        } else {
            ScoreBand::Poor
        }
    }

    /// Average score card: good at 0.6 and above, otherwise weak.
    pub fn for_average(value: Option<f64>) -> Option<Self> {
        value.map(|v| if v >= 0.6 { ScoreBand::Good } else { ScoreBand::Weak })
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "band-excellent",
            ScoreBand::Good => "band-good",
            ScoreBand::Fair => "band-fair",
            ScoreBand::Weak => "band-weak",
            ScoreBand::Poor => "band-poor",
        }
    }
}
