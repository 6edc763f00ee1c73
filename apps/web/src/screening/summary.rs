use serde::Serialize;

use crate::models::screening::ScreeningResult;

/// Aggregate figures shown above the results table.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    /// `None` when there are no results.
    pub average_score: Option<f64>,
    pub top_result: Option<ScreeningResult>,
}

/// Counts the results, averages `final_score` and picks the best match.
/// Ties on the top score go to the earliest result.
pub fn summarize<'a, I>(results: I) -> Summary
where
    I: IntoIterator<Item = &'a ScreeningResult>,
{
    let mut count = 0usize;
    let mut total = 0.0f64;
    let mut top: Option<&ScreeningResult> = None;

    for result in results {
        count += 1;
        total += result.final_score;
        if top.map_or(true, |best| result.final_score > best.final_score) {
            top = Some(result);
        }
    }

    Summary {
        count,
        average_score: (count > 0).then(|| total / count as f64),
        top_result: top.cloned(),
    }
}
