use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::screening::ScreeningResult;

pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Columns the results table can be ordered by. Matched skills is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    SemanticSimilarity,
    SkillMatch,
    #[default]
    FinalScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::SemanticSimilarity => "semantic_similarity",
            SortKey::SkillMatch => "skill_match",
            SortKey::FinalScore => "final_score",
        }
    }

    fn compare(self, a: &ScreeningResult, b: &ScreeningResult) -> Ordering {
        match self {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::SemanticSimilarity => a.semantic_similarity.total_cmp(&b.semantic_similarity),
            SortKey::SkillMatch => a.skill_match_ratio.total_cmp(&b.skill_match_ratio),
            SortKey::FinalScore => a.final_score.total_cmp(&b.final_score),
        }
    }
}

/// Orders results best-first by `final_score`. Equal scores keep their
/// arrival order.
pub fn rank(mut results: Vec<ScreeningResult>) -> Vec<ScreeningResult> {
    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    results
}

/// Stable column sort over a borrowed view.
pub fn sort_view(view: &mut [&ScreeningResult], key: SortKey, direction: SortDirection) {
    view.sort_by(|a, b| match direction {
        SortDirection::Asc => key.compare(a, b),
        SortDirection::Desc => key.compare(b, a),
    });
}

/// One page of a view, with enough context to render pager links.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a ScreeningResult>,
    /// 1-based.
    pub number: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slices a view into pages. Unknown page sizes fall back to the default and
/// out-of-range page numbers clamp to the nearest valid page.
pub fn paginate<'a>(view: &[&'a ScreeningResult], page: usize, size: usize) -> Page<'a> {
    let size = if PAGE_SIZES.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    };
    let total_items = view.len();
    let total_pages = total_items.div_ceil(size).max(1);
    let number = page.clamp(1, total_pages);
    let start = (number - 1) * size;
    let end = (start + size).min(total_items);

    Page {
        items: view[start..end].to_vec(),
        number,
        size,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::screening::ResultId;

    fn make(id: u64, name: &str, semantic: f64, skill: f64, final_score: f64) -> ScreeningResult {
        ScreeningResult {
            id: ResultId::Number(id),
            name: name.to_string(),
            matched_skills: vec![],
            semantic_similarity: semantic,
            skill_match_ratio: skill,
            final_score,
        }
    }

    fn ids(view: &[&ScreeningResult]) -> Vec<u64> {
        view.iter()
            .map(|r| match r.id {
                ResultId::Number(n) => n,
                ResultId::Text(_) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let ranked = rank(vec![
            make(1, "a", 0.1, 0.1, 0.5),
            make(2, "b", 0.1, 0.1, 0.9),
            make(3, "c", 0.1, 0.1, 0.5),
            make(4, "d", 0.1, 0.1, 0.7),
        ]);
        let order: Vec<_> = ranked.iter().collect();
        assert_eq!(ids(&order), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_view_by_name_ignores_case() {
        let results = vec![
            make(1, "charlie", 0.0, 0.0, 0.0),
            make(2, "Alice", 0.0, 0.0, 0.0),
            make(3, "bob", 0.0, 0.0, 0.0),
        ];
        let mut view: Vec<_> = results.iter().collect();
        sort_view(&mut view, SortKey::Name, SortDirection::Asc);
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_view_descending_keeps_ties_in_place() {
        let results = vec![
            make(1, "a", 0.3, 0.0, 0.0),
            make(2, "b", 0.8, 0.0, 0.0),
            make(3, "c", 0.3, 0.0, 0.0),
        ];
        let mut view: Vec<_> = results.iter().collect();
        sort_view(&mut view, SortKey::SemanticSimilarity, SortDirection::Desc);
        assert_eq!(ids(&view), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_view_by_skill_match_ascending() {
        let results = vec![
            make(1, "a", 0.0, 0.9, 0.0),
            make(2, "b", 0.0, 0.1, 0.0),
        ];
        let mut view: Vec<_> = results.iter().collect();
        sort_view(&mut view, SortKey::SkillMatch, SortDirection::Asc);
        assert_eq!(ids(&view), vec![2, 1]);
    }

    #[test]
    fn test_paginate_middle_and_last_pages() {
        let results: Vec<_> = (1..=12).map(|i| make(i, "r", 0.0, 0.0, 0.0)).collect();
        let view: Vec<_> = results.iter().collect();

        let first = paginate(&view, 1, 5);
        assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&view, 3, 5);
        assert_eq!(ids(&last.items), vec![11, 12]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_clamps_and_defaults() {
        let results: Vec<_> = (1..=3).map(|i| make(i, "r", 0.0, 0.0, 0.0)).collect();
        let view: Vec<_> = results.iter().collect();

        let page = paginate(&view, 99, 7);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 3);

        let page = paginate(&view, 0, 5);
        assert_eq!(page.number, 1);
    }

    #[test]
    fn test_paginate_empty_view_has_one_empty_page() {
        let page = paginate(&[], 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
