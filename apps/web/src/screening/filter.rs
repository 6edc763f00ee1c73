use crate::models::screening::ScreeningResult;

/// Returns every result whose name or any matched skill contains `query`,
/// ignoring case. An empty query keeps the whole slice. Relative order is
/// always preserved.
pub fn filter<'a>(results: &'a [ScreeningResult], query: &str) -> Vec<&'a ScreeningResult> {
    if query.is_empty() {
        return results.iter().collect();
    }

    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r
                    .matched_skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::screening::ResultId;

    fn make_result(id: u64, name: &str, skills: &[&str]) -> ScreeningResult {
        ScreeningResult {
            id: ResultId::Number(id),
            name: name.to_string(),
            matched_skills: skills.iter().map(|s| s.to_string()).collect(),
            semantic_similarity: 0.5,
            skill_match_ratio: 0.5,
            final_score: 0.5,
        }
    }

    fn sample() -> Vec<ScreeningResult> {
        vec![
            make_result(1, "alice_resume.pdf", &["Python", "SQL"]),
            make_result(2, "bob_cv.docx", &["Rust", "Kubernetes"]),
            make_result(3, "carol.pdf", &[]),
            make_result(4, "dave_python_dev.pdf", &["Go"]),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let results = sample();
        let view = filter(&results, "");
        let ids: Vec<_> = view.iter().map(|r| r.id.clone()).collect();
        assert_eq!(
            ids,
            results.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let results = sample();
        let view = filter(&results, "BOB");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "bob_cv.docx");
    }

    #[test]
    fn test_matches_skill_substring() {
        let results = sample();
        let view = filter(&results, "kube");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, ResultId::Number(2));
    }

    #[test]
    fn test_name_or_skill_match_preserves_order() {
        let results = sample();
        let view = filter(&results, "python");
        let names: Vec<_> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alice_resume.pdf", "dave_python_dev.pdf"]);
    }

    #[test]
    fn test_empty_skills_never_match_non_empty_query() {
        let results = sample();
        let view = filter(&results, "sql");
        assert!(view.iter().all(|r| r.name != "carol.pdf"));
    }

    #[test]
    fn test_no_match_returns_empty_view() {
        let results = sample();
        assert!(filter(&results, "haskell").is_empty());
    }

    #[test]
    fn test_filtered_view_is_ordered_subset() {
        let results = sample();
        for query in ["", "a", ".pdf", "o", "zzz", "R"] {
            let view = filter(&results, query);
            let mut cursor = 0;
            for item in view {
                let pos = results[cursor..]
                    .iter()
                    .position(|r| r.id == item.id)
                    .expect("filtered item must appear later in the source");
                cursor += pos + 1;
            }
        }
    }
}
