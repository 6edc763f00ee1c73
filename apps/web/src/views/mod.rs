//! Page templates and the view models they render.
//!
//! Templates only loop over and print prepared strings; every number is
//! formatted here so the markup stays free of logic.

use anyhow::{Context, Result};
use askama::Template;
use serde::{Deserialize, Serialize};

use crate::models::screening::{ResultSet, ScreeningResult};
use crate::screening::export::format_percent;
use crate::screening::ranking::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::screening::{filter, paginate, sort_view, summarize, ScoreBand, SortDirection, SortKey};
use crate::theme::ColorMode;
use crate::upload::validation::ACCEPTED_EXTENSIONS;

/// Query string of the results page. Also used to build its links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub dir: SortDirection,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ResultsQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort: SortKey::default(),
            dir: SortDirection::default(),
            page: first_page(),
            page_size: default_page_size(),
        }
    }
}

impl ResultsQuery {
    fn href(&self, set_id: &str) -> Result<String> {
        let query = serde_urlencoded::to_string(self).context("failed to encode results query")?;
        Ok(format!("/results/{set_id}?{query}"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Upload page
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    Validation,
    Upstream,
    Malformed,
}

impl UploadErrorKind {
    fn css_class(self) -> &'static str {
        match self {
            UploadErrorKind::Validation => "alert-validation",
            UploadErrorKind::Upstream => "alert-upstream",
            UploadErrorKind::Malformed => "alert-malformed",
        }
    }
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub theme: &'static str,
    pub toggle_label: String,
    pub redirect_to: String,
    pub job_description: String,
    pub error: Option<String>,
    pub error_class: &'static str,
    pub retryable: bool,
    pub accept: String,
    pub max_file_size: String,
}

impl UploadPage {
    pub fn new(mode: ColorMode, max_file_bytes: usize) -> Self {
        Self {
            theme: mode.as_str(),
            toggle_label: toggle_label(mode),
            redirect_to: "/upload".to_string(),
            job_description: String::new(),
            error: None,
            error_class: "",
            retryable: false,
            accept: ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(","),
            max_file_size: format_size(max_file_bytes),
        }
    }

    /// Re-renders the form after a failed submission, keeping what was typed.
    pub fn with_error(
        mut self,
        job_description: String,
        kind: UploadErrorKind,
        message: String,
    ) -> Self {
        self.job_description = job_description;
        self.error = Some(message);
        self.error_class = kind.css_class();
        self.retryable = kind != UploadErrorKind::Validation;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Results page
// ────────────────────────────────────────────────────────────────────────────

pub struct BestMatchView {
    pub name: String,
    pub score: String,
}

pub struct ColumnHeader {
    pub label: &'static str,
    /// `None` for columns that cannot be sorted.
    pub href: Option<String>,
    pub indicator: &'static str,
}

pub struct RowView {
    pub name: String,
    pub skills: Vec<String>,
    pub semantic: String,
    pub semantic_class: &'static str,
    pub skill: String,
    pub skill_class: &'static str,
    pub score: String,
    pub score_class: &'static str,
}

impl RowView {
    fn from_result(result: &ScreeningResult) -> Self {
        Self {
            name: result.name.clone(),
            skills: result.matched_skills.clone(),
            semantic: format_percent(result.semantic_similarity),
            semantic_class: ScoreBand::for_ratio(result.semantic_similarity).css_class(),
            skill: format_percent(result.skill_match_ratio),
            skill_class: ScoreBand::for_ratio(result.skill_match_ratio).css_class(),
            score: format!("{:.2}", result.final_score),
            score_class: ScoreBand::for_final_score(result.final_score).css_class(),
        }
    }
}

pub struct PagerView {
    pub number: usize,
    pub total_pages: usize,
    pub previous: Option<String>,
    pub next: Option<String>,
}

pub struct PageSizeLink {
    pub size: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage {
    pub theme: &'static str,
    pub toggle_label: String,
    pub redirect_to: String,
    pub set_id: String,
    pub job_description: String,
    pub total: usize,
    pub average: String,
    pub average_class: &'static str,
    pub best: Option<BestMatchView>,
    pub query: String,
    pub sort: &'static str,
    pub dir: &'static str,
    pub page_size: usize,
    pub matching: usize,
    pub shown: usize,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
    pub pager: PagerView,
    pub page_sizes: Vec<PageSizeLink>,
    pub export_href: String,
}

const COLUMNS: [(&str, Option<SortKey>); 5] = [
    ("Resume Name", Some(SortKey::Name)),
    ("Matched Skills", None),
    ("Semantic Match", Some(SortKey::SemanticSimilarity)),
    ("Skill Match", Some(SortKey::SkillMatch)),
    ("Score", Some(SortKey::FinalScore)),
];

impl ResultsPage {
    /// Summary cards describe the whole set; the table shows the filtered,
    /// sorted and paged view.
    pub fn build(set: &ResultSet, params: &ResultsQuery, mode: ColorMode) -> Result<Self> {
        let set_id = set.id.to_string();
        let summary = summarize(&set.results);

        let mut view = filter(&set.results, &params.q);
        sort_view(&mut view, params.sort, params.dir);
        let page = paginate(&view, params.page, params.page_size);

        let columns = COLUMNS
            .iter()
            .map(|&(label, key)| column_header(&set_id, params, label, key))
            .collect::<Result<Vec<_>>>()?;

        let page_link = |number: usize| {
            ResultsQuery {
                page: number,
                page_size: page.size,
                ..params.clone()
            }
            .href(&set_id)
        };
        let pager = PagerView {
            number: page.number,
            total_pages: page.total_pages,
            previous: page
                .has_previous()
                .then(|| page_link(page.number - 1))
                .transpose()?,
            next: page
                .has_next()
                .then(|| page_link(page.number + 1))
                .transpose()?,
        };

        let page_sizes = PAGE_SIZES
            .iter()
            .map(|&size| {
                Ok(PageSizeLink {
                    size,
                    href: ResultsQuery {
                        page: 1,
                        page_size: size,
                        ..params.clone()
                    }
                    .href(&set_id)?,
                    current: size == page.size,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let export_href = if params.q.is_empty() {
            format!("/results/{set_id}/export.csv")
        } else {
            let query = serde_urlencoded::to_string(&[("q", params.q.as_str())])
                .context("failed to encode export query")?;
            format!("/results/{set_id}/export.csv?{query}")
        };

        Ok(Self {
            theme: mode.as_str(),
            toggle_label: toggle_label(mode),
            redirect_to: params.href(&set_id)?,
            job_description: set.job_description.clone(),
            total: summary.count,
            average: summary
                .average_score
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_else(|| "N/A".to_string()),
            average_class: ScoreBand::for_average(summary.average_score)
                .map(ScoreBand::css_class)
                .unwrap_or(""),
            best: summary.top_result.map(|top| BestMatchView {
                score: format!("{:.2}", top.final_score),
                name: top.name,
            }),
            query: params.q.clone(),
            sort: params.sort.as_str(),
            dir: params.dir.as_str(),
            page_size: page.size,
            matching: page.total_items,
            shown: page.items.len(),
            columns,
            rows: page.items.iter().map(|r| RowView::from_result(r)).collect(),
            pager,
            page_sizes,
            export_href,
            set_id,
        })
    }
}

/// Clicking the active column flips its direction; clicking another column
/// sorts it descending, which is how the score column starts out.
fn column_header(
    set_id: &str,
    params: &ResultsQuery,
    label: &'static str,
    key: Option<SortKey>,
) -> Result<ColumnHeader> {
    let Some(key) = key else {
        return Ok(ColumnHeader {
            label,
            href: None,
            indicator: "",
        });
    };

    let active = params.sort == key;
    let dir = if active {
        params.dir.flipped()
    } else {
        SortDirection::Desc
    };
    let href = ResultsQuery {
        sort: key,
        dir,
        page: 1,
        ..params.clone()
    }
    .href(set_id)?;

    Ok(ColumnHeader {
        label,
        href: Some(href),
        indicator: match (active, params.dir) {
            (false, _) => "",
            (true, SortDirection::Asc) => " ▲",
            (true, SortDirection::Desc) => " ▼",
        },
    })
}

fn toggle_label(mode: ColorMode) -> String {
    format!("Switch to {} mode", mode.opposite().as_str())
}

/// `5242880` → `5 MB`
fn format_size(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{} KB", bytes.div_ceil(1024))
    }
}
