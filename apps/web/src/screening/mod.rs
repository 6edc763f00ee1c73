//! Results processing — everything the results view derives from a ResultSet.
//!
//! All operations borrow the stored results and return new views; nothing here
//! mutates a ResultSet once it has been ingested.

pub mod bands;
pub mod export;
pub mod filter;
pub mod handlers;
pub mod ranking;
pub mod summary;

pub use bands::ScoreBand;
pub use export::{to_csv, CSV_FILE_NAME, UTF8_BOM};
pub use filter::filter;
pub use ranking::{paginate, rank, sort_view, SortDirection, SortKey};
pub use summary::{summarize, Summary};
