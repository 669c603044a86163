//! hotdaily core library - renders a dated archive of AI hot-topic reports as a website

// Invariants enforced in this crate:
// - Report files are read-only input; nothing here writes to the data directory
// - Item order is the file order, never re-sorted
// - Pages are pure functions of config + loaded data
// - Missing or malformed reports degrade to a placeholder view, never a hard error

pub mod archive;
pub mod calendar;
pub mod config;
pub mod dates;
pub mod html;
pub mod pages;
pub mod report;
pub mod routes;
pub mod server;
pub mod site;
pub mod translate;

pub use archive::{build_index, latest_report, load_report, ArchiveIndex, ReportStatus};
pub use calendar::YearMonth;
pub use config::ResolvedConfig;
pub use report::{Item, Report};
pub use routes::Routes;
pub use server::{create_router, AppState};
pub use site::{build_site, BuildSummary};
