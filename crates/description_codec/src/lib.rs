mod paths;
mod project;
mod reader;
mod version;

pub use paths::{description_path_for_project, description_path_for_project_version, DESCRIPTION_FILE};
pub use project::ProjectDescription;
pub use version::VersionDescription;

/// Fallback author recorded when no creator is supplied or parsed.
pub const DEFAULT_CREATOR: &str = "James Fowkes";

/// Today's date in the day-month-year form used by creation lines,
/// e.g. "08-Aug-14".
pub(crate) fn today() -> String {
    chrono::Local::now().format("%d-%b-%y").to_string()
}
