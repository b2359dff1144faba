use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use markup_scanner::{attr_value, scan, Event};

use crate::paths::description_path_for_project_version;
use crate::reader::{is_content_text, TagStack};
use crate::{today, DEFAULT_CREATOR};

/// Version label a parsed fragment falls back to when no `<ver>` tag is
/// present; matches the floor used when scanning version directories.
const FALLBACK_VERSION: &str = "1.0";

/// A version directory's description: a version label, ordered to-do and
/// done lists, and creation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescription {
    pub project_name: String,
    pub creator: String,
    pub create_date: String,
    pub version: String,
    pub todo: Vec<String>,
    pub done: Vec<String>,
}

impl VersionDescription {
    /// Builds a description from caller-supplied fields. A missing creator
    /// falls back to the default author; a missing date becomes today.
    pub fn new(
        project_name: &str,
        version: &str,
        todo: Vec<String>,
        done: Vec<String>,
        creator: Option<String>,
        create_date: Option<String>,
    ) -> Self {
        Self {
            project_name: project_name.to_string(),
            creator: creator.unwrap_or_else(|| DEFAULT_CREATOR.to_string()),
            create_date: create_date.unwrap_or_else(today),
            version: version.to_string(),
            todo,
            done,
        }
    }

    /// Replaces the version label. The write path is derived from this
    /// label, so callers rewriting a copied-forward description set the new
    /// label first.
    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    /// Parses a markup fragment into a description. An item belongs to
    /// whichever list was opened most recently when it appeared; malformed
    /// or out-of-context text is dropped and parsing never fails.
    pub fn parse(project_name: &str, markup: &str) -> Self {
        let mut stack = TagStack::new();
        let mut version: Option<String> = None;
        let mut creator: Option<String> = None;
        let mut create_date: Option<String> = None;
        let mut todo: Vec<String> = Vec::new();
        let mut done: Vec<String> = Vec::new();
        let mut active_list: Option<String> = None;

        for event in scan(markup) {
            match event {
                Event::Open { name, attrs } => {
                    if name == "ul" {
                        if let Some(id) = attr_value(&attrs, "id") {
                            active_list = Some(id.to_string());
                        }
                    }
                    stack.push(name, attrs);
                }
                Event::Close { .. } => stack.pop(),
                Event::SelfClose { .. } => {}
                Event::Text(text) => {
                    if !is_content_text(&text) {
                        continue;
                    }
                    match stack.top() {
                        Some(("ver", _)) => version = Some(text),
                        Some(("creator", _)) => creator = Some(text),
                        Some(("date", _)) => create_date = Some(text),
                        Some(("li", _)) => match active_list.as_deref() {
                            Some("todo") => todo.push(text),
                            Some("done") => done.push(text),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }

        log::debug!(
            "parsed version description '{}': {} todo, {} done",
            project_name,
            todo.len(),
            done.len()
        );

        Self::new(
            project_name,
            version.as_deref().unwrap_or(FALLBACK_VERSION),
            todo,
            done,
            creator,
            create_date,
        )
    }

    /// Reads and parses `<root>/<name>/<version_dir>/DESCRIPTION`.
    pub fn from_project_version(
        root: &Path,
        project_name: &str,
        version_dir: &str,
    ) -> Result<Self> {
        let path = description_path_for_project_version(root, project_name, version_dir);
        let markup = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read description {}", path.display()))?;
        Ok(Self::parse(project_name, &markup))
    }

    /// Serializes the description as a markup fragment, to-do list first,
    /// item order preserved.
    pub fn to_markup(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("<b>Version <ver>{}</ver></b>", self.version));
        for (status, items) in [("todo", &self.todo), ("done", &self.done)] {
            lines.push(format!("<ul id='{}'>", status));
            for item in items {
                lines.push(format!("<li>{}</li>", item));
            }
            lines.push("</ul>".to_string());
        }
        lines.push(creation_line::creation_line(&self.creator, &self.create_date));
        lines.join("\n")
    }

    /// Overwrites `<root>/<name>/<version>/DESCRIPTION` with the
    /// serialized form.
    pub fn write_to_project_version(&self, root: &Path) -> Result<()> {
        let path =
            description_path_for_project_version(root, &self.project_name, &self.version);
        fs::write(&path, self.to_markup())
            .with_context(|| format!("Failed to write description {}", path.display()))
    }
}
