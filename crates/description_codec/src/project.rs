use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use markup_scanner::{attr_value, scan, Event};

use crate::paths::description_path_for_project;
use crate::reader::{is_content_text, TagStack};
use crate::{today, DEFAULT_CREATOR};

/// A project's human-authored description: a title, ordered content lines
/// (empty strings are blank-line breaks), and creation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescription {
    pub project_name: String,
    pub creator: String,
    pub create_date: String,
    pub title: String,
    pub content: Vec<String>,
}

impl ProjectDescription {
    /// Builds a description from caller-supplied fields. A missing creator
    /// falls back to the default author; a missing date becomes today.
    pub fn new(
        project_name: &str,
        title: &str,
        content: Vec<String>,
        creator: Option<String>,
        create_date: Option<String>,
    ) -> Self {
        Self {
            project_name: project_name.to_string(),
            creator: creator.unwrap_or_else(|| DEFAULT_CREATOR.to_string()),
            create_date: create_date.unwrap_or_else(today),
            title: title.to_string(),
            content,
        }
    }

    /// Parses a markup fragment into a description. Malformed or
    /// out-of-context text is dropped; parsing never fails. Fields absent
    /// from the fragment take the constructor defaults.
    pub fn parse(project_name: &str, markup: &str) -> Self {
        let mut stack = TagStack::new();
        let mut title: Option<String> = None;
        let mut creator: Option<String> = None;
        let mut create_date: Option<String> = None;
        let mut content: Vec<String> = Vec::new();

        for event in scan(markup) {
            match event {
                Event::Open { name, attrs } => stack.push(name, attrs),
                Event::Close { .. } => stack.pop(),
                // A tag that opens and immediately closes marks a blank line.
                Event::SelfClose { .. } => content.push(String::new()),
                Event::Text(text) => {
                    if !is_content_text(&text) {
                        continue;
                    }
                    match stack.top() {
                        Some(("b", attrs)) if attr_value(attrs, "id") == Some("title") => {
                            title = Some(text)
                        }
                        Some(("span", attrs)) if attr_value(attrs, "id") == Some("desc") => {
                            content.push(text)
                        }
                        Some(("creator", _)) => creator = Some(text),
                        Some(("date", _)) => create_date = Some(text),
                        _ => {}
                    }
                }
            }
        }

        log::debug!(
            "parsed project description '{}': {} content line(s)",
            project_name,
            content.len()
        );

        Self::new(
            project_name,
            title.as_deref().unwrap_or(""),
            content,
            creator,
            create_date,
        )
    }

    /// Reads and parses `<root>/<name>/DESCRIPTION`.
    pub fn from_project(root: &Path, project_name: &str) -> Result<Self> {
        let path = description_path_for_project(root, project_name);
        let markup = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read description {}", path.display()))?;
        Ok(Self::parse(project_name, &markup))
    }

    /// Serializes the description as a markup fragment. Non-empty content
    /// lines end with a plain `<br>` the reader ignores; only deliberate
    /// blank lines become the bare `<br/>` the reader turns back into an
    /// empty entry.
    pub fn to_markup(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("<b id='title'>{}</b>", self.title));
        for line in &self.content {
            if line.is_empty() {
                lines.push("<br/>".to_string());
            } else {
                lines.push(format!("<span id='desc'>{}</span><br>", line));
            }
        }
        lines.push(creation_line::creation_line(&self.creator, &self.create_date));
        lines.join("\n")
    }

    /// Overwrites `<root>/<name>/DESCRIPTION` with the serialized form.
    pub fn write_to_project(&self, root: &Path) -> Result<()> {
        let path = description_path_for_project(root, &self.project_name);
        fs::write(&path, self.to_markup())
            .with_context(|| format!("Failed to write description {}", path.display()))
    }
}
