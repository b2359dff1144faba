// crates/description_codec/src/reader.rs

/// Stack of currently-open (tag name, attribute list) frames. Pushed on
/// open, popped unconditionally on close; only the top frame decides which
/// field a text chunk populates.
pub(crate) struct TagStack {
    frames: Vec<(String, Vec<(String, String)>)>,
}

impl TagStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, name: String, attrs: Vec<(String, String)>) {
        self.frames.push((name, attrs));
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn top(&self) -> Option<(&str, &[(String, String)])> {
        self.frames
            .last()
            .map(|(name, attrs)| (name.as_str(), attrs.as_slice()))
    }
}

/// Text with no alphanumeric character is an incidental whitespace node
/// between tags, not content. Alphanumeric rather than alphabetic so
/// numeric version labels like "1.0" survive.
pub(crate) fn is_content_text(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric())
}
