use once_cell::sync::Lazy;
use regex::Regex;

/// One flat markup event. Tag names are case-sensitive; attribute values
/// may be single- or double-quoted in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open {
        name: String,
        attrs: Vec<(String, String)>,
    },
    SelfClose {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Close {
        name: String,
    },
    Text(String),
}

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)([^<>]*?)(/?)>").unwrap());
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:'([^']*)'|"([^"]*)")"#).unwrap()
});

/// Looks up an attribute value by name in a scanned attribute list.
pub fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Tokenizes a markup fragment into a flat event stream in a single
/// forward pass. Anything that does not scan as a tag is passed through
/// as text; the scanner itself never fails.
pub fn scan(input: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut cursor = 0;

    for m in TAG_RE.find_iter(input) {
        if m.start() > cursor {
            push_text(&mut events, &input[cursor..m.start()]);
        }
        cursor = m.end();

        let caps = TAG_RE.captures(m.as_str()).expect("find_iter match");
        let closing = !caps[1].is_empty();
        let name = caps[2].to_string();
        let attrs = parse_attrs(&caps[3]);
        let self_closing = !caps[4].is_empty();

        if closing {
            events.push(Event::Close { name });
        } else if self_closing {
            events.push(Event::SelfClose { name, attrs });
        } else {
            events.push(Event::Open { name, attrs });
        }
    }

    if cursor < input.len() {
        push_text(&mut events, &input[cursor..]);
    }

    log::debug!("scanned {} markup events", events.len());
    events
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            (caps[1].to_string(), value.to_string())
        })
        .collect()
}

fn push_text(events: &mut Vec<Event>, chunk: &str) {
    if !chunk.is_empty() {
        events.push(Event::Text(chunk.to_string()));
    }
}
