use serde_json::Value;
use tracing::warn;

/// Reply substituted when the provider response carries no usable text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response";

/// One step into a JSON tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

/// A fixed path into a JSON tree where every segment is optional.
///
/// Resolution stops at the first segment that is absent or applied to the
/// wrong kind of node (a key on an array, an index on an object, ...).
#[derive(Debug, Clone, Copy)]
pub struct JsonPath {
    segments: &'static [PathSegment],
}

impl JsonPath {
    pub const fn new(segments: &'static [PathSegment]) -> Self {
        Self { segments }
    }

    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match segment {
                PathSegment::Key(key) => node.get(*key),
                PathSegment::Index(index) => node.get(*index),
            })
    }

    /// Resolves to a non-empty string, or `None`.
    pub fn resolve_text<'v>(&self, root: &'v Value) -> Option<&'v str> {
        self.resolve(root)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// `candidates[0].content.parts[0].text`
pub const CANDIDATE_TEXT_PATH: JsonPath = JsonPath::new(&[
    PathSegment::Key("candidates"),
    PathSegment::Index(0),
    PathSegment::Key("content"),
    PathSegment::Key("parts"),
    PathSegment::Index(0),
    PathSegment::Key("text"),
]);

/// Pulls the first candidate's first text part out of a provider response,
/// substituting [`NO_RESPONSE_PLACEHOLDER`] when nothing usable is found.
pub fn extract_reply_text(response: &Value) -> String {
    match CANDIDATE_TEXT_PATH.resolve_text(response) {
        Some(text) => text.to_string(),
        None => {
            warn!("Provider response had no candidate text, replying with placeholder");
            NO_RESPONSE_PLACEHOLDER.to_string()
        }
    }
}
