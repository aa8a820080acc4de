//! Field-path segment parsing
//!
//! A field path addresses a location inside a JSON tree: dotted segments,
//! each either a plain property name or `name[<index>]`. A standalone
//! `[<index>]` segment (empty name) indexes the current container directly,
//! which matters when a relative path starts inside an array.

/// One parsed path segment: a property name plus optional array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: String,
    pub index: Option<usize>,
}

/// Parse one segment.
///
/// Recognizes `name[<digits>]` with the closing bracket exactly at the end
/// and at least one digit between the brackets; an empty name is the
/// standalone `[<digits>]` form. Anything else, including malformed bracket
/// syntax, degrades to a literal property name. Config files are
/// user-authored, so a typo must never panic the caller; only traversal can
/// fail, and it fails soft.
pub fn parse_segment(text: &str) -> PathSegment {
    if let Some(open) = text.find('[') {
        if text.ends_with(']') && open < text.len() - 1 {
            let digits = &text[open + 1..text.len() - 1];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(index) = digits.parse::<usize>() {
                    return PathSegment {
                        name: text[..open].to_string(),
                        index: Some(index),
                    };
                }
            }
        }
    }
    PathSegment {
        name: text.to_string(),
        index: None,
    }
}

/// Split a path on `.` and parse each segment in order.
///
/// Built fresh on every write/read call; segments are never cached.
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    path.split('.').map(parse_segment).collect()
}
