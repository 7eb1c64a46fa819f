use crate::record_marker::RecordTypeMarker;
use std::fmt;

/// A single line of zone-file text without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneLine(String);

impl ZoneLine {
    /// Builds a line from raw input, dropping any trailing `\r` / `\n`.
    pub fn new(raw: impl Into<String>) -> Self {
        let mut text = raw.into();
        let trimmed_len = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(trimmed_len);
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Byte offset of the first unescaped `;` outside a quoted string.
    pub fn comment_start(&self) -> Option<usize> {
        comment_start(&self.0)
    }

    /// Splits the line into its data portion and its comment suffix.
    ///
    /// The suffix starts at the comment delimiter and is empty when the line
    /// carries no comment.
    pub fn split_comment(&self) -> (&str, &str) {
        match self.comment_start() {
            Some(idx) => self.0.split_at(idx),
            None => (self.0.as_str(), ""),
        }
    }

    /// Record type named in the data portion. Markers inside the comment
    /// are ignored.
    pub fn record_type(&self) -> Option<RecordTypeMarker> {
        RecordTypeMarker::detect(self.split_comment().0)
    }

    pub fn has_marker(&self, marker: RecordTypeMarker) -> bool {
        marker.is_present_in(self.split_comment().0)
    }

    /// True when the record target is origin-relative shorthand.
    ///
    /// The last whitespace-separated token of the data portion decides: a
    /// bare `@` or any token ending in `@` (such as `target.@`) counts.
    /// A leading `@` owner name does not.
    pub fn is_origin_relative(&self) -> bool {
        let (data, _) = self.split_comment();
        data.split_whitespace()
            .last()
            .is_some_and(|token| token.ends_with('@'))
    }
}

impl From<&str> for ZoneLine {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ZoneLine {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for ZoneLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn comment_start(text: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => return Some(idx),
            _ => {}
        }
    }

    None
}
