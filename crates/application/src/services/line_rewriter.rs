use zonefix_domain::{RecordTypeMarker, ZoneLine};

const ORIGIN_SUFFIX: &str = ".@";

/// Result of rewriting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    pub line: ZoneLine,
    /// True when a correction rule fired. Line-terminator stripping alone
    /// does not count.
    pub changed: bool,
}

impl RewrittenLine {
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    pub fn into_string(self) -> String {
        self.line.into_string()
    }
}

/// Applies the CNAME/MX/SRV correction rules to single zone-file lines.
///
/// Rules run in a fixed order on each line:
/// 1. trailing `\r` / `\n` are stripped
/// 2. the record-type markers are detected on the data portion of the
///    stripped line, so a marker inside a comment does not count
/// 3. for CNAME, MX and SRV lines whose target is not origin-relative, a
///    period is appended to the last data character unless one is already
///    there; whitespace and comment after it are kept
/// 4. for SRV lines every `.@` is removed
///
/// Lines without a marker come back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRewriter;

impl LineRewriter {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&self, raw: &str) -> RewrittenLine {
        let line = ZoneLine::new(raw);

        if line.record_type().is_none() {
            return RewrittenLine {
                line,
                changed: false,
            };
        }
        let is_srv = line.has_marker(RecordTypeMarker::Srv);

        let mut text = match terminate_target(&line) {
            Some(terminated) => terminated,
            None => line.as_str().to_string(),
        };

        if is_srv {
            text = text.replace(ORIGIN_SUFFIX, "");
        }

        let changed = text != line.as_str();
        RewrittenLine {
            line: ZoneLine::new(text),
            changed,
        }
    }
}

/// Inserts the terminating period, or `None` when the line needs none.
fn terminate_target(line: &ZoneLine) -> Option<String> {
    if line.is_origin_relative() {
        return None;
    }

    let (data, comment) = line.split_comment();
    let body = data.trim_end();
    if body.is_empty() || body.ends_with('.') {
        return None;
    }

    let spacing = &data[body.len()..];
    Some(format!("{body}.{spacing}{comment}"))
}

pub fn rewrite_line(raw: &str) -> String {
    LineRewriter.rewrite(raw).into_string()
}

/// Lazily rewrites a sequence of lines, preserving order and count.
pub fn repair_lines<I>(lines: I) -> impl Iterator<Item = RewrittenLine>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let rewriter = LineRewriter::new();
    lines
        .into_iter()
        .map(move |line| rewriter.rewrite(line.as_ref()))
}
