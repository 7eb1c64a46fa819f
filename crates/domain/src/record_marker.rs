use fancy_regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static CNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+IN\s+CNAME\s+").expect("valid CNAME marker pattern"));
static MX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+IN\s+MX\s+").expect("valid MX marker pattern"));
static SRV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+IN\s+SRV\s+").expect("valid SRV marker pattern"));

/// Record types whose target field must be a period-terminated FQDN.
///
/// A marker is present when the line contains the class token `IN` followed
/// by the record keyword, with at least one whitespace character before
/// `IN`, between the two tokens, and after the keyword. Matching is
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordTypeMarker {
    Cname,
    Mx,
    Srv,
}

impl RecordTypeMarker {
    pub const ALL: [RecordTypeMarker; 3] = [
        RecordTypeMarker::Cname,
        RecordTypeMarker::Mx,
        RecordTypeMarker::Srv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordTypeMarker::Cname => "CNAME",
            RecordTypeMarker::Mx => "MX",
            RecordTypeMarker::Srv => "SRV",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            RecordTypeMarker::Cname => &CNAME_PATTERN,
            RecordTypeMarker::Mx => &MX_PATTERN,
            RecordTypeMarker::Srv => &SRV_PATTERN,
        }
    }

    /// Returns true when this marker appears anywhere in `line`.
    pub fn is_present_in(&self, line: &str) -> bool {
        self.pattern().is_match(line).unwrap_or(false)
    }

    /// First marker (in CNAME, MX, SRV order) present in `line`.
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.is_present_in(line))
    }
}

impl fmt::Display for RecordTypeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordTypeMarker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CNAME" => Ok(RecordTypeMarker::Cname),
            "MX" => Ok(RecordTypeMarker::Mx),
            "SRV" => Ok(RecordTypeMarker::Srv),
            _ => Err(format!("Unsupported record type marker: {}", s)),
        }
    }
}
