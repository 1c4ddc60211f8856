use regex::Regex;
use std::sync::LazyLock;

pub const REJECTION_MESSAGE: &str =
    "Only SELECT, SHOW, DESCRIBE, and EXPLAIN queries are allowed in practice mode";

// Matching rule: the trimmed statement must open with an allowed keyword
// followed by whitespace or end of input. A lone keyword passes the gate and
// fails at the store instead.
static ALLOWED_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(SELECT|SHOW|DESCRIBE|EXPLAIN)(\s|$)").expect("allow-list pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Rejected(String),
}

/// Classifies a submitted statement by its leading keyword only. This is a
/// best-effort filter for a teaching sandbox, not a security boundary: the
/// remainder of the statement is not parsed, so subqueries, multi-clause
/// statements, and anything the store accepts past the first keyword run
/// unchecked. Callers must not rely on it to isolate untrusted tenants.
pub fn classify(text: &str) -> Verdict {
    if ALLOWED_KEYWORDS.is_match(text.trim()) {
        Verdict::Allowed
    } else {
        Verdict::Rejected(REJECTION_MESSAGE.to_string())
    }
}
