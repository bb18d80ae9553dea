//! Query classification.
//!
//! Given a free-text query, decides whether it is syntactically an IPv4
//! literal, an IPv6 literal, or a domain name. The patterns are loose on
//! purpose and callers depend on that:
//!
//! - IPv4 octets are 1-3 digits with no range check ("999.999.999.999"
//!   classifies as IPv4)
//! - IPv6 must be the full eight-group form; "::" compression is not
//!   recognized
//! - the domain pattern is a substring match, so a domain-shaped fragment
//!   anywhere in the input counts
//!
//! Tightening any of these is a behavior change for callers and belongs in
//! its own change, not here.

use std::sync::LazyLock;

use regex::Regex;

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("valid regex"));

static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{1,4}(:[0-9A-Fa-f]{1,4}){7}$").expect("valid regex")
});

// Substring match on purpose: no ^...$ anchors.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}")
        .expect("valid regex")
});

/// Outcome of classifying a query string.
///
/// `Empty` is never produced by [`classify`] itself. The caller
/// special-cases empty input as a reset before classification, because an
/// empty submission means "back to the default display", not "invalid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationResult {
    /// Empty submission, accepted as a reset by the caller.
    Empty,
    /// Syntactically an IPv4 literal.
    IPv4,
    /// Syntactically a full-form IPv6 literal.
    IPv6,
    /// Contains a domain-shaped fragment.
    Domain,
    /// None of the patterns matched.
    Invalid,
}

impl ClassificationResult {
    /// Returns a short human-readable name for the classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationResult::Empty => "empty",
            ClassificationResult::IPv4 => "IPv4 address",
            ClassificationResult::IPv6 => "IPv6 address",
            ClassificationResult::Domain => "domain",
            ClassificationResult::Invalid => "invalid",
        }
    }

    /// True for the variants that may be sent to a provider.
    pub fn is_lookupable(&self) -> bool {
        !matches!(self, ClassificationResult::Invalid)
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a query string.
///
/// Pure and total: any input (including the empty string) yields a result,
/// never a panic. The empty string classifies as `Invalid`; treating it as a
/// reset is the caller's job.
///
/// Match order is IPv4, IPv6, Domain - IPv4 must run before Domain so that
/// digit-and-dot sequences are not swallowed by the substring domain match.
pub fn classify(input: &str) -> ClassificationResult {
    if IPV4_RE.is_match(input) {
        ClassificationResult::IPv4
    } else if IPV6_RE.is_match(input) {
        ClassificationResult::IPv6
    } else if DOMAIN_RE.is_match(input) {
        ClassificationResult::Domain
    } else {
        ClassificationResult::Invalid
    }
}
