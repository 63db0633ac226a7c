//! A single pattern/template expansion rule.

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;

/// One expansion rule within a [`Link`](super::Link): a regex pattern applied
/// to the request path suffix and a URL template that captured groups are
/// substituted into.
///
/// Patterns are not implicitly anchored; a pattern author who wants anchoring
/// writes `^...$` themselves. Templates may reference capture groups both
/// positionally (`$1`) and by name (`$name`).
///
/// # Examples
///
/// ```
/// use golinks::domain::entities::Match;
///
/// let m = Match::new("^/a/(.*)$", "https://a.com/$1").unwrap();
/// assert_eq!(m.expand("/a/b/c").as_deref(), Some("https://a.com/b/c"));
/// assert!(m.expand("/x/y").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatch", into = "RawMatch")]
pub struct Match {
    pattern: Regex,
    template: String,
}

/// Wire shape of a [`Match`]; all validation happens in the `TryFrom` impl.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMatch {
    #[serde(default)]
    uri_pattern: Option<String>,
    #[serde(default)]
    url_template: Option<String>,
}

impl Match {
    /// Builds a match rule, validating both halves.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. [`ValidationError::InvalidPattern`] - pattern missing, empty, or not
    ///    a valid regex
    /// 2. [`ValidationError::InvalidTemplateUrl`] - template is not an
    ///    absolute URL
    /// 3. [`ValidationError::UnsupportedScheme`] - scheme is not http/https
    /// 4. [`ValidationError::UnsafeHostSubstitution`] - host contains `$`
    pub fn new(pattern: &str, template: impl Into<String>) -> Result<Self, ValidationError> {
        if pattern.is_empty() {
            return Err(ValidationError::InvalidPattern("missing".to_string()));
        }

        let pattern =
            Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;

        let template = template.into();
        validate_template(&template)?;

        Ok(Self { pattern, template })
    }

    /// Expands `suffix` into a destination URL.
    ///
    /// Returns `None` when the pattern finds no match. On a match, every `$N`
    /// or `$name` in the template is replaced with the text of the
    /// corresponding capture group; a reference to a group that did not
    /// participate in the match substitutes the empty string.
    pub fn expand(&self, suffix: &str) -> Option<String> {
        let caps = self.pattern.captures(suffix)?;
        let mut url = String::new();
        caps.expand(&self.template, &mut url);
        Some(url)
    }

    /// The canonical string form of the pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The URL template, with its `$`-placeholders intact.
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str() && self.template == other.template
    }
}

impl TryFrom<RawMatch> for Match {
    type Error = ValidationError;

    fn try_from(raw: RawMatch) -> Result<Self, Self::Error> {
        let pattern = raw
            .uri_pattern
            .ok_or_else(|| ValidationError::InvalidPattern("missing".to_string()))?;
        Match::new(&pattern, raw.url_template.unwrap_or_default())
    }
}

impl From<Match> for RawMatch {
    fn from(m: Match) -> Self {
        Self {
            uri_pattern: Some(m.pattern.as_str().to_string()),
            url_template: Some(m.template),
        }
    }
}

/// Validates that a template is an absolute http/https URL whose host carries
/// no substitution markers.
fn validate_template(template: &str) -> Result<(), ValidationError> {
    let url = Url::parse(template)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_some_and(|host| host.contains('$')) {
        return Err(ValidationError::UnsafeHostSubstitution);
    }

    Ok(())
}
