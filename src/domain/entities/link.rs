//! Link entity: a named, ordered set of expansion rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Match;
use crate::error::ValidationError;

/// A short link: a name plus an ordered sequence of [`Match`] rules that
/// expand request paths under that name into destination URLs.
///
/// Match order is significant and caller-controlled: expansion tries the rules
/// in stored order and the first one that matches wins. There is no scoring or
/// "best match" selection.
///
/// A `Link` is an immutable value; updates replace the whole link in a store
/// rather than patching it in place. [`Clone`] produces a fully independent
/// copy, which the store layer relies on to keep stored links isolated from
/// caller-held ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct Link {
    name: String,
    matches: Vec<Match>,
    time: DateTime<Utc>,
}

/// Wire shape of a [`Link`]; name/match-count invariants are enforced in the
/// `TryFrom` impl, per-match validation happens while decoding each [`Match`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLink {
    name: String,
    matches: Vec<Match>,
    time: DateTime<Utc>,
}

impl Link {
    /// Builds a link, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when `name` is empty or
    /// contains `/` (a separator would make the name ambiguous against
    /// multi-segment request paths), and [`ValidationError::NoMatches`] when
    /// `matches` is empty.
    pub fn new(
        name: impl Into<String>,
        matches: Vec<Match>,
        time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() || name.contains('/') {
            return Err(ValidationError::InvalidName(name));
        }

        if matches.is_empty() {
            return Err(ValidationError::NoMatches);
        }

        Ok(Self {
            name,
            matches,
            time,
        })
    }

    /// The link's name, the first path segment it resolves.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expansion rules in precedence order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// When the link was last written.
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.time
    }

    /// Expands a full request path into a destination URL.
    ///
    /// The path must begin with this link's name; the remainder, with any run
    /// of leading `/` stripped, is handed to each [`Match`] in order. The
    /// first rule that matches produces the result. `None` means the path is
    /// simply not covered by this link - an expected negative, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use golinks::domain::entities::{Link, Match};
    ///
    /// let link = Link::new(
    ///     "b",
    ///     vec![Match::new("^bar$", "https://b.com/bar").unwrap()],
    ///     Utc::now(),
    /// )
    /// .unwrap();
    ///
    /// let expanded = link.expand("b/bar").unwrap();
    /// assert_eq!(expanded.url, "https://b.com/bar");
    /// assert!(link.expand("b/baz").is_none());
    /// ```
    pub fn expand(&self, path: &str) -> Option<ExpandedUrl<'_>> {
        let rest = path.strip_prefix(&self.name)?;
        let suffix = rest.trim_start_matches('/');

        self.matches.iter().enumerate().find_map(|(i, m)| {
            m.expand(suffix).map(|url| ExpandedUrl {
                url,
                match_index: i,
                link: self,
            })
        })
    }
}

impl TryFrom<RawLink> for Link {
    type Error = ValidationError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        Link::new(raw.name, raw.matches, raw.time)
    }
}

impl From<Link> for RawLink {
    fn from(link: Link) -> Self {
        Self {
            name: link.name,
            matches: link.matches,
            time: link.time,
        }
    }
}

/// The result of a successful [`Link::expand`].
///
/// Transient, per-call value: the destination URL, the index of the [`Match`]
/// that produced it, and a borrow of the owning link.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedUrl<'a> {
    /// Fully expanded destination URL.
    pub url: String,
    /// Zero-based index into the owning link's match sequence.
    pub match_index: usize,
    /// The link that produced the expansion.
    pub link: &'a Link,
}
