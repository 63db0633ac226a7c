//! Error taxonomy for link validation and store operations.

use thiserror::Error;

/// Errors raised while constructing or decoding a [`Link`] or [`Match`].
///
/// All variants are synchronous, recoverable rejections of bad input; a failed
/// validation never leaves a partially built value behind.
///
/// [`Link`]: crate::domain::entities::Link
/// [`Match`]: crate::domain::entities::Match
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The `uri_pattern` is missing, empty, or is not a valid regex.
    #[error("invalid uri_pattern: {0}")]
    InvalidPattern(String),

    /// The `url_template` does not parse as an absolute URL.
    #[error("url_template is not a valid URL: {0}")]
    InvalidTemplateUrl(#[from] url::ParseError),

    /// The `url_template` scheme is neither `http` nor `https`.
    #[error("url_template must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    /// The `url_template` host contains a `$` substitution marker.
    ///
    /// Host-level substitution would let a crafted request path redirect to an
    /// attacker-controlled host.
    #[error("url_template host cannot contain '$' replacements")]
    UnsafeHostSubstitution,

    /// The link name is empty or contains a path separator.
    #[error("invalid link name {0:?}: must be non-empty and cannot contain '/'")]
    InvalidName(String),

    /// The link has an empty match list.
    #[error("link must have at least one match")]
    NoMatches,
}

/// Errors produced by [`LinkStore`] operations.
///
/// [`NotFound`](StoreError::NotFound) is the only error every backend must
/// agree on; everything else is an opaque backend failure propagated unchanged.
///
/// [`LinkStore`]: crate::domain::repositories::LinkStore
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named link does not exist in the store.
    #[error("link not found")]
    NotFound,

    /// A backend-specific failure; opaque to callers beyond "operation failed".
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
