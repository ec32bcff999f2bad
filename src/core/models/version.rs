//! Dependency version grammar
//!
//! Two shapes are recognized:
//!
//! ```text
//! plain      := num "." num "." num                    (1.4.2)
//! revision   := "v" num "-rev" date "-" plain          (v1-rev20210319-1.31.5)
//! date       := 8 digits forming a calendar date (YYYYMMDD)
//! num        := "0" / (NONZERO *DIGIT)
//! ```
//!
//! Anything else is rejected with a [`VersionParseError`]. Every accepted
//! string displays back exactly as written.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use semver::Version;
use thiserror::Error;

/// Why a version string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// Nothing to parse
    #[error("empty version string")]
    Empty,

    /// A numeric component is missing, not decimal, or zero-padded
    #[error("invalid numeric component `{0}`")]
    InvalidNumber(String),

    /// Wrong number of dot-separated components
    #[error("expected MAJOR.MINOR.PATCH, found `{0}`")]
    ComponentCount(String),

    /// A revision-stamped version lacks its `-rev` marker
    #[error("missing `-rev` marker in `{0}`")]
    MissingRevision(String),

    /// The revision stamp is not an 8-digit calendar date
    #[error("invalid revision date `{0}`")]
    InvalidDate(String),
}

/// A version as it appears in a `<version>` element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyVersion {
    /// `X.Y.Z`
    Plain(Version),
    /// `vN-revYYYYMMDD-X.Y.Z`, used by generated API client libraries
    RevisionStamped {
        /// API generation (`N` in `vN`)
        api: u64,
        /// Generation date of the client
        revision: NaiveDate,
        /// Trailing library version
        release: Version,
    },
}

impl DependencyVersion {
    /// The trailing semantic version for either shape
    #[must_use]
    pub const fn release(&self) -> &Version {
        match self {
            Self::Plain(release) | Self::RevisionStamped { release, .. } => release,
        }
    }

    /// Whether this is the revision-stamped shape
    #[must_use]
    pub const fn is_revision_stamped(&self) -> bool {
        matches!(self, Self::RevisionStamped { .. })
    }

    /// Order two versions of the same shape.
    ///
    /// Revision-stamped versions compare by API generation, then revision
    /// date, then release. Returns `None` across shapes.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => Some(a.cmp(b)),
            (
                Self::RevisionStamped {
                    api: a_api,
                    revision: a_rev,
                    release: a_rel,
                },
                Self::RevisionStamped {
                    api: b_api,
                    revision: b_rev,
                    release: b_rel,
                },
            ) => Some(a_api.cmp(b_api).then(a_rev.cmp(b_rev)).then(a_rel.cmp(b_rel))),
            _ => None,
        }
    }
}

impl FromStr for DependencyVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let Some(rest) = s.strip_prefix('v') else {
            return parse_plain(s).map(Self::Plain);
        };

        let (api, rest) = rest
            .split_once("-rev")
            .ok_or_else(|| VersionParseError::MissingRevision(s.to_string()))?;
        let api = parse_number(api)?;

        let (date, release) =
            rest.split_once('-').ok_or_else(|| VersionParseError::InvalidDate(rest.to_string()))?;
        let revision = parse_date(date)?;
        let release = parse_plain(release)?;

        Ok(Self::RevisionStamped {
            api,
            revision,
            release,
        })
    }
}

impl fmt::Display for DependencyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(release) => write!(f, "{release}"),
            Self::RevisionStamped {
                api,
                revision,
                release,
            } => write!(f, "v{api}-rev{}-{release}", revision.format("%Y%m%d")),
        }
    }
}

fn parse_number(s: &str) -> Result<u64, VersionParseError> {
    let zero_padded = s.len() > 1 && s.starts_with('0');
    if s.is_empty() || zero_padded || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::InvalidNumber(s.to_string()));
    }
    s.parse().map_err(|_| VersionParseError::InvalidNumber(s.to_string()))
}

fn parse_plain(s: &str) -> Result<Version, VersionParseError> {
    let parts: Vec<&str> = s.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(VersionParseError::ComponentCount(s.to_string()));
    };
    Ok(Version::new(parse_number(major)?, parse_number(minor)?, parse_number(patch)?))
}

fn parse_date(s: &str) -> Result<NaiveDate, VersionParseError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| VersionParseError::InvalidDate(s.to_string()))
}
