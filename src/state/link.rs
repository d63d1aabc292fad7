#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::state::list::Record;

/// Callback that builds a navigation path from a record, its id, and the
/// collection base path. The returned path is used verbatim.
pub type LinkBuilder = Arc<dyn Fn(&Record, &str, &str) -> String + Send + Sync>;

/// Per-row navigation configuration for a record list.
///
/// Built once when the list is configured, not per row, so that the only
/// validation point (`TryFrom<&str>`) sits outside the rendering hot path.
#[derive(Clone, Default)]
pub enum LinkType {
    /// Rows link to the record's edit view: `{base_path}/{id}`.
    #[default]
    Edit,
    /// Rows link to the record's detail view: `{base_path}/{id}/show`.
    Show,
    /// Rows are inert — no link wrapper, no navigation.
    Disabled,
    /// Rows link to whatever the callback returns.
    Custom(LinkBuilder),
}

impl LinkType {
    /// Wrap a path-building closure as a custom link type.
    pub fn custom(f: impl Fn(&Record, &str, &str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Resolve the navigation target for one row.
    ///
    /// Returns `None` when the row is not clickable. Pure: reads its
    /// arguments and produces a path, nothing else.
    #[must_use]
    pub fn resolve(&self, record: &Record, id: &str, base_path: &str) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Edit => Some(format!("{base_path}/{id}")),
            Self::Show => Some(format!("{base_path}/{id}/show")),
            Self::Custom(build) => Some((**build)(record, id, base_path)),
        }
    }
}

impl fmt::Debug for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit => f.write_str("Edit"),
            Self::Show => f.write_str("Show"),
            Self::Disabled => f.write_str("Disabled"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// `true` links like `Edit`, `false` disables row links.
impl From<bool> for LinkType {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Edit } else { Self::Disabled }
    }
}

/// Parse the textual configuration form. Only `"edit"` and `"show"` are
/// valid; anything else is a configuration error, never a silent default.
impl TryFrom<&str> for LinkType {
    type Error = LinkTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "edit" => Ok(Self::Edit),
            "show" => Ok(Self::Show),
            other => Err(LinkTypeError::Unknown(other.to_owned())),
        }
    }
}

/// Invalid link configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkTypeError {
    #[error("unknown link type `{0}` (expected \"edit\" or \"show\")")]
    Unknown(String),
}
