//! Location labels derived from a view file's position on disk

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Component, Path};

use crate::search::stack::SEGMENT_SEPARATOR;

/// Directory names above a view file used by the default label
pub const DEFAULT_LABEL_DEPTH: usize = 4;

/// Strategy for turning a view file path into a readable location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrategy {
    /// The last `n` directory names above the file, outermost first
    Trailing(usize),
    /// Every directory between the search root and the file
    RootRelative,
}

impl Default for LabelStrategy {
    fn default() -> Self {
        LabelStrategy::Trailing(DEFAULT_LABEL_DEPTH)
    }
}

impl LabelStrategy {
    /// Build the label for `file`, found under `root`.
    ///
    /// Paths shallower than the requested depth yield the directories that
    /// exist rather than an error.
    pub fn label(&self, file: &Path, root: &Path) -> String {
        let parent = file.parent().unwrap_or_else(|| Path::new(""));

        let names: Vec<Cow<'_, str>> = match self {
            LabelStrategy::Trailing(depth) => {
                let all = directory_names(parent);
                let skip = all.len().saturating_sub(*depth);
                all.into_iter().skip(skip).collect()
            }
            LabelStrategy::RootRelative => match parent.strip_prefix(root) {
                Ok(relative) => directory_names(relative),
                Err(_) => directory_names(parent),
            },
        };

        names.join(SEGMENT_SEPARATOR)
    }
}

fn directory_names(path: &Path) -> Vec<Cow<'_, str>> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect()
}

/// Join a file label with a match breadcrumb
pub fn compose_location(label: &str, breadcrumb: &str) -> String {
    if label.is_empty() {
        breadcrumb.to_string()
    } else {
        format!("{}{}{}", label, SEGMENT_SEPARATOR, breadcrumb)
    }
}
