//! Literal substring search over untyped JSON trees
//!
//! The walker descends objects and arrays in document order, tracking the key
//! path to every value and the `meta.name` of every enclosing component. Any
//! string value containing the target is reported together with both trails.

pub mod stack;

pub use stack::WalkState;

use crate::error::{WalkError, WalkResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default recursion limit for a single walk
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A single occurrence of the target inside a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The substring that was searched for
    pub target: String,
    /// `meta.name` of every enclosing component, root first, joined with `/`
    pub parent_name: String,
    /// Object keys and array indices leading to the string, joined with `/`
    pub key_path: String,
}

/// Recursive searcher for one target string
#[derive(Debug, Clone)]
pub struct Walker<'t> {
    target: &'t str,
    max_depth: usize,
}

impl<'t> Walker<'t> {
    /// Create a walker for `target` with the default depth limit
    pub fn new(target: &'t str) -> Self {
        Self {
            target,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Search `value` from a fresh set of stacks
    pub fn search(&self, value: &Value) -> WalkResult<Vec<MatchRecord>> {
        let mut state = WalkState::new();
        self.search_with_state(value, &mut state)
    }

    /// Search `value` using caller-provided stacks.
    ///
    /// The stacks are returned to their incoming state whether the walk
    /// succeeds or fails. On failure no partial matches are returned.
    pub fn search_with_state(
        &self,
        value: &Value,
        state: &mut WalkState,
    ) -> WalkResult<Vec<MatchRecord>> {
        let mut matches = Vec::new();
        self.visit(value, state, &mut matches)?;
        Ok(matches)
    }

    fn visit(
        &self,
        value: &Value,
        state: &mut WalkState,
        matches: &mut Vec<MatchRecord>,
    ) -> WalkResult<()> {
        if state.depth() > self.max_depth {
            return Err(WalkError::depth_exceeded(self.max_depth, state.location()));
        }

        match value {
            Value::Object(object) => {
                let name = component_name(object, state)?;
                state.with_name(name, |state| -> WalkResult<()> {
                    for (key, child) in object {
                        self.visit_child(key.clone(), child, state, matches)?;
                    }
                    Ok(())
                })
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.visit_child(index.to_string(), child, state, matches)?;
                }
                Ok(())
            }
            // Scalars have no children
            _ => Ok(()),
        }
    }

    fn visit_child(
        &self,
        segment: String,
        child: &Value,
        state: &mut WalkState,
        matches: &mut Vec<MatchRecord>,
    ) -> WalkResult<()> {
        state.with_segment(segment, |state| {
            if let Value::String(text) = child {
                if text.contains(self.target) {
                    matches.push(MatchRecord {
                        target: self.target.to_string(),
                        parent_name: state.breadcrumb(),
                        key_path: state.key_path(),
                    });
                }
            }
            self.visit(child, state, matches)
        })
    }
}

/// Look up `meta.name` on a component object.
///
/// Only non-empty strings name a component. A `meta` member that is present
/// but is not an object makes the whole document unsearchable.
fn component_name<'v>(
    object: &'v Map<String, Value>,
    state: &WalkState,
) -> WalkResult<Option<&'v str>> {
    match object.get("meta") {
        None => Ok(None),
        Some(Value::Object(meta)) => Ok(meta
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())),
        Some(_) => Err(WalkError::malformed_meta(state.location())),
    }
}

/// Search `value` for `target` with default settings
pub fn search(value: &Value, target: &str) -> WalkResult<Vec<MatchRecord>> {
    Walker::new(target).search(value)
}
