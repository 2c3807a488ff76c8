//! Scoped path and breadcrumb stacks used during a tree walk

/// Separator used when joining key paths and breadcrumbs
pub const SEGMENT_SEPARATOR: &str = "/";

/// The two parallel stacks carried through a single walk.
///
/// `path` holds object keys and stringified array indices from the document
/// root down to the value being visited. `names` holds the `meta.name` of every
/// enclosing component. Both are only ever modified through the scoped
/// helpers below, so each push is undone before the helper returns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkState {
    path: Vec<String>,
    names: Vec<String>,
}

impl WalkState {
    /// Create empty stacks for a top-level search
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with `segment` pushed onto the key path
    pub fn with_segment<R>(&mut self, segment: String, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Run `f` with `name` pushed onto the breadcrumb, if there is one
    pub fn with_name<R>(&mut self, name: Option<&str>, f: impl FnOnce(&mut Self) -> R) -> R {
        match name {
            Some(name) => {
                self.names.push(name.to_string());
                let result = f(self);
                self.names.pop();
                result
            }
            None => f(self),
        }
    }

    /// Number of segments between the root and the current value
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Number of named ancestors of the current value
    pub fn name_depth(&self) -> usize {
        self.names.len()
    }

    /// Current key path joined with `/`
    pub fn key_path(&self) -> String {
        self.path.join(SEGMENT_SEPARATOR)
    }

    /// Current `meta.name` breadcrumb joined with `/`
    pub fn breadcrumb(&self) -> String {
        self.names.join(SEGMENT_SEPARATOR)
    }

    /// Key path suitable for diagnostics; the root is shown as `(root)`
    pub fn location(&self) -> String {
        if self.path.is_empty() {
            "(root)".to_string()
        } else {
            self.key_path()
        }
    }
}
