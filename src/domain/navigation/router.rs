//! ViewRouter - exactly one active view among a registered set.

use std::fmt::Debug;
use std::str::FromStr;

/// Tracks which of a registered set of views is visible.
///
/// `show` has no guards: any registered key can be activated from any state.
/// Unknown keys leave the router untouched.
#[derive(Debug, Clone)]
pub struct ViewRouter<K> {
    registered: Vec<K>,
    active: Option<K>,
}

impl<K> ViewRouter<K>
where
    K: Copy + Eq + Debug,
{
    /// Router with no registered views and nothing active.
    pub fn new() -> Self {
        Self {
            registered: Vec::new(),
            active: None,
        }
    }

    /// Router over `keys` with `initial` active.
    pub fn with_views(keys: &[K], initial: K) -> Self {
        let mut router = Self::new();
        for key in keys {
            router.register(*key);
        }
        router.show(initial);
        router
    }

    /// Adds a view. Registering twice is harmless.
    pub fn register(&mut self, key: K) {
        if !self.registered.contains(&key) {
            self.registered.push(key);
        }
    }

    /// Makes `key` the only active view.
    ///
    /// Returns false, changing nothing, if `key` is not registered.
    pub fn show(&mut self, key: K) -> bool {
        if !self.registered.contains(&key) {
            tracing::debug!(?key, "ignoring unregistered view");
            return false;
        }
        self.active = Some(key);
        true
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == Some(key)
    }

    pub fn registered(&self) -> &[K] {
        &self.registered
    }
}

impl<K> ViewRouter<K>
where
    K: Copy + Eq + Debug + FromStr,
{
    /// Shows a view by name. Unknown names are a no-op.
    pub fn show_named(&mut self, name: &str) -> bool {
        match name.parse::<K>() {
            Ok(key) => self.show(key),
            Err(_) => {
                tracing::debug!(name, "ignoring unknown view name");
                false
            }
        }
    }
}

impl<K> Default for ViewRouter<K>
where
    K: Copy + Eq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
