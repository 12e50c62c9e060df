//! Ordered set of style classes attached to a widget.

use serde::{Deserialize, Serialize};

use crate::StyleClass;

/// The set of style classes currently attached to a widget.
///
/// Order of first insertion is preserved for rendering. `add` deduplicates,
/// and removing a class that is not present is a no-op, so repeated
/// animation triggers and expired removals can never corrupt the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList(Vec<StyleClass>);

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, class: &StyleClass) -> bool {
        self.0.contains(class)
    }

    /// Add a class. Returns `true` if the class was newly added.
    pub fn add(&mut self, class: StyleClass) -> bool {
        if self.contains(&class) {
            return false;
        }
        self.0.push(class);
        true
    }

    /// Remove a class. Returns `true` if the class was present.
    pub fn remove(&mut self, class: &StyleClass) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    /// Flip presence of a class. Returns `true` if the class is present
    /// after the toggle.
    pub fn toggle(&mut self, class: &StyleClass) -> bool {
        if self.remove(class) {
            false
        } else {
            self.0.push(class.clone());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleClass> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class.as_str())?;
        }
        Ok(())
    }
}
