use indexmap::IndexMap;

use crate::error::{ConfGuardError, Result};

use super::Control;

/// Explicit in-memory catalog of controls, keyed by control id.
///
/// Registration order is iteration order. Controls are validated on the way
/// in and immutable once registered; `discard` is the teardown boundary.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: IndexMap<String, Control>,
}

impl ControlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control.
    ///
    /// # Errors
    /// Returns `DuplicateControl` for an already-registered id and `Config`
    /// if the control fails structural validation.
    pub fn register(&mut self, control: Control) -> Result<()> {
        control.validate()?;
        if self.controls.contains_key(&control.id) {
            return Err(ConfGuardError::DuplicateControl(control.id));
        }
        self.controls.insert(control.id.clone(), control);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    /// Look up a control, erroring on an unknown id.
    ///
    /// # Errors
    /// Returns `UnknownControl`.
    pub fn require(&self, id: &str) -> Result<&Control> {
        self.get(id)
            .ok_or_else(|| ConfGuardError::UnknownControl(id.to_string()))
    }

    /// Remove a control, returning it if it was registered.
    pub fn discard(&mut self, id: &str) -> Option<Control> {
        self.controls.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
