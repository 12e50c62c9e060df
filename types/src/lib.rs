//! Core domain types for Pulse.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod class_list;
pub use class_list::ClassList;

pub mod ui;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

// ============================================================================
// Widget Identifiers
// ============================================================================

/// Identifier of a widget on the board.
///
/// Lookups by id return an `Option`; an id that resolves to nothing is a
/// legal input everywhere, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Cow<'static, str>);

impl WidgetId {
    #[must_use]
    pub const fn known(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&'static str> for WidgetId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

// ============================================================================
// Style Classes
// ============================================================================

#[derive(Debug, Error)]
pub enum ClassParseError {
    #[error("style class must not be empty")]
    Empty,
    #[error("style class must not contain whitespace (got {0:?})")]
    Whitespace(String),
}

/// A style class attached to a widget.
///
/// Class names are non-empty and contain no whitespace, so a class list can
/// always be rendered as a space-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StyleClass(Cow<'static, str>);

impl StyleClass {
    /// A compile-time checked class name.
    #[must_use]
    pub const fn known(name: &'static str) -> Self {
        assert!(!name.is_empty(), "style class must not be empty");
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Result<Self, ClassParseError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ClassParseError::Empty);
        }
        if name.contains(char::is_whitespace) {
            return Err(ClassParseError::Whitespace(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::fmt::Display for StyleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for StyleClass {
    type Error = ClassParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StyleClass> for String {
    fn from(value: StyleClass) -> Self {
        value.0.into_owned()
    }
}

// ============================================================================
// Tests
// ============================================================================
