//! Widget registry for the demo board.

use pulse_types::{ClassList, StyleClass, WidgetId};

/// A display element on the board: text content plus a class list.
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    text: String,
    classes: ClassList,
}

impl Widget {
    fn new(id: WidgetId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            classes: ClassList::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &StyleClass) -> bool {
        self.classes.contains(class)
    }

    pub(crate) fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Registry of widgets, keyed by id. Registration order is render order.
///
/// Every lookup returns an `Option`; consumers branch on presence before
/// mutating, so an unknown id degrades to a no-op instead of an error.
#[derive(Debug, Default)]
pub struct Board {
    widgets: Vec<Widget>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget. A duplicate id keeps the existing widget.
    pub fn register(&mut self, id: WidgetId, text: impl Into<String>) {
        if self.widget(&id).is_some() {
            return;
        }
        self.widgets.push(Widget::new(id, text));
    }

    #[must_use]
    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub(crate) fn widget_mut(&mut self, id: &WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| *w.id() == *id)
    }

    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Replace a widget's display text. No-op when the id is unknown.
    pub fn set_text(&mut self, id: &WidgetId, text: impl Into<String>) {
        if let Some(widget) = self.widget_mut(id) {
            widget.set_text(text);
        }
    }
}
