//! Deferred class removals.
//!
//! Triggering an animation adds a class now and schedules its removal after a
//! duration. Each trigger owns an independent one-shot timer: overlapping
//! triggers on the same widget/class stack, and every scheduled removal fires.
//! Nothing here is cancellable.

use std::time::Duration;

use pulse_types::{StyleClass, WidgetId, ui::AnimTimer};

#[derive(Debug)]
struct PendingRemoval {
    widget: WidgetId,
    class: StyleClass,
    timer: AnimTimer,
}

/// Queue of pending one-shot class removals, advanced by frame deltas.
#[derive(Debug, Default)]
pub struct RemovalQueue {
    pending: Vec<PendingRemoval>,
}

impl RemovalQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule removal of `class` from `widget` after `after`.
    pub fn schedule(&mut self, widget: WidgetId, class: StyleClass, after: Duration) {
        self.pending.push(PendingRemoval {
            widget,
            class,
            timer: AnimTimer::new(after),
        });
    }

    /// Advance every pending timer by `delta` and drain the expired entries,
    /// in scheduling order.
    pub fn advance(&mut self, delta: Duration) -> Vec<(WidgetId, StyleClass)> {
        let mut due = Vec::new();
        self.pending.retain_mut(|entry| {
            entry.timer.advance(delta);
            if entry.timer.is_expired() {
                due.push((entry.widget.clone(), entry.class.clone()));
                false
            } else {
                true
            }
        });
        due
    }

    /// Progress of the most recently scheduled pending removal for this
    /// widget/class, if any. Re-triggering restarts the reported progress.
    #[must_use]
    pub fn progress(&self, widget: &WidgetId, class: &StyleClass) -> Option<f32> {
        self.pending
            .iter()
            .rev()
            .find(|entry| entry.widget == *widget && entry.class == *class)
            .map(|entry| entry.timer.progress())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
