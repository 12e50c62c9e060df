//! Control registration table.
//!
//! Every interactive control is bound here, once, to a handler function.
//! The table is the single source of truth for key bindings, labels, and
//! dispatch; nothing rebinds or unbinds at runtime.

use crate::{
    ANIM_BOX, App, CALC_RESULT, CARD, CLASS_ACTIVE, CLASS_ANIMATED, CLASS_FLIPPED, COUNTER_READOUT,
    LOADING, calc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Calculate,
    AnimateBox,
    FlipCard,
    ToggleLoading,
}

#[derive(Debug, Clone, Copy)]
pub struct ControlSpec {
    pub id: ControlId,
    pub key: char,
    pub label: &'static str,
    pub description: &'static str,
    handler: fn(&mut App),
}

const CONTROL_SPECS: &[ControlSpec] = &[
    ControlSpec {
        id: ControlId::Calculate,
        key: 'c',
        label: "Calculate",
        description: "Run the calculation demos and bump the counter",
        handler: calculate,
    },
    ControlSpec {
        id: ControlId::AnimateBox,
        key: 'a',
        label: "Animate box",
        description: "Pulse the box with the animated class",
        handler: animate_box,
    },
    ControlSpec {
        id: ControlId::FlipCard,
        key: 'f',
        label: "Flip card",
        description: "Toggle the flipped class on the card",
        handler: flip_card,
    },
    ControlSpec {
        id: ControlId::ToggleLoading,
        key: 'l',
        label: "Toggle loading",
        description: "Toggle the active class on the loading indicator",
        handler: toggle_loading,
    },
];

#[must_use]
pub fn control_specs() -> &'static [ControlSpec] {
    CONTROL_SPECS
}

#[must_use]
pub fn control_for_key(key: char) -> Option<ControlId> {
    CONTROL_SPECS
        .iter()
        .find(|spec| spec.key == key)
        .map(|spec| spec.id)
}

pub(crate) fn dispatch(app: &mut App, id: ControlId) {
    if let Some(spec) = CONTROL_SPECS.iter().find(|spec| spec.id == id) {
        (spec.handler)(app);
    }
}

fn calculate(app: &mut App) {
    let result = calc::sum(5.0, 10.0);
    app.set_display_text(&CALC_RESULT, format!("Result: {result}"));
    app.record(format!("Calculated 5 + 10 = {result}"));

    let count = app.increment_counter(1);
    app.set_display_text(&COUNTER_READOUT, format!("Counter: {count}"));

    let info = calc::user_info("Student", 25);
    app.record(format!(
        "{} {} [{}]",
        info.greeting, info.info, info.timestamp
    ));

    let composed = calc::composed_calculation(3.0, 4.0, 7.0);
    app.record(format!("(3 x 4) + 7 = {composed}"));
}

fn animate_box(app: &mut App) {
    let delay = calc::animation_delay(app.delay_base(), app.delay_multiplier());
    app.trigger_animation(&ANIM_BOX, CLASS_ANIMATED, Some(delay));
    app.record(format!("Box animated for {} ms", delay.as_millis()));
}

fn flip_card(app: &mut App) {
    match app.toggle_class(&CARD, &CLASS_FLIPPED) {
        Some(true) => app.record("Card flipped to its back face"),
        Some(false) => app.record("Card flipped to its front face"),
        None => {}
    }
}

fn toggle_loading(app: &mut App) {
    match app.toggle_class(&LOADING, &CLASS_ACTIVE) {
        Some(true) => app.record("Loading indicator on"),
        Some(false) => app.record("Loading indicator off"),
        None => {}
    }
}
