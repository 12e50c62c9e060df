//! End-to-end flows through the application context.

use std::time::Duration;

use pulse_engine::{
    ANIM_BOX, App, CALC_RESULT, CARD, CLASS_ACTIVE, CLASS_ANIMATED, CLASS_FLIPPED, COUNTER_READOUT,
    ControlId, LOADING, PulseConfig,
};
use pulse_types::{StyleClass, WidgetId};

#[test]
fn calculate_bundle_updates_every_surface() {
    let mut app = App::default();
    app.activate(ControlId::Calculate);

    assert_eq!(app.widget(&CALC_RESULT).unwrap().text(), "Result: 15");
    assert_eq!(app.widget(&COUNTER_READOUT).unwrap().text(), "Counter: 1");
    assert_eq!(app.counter_value(), 1);

    let lines: Vec<_> = app.activity().lines().collect();
    assert!(lines.iter().any(|l| l.contains("5 + 10 = 15")));
    assert!(lines.iter().any(|l| l.starts_with("Hello, Student!")));
    assert!(lines.iter().any(|l| l.contains("(3 x 4) + 7 = 19")));
}

#[test]
fn counter_accumulates_across_activations() {
    let mut app = App::default();
    for _ in 0..3 {
        app.activate(ControlId::Calculate);
    }
    assert_eq!(app.counter_value(), 3);
    assert_eq!(app.widget(&COUNTER_READOUT).unwrap().text(), "Counter: 3");
}

#[test]
fn animate_box_lifecycle_with_default_delay() {
    let mut app = App::default();
    app.activate(ControlId::AnimateBox);

    // 500ms base x 2.0 multiplier from the default config.
    assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    app.advance(Duration::from_millis(999));
    assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    app.advance(Duration::from_millis(1));
    assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
}

#[test]
fn rapid_retriggering_stacks_timers() {
    let mut app = App::default();
    app.activate(ControlId::AnimateBox);
    app.advance(Duration::from_millis(400));
    app.activate(ControlId::AnimateBox);
    assert_eq!(app.pending_removals(), 2);

    // Earlier trigger expires first and already strips the class; the
    // later one still fires as an independent no-op removal.
    app.advance(Duration::from_millis(600));
    assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    assert_eq!(app.pending_removals(), 1);
    app.advance(Duration::from_millis(400));
    assert_eq!(app.pending_removals(), 0);
}

#[test]
fn flip_and_loading_toggles_are_idempotent_pairs() {
    let mut app = App::default();

    app.activate(ControlId::FlipCard);
    app.activate(ControlId::ToggleLoading);
    assert!(app.widget(&CARD).unwrap().has_class(&CLASS_FLIPPED));
    assert!(app.widget(&LOADING).unwrap().has_class(&CLASS_ACTIVE));

    app.activate(ControlId::FlipCard);
    app.activate(ControlId::ToggleLoading);
    assert!(!app.widget(&CARD).unwrap().has_class(&CLASS_FLIPPED));
    assert!(!app.widget(&LOADING).unwrap().has_class(&CLASS_ACTIVE));
}

#[test]
fn missing_widget_operations_never_error() {
    let mut app = App::default();
    let ghost = WidgetId::known("ghost");

    app.trigger_animation(&ghost, CLASS_ANIMATED, Some(Duration::from_millis(5)));
    assert_eq!(app.toggle_class(&ghost, &CLASS_FLIPPED), None);
    assert_eq!(app.pending_removals(), 0);

    // Board state is untouched.
    app.advance(Duration::from_millis(10));
    assert!(app.widget(&ghost).is_none());
    assert_eq!(app.counter_value(), 0);
}

#[test]
fn toggled_classes_are_not_subject_to_removal_timers() {
    let mut app = App::default();
    app.activate(ControlId::ToggleLoading);
    app.advance(Duration::from_secs(60));
    assert!(app.widget(&LOADING).unwrap().has_class(&CLASS_ACTIVE));
}

#[test]
fn animation_progress_tracks_newest_trigger() {
    let mut app = App::default();
    let fade = StyleClass::known("animated");

    app.trigger_animation(&ANIM_BOX, fade.clone(), Some(Duration::from_millis(100)));
    app.advance(Duration::from_millis(90));
    assert!(app.animation_progress(&ANIM_BOX, &fade).unwrap() > 0.8);

    app.trigger_animation(&ANIM_BOX, fade.clone(), Some(Duration::from_millis(100)));
    assert!(app.animation_progress(&ANIM_BOX, &fade).unwrap() < 0.1);

    app.advance(Duration::from_millis(200));
    assert!(app.animation_progress(&ANIM_BOX, &fade).is_none());
}

#[test]
fn config_animation_duration_applies_to_defaulted_triggers() {
    let config: PulseConfig = toml::from_str(
        r"
        [board]
        animation_ms = 40
        delay_base_ms = 10
        delay_multiplier = 3.0
        ",
    )
    .unwrap();
    let mut app = App::new(&config);

    // AnimateBox uses the delay calculator: 10ms x 3.0 = 30ms.
    app.activate(ControlId::AnimateBox);
    app.advance(Duration::from_millis(29));
    assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    app.advance(Duration::from_millis(1));
    assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));

    // A trigger without an explicit duration uses animation_ms.
    app.trigger_animation(&ANIM_BOX, CLASS_ANIMATED, None);
    app.advance(Duration::from_millis(39));
    assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    app.advance(Duration::from_millis(1));
    assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
}
