//! Core engine for Pulse - application state and control dispatch.
//!
//! This crate contains the [`App`] context without TUI dependencies, providing:
//!
//! - **Application state**: the board, the shared counter, the activity feed
//! - **Control dispatch**: a registration table binding keys to handlers,
//!   built once during setup
//! - **Deferred removals**: one-shot timers that strip a triggered class from
//!   its widget once the duration elapses, advanced by frame deltas
//! - **Configuration**: `~/.pulse/config.toml` with board timings and UI options
//!
//! The TUI layer (`pulse_tui`) reads state from `App` and forwards input back
//! to it. No rendering logic lives in this crate. Everything is synchronous:
//! the only "suspension" in the system is a pending removal waiting for its
//! timer, and those are drained inside [`App::advance`] on the frame loop.

pub mod calc;

mod activity;
mod board;
mod config;
mod controls;
mod counter;
mod schedule;

pub use activity::ActivityLog;
pub use board::{Board, Widget};
pub use calc::UserInfo;
pub use config::{AppConfig, BoardConfig, ConfigError, PulseConfig};
pub use controls::{ControlId, ControlSpec, control_for_key, control_specs};
pub use counter::Counter;
pub use schedule::RemovalQueue;

pub use pulse_types::{ClassList, StyleClass, WidgetId, ui::UiOptions};

use std::time::{Duration, Instant};

use tracing::{debug, info};

// ============================================================================
// Board Vocabulary
// ============================================================================

pub const ANIM_BOX: WidgetId = WidgetId::known("anim-box");
pub const CARD: WidgetId = WidgetId::known("card");
pub const LOADING: WidgetId = WidgetId::known("loading");
pub const CALC_RESULT: WidgetId = WidgetId::known("calc-result");
pub const COUNTER_READOUT: WidgetId = WidgetId::known("counter");

pub const CLASS_ANIMATED: StyleClass = StyleClass::known("animated");
pub const CLASS_FLIPPED: StyleClass = StyleClass::known("flipped");
pub const CLASS_ACTIVE: StyleClass = StyleClass::known("active");

/// Spinner cadence, independent of render FPS.
const UI_TICK_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// App
// ============================================================================

/// Owned application context.
///
/// All mutable state lives here and is only touched synchronously inside
/// handler dispatch and the frame tick, so no locking is ever needed.
#[derive(Debug)]
pub struct App {
    board: Board,
    counter: Counter,
    removals: RemovalQueue,
    activity: ActivityLog,
    options: UiOptions,
    animation_duration: Duration,
    delay_base: Duration,
    delay_multiplier: f64,
    spinner_tick: usize,
    since_ui_tick: Duration,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &PulseConfig) -> Self {
        let mut board = Board::new();
        board.register(ANIM_BOX, "Box");
        board.register(CARD, "Card");
        board.register(LOADING, "Loading");
        board.register(CALC_RESULT, "Result: press c");
        board.register(COUNTER_READOUT, "Counter: 0");

        let mut app = Self {
            board,
            counter: Counter::new(),
            removals: RemovalQueue::new(),
            activity: ActivityLog::new(),
            options: config.ui_options(),
            animation_duration: config.animation_duration(),
            delay_base: config.delay_base(),
            delay_multiplier: config.delay_multiplier(),
            spinner_tick: 0,
            since_ui_tick: Duration::ZERO,
            last_frame: Instant::now(),
            should_quit: false,
        };

        info!(counter = app.counter.value(), "board initialized");
        app.record("Pulse board ready.");
        app.record(format!("Counter starts at {}.", app.counter.value()));
        app
    }

    // ------------------------------------------------------------------
    // Control dispatch
    // ------------------------------------------------------------------

    /// Run the handler registered for `id`.
    pub fn activate(&mut self, id: ControlId) {
        debug!(?id, "control activated");
        controls::dispatch(self, id);
    }

    // ------------------------------------------------------------------
    // Class-driven animation
    // ------------------------------------------------------------------

    /// Add `class` to the widget and schedule its removal.
    ///
    /// `duration` falls back to the configured animation duration (1000 ms
    /// by default). Unknown widget ids are a silent no-op. Overlapping
    /// triggers stack: each schedules its own removal, and every one fires.
    pub fn trigger_animation(
        &mut self,
        id: &WidgetId,
        class: StyleClass,
        duration: Option<Duration>,
    ) {
        let Some(widget) = self.board.widget_mut(id) else {
            debug!(%id, "animation trigger on unknown widget ignored");
            return;
        };
        widget.classes_mut().add(class.clone());
        let after = duration.unwrap_or(self.animation_duration);
        self.removals.schedule(id.clone(), class, after);
    }

    /// Flip presence of `class` on the widget.
    ///
    /// Returns the presence state after the toggle, or `None` when the
    /// widget id is unknown (silent no-op).
    pub fn toggle_class(&mut self, id: &WidgetId, class: &StyleClass) -> Option<bool> {
        let Some(widget) = self.board.widget_mut(id) else {
            debug!(%id, "class toggle on unknown widget ignored");
            return None;
        };
        Some(widget.classes_mut().toggle(class))
    }

    // ------------------------------------------------------------------
    // Frame tick
    // ------------------------------------------------------------------

    /// Advance timers by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance timers by an explicit delta and apply expired removals.
    ///
    /// Split out from [`App::tick`] so tests can drive time deterministically.
    pub fn advance(&mut self, delta: Duration) {
        for (widget_id, class) in self.removals.advance(delta) {
            if let Some(widget) = self.board.widget_mut(&widget_id)
                && widget.classes_mut().remove(&class)
            {
                debug!(%widget_id, %class, "expired class removed");
            }
        }

        self.since_ui_tick += delta;
        while self.since_ui_tick >= UI_TICK_INTERVAL {
            self.since_ui_tick -= UI_TICK_INTERVAL;
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Read access for rendering and tests
    // ------------------------------------------------------------------

    #[must_use]
    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.board.widget(id)
    }

    #[must_use]
    pub fn counter_value(&self) -> i64 {
        self.counter.value()
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.spinner_tick
    }

    /// Progress of the newest pending removal for this widget/class, for
    /// rendering highlight decay. `None` once nothing is pending.
    #[must_use]
    pub fn animation_progress(&self, id: &WidgetId, class: &StyleClass) -> Option<f32> {
        self.removals.progress(id, class)
    }

    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    #[must_use]
    pub fn delay_base(&self) -> Duration {
        self.delay_base
    }

    #[must_use]
    pub fn delay_multiplier(&self) -> f64 {
        self.delay_multiplier
    }

    // ------------------------------------------------------------------
    // Handler plumbing
    // ------------------------------------------------------------------

    pub(crate) fn set_display_text(&mut self, id: &WidgetId, text: String) {
        self.board.set_text(id, text);
    }

    pub(crate) fn increment_counter(&mut self, delta: i64) -> i64 {
        self.counter.add(delta)
    }

    pub(crate) fn record(&mut self, line: impl Into<String>) {
        self.activity.push(line);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&PulseConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_updates_displays_and_counter() {
        let mut app = App::default();
        app.activate(ControlId::Calculate);

        assert_eq!(app.widget(&CALC_RESULT).unwrap().text(), "Result: 15");
        assert_eq!(app.widget(&COUNTER_READOUT).unwrap().text(), "Counter: 1");
        assert_eq!(app.counter_value(), 1);

        app.activate(ControlId::Calculate);
        assert_eq!(app.counter_value(), 2);
        assert_eq!(app.widget(&COUNTER_READOUT).unwrap().text(), "Counter: 2");
    }

    #[test]
    fn calculate_records_user_info_and_composition() {
        let mut app = App::default();
        app.activate(ControlId::Calculate);

        let lines: Vec<_> = app.activity().lines().collect();
        assert!(lines.iter().any(|l| l.starts_with("Hello, Student!")));
        assert!(lines.iter().any(|l| l.contains("(3 x 4) + 7 = 19")));
    }

    #[test]
    fn animate_box_adds_class_and_schedules_removal() {
        let mut app = App::default();
        app.activate(ControlId::AnimateBox);

        assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
        assert_eq!(app.pending_removals(), 1);

        // Default config: 500ms base x 2.0 multiplier.
        app.advance(Duration::from_millis(999));
        assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
        app.advance(Duration::from_millis(1));
        assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
        assert_eq!(app.pending_removals(), 0);
    }

    #[test]
    fn overlapping_triggers_keep_class_until_last_removal() {
        let mut app = App::default();
        app.trigger_animation(&ANIM_BOX, CLASS_ANIMATED, Some(Duration::from_millis(100)));
        app.advance(Duration::from_millis(60));
        app.trigger_animation(&ANIM_BOX, CLASS_ANIMATED, Some(Duration::from_millis(100)));
        assert_eq!(app.pending_removals(), 2);

        // First removal fires and strips the class even though a second
        // trigger is still pending - removals are independent one-shots.
        app.advance(Duration::from_millis(40));
        assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
        assert_eq!(app.pending_removals(), 1);

        // The second removal still fires; removing an absent class is a no-op.
        app.advance(Duration::from_millis(60));
        assert_eq!(app.pending_removals(), 0);
    }

    #[test]
    fn trigger_on_unknown_widget_is_silent_noop() {
        let mut app = App::default();
        app.trigger_animation(
            &WidgetId::known("missing"),
            CLASS_ANIMATED,
            Some(Duration::from_millis(10)),
        );
        assert_eq!(app.pending_removals(), 0);
        app.advance(Duration::from_millis(20));
    }

    #[test]
    fn toggle_on_unknown_widget_is_silent_noop() {
        let mut app = App::default();
        assert_eq!(
            app.toggle_class(&WidgetId::known("missing"), &CLASS_FLIPPED),
            None
        );
    }

    #[test]
    fn flip_card_twice_restores_original_state() {
        let mut app = App::default();
        assert!(!app.widget(&CARD).unwrap().has_class(&CLASS_FLIPPED));
        app.activate(ControlId::FlipCard);
        assert!(app.widget(&CARD).unwrap().has_class(&CLASS_FLIPPED));
        app.activate(ControlId::FlipCard);
        assert!(!app.widget(&CARD).unwrap().has_class(&CLASS_FLIPPED));
    }

    #[test]
    fn loading_toggle_flips_active_class() {
        let mut app = App::default();
        app.activate(ControlId::ToggleLoading);
        assert!(app.widget(&LOADING).unwrap().has_class(&CLASS_ACTIVE));
        app.activate(ControlId::ToggleLoading);
        assert!(!app.widget(&LOADING).unwrap().has_class(&CLASS_ACTIVE));
    }

    #[test]
    fn default_duration_comes_from_config() {
        let config: PulseConfig = toml::from_str(
            r"
            [board]
            animation_ms = 50
            ",
        )
        .unwrap();
        let mut app = App::new(&config);
        app.trigger_animation(&ANIM_BOX, CLASS_ANIMATED, None);
        app.advance(Duration::from_millis(49));
        assert!(app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
        app.advance(Duration::from_millis(1));
        assert!(!app.widget(&ANIM_BOX).unwrap().has_class(&CLASS_ANIMATED));
    }

    #[test]
    fn spinner_tick_advances_on_cadence() {
        let mut app = App::default();
        let before = app.tick_count();
        app.advance(Duration::from_millis(100));
        assert_eq!(app.tick_count(), before + 1);
        app.advance(Duration::from_millis(250));
        assert_eq!(app.tick_count(), before + 3);
    }

    #[test]
    fn quit_flag_latches() {
        let mut app = App::default();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
