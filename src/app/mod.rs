// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod event;

// Re-export config types for convenience
pub use config::{AnimationConfig, InputMode, MapSettings};

use crate::engine::{
    EngineConfig, EngineError, Point, RenderSnapshot, RouteEngine, Subscription, MAP_HEIGHT,
    MAP_WIDTH,
};
use crate::enquiry::{EnquiryForm, Toast};
use config::{FRAME_INTERVAL, FRAME_TIME_THRESHOLD_MS, SLOW_FRAME_COUNT_THRESHOLD};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Route animation engine (owns progress, direction, hover)
    pub engine: RouteEngine,

    /// Snapshot feed from the engine
    subscription: Subscription,

    /// Latest snapshot received from the engine
    pub snapshot: RenderSnapshot,

    /// Set when a new snapshot arrived and the screen is stale
    needs_redraw: bool,

    /// Start of the decorative animation clock
    started_at: Instant,

    /// Last time a frame was drawn
    last_draw: Instant,

    /// Oscillator cadence configuration
    pub animation_config: AnimationConfig,

    /// Map visual settings (animations, labels, cursor)
    pub map_settings: MapSettings,

    /// Where keyboard input is routed
    pub input_mode: InputMode,

    /// Enquiry form state
    pub enquiry: EnquiryForm,

    /// Most recent notification, if still visible
    pub toast: Option<Toast>,

    /// Pointer position in map space, `None` when off the map
    pub pointer: Option<Point>,

    /// Inner canvas area of the map, recorded by the renderer for
    /// translating mouse positions
    pub map_area: Rect,

    /// Timestamp of the last frame render
    last_frame_time: Instant,

    /// Counter for consecutive slow frames (frame time > 100ms)
    slow_frame_count: u32,

    /// Whether animation complexity has been auto-reduced due to performance
    pub animation_reduced: bool,
}

impl AppState {
    /// Create a new AppState with the default route, ports and cargo
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(AnimationConfig::new(), EngineConfig::default())
    }

    /// Create and mount the map view
    pub fn with_config(
        animation_config: AnimationConfig,
        engine_config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let now = Instant::now();

        let mut engine = RouteEngine::new(EngineConfig {
            tick_interval: animation_config.tick_interval(),
            step: animation_config.step,
            ..engine_config
        })?;
        let subscription = engine.subscribe();
        let snapshot = engine.snapshot();
        engine.mount(now);

        Ok(Self {
            running: true,
            engine,
            subscription,
            snapshot,
            needs_redraw: true,
            started_at: now,
            last_draw: now,
            animation_config,
            map_settings: MapSettings::default(),
            input_mode: InputMode::default(),
            enquiry: EnquiryForm::new(),
            toast: None,
            pointer: None,
            map_area: Rect::default(),
            last_frame_time: now,
            slow_frame_count: 0,
            animation_reduced: false,
        })
    }

    /// Drive timers: oscillator, enquiry submission, toast expiry
    pub fn on_tick(&mut self, now: Instant) {
        self.engine.advance(now);
        self.pull_snapshot();

        if let Some(toast) = self.enquiry.poll(now) {
            self.toast = Some(toast);
            self.needs_redraw = true;
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            self.needs_redraw = true;
        }
    }

    /// Take the newest snapshot from the engine feed
    fn pull_snapshot(&mut self) {
        if let Some(snapshot) = self.subscription.latest() {
            self.snapshot = snapshot;
            self.needs_redraw = true;
        }
    }

    /// Time since the view was mounted, for decorative animation
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Whether a frame should be drawn at `now`
    ///
    /// Redraws when the snapshot changed, and at `FRAME_INTERVAL` while
    /// decorative animation is running.
    pub fn should_draw(&self, now: Instant) -> bool {
        self.needs_redraw
            || (self.map_settings.animations_enabled
                && now.saturating_duration_since(self.last_draw) >= FRAME_INTERVAL)
    }

    pub fn mark_drawn(&mut self, now: Instant) {
        self.needs_redraw = false;
        self.last_draw = now;
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let next_tick = self.engine.until_next_tick(now).unwrap_or(FRAME_INTERVAL);
        next_tick.min(FRAME_INTERVAL)
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Handle a pointer move to terminal cell (`column`, `row`)
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.pointer = cell_to_map(self.map_area, column, row);
        let radius = hit_radius(self.map_area);
        self.engine.pointer_moved(self.pointer, radius);
        self.pull_snapshot();
        if self.map_settings.cursor_enabled {
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------
    // Tick interval
    // ------------------------------------------------------------------

    /// Shorten the tick interval by `TICK_STEP_MS`, down to `MIN_TICK_MS`
    pub fn increase_tick_rate(&mut self) {
        let ms = self
            .animation_config
            .tick_ms
            .saturating_sub(config::TICK_STEP_MS)
            .max(config::MIN_TICK_MS);
        self.set_tick_ms(ms);
    }

    /// Lengthen the tick interval by `TICK_STEP_MS`, up to `MAX_TICK_MS`
    pub fn decrease_tick_rate(&mut self) {
        let ms = self
            .animation_config
            .tick_ms
            .saturating_add(config::TICK_STEP_MS)
            .min(config::MAX_TICK_MS);
        self.set_tick_ms(ms);
    }

    fn set_tick_ms(&mut self, ms: u64) {
        self.animation_config.tick_ms = ms;
        self.animation_config.last_change = Some(Instant::now());
        self.engine
            .set_tick_interval(self.animation_config.tick_interval());
        tracing::debug!(tick_ms = ms, "Tick interval changed");
    }

    // ------------------------------------------------------------------
    // Enquiry
    // ------------------------------------------------------------------

    pub fn focus_enquiry(&mut self) {
        self.input_mode = InputMode::Enquiry;
    }

    pub fn leave_enquiry(&mut self) {
        self.input_mode = InputMode::Map;
    }

    /// Paste text into the focused enquiry field
    pub fn paste(&mut self, text: &str) {
        if self.input_mode == InputMode::Enquiry {
            self.enquiry.paste(text);
            self.needs_redraw = true;
        }
    }

    /// Submit the enquiry; validation problems surface as an error toast
    pub fn submit_enquiry(&mut self, now: Instant) {
        if let Err(e) = self.enquiry.submit(now) {
            tracing::debug!(error = %e, "Enquiry not submitted");
            self.toast = Some(Toast::error(e.to_string(), now));
        }
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // Performance
    // ------------------------------------------------------------------

    /// Update frame time tracking and auto-reduce animation complexity if needed
    ///
    /// This method should be called at the start of each frame render.
    /// If frame time consistently exceeds FRAME_TIME_THRESHOLD_MS, route
    /// glints and the ship wake are dropped.
    pub fn update_frame_time(&mut self, now: Instant) {
        let frame_time = now.saturating_duration_since(self.last_frame_time).as_millis();
        self.last_frame_time = now;

        if frame_time > FRAME_TIME_THRESHOLD_MS {
            self.slow_frame_count += 1;

            if self.slow_frame_count >= SLOW_FRAME_COUNT_THRESHOLD && !self.animation_reduced {
                self.animation_reduced = true;
                tracing::info!(
                    frame_time_ms = frame_time as u64,
                    slow_frame_count = self.slow_frame_count,
                    "Auto-reducing animation complexity due to slow frame times"
                );
            }
        } else if !self.animation_reduced {
            self.slow_frame_count = 0;
        }
    }

    /// Reset animation complexity reduction
    ///
    /// Called when the user manually toggles animations.
    pub fn reset_animation_reduction(&mut self) {
        self.animation_reduced = false;
        self.slow_frame_count = 0;
    }

    /// Stop the animation timer before the view goes away
    pub fn shutdown(&mut self) {
        if self.engine.is_mounted() {
            self.engine.unmount();
            tracing::info!(progress = self.engine.progress(), "Route view unmounted");
        }
        self.running = false;
    }
}

/// Translate a terminal cell to map space
///
/// Uses the cell centre. Returns `None` outside `area`.
pub fn cell_to_map(area: Rect, column: u16, row: u16) -> Option<Point> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }

    let x = (f64::from(column - area.x) + 0.5) / f64::from(area.width) * MAP_WIDTH;
    let y = (f64::from(row - area.y) + 0.5) / f64::from(area.height) * MAP_HEIGHT;
    Some(Point::new(x, y))
}

/// Port marker half-extent in map units: two cells wide, one cell tall
pub fn hit_radius(area: Rect) -> (f64, f64) {
    if area.width == 0 || area.height == 0 {
        return (0.0, 0.0);
    }
    let cell_w = MAP_WIDTH / f64::from(area.width);
    let cell_h = MAP_HEIGHT / f64::from(area.height);
    (cell_w * 2.0, cell_h)
}

/// Inverse of `cell_to_map`, for placing test pointer events
#[cfg(test)]
pub fn map_to_cell(area: Rect, point: Point) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let col = (point.x / MAP_WIDTH * f64::from(area.width)).floor();
    let row = (point.y / MAP_HEIGHT * f64::from(area.height)).floor();
    if col < 0.0 || row < 0.0 || col >= f64::from(area.width) || row >= f64::from(area.height) {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, PortId, DEFAULT_ROUTE};
    use crate::enquiry::{ToastKind, SUBMIT_DELAY, SUCCESS_MESSAGE};
    use proptest::prelude::*;

    fn map_area() -> Rect {
        Rect::new(1, 1, 100, 30)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any map point inside the area maps to a cell whose centre maps
        /// back to within one cell of the original point
        #[test]
        fn prop_cell_mapping_round_trip(
            x in 0.0f64..500.0,
            y in 0.0f64..300.0,
        ) {
            let area = map_area();
            let (col, row) = map_to_cell(area, Point::new(x, y)).unwrap();
            let back = cell_to_map(area, col, row).unwrap();
            prop_assert!((back.x - x).abs() <= MAP_WIDTH / 100.0);
            prop_assert!((back.y - y).abs() <= MAP_HEIGHT / 30.0);
        }
    }

    #[test]
    fn test_new_state_is_mounted() {
        let app = AppState::new().unwrap();
        assert!(app.running);
        assert!(app.engine.is_mounted());
        assert_eq!(app.snapshot.ship_position, DEFAULT_ROUTE.start);
        assert_eq!(app.input_mode, InputMode::Map);
    }

    #[test]
    fn test_on_tick_advances_ship() {
        let mut app = AppState::new().unwrap();
        let start = app.snapshot.ship_position;

        let later = Instant::now() + Duration::from_millis(60);
        app.on_tick(later);

        assert_ne!(app.snapshot.ship_position, start);
        assert_eq!(app.snapshot.direction, Direction::Forward);
        assert!(app.should_draw(later));
    }

    #[test]
    fn test_shutdown_stops_timer() {
        let mut app = AppState::new().unwrap();
        app.shutdown();
        assert!(!app.running);
        assert!(!app.engine.is_mounted());

        let before = app.engine.progress();
        app.on_tick(Instant::now() + Duration::from_secs(5));
        assert_eq!(app.engine.progress(), before);
    }

    #[test]
    fn test_pointer_hover_over_port() {
        let mut app = AppState::new().unwrap();
        app.map_area = map_area();

        let (col, row) = map_to_cell(app.map_area, Point::new(380.0, 120.0)).unwrap();
        app.pointer_moved(col, row);
        assert_eq!(app.snapshot.hovered_port_id, Some(PortId::from("shanghai")));

        // Off the map clears the hover
        app.pointer_moved(0, 0);
        assert_eq!(app.pointer, None);
        assert_eq!(app.snapshot.hovered_port_id, None);
    }

    #[test]
    fn test_cell_to_map_bounds() {
        let area = map_area();
        assert!(cell_to_map(area, 0, 5).is_none());
        assert!(cell_to_map(area, 101, 5).is_none());
        assert!(cell_to_map(area, 50, 31).is_none());
        assert!(cell_to_map(Rect::default(), 0, 0).is_none());

        let p = cell_to_map(area, 1, 1).unwrap();
        assert!((p.x - 2.5).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_radius_scales_with_area() {
        let (rx, ry) = hit_radius(map_area());
        assert!((rx - 10.0).abs() < 1e-9);
        assert!((ry - 10.0).abs() < 1e-9);
        assert_eq!(hit_radius(Rect::default()), (0.0, 0.0));
    }

    #[test]
    fn test_tick_rate_clamps() {
        let mut app = AppState::new().unwrap();

        for _ in 0..50 {
            app.increase_tick_rate();
        }
        assert_eq!(app.animation_config.tick_ms, config::MIN_TICK_MS);
        assert_eq!(
            app.engine.tick_interval(),
            Duration::from_millis(config::MIN_TICK_MS)
        );

        for _ in 0..50 {
            app.decrease_tick_rate();
        }
        assert_eq!(app.animation_config.tick_ms, config::MAX_TICK_MS);
        assert!(app.animation_config.last_change.is_some());
    }

    #[test]
    fn test_submit_enquiry_flow() {
        let mut app = AppState::new().unwrap();
        let t0 = Instant::now();

        // Empty form shows an error toast
        app.submit_enquiry(t0);
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
        assert!(!app.enquiry.is_submitting());

        for (name, value) in [
            ("name", "Asha"),
            ("company", "Asha Exports"),
            ("email", "asha@example.com"),
            ("phone", "+91 90000 00000"),
            ("country", "India"),
            ("requirement", "Copper wire, 2 tonnes"),
        ] {
            app.enquiry.set_value(name, value).unwrap();
        }
        app.submit_enquiry(t0);
        assert!(app.enquiry.is_submitting());

        app.on_tick(t0 + SUBMIT_DELAY);
        let toast = app.toast.clone().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, SUCCESS_MESSAGE);

        // Toast expires later
        app.on_tick(t0 + SUBMIT_DELAY + Duration::from_secs(5));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_slow_frames_reduce_animation() {
        let mut app = AppState::new().unwrap();
        let mut now = Instant::now();
        for _ in 0..config::SLOW_FRAME_COUNT_THRESHOLD {
            now += Duration::from_millis(200);
            app.update_frame_time(now);
        }
        assert!(app.animation_reduced);

        app.reset_animation_reduction();
        assert!(!app.animation_reduced);
    }

    #[test]
    fn test_fast_frames_do_not_reduce() {
        let mut app = AppState::new().unwrap();
        let mut now = Instant::now();
        for _ in 0..20 {
            now += Duration::from_millis(30);
            app.update_frame_time(now);
        }
        assert!(!app.animation_reduced);
    }

    #[test]
    fn test_redraw_bookkeeping() {
        let mut app = AppState::new().unwrap();
        let now = Instant::now();
        app.mark_drawn(now);
        assert!(!app.should_draw(now));

        // Decorative clock forces a frame
        assert!(app.should_draw(now + FRAME_INTERVAL));

        // Without animations only snapshot changes redraw
        app.map_settings.animations_enabled = false;
        assert!(!app.should_draw(now + FRAME_INTERVAL));
        app.request_redraw();
        assert!(app.should_draw(now));
    }

    #[test]
    fn test_poll_timeout_bounded() {
        let app = AppState::new().unwrap();
        assert!(app.poll_timeout(Instant::now()) <= FRAME_INTERVAL);
    }

    #[test]
    fn test_paste_only_reaches_open_form() {
        let mut app = AppState::new().unwrap();
        app.paste("Jane");
        assert_eq!(app.enquiry.value("name"), Some(""));

        app.focus_enquiry();
        app.paste("Jane");
        assert_eq!(app.enquiry.value("name"), Some("Jane"));
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut app = AppState::new().unwrap();
        app.shutdown();
        app.shutdown();
        assert!(!app.running);
        assert!(!app.engine.is_mounted());
    }
}
