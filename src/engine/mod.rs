// Route animation engine
//
// Composes the oscillator, the Bézier route and the hover state into a
// single owner of animation state. The engine publishes a RenderSnapshot to
// its subscribers whenever that snapshot changes; the UI layer never reads
// the oscillator directly.

pub mod bezier;
pub mod cargo;
pub mod error;
pub mod hover;
pub mod oscillator;
pub mod port;
pub mod timer;

pub use bezier::{Point, QuadraticBezier};
pub use cargo::{CargoIcon, CargoKind};
pub use error::EngineError;
pub use oscillator::Direction;
pub use port::{Port, PortId};

use hover::HoverState;
use oscillator::ProgressOscillator;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use timer::AnimationTimer;
use tracing::{debug, info};

/// Map space width; x runs left to right
pub const MAP_WIDTH: f64 = 500.0;

/// Map space height; y runs top to bottom
pub const MAP_HEIGHT: f64 = 300.0;

/// Default route: Shanghai, arcing south, to Mumbai
pub const DEFAULT_ROUTE: QuadraticBezier = QuadraticBezier::new(
    Point::new(380.0, 120.0),
    Point::new(300.0, 200.0),
    Point::new(180.0, 180.0),
);

/// Default oscillator cadence
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Default progress increment per tick (about 6 s per crossing at 50 ms)
pub const DEFAULT_STEP: f64 = 0.008;

/// Fixed progress values used to scatter glints along the route
pub const GLINT_OFFSETS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Static inputs to the engine, supplied once at construction
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub route: QuadraticBezier,
    pub ports: Vec<Port>,
    pub cargo: Vec<CargoIcon>,
    pub tick_interval: Duration,
    pub step: f64,
    /// Where the ship starts along the route, clamped into [0, 1]
    pub start_progress: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            route: DEFAULT_ROUTE,
            ports: port::default_ports(),
            cargo: cargo::default_cargo(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            step: DEFAULT_STEP,
            start_progress: 0.0,
        }
    }
}

/// Everything the renderer needs from the engine for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub ship_position: Point,
    pub direction: Direction,
    pub hovered_port_id: Option<PortId>,
}

/// Receiving end of the engine's snapshot feed
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<RenderSnapshot>,
}

impl Subscription {
    /// Most recent snapshot published since the last call, if any
    pub fn latest(&self) -> Option<RenderSnapshot> {
        self.rx.try_iter().last()
    }
}

#[derive(Debug)]
pub struct RouteEngine {
    route: QuadraticBezier,
    ports: Vec<Port>,
    cargo: Vec<CargoIcon>,
    oscillator: ProgressOscillator,
    hover: HoverState,
    tick_interval: Duration,
    timer: Option<AnimationTimer>,
    subscribers: Vec<Sender<RenderSnapshot>>,
    last_published: Option<RenderSnapshot>,
}

impl RouteEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let ports = port::validate_ports(config.ports)?;

        info!(
            ports = ports.len(),
            cargo = config.cargo.len(),
            tick_ms = config.tick_interval.as_millis() as u64,
            step = config.step,
            "Route engine created"
        );

        Ok(Self {
            route: config.route,
            ports,
            cargo: config.cargo,
            oscillator: ProgressOscillator::resume(
                config.start_progress,
                Direction::Forward,
                config.step,
            ),
            hover: HoverState::new(),
            tick_interval: config.tick_interval,
            timer: None,
            subscribers: Vec::new(),
            last_published: None,
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Start the animation timer
    ///
    /// Mounting twice keeps the running timer.
    pub fn mount(&mut self, now: Instant) {
        if self.timer.is_none() {
            self.timer = Some(AnimationTimer::start(self.tick_interval, now));
        }
        self.publish();
    }

    /// Stop the animation timer; progress stays where it is
    pub fn unmount(&mut self) {
        self.timer = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    /// Run the oscillator if the timer is due; returns whether it ticked
    pub fn advance(&mut self, now: Instant) -> bool {
        let due = self
            .timer
            .as_mut()
            .is_some_and(|timer| timer.fire_if_due(now));
        if due {
            self.tick();
        }
        due
    }

    /// Time until the next oscillator tick, `None` when unmounted
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|timer| timer.until_next(now))
    }

    /// Advance the oscillator by one step and publish
    pub fn tick(&mut self) {
        self.oscillator.tick();
        self.publish();
    }

    /// Interval of the running timer, or the one it will start with
    pub fn tick_interval(&self) -> Duration {
        self.timer
            .as_ref()
            .map_or(self.tick_interval, AnimationTimer::interval)
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
        if let Some(timer) = self.timer.as_mut() {
            timer.set_interval(interval);
        }
    }

    // ------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------

    pub fn pointer_enter(&mut self, id: &PortId) {
        self.hover.enter(id);
        self.publish();
    }

    pub fn pointer_leave(&mut self, id: &PortId) {
        match self.hover.leave(id) {
            Ok(()) => self.publish(),
            Err(e) => debug!(error = %e, "Ignoring pointer leave"),
        }
    }

    /// Translate a raw pointer position into leave/enter events
    ///
    /// `None` means the pointer is off the map. `radius` is the marker
    /// half-extent in map units.
    pub fn pointer_moved(&mut self, point: Option<Point>, radius: (f64, f64)) {
        let target = point
            .and_then(|p| port::port_at(&self.ports, p, radius))
            .map(|p| p.id.clone());

        let current = self.hover.hovered().cloned();
        if current == target {
            return;
        }
        if let Some(previous) = current {
            self.pointer_leave(&previous);
        }
        if let Some(next) = target {
            self.pointer_enter(&next);
        }
    }

    pub fn is_hovered(&self, id: &PortId) -> bool {
        self.hover.is_hovered(id)
    }

    pub fn hovered_port(&self) -> Option<&Port> {
        let id = self.hover.hovered()?;
        self.ports.iter().find(|p| &p.id == id)
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ship_position: self.route.point_at(self.oscillator.progress()),
            direction: self.oscillator.direction(),
            hovered_port_id: self.hover.hovered().cloned(),
        }
    }

    /// Register a new snapshot receiver
    ///
    /// The current snapshot is delivered immediately so a late subscriber
    /// can draw its first frame.
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let snapshot = self.snapshot();
        if self.last_published.as_ref() != Some(&snapshot) {
            // Bring existing subscribers up to the same snapshot
            self.subscribers
                .retain(|tx| tx.send(snapshot.clone()).is_ok());
        }
        // A fresh receiver cannot be disconnected yet
        let _ = tx.send(snapshot.clone());
        self.subscribers.push(tx);
        self.last_published = Some(snapshot);
        debug!(subscribers = self.subscriber_count(), "Snapshot subscriber added");
        Subscription { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send the current snapshot if it differs from the last one sent
    fn publish(&mut self) {
        let snapshot = self.snapshot();
        if self.last_published.as_ref() == Some(&snapshot) {
            return;
        }
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
        self.last_published = Some(snapshot);
    }

    // ------------------------------------------------------------------
    // Static data
    // ------------------------------------------------------------------

    pub fn route(&self) -> &QuadraticBezier {
        &self.route
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn cargo(&self) -> &[CargoIcon] {
        &self.cargo
    }

    pub fn progress(&self) -> f64 {
        self.oscillator.progress()
    }

    pub fn direction(&self) -> Direction {
        self.oscillator.direction()
    }

    /// Progress increment per tick
    pub fn step(&self) -> f64 {
        self.oscillator.step()
    }

    /// Route points at the fixed glint offsets
    pub fn glints(&self) -> Vec<Point> {
        self.route.sample(&GLINT_OFFSETS)
    }

    /// Port whose marker is closest to `point`
    pub fn nearest_port(&self, point: Point) -> Option<&Port> {
        self.ports.iter().min_by(|a, b| {
            let da = (a.x - point.x).powi(2) + (a.y - point.y).powi(2);
            let db = (b.x - point.x).powi(2) + (b.y - point.y).powi(2);
            da.total_cmp(&db)
        })
    }

    /// (departure, arrival) ports for the current sweep
    pub fn voyage(&self) -> (Option<&Port>, Option<&Port>) {
        let origin = self.nearest_port(self.route.start);
        let destination = self.nearest_port(self.route.end);
        match self.oscillator.direction() {
            Direction::Forward => (origin, destination),
            Direction::Backward => (destination, origin),
        }
    }
}
