//! Core simulation types for the bugswarm toy.
//!
//! A swarm of "bugs" chases a tracked pointer across a viewport. Each bug
//! carries a real-valued position, a discrete heading, and a momentum
//! countdown that defers new turns. All state transitions are pure with
//! respect to the seeded RNG, so identically-configured swarms advance in
//! lockstep.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

/// High level simulation clock (ticks processed since boot).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl Tick {
    /// Returns the next sequential tick.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Resets the tick counter back to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }
}

/// Axis-aligned 2D position in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Construct a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Discrete movement direction; both components are always in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Heading {
    pub dx: i8,
    pub dy: i8,
}

impl Heading {
    /// Construct a heading, clamping both components into {-1, 0, 1}.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: clamp_axis(dx),
            dy: clamp_axis(dy),
        }
    }

    /// Per-axis sign of a pointer offset; a zero offset component maps to 0.
    #[must_use]
    pub fn from_offset(dx: f32, dy: f32) -> Self {
        Self {
            dx: offset_sign(dx),
            dy: offset_sign(dy),
        }
    }

    /// One turn-resolution step from `self` toward `desired`.
    ///
    /// At most one axis changes, by at most one unit, except when both axes
    /// differ from the current heading by the same nonzero amount: that exact
    /// tie snaps straight to `desired` (a full reversal). The tie exception is
    /// load-bearing for the visual turning-circle effect.
    #[must_use]
    pub fn steer_toward(self, desired: Self) -> Self {
        if desired == self {
            return self;
        }
        let diff_x = (desired.dx - self.dx).abs();
        let diff_y = (desired.dy - self.dy).abs();
        if diff_x == 0 {
            Self {
                dy: step_axis(self.dy, desired.dy),
                ..self
            }
        } else if diff_y == 0 {
            Self {
                dx: step_axis(self.dx, desired.dx),
                ..self
            }
        } else if diff_x > diff_y {
            Self {
                dy: step_axis(self.dy, desired.dy),
                ..self
            }
        } else if diff_y > diff_x {
            Self {
                dx: step_axis(self.dx, desired.dx),
                ..self
            }
        } else {
            desired
        }
    }

    /// Cell in the 3x3 directional sprite table for this heading.
    #[must_use]
    pub const fn sprite(self) -> SpriteIndex {
        SpriteIndex {
            row: axis_index(self.dy),
            col: axis_index(self.dx),
        }
    }
}

const fn clamp_axis(component: i8) -> i8 {
    if component > 1 {
        1
    } else if component < -1 {
        -1
    } else {
        component
    }
}

fn offset_sign(value: f32) -> i8 {
    if value < 0.0 {
        -1
    } else if value > 0.0 {
        1
    } else {
        0
    }
}

fn step_axis(current: i8, desired: i8) -> i8 {
    match desired.cmp(&current) {
        std::cmp::Ordering::Greater => current + 1,
        std::cmp::Ordering::Less => current - 1,
        std::cmp::Ordering::Equal => current,
    }
}

/// Maps a heading component into a sprite-table axis: -1 -> 0, 0 -> 1, 1 -> 2.
const fn axis_index(component: i8) -> usize {
    (component + 1) as usize
}

/// Row/column into the 3x3 directional sprite table.
///
/// The centre cell (heading (0, 0)) is a valid index; it occurs transiently
/// while a bug turns through a cardinal reversal, and the renderer picks its
/// glyph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteIndex {
    pub row: usize,
    pub col: usize,
}

/// One simulated bug.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bug {
    /// Centre position in viewport coordinates.
    pub position: Position,
    /// Last applied discrete direction of movement.
    pub heading: Heading,
    /// Countdown; while positive the bug repeats its heading instead of
    /// recomputing one.
    pub momentum: u32,
}

/// Per-bug render datum consumed by the display collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BugSprite {
    pub position: Position,
    pub sprite: SpriteIndex,
}

/// Events emitted after processing one simulation tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub tick: Tick,
    /// Bugs that evaded the pointer by relocating this tick.
    pub relocations: usize,
}

/// Per-tick record retained in the bounded history buffer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: Tick,
    pub bug_count: usize,
    pub relocations: usize,
}

/// Errors raised when constructing or reconfiguring swarm state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwarmError {
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Static configuration for a swarm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwarmConfig {
    /// Viewport width in display units (must be positive).
    pub viewport_width: f32,
    /// Viewport height in display units (must be positive).
    pub viewport_height: f32,
    /// Initial population created by [`SwarmState::ensure_population`].
    pub start_bugs: usize,
    /// Distance covered per move, in display units.
    pub step: f32,
    /// Momentum value restored after each fresh turn resolution.
    pub inertia: u32,
    /// Timer rate the hosting shell should drive [`SwarmState::step`] at.
    pub tick_hz: f32,
    /// Optional RNG seed for reproducible swarms.
    pub rng_seed: Option<u64>,
    /// Maximum number of recent tick summaries retained in-memory.
    pub history_capacity: usize,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            viewport_width: 640.0,
            viewport_height: 480.0,
            start_bugs: 5,
            step: 3.0,
            inertia: 5,
            tick_hz: 20.0,
            rng_seed: None,
            history_capacity: 256,
        }
    }
}

impl SwarmConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(SwarmError::InvalidConfig(
                "viewport dimensions must be positive",
            ));
        }
        if !(self.step > 0.0) {
            return Err(SwarmError::InvalidConfig("step must be positive"));
        }
        if self.inertia == 0 {
            return Err(SwarmError::InvalidConfig("inertia must be at least 1"));
        }
        if !(self.tick_hz > 0.0 && self.tick_hz.is_finite()) {
            return Err(SwarmError::InvalidConfig("tick_hz must be positive"));
        }
        if self.history_capacity == 0 {
            return Err(SwarmError::InvalidConfig(
                "history_capacity must be at least 1",
            ));
        }
        Ok(())
    }

    /// Distance threshold below which a bug evades the pointer by relocating.
    #[must_use]
    pub fn capture_threshold(&self) -> f32 {
        self.inertia as f32 * self.step / 2.0
    }

    /// Interval between timer activations at the configured rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.tick_hz)
    }

    /// Returns the configured RNG, seeding from entropy when no seed is set.
    fn seeded_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let seed: u64 = rand::random();
                SmallRng::seed_from_u64(seed)
            }
        }
    }
}

/// Aggregate swarm state owned by the hosting UI layer.
///
/// Pointer updates and pause toggles arrive asynchronously between ticks;
/// [`SwarmState::step`] consumes whatever was observed last.
pub struct SwarmState {
    config: SwarmConfig,
    rng: SmallRng,
    bugs: Vec<Bug>,
    pointer: Position,
    paused: bool,
    tick: Tick,
    populated: bool,
    history: VecDeque<TickSummary>,
}

impl std::fmt::Debug for SwarmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmState")
            .field("config", &self.config)
            .field("tick", &self.tick)
            .field("bug_count", &self.bugs.len())
            .field("paused", &self.paused)
            .finish()
    }
}

impl SwarmState {
    /// Instantiate a new swarm using the supplied configuration.
    pub fn new(config: SwarmConfig) -> Result<Self, SwarmError> {
        config.validate()?;
        let rng = config.seeded_rng();
        let history_capacity = config.history_capacity;
        Ok(Self {
            config,
            rng,
            bugs: Vec::new(),
            pointer: Position::default(),
            paused: false,
            tick: Tick::zero(),
            populated: false,
            history: VecDeque::with_capacity(history_capacity),
        })
    }

    /// One-shot startup guard: spawns the initial population on the first
    /// call and does nothing on every later one. Returns the number spawned.
    pub fn ensure_population(&mut self) -> usize {
        if self.populated {
            return 0;
        }
        self.populated = true;
        for _ in 0..self.config.start_bugs {
            self.spawn();
        }
        self.config.start_bugs
    }

    /// Create one bug at a uniformly random viewport position with heading
    /// (1, 1) and momentum in [1, inertia]. Returns its index.
    pub fn spawn(&mut self) -> usize {
        let position = self.random_position();
        let momentum = self.rng.random_range(1..=self.config.inertia);
        self.bugs.push(Bug {
            position,
            heading: Heading::new(1, 1),
            momentum,
        });
        self.bugs.len() - 1
    }

    /// Record the last observed pointer position.
    pub fn set_pointer(&mut self, pointer: Position) {
        self.pointer = pointer;
    }

    /// Pause or resume the simulation (pointer left/entered the interactive
    /// region).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Replace the viewport dimensions. Existing positions are not clamped;
    /// bounds only constrain future random placements.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), SwarmError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SwarmError::InvalidConfig(
                "viewport dimensions must be positive",
            ));
        }
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        Ok(())
    }

    /// Advance the simulation by one timer activation.
    ///
    /// While paused no bug state changes; the clock still advances and a
    /// zero-relocation summary is recorded. Otherwise every bug, in creation
    /// order, either evades a too-close pointer by relocating or resolves a
    /// turn and moves one step.
    pub fn step(&mut self) -> TickEvents {
        let mut relocations = 0usize;
        if !self.paused {
            let threshold = self.config.capture_threshold();
            let step = self.config.step;
            let inertia = self.config.inertia;
            let width = self.config.viewport_width;
            let height = self.config.viewport_height;
            let pointer = self.pointer;
            for bug in &mut self.bugs {
                let offset_x = pointer.x - bug.position.x;
                let offset_y = pointer.y - bug.position.y;

                // Evasion: relocate instead of being caught. Heading and
                // momentum are untouched and no move happens this tick.
                if offset_x.abs() < threshold && offset_y.abs() < threshold {
                    bug.position = Position::new(
                        self.rng.random_range(0.0..width),
                        self.rng.random_range(0.0..height),
                    );
                    relocations += 1;
                    continue;
                }

                let desired = Heading::from_offset(offset_x, offset_y);
                let heading = if bug.momentum > 0 {
                    bug.momentum -= 1;
                    bug.heading
                } else {
                    bug.momentum = inertia;
                    bug.heading.steer_toward(desired)
                };
                bug.position.x += f32::from(heading.dx) * step;
                bug.position.y += f32::from(heading.dy) * step;
                bug.heading = heading;
            }
        }

        self.tick = self.tick.next();
        let summary = TickSummary {
            tick: self.tick,
            bug_count: self.bugs.len(),
            relocations,
        };
        if self.history.len() >= self.config.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(summary);
        TickEvents {
            tick: self.tick,
            relocations,
        }
    }

    /// Pure render snapshot: (position, sprite index) per bug in creation
    /// order.
    #[must_use]
    pub fn frame(&self) -> Vec<BugSprite> {
        self.bugs
            .iter()
            .map(|bug| BugSprite {
                position: bug.position,
                sprite: bug.heading.sprite(),
            })
            .collect()
    }

    fn random_position(&mut self) -> Position {
        Position::new(
            self.rng.random_range(0.0..self.config.viewport_width),
            self.rng.random_range(0.0..self.config.viewport_height),
        )
    }

    /// Returns an immutable reference to configuration.
    #[must_use]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Current simulation tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Whether the simulation is currently paused.
    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }

    /// Last observed pointer position.
    #[must_use]
    pub const fn pointer(&self) -> Position {
        self.pointer
    }

    /// Read-only access to the bugs in creation order.
    #[must_use]
    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    /// Mutable access to the bugs (used by tests and debug tooling).
    #[must_use]
    pub fn bugs_mut(&mut self) -> &mut [Bug] {
        &mut self.bugs
    }

    /// Number of live bugs.
    #[must_use]
    pub fn bug_count(&self) -> usize {
        self.bugs.len()
    }

    /// Iterate over retained tick summaries, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TickSummary> {
        self.history.iter()
    }

    /// Borrow the swarm RNG mutably for deterministic sampling.
    #[must_use]
    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_AXES: [i8; 3] = [-1, 0, 1];

    fn seeded_config(seed: u64) -> SwarmConfig {
        SwarmConfig {
            rng_seed: Some(seed),
            ..SwarmConfig::default()
        }
    }

    fn single_bug_state(seed: u64) -> SwarmState {
        let mut state = SwarmState::new(seeded_config(seed)).expect("state");
        state.spawn();
        state
    }

    fn place_bug(state: &mut SwarmState, position: Position, heading: Heading, momentum: u32) {
        let bug = &mut state.bugs_mut()[0];
        bug.position = position;
        bug.heading = heading;
        bug.momentum = momentum;
    }

    #[test]
    fn steer_is_idempotent_when_already_aligned() {
        for dx in ALL_AXES {
            for dy in ALL_AXES {
                let heading = Heading::new(dx, dy);
                assert_eq!(heading.steer_toward(heading), heading);
            }
        }
    }

    #[test]
    fn steer_changes_at_most_one_axis_except_exact_tie() {
        for cdx in ALL_AXES {
            for cdy in ALL_AXES {
                for ddx in ALL_AXES {
                    for ddy in ALL_AXES {
                        let current = Heading::new(cdx, cdy);
                        let desired = Heading::new(ddx, ddy);
                        let resolved = current.steer_toward(desired);
                        let diff_x = (ddx - cdx).abs();
                        let diff_y = (ddy - cdy).abs();
                        if diff_x == diff_y && diff_x != 0 {
                            assert_eq!(resolved, desired, "tie must snap to desired");
                        } else {
                            let moved_x = (resolved.dx - cdx).abs();
                            let moved_y = (resolved.dy - cdy).abs();
                            assert!(moved_x + moved_y <= 1, "one unit on one axis at most");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn cardinal_reversal_passes_through_zero() {
        let current = Heading::new(1, 0);
        let desired = Heading::new(-1, 0);
        assert_eq!(current.steer_toward(desired), Heading::new(0, 0));
    }

    #[test]
    fn diagonal_tie_reverses_fully() {
        let current = Heading::new(1, 1);
        let desired = Heading::new(-1, -1);
        assert_eq!(current.steer_toward(desired), Heading::new(-1, -1));
    }

    #[test]
    fn larger_axis_difference_wins() {
        // diff_x = 2, diff_y = 1: only the y axis adjusts.
        let current = Heading::new(1, 0);
        let desired = Heading::new(-1, 1);
        assert_eq!(current.steer_toward(desired), Heading::new(1, 1));
    }

    #[test]
    fn desired_heading_is_per_axis_offset_sign() {
        assert_eq!(Heading::from_offset(5.0, -0.25), Heading::new(1, -1));
        assert_eq!(Heading::from_offset(0.0, 40.0), Heading::new(0, 1));
        assert_eq!(Heading::from_offset(-1.0, 0.0), Heading::new(-1, 0));
        assert_eq!(Heading::from_offset(0.0, 0.0), Heading::new(0, 0));
    }

    #[test]
    fn sprite_table_covers_all_nine_headings() {
        for dx in ALL_AXES {
            for dy in ALL_AXES {
                let sprite = Heading::new(dx, dy).sprite();
                assert_eq!(sprite.col, (dx + 1) as usize);
                assert_eq!(sprite.row, (dy + 1) as usize);
            }
        }
        assert_eq!(
            Heading::new(0, 0).sprite(),
            SpriteIndex { row: 1, col: 1 },
            "centre cell is reachable while turning"
        );
    }

    #[test]
    fn config_rejects_degenerate_values() {
        let cases = [
            SwarmConfig {
                viewport_width: 0.0,
                ..SwarmConfig::default()
            },
            SwarmConfig {
                viewport_height: -4.0,
                ..SwarmConfig::default()
            },
            SwarmConfig {
                step: 0.0,
                ..SwarmConfig::default()
            },
            SwarmConfig {
                inertia: 0,
                ..SwarmConfig::default()
            },
            SwarmConfig {
                tick_hz: 0.0,
                ..SwarmConfig::default()
            },
            SwarmConfig {
                history_capacity: 0,
                ..SwarmConfig::default()
            },
        ];
        for config in cases {
            assert!(SwarmState::new(config).is_err());
        }
    }

    #[test]
    fn capture_threshold_matches_inertia_and_step() {
        let config = SwarmConfig::default();
        assert!((config.capture_threshold() - 7.5).abs() < f32::EPSILON);
    }

    #[test]
    fn spawn_places_bugs_inside_viewport() {
        let mut state = SwarmState::new(seeded_config(11)).expect("state");
        for _ in 0..100 {
            let index = state.spawn();
            let bug = state.bugs()[index];
            assert!(bug.position.x >= 0.0 && bug.position.x <= state.config().viewport_width);
            assert!(bug.position.y >= 0.0 && bug.position.y <= state.config().viewport_height);
            assert_eq!(bug.heading, Heading::new(1, 1));
            assert!(bug.momentum >= 1 && bug.momentum <= state.config().inertia);
        }
    }

    #[test]
    fn ensure_population_runs_exactly_once() {
        let mut state = SwarmState::new(seeded_config(3)).expect("state");
        assert_eq!(state.ensure_population(), 5);
        assert_eq!(state.ensure_population(), 0);
        assert_eq!(state.ensure_population(), 0);
        assert_eq!(state.bug_count(), 5);
    }

    #[test]
    fn momentum_repeats_heading_and_decrements() {
        let mut state = single_bug_state(7);
        place_bug(&mut state, Position::new(10.0, 10.0), Heading::new(1, 0), 3);
        // Pointer behind the bug: a fresh resolution would turn it around.
        state.set_pointer(Position::new(-100.0, 10.0));
        state.step();
        let bug = state.bugs()[0];
        assert_eq!(bug.heading, Heading::new(1, 0));
        assert_eq!(bug.momentum, 2);
        assert_eq!(bug.position, Position::new(13.0, 10.0));
    }

    #[test]
    fn fresh_resolution_resets_momentum() {
        let mut state = single_bug_state(7);
        place_bug(&mut state, Position::new(10.0, 10.0), Heading::new(1, 0), 0);
        state.set_pointer(Position::new(100.0, 10.0));
        state.step();
        let bug = state.bugs()[0];
        assert_eq!(bug.heading, Heading::new(1, 0));
        assert_eq!(bug.momentum, state.config().inertia);
        assert_eq!(bug.position, Position::new(13.0, 10.0));
    }

    #[test]
    fn cardinal_reversal_stalls_for_one_tick() {
        let mut state = single_bug_state(7);
        place_bug(&mut state, Position::new(50.0, 10.0), Heading::new(1, 0), 0);
        state.set_pointer(Position::new(-100.0, 10.0));
        state.step();
        let bug = state.bugs()[0];
        assert_eq!(bug.heading, Heading::new(0, 0), "reversal passes through rest");
        assert_eq!(bug.position, Position::new(50.0, 10.0), "no move while at rest");
        assert_eq!(bug.momentum, state.config().inertia);
    }

    #[test]
    fn zero_offset_axis_yields_zero_component() {
        let mut state = single_bug_state(7);
        place_bug(&mut state, Position::new(10.0, 10.0), Heading::new(1, 1), 0);
        // Directly below the pointer on x, far on y: desired is (0, 1).
        state.set_pointer(Position::new(10.0, 80.0));
        state.step();
        let bug = state.bugs()[0];
        assert_eq!(bug.heading, Heading::new(0, 1));
        assert_eq!(bug.position, Position::new(10.0, 13.0));
    }

    #[test]
    fn paused_step_leaves_bugs_untouched() {
        let mut state = SwarmState::new(seeded_config(21)).expect("state");
        state.ensure_population();
        state.set_pointer(Position::new(320.0, 240.0));
        state.set_paused(true);
        let before: Vec<Bug> = state.bugs().to_vec();
        let events = state.step();
        assert_eq!(state.bugs(), before.as_slice());
        assert_eq!(events.relocations, 0);
        assert_eq!(events.tick, Tick(1), "clock still advances while paused");
    }

    #[test]
    fn capture_relocates_without_touching_heading_or_momentum() {
        let mut state = single_bug_state(13);
        place_bug(&mut state, Position::new(100.0, 100.0), Heading::new(-1, 1), 4);
        // Both offsets well inside the 7.5 capture threshold.
        state.set_pointer(Position::new(102.0, 98.0));
        let events = state.step();
        assert_eq!(events.relocations, 1);
        let bug = state.bugs()[0];
        assert!(bug.position.x >= 0.0 && bug.position.x <= state.config().viewport_width);
        assert!(bug.position.y >= 0.0 && bug.position.y <= state.config().viewport_height);
        assert_eq!(bug.heading, Heading::new(-1, 1));
        assert_eq!(bug.momentum, 4);
        assert_eq!(state.bug_count(), 1, "evasion never destroys a bug");
    }

    #[test]
    fn history_is_bounded_by_capacity() {
        let config = SwarmConfig {
            history_capacity: 4,
            rng_seed: Some(5),
            ..SwarmConfig::default()
        };
        let mut state = SwarmState::new(config).expect("state");
        for _ in 0..10 {
            state.step();
        }
        let summaries: Vec<&TickSummary> = state.history().collect();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries.last().expect("summary").tick, Tick(10));
        assert_eq!(summaries.first().expect("summary").tick, Tick(7));
    }

    #[test]
    fn swarm_rng_is_reproducible_for_a_fixed_seed() {
        let mut a = SwarmState::new(seeded_config(99)).expect("state");
        let mut b = SwarmState::new(seeded_config(99)).expect("state");
        let draw_a: u64 = a.rng().random();
        let draw_b: u64 = b.rng().random();
        assert_eq!(draw_a, draw_b);
    }

    #[test]
    fn set_viewport_validates_dimensions() {
        let mut state = SwarmState::new(seeded_config(1)).expect("state");
        assert!(state.set_viewport(80.0, 24.0).is_ok());
        assert_eq!(state.config().viewport_width, 80.0);
        assert!(state.set_viewport(0.0, 24.0).is_err());
        assert!(state.set_viewport(80.0, -1.0).is_err());
    }

    #[test]
    fn tick_interval_matches_rate() {
        let interval = SwarmConfig::default().tick_interval();
        let drift = interval.as_secs_f64() - 0.05;
        assert!(drift.abs() < 1e-6, "20 Hz should be ~50ms, got {interval:?}");
    }
}
