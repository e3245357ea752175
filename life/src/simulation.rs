// simulation.rs - Board state machine driven once per frame by the host

use tracing::{debug, info, warn};

use crate::clock::SimulationClock;
use crate::config::LifeConfig;
use crate::grid::{Cell, Grid};
use crate::host::{Host, LogicalKey, PointerButton};

/// Whether the board is being edited by hand or evolving on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }
}

/// Owns the board, the run state and the generation clock.
///
/// Each call to [`BoardSimulation::advance`] handles input, then either
/// applies pointer edits (paused) or paces a generation step (running),
/// then redraws the whole board. That order is fixed so the frame's
/// drawing always shows the frame's changes.
#[derive(Debug, Clone)]
pub struct BoardSimulation {
    config: LifeConfig,
    grid: Grid,
    run_state: RunState,
    clock: SimulationClock,
    generation: u64,
    screen_checked: bool,
}

impl BoardSimulation {
    /// A paused simulation on an empty board.
    pub fn new(config: LifeConfig) -> Self {
        let mut simulation = Self {
            config,
            grid: Grid::new(),
            run_state: RunState::Paused,
            clock: SimulationClock::new(),
            generation: 0,
            screen_checked: false,
        };
        simulation.clear_board();
        simulation
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Generations stepped since startup or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run one frame. Always returns true: the game never asks the host to
    /// stop on its own.
    pub fn advance<H: Host + ?Sized>(&mut self, host: &mut H, elapsed_time: f32) -> bool {
        if host.key_pressed(LogicalKey::TogglePause) {
            self.run_state = self.run_state.toggled();
            info!(
                state = ?self.run_state,
                population = self.grid.population(),
                generation = self.generation,
                "run state toggled"
            );
        }

        if host.key_pressed(LogicalKey::Reset) {
            self.reset();
        }

        match self.run_state {
            RunState::Paused => self.edit_under_pointer(host),
            RunState::Running => {
                let threshold = self
                    .config
                    .step_threshold(host.key_held(LogicalKey::FastForward));
                if self.clock.tick(elapsed_time, threshold) {
                    self.step_generation();
                    debug!(
                        generation = self.generation,
                        population = self.grid.population(),
                        threshold,
                        "generation stepped"
                    );
                }
            }
        }

        self.draw_screen(host);
        true
    }

    fn reset(&mut self) {
        self.run_state = RunState::Paused;
        self.clear_board();
        info!("board reset");
    }

    fn edit_under_pointer<H: Host + ?Sized>(&mut self, host: &H) {
        let cell = if host.pointer_button_held(PointerButton::Primary) {
            Cell::Alive
        } else if host.pointer_button_held(PointerButton::Secondary) {
            Cell::Dead
        } else {
            return;
        };

        if let Some((x, y)) = host.pointer_position() {
            // Off-board positions are dropped by the grid.
            self.grid.set(y, x, cell);
        }
    }

    fn step_generation(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
    }

    fn clear_board(&mut self) {
        self.grid.clear();
        self.clock.reset();
        self.generation = 0;
    }

    fn draw_screen<H: Host + ?Sized>(&mut self, host: &mut H) {
        let side = self.grid.dimension() as i32;

        if !self.screen_checked {
            let (width, height) = host.screen_dimensions();
            if (width, height) != (side, side) {
                warn!(width, height, board = side, "host surface does not match the board");
            }
            self.screen_checked = true;
        }

        let cursor = match self.run_state {
            RunState::Paused => host.pointer_position(),
            RunState::Running => None,
        };

        for y in 0..side {
            for x in 0..side {
                let color = if cursor == Some((x, y)) {
                    self.config.highlight_color
                } else if self.grid.get(y, x) == Some(Cell::Alive) {
                    self.config.alive_color
                } else {
                    self.config.dead_color
                };
                host.plot_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use egui::Color32;

    use super::*;

    /// In-memory host: tests script one frame of input at a time and read
    /// back what was drawn.
    #[derive(Default)]
    struct ScriptedHost {
        pressed: HashSet<LogicalKey>,
        held: HashSet<LogicalKey>,
        buttons: HashSet<PointerButton>,
        pointer: Option<(i32, i32)>,
        pixels: Vec<(i32, i32, Color32)>,
        dimensions: Option<(i32, i32)>,
    }

    impl ScriptedHost {
        /// Clear edge-triggered input and the previous frame's drawing.
        fn next_frame(&mut self) {
            self.pressed.clear();
            self.pixels.clear();
        }

        fn press(&mut self, key: LogicalKey) {
            self.pressed.insert(key);
        }

        fn pixel_at(&self, x: i32, y: i32) -> Option<Color32> {
            self.pixels
                .iter()
                .find(|&&(px, py, _)| px == x && py == y)
                .map(|&(_, _, color)| color)
        }
    }

    impl Host for ScriptedHost {
        fn key_pressed(&self, key: LogicalKey) -> bool {
            self.pressed.contains(&key)
        }

        fn key_held(&self, key: LogicalKey) -> bool {
            self.held.contains(&key) || self.pressed.contains(&key)
        }

        fn pointer_button_held(&self, button: PointerButton) -> bool {
            self.buttons.contains(&button)
        }

        fn pointer_position(&self) -> Option<(i32, i32)> {
            self.pointer
        }

        fn plot_pixel(&mut self, x: i32, y: i32, color: Color32) {
            self.pixels.push((x, y, color));
        }

        fn screen_dimensions(&self) -> (i32, i32) {
            self.dimensions.unwrap_or((30, 30))
        }
    }

    fn simulation() -> BoardSimulation {
        BoardSimulation::new(LifeConfig::default())
    }

    fn frame(sim: &mut BoardSimulation, host: &mut ScriptedHost, dt: f32) {
        assert!(sim.advance(host, dt));
        host.next_frame();
    }

    /// Paint `cells` as `(x, y)` pointer positions while paused.
    fn paint(sim: &mut BoardSimulation, host: &mut ScriptedHost, cells: &[(i32, i32)]) {
        host.buttons.insert(PointerButton::Primary);
        for &cell in cells {
            host.pointer = Some(cell);
            frame(sim, host, 0.016);
        }
        host.buttons.clear();
        host.pointer = None;
    }

    fn start(sim: &mut BoardSimulation, host: &mut ScriptedHost) {
        host.press(LogicalKey::TogglePause);
        frame(sim, host, 0.0);
        assert_eq!(sim.run_state(), RunState::Running);
    }

    #[test]
    fn starts_paused_and_empty() {
        let sim = simulation();
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.grid(), &Grid::new());
        assert_eq!(sim.clock().elapsed(), 0.0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn toggle_twice_restores_run_state() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();

        host.press(LogicalKey::TogglePause);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Running);

        host.press(LogicalKey::TogglePause);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn holding_toggle_does_not_retrigger() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();

        host.press(LogicalKey::TogglePause);
        frame(&mut sim, &mut host, 0.016);
        host.held.insert(LogicalKey::TogglePause);
        frame(&mut sim, &mut host, 0.016);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Running);
    }

    #[test]
    fn primary_button_adds_and_secondary_removes() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();

        paint(&mut sim, &mut host, &[(3, 7)]);
        // x is the column, y is the row.
        assert_eq!(sim.grid().get(7, 3), Some(Cell::Alive));

        host.buttons.insert(PointerButton::Secondary);
        host.pointer = Some((3, 7));
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.grid(), &Grid::new());
    }

    #[test]
    fn primary_button_wins_when_both_held() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        host.buttons.insert(PointerButton::Primary);
        host.buttons.insert(PointerButton::Secondary);
        host.pointer = Some((1, 1));
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.grid().get(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn repeated_paint_is_idempotent() {
        let mut once = simulation();
        let mut twice = simulation();
        let mut host = ScriptedHost::default();

        paint(&mut once, &mut host, &[(9, 9)]);
        paint(&mut twice, &mut host, &[(9, 9), (9, 9)]);
        assert_eq!(once.grid(), twice.grid());
    }

    #[test]
    fn out_of_range_pointer_is_ignored() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();

        paint(&mut sim, &mut host, &[(-1, 4), (30, 4), (4, 30), (-5, -5), (100, 100)]);
        assert_eq!(sim.grid(), &Grid::new());
    }

    #[test]
    fn running_ignores_pointer_edits() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        start(&mut sim, &mut host);

        paint(&mut sim, &mut host, &[(2, 2)]);
        assert_eq!(sim.grid(), &Grid::new());
    }

    #[test]
    fn clock_gates_generation_steps() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        paint(&mut sim, &mut host, &[(4, 5), (5, 5), (6, 5)]);
        let horizontal = sim.grid().clone();

        start(&mut sim, &mut host);
        // Four frames reach exactly 0.5 s without stepping.
        for _ in 0..4 {
            frame(&mut sim, &mut host, 0.125);
            assert_eq!(sim.grid(), &horizontal);
        }
        assert_eq!(sim.clock().elapsed(), 0.5);

        frame(&mut sim, &mut host, 0.125);
        assert_ne!(sim.grid(), &horizontal);
        assert_eq!(sim.grid(), &horizontal.next_generation());
        assert_eq!(sim.clock().elapsed(), 0.0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn large_frame_time_steps_only_once() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        paint(&mut sim, &mut host, &[(4, 5), (5, 5), (6, 5)]);
        start(&mut sim, &mut host);

        frame(&mut sim, &mut host, 5.0);
        assert_eq!(sim.generation(), 0);
        frame(&mut sim, &mut host, 5.0);
        assert_eq!(sim.generation(), 1);
        frame(&mut sim, &mut host, 5.0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn fast_forward_uses_shorter_threshold() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        paint(&mut sim, &mut host, &[(4, 5), (5, 5), (6, 5)]);
        start(&mut sim, &mut host);

        host.held.insert(LogicalKey::FastForward);
        frame(&mut sim, &mut host, 0.25);
        assert_eq!(sim.generation(), 0);
        // 0.25 s is past the fast threshold but short of the normal one.
        frame(&mut sim, &mut host, 0.0);
        assert_eq!(sim.generation(), 1);

        host.held.clear();
        frame(&mut sim, &mut host, 0.25);
        frame(&mut sim, &mut host, 0.0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn blinker_returns_after_two_generations() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        paint(&mut sim, &mut host, &[(4, 5), (5, 5), (6, 5)]);
        let horizontal = sim.grid().clone();
        start(&mut sim, &mut host);

        frame(&mut sim, &mut host, 0.5);
        frame(&mut sim, &mut host, 0.0);
        assert_eq!(sim.grid(), &Grid::with_alive(&[(4, 5), (5, 5), (6, 5)]));

        frame(&mut sim, &mut host, 0.5);
        frame(&mut sim, &mut host, 0.0);
        assert_eq!(sim.grid(), &horizontal);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn reset_clears_board_and_pauses() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        paint(&mut sim, &mut host, &[(1, 1), (2, 1), (3, 1)]);
        start(&mut sim, &mut host);
        frame(&mut sim, &mut host, 0.3);

        host.press(LogicalKey::Reset);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.grid(), &Grid::new());
        assert_eq!(sim.clock().elapsed(), 0.0);
        assert_eq!(sim.generation(), 0);

        // Reset while already paused keeps it paused.
        paint(&mut sim, &mut host, &[(8, 8)]);
        host.press(LogicalKey::Reset);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.grid(), &Grid::new());
    }

    #[test]
    fn toggle_and_reset_in_one_frame_ends_paused() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        host.press(LogicalKey::TogglePause);
        host.press(LogicalKey::Reset);
        frame(&mut sim, &mut host, 0.016);
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn draws_every_cell_each_frame() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        host.buttons.insert(PointerButton::Primary);
        host.pointer = Some((2, 3));
        assert!(sim.advance(&mut host, 0.016));
        assert_eq!(host.pixels.len(), 30 * 30);

        let config = LifeConfig::default();
        // Pointer cell is highlighted while paused even though it is alive.
        assert_eq!(host.pixel_at(2, 3), Some(config.highlight_color));
        assert_eq!(host.pixel_at(0, 0), Some(config.dead_color));

        host.next_frame();
        host.buttons.clear();
        host.pointer = None;
        assert!(sim.advance(&mut host, 0.016));
        assert_eq!(host.pixel_at(2, 3), Some(config.alive_color));
    }

    #[test]
    fn no_highlight_while_running() {
        let mut sim = simulation();
        let mut host = ScriptedHost::default();
        start(&mut sim, &mut host);

        host.pointer = Some((4, 4));
        assert!(sim.advance(&mut host, 0.016));
        assert_eq!(host.pixel_at(4, 4), Some(LifeConfig::default().dead_color));
    }

    #[test]
    fn render_bounds_follow_the_board_not_the_host() {
        let mut sim = simulation();
        let mut host = ScriptedHost {
            dimensions: Some((50, 10)),
            ..ScriptedHost::default()
        };
        assert!(sim.advance(&mut host, 0.016));
        assert_eq!(host.pixels.len(), 30 * 30);
        assert!(host.pixels.iter().all(|&(x, y, _)| (0..30).contains(&x) && (0..30).contains(&y)));
    }
}
