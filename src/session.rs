// --- File: session.rs ---
use crate::config::BoardConfig;
use crate::constants::*;
use crate::error::AppError;
use crate::grid::Grid;
use crate::simulation::{SimRng, Simulation};
use rand::Rng;
use std::io;
use std::time::Duration;

/// Discrete input symbols delivered by a frontend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Resize,
    Regenerate,
    Slower,
    Faster,
    ToggleWrap,
    TogglePause,
    BigBang,
    Invert,
    Thanos,
    Step,
    Quit,
}

/// Everything the control loop needs from the outside world.
pub trait Frontend {
    /// Waits up to `timeout` for the next input. `None` means the wait expired
    /// or the event had no meaning for the game.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>>;
    /// Current size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;
    fn draw(&mut self, grid: &Grid) -> io::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Control loop state: the board plus speed, topology and pause flags.
pub struct Session {
    simulation: Simulation,
    config: BoardConfig,
    rng: SimRng,
    tick_ms: u64,
    running: bool,
    wrap: bool,
}

impl Session {
    pub fn new<F: Frontend>(
        config: BoardConfig,
        mut rng: SimRng,
        frontend: &F,
    ) -> Result<Self, AppError> {
        let simulation = Self::build_simulation(&config, frontend, &mut rng)?;
        Ok(Self {
            simulation,
            config,
            rng,
            tick_ms: INITIAL_TICK_MS,
            running: true,
            wrap: true,
        })
    }

    fn build_simulation<F: Frontend>(
        config: &BoardConfig,
        frontend: &F,
        rng: &mut SimRng,
    ) -> Result<Simulation, AppError> {
        let (columns, rows) = frontend.size()?;
        let size = config.board_size(columns, rows)?;
        log::info!(
            "New board {}x{} for terminal {}x{}",
            size.width,
            size.height,
            columns,
            rows
        );
        Ok(Simulation::new(size.width, size.height, rng))
    }

    #[cfg(test)]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Draws the first frame, then polls and reacts until asked to quit.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<(), AppError> {
        log::info!(
            "Starting: interval {:?}, wrap {}, running {}",
            self.tick_interval(),
            self.wraps(),
            self.is_running()
        );
        frontend.draw(self.simulation.front())?;
        loop {
            let input = frontend.poll_input(self.tick_interval())?;
            if self.wake(input, frontend)? == Flow::Quit {
                log::info!(
                    "Quit after {} generations",
                    self.simulation.generation()
                );
                return Ok(());
            }
        }
    }

    /// Handles one wake of the loop: an input symbol, or `None` on timeout.
    pub fn wake<F: Frontend>(
        &mut self,
        input: Option<Input>,
        frontend: &mut F,
    ) -> Result<Flow, AppError> {
        let selector = self.rng.gen_range(0..RANDOM_EVENT_RANGE);
        self.wake_with(input, selector, frontend)
    }

    fn wake_with<F: Frontend>(
        &mut self,
        input: Option<Input>,
        selector: u32,
        frontend: &mut F,
    ) -> Result<Flow, AppError> {
        let mut dirty = false;

        if matches!(input, Some(Input::Resize | Input::Regenerate)) {
            self.simulation = Self::build_simulation(&self.config, frontend, &mut self.rng)?;
            dirty = true;
        }

        if input == Some(Input::Slower) && self.tick_ms < MAX_TICK_MS {
            self.tick_ms *= 2;
            log::debug!("Tick interval {}ms", self.tick_ms);
        }
        if input == Some(Input::Faster) && self.tick_ms > MIN_TICK_MS {
            self.tick_ms /= 2;
            log::debug!("Tick interval {}ms", self.tick_ms);
        }

        if input == Some(Input::ToggleWrap) {
            self.wrap = !self.wrap;
            log::debug!("Wrap {}", if self.wrap { "on" } else { "off" });
        }

        if input == Some(Input::TogglePause) {
            self.running = !self.running;
            log::debug!("{}", if self.running { "Resumed" } else { "Paused" });
        }

        let spontaneous = |event: u32| self.running && selector == event;
        let big_bang = input == Some(Input::BigBang) || spontaneous(RANDOM_EVENT_BIG_BANG);
        let invert = input == Some(Input::Invert) || spontaneous(RANDOM_EVENT_INVERT);
        let thanos = input == Some(Input::Thanos) || spontaneous(RANDOM_EVENT_THANOS);

        if big_bang {
            log::debug!("Big bang at generation {}", self.simulation.generation());
            self.simulation.big_bang(&mut self.rng);
            self.simulation.tick(self.wrap);
            dirty = true;
        }
        if invert {
            log::debug!("Invert at generation {}", self.simulation.generation());
            self.simulation.invert();
            dirty = true;
        }
        if thanos {
            log::debug!("Thanos at generation {}", self.simulation.generation());
            self.simulation.thanos(&mut self.rng);
            dirty = true;
        }

        if self.running || input == Some(Input::Step) {
            self.simulation.tick(self.wrap);
            dirty = true;
        }

        if dirty {
            frontend.draw(self.simulation.front())?;
        }

        Ok(if input == Some(Input::Quit) {
            Flow::Quit
        } else {
            Flow::Continue
        })
    }
}
