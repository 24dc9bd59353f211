mod buffer;
mod config;
mod constants;
mod error;
mod grid;
mod renderer;
mod session;
mod simulation;
mod utils;

use config::BoardConfig;
use rand::SeedableRng;
use renderer::TerminalRenderer;
use session::Session;
use simulation::SimRng;

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Bad overrides are reported before the terminal is taken over.
    let config = BoardConfig::from_env()?;
    let rng = SimRng::from_entropy();

    // The renderer restores the terminal when dropped, so errors below still
    // leave a usable shell before `main` reports them.
    let result = {
        let mut renderer = TerminalRenderer::new()?;
        Session::new(config, rng, &renderer).and_then(|mut session| session.run(&mut renderer))
    };
    result?;
    Ok(())
}
