//! Flappy entry point: terminal setup and the fixed-rate game loop.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::sim::{Autopilot, Command, Control, Simulation, TickEvent};
use flappy::{build_info, input, ui, Clock, FrameLimiter, SystemClock, Tuning};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long demo mode lingers on the game-over screen before restarting.
const DEMO_RESTART_DELAY_MS: u64 = 2000;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Parser, Debug)]
#[command(name = "flappy", about = "Flap through the pipes.", disable_version_flag = true)]
struct Cli {
    /// Seed for pipe placement (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding game tuning.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Let the autopilot play.
    #[arg(long)]
    demo: bool,

    /// Print version information and exit.
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("flappy {}", build_info::version_string());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let tuning = match &cli.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "flappy {} starting (seed: {:?}, demo: {})",
        build_info::version_string(),
        cli.seed,
        cli.demo
    );

    let mut terminal = setup_terminal().context("failed to initialise terminal")?;
    let result = run(&mut terminal, tuning, &mut rng, cli.demo);
    let restored = restore_terminal(&mut terminal);
    // A game-loop error is the more useful one to report.
    result?;
    restored.context("failed to restore terminal")
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    enter_screen().map_err(|err| {
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        err
    })
}

fn enter_screen() -> io::Result<Term> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// One iteration: drain input, apply commands, tick once, draw, wait.
fn run(terminal: &mut Term, tuning: Tuning, rng: &mut StdRng, demo: bool) -> Result<()> {
    let clock = SystemClock::new();
    let mut limiter = FrameLimiter::new(tuning.tick_rate);
    let autopilot = Autopilot::new(&tuning);
    let mut sim = Simulation::new(tuning, clock.now_ms());
    let mut crashed_at: Option<u64> = None;

    loop {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = input::map_key(key) else {
                continue;
            };
            if apply_command(&mut sim, command, clock.now_ms()) == Control::Quit {
                info!("quit with score {}", sim.score);
                return Ok(());
            }
        }

        if demo {
            let now = clock.now_ms();
            let restart_due = crashed_at
                .map(|t| now.saturating_sub(t) >= DEMO_RESTART_DELAY_MS)
                .unwrap_or(false);
            if restart_due || autopilot.decide(&sim.view()) {
                apply_command(&mut sim, Command::Flap, now);
            }
        }
        if !sim.is_game_over() {
            crashed_at = None;
        }

        let result = sim.tick(clock.now_ms(), rng);
        for event in &result.events {
            match event {
                TickEvent::Scored { score } => info!("passed pipe, score {}", score),
                TickEvent::Crashed { cause } => {
                    info!("game over ({:?}), final score {}", cause, sim.score);
                    crashed_at = Some(clock.now_ms());
                }
                TickEvent::ObstacleSpawned { .. } | TickEvent::ObstacleRemoved => {}
            }
        }

        let view = sim.view();
        terminal.draw(|frame| ui::draw(frame, &view, demo))?;

        limiter.wait();
    }
}

fn apply_command(sim: &mut Simulation, command: Command, now_ms: u64) -> Control {
    let was_over = sim.is_game_over();
    let control = sim.apply(command, now_ms);
    if was_over && !sim.is_game_over() {
        info!("restarted");
    }
    control
}
