//! Ninuki-renju GUI
//!
//! Play against the AI or another player, with AI hints, undo and replay.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::info;

use ninuki::ui::{GameMode, NinukiApp};
use ninuki::{EngineConfig, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human against the AI
    Pve,
    /// Two humans at one screen
    Pvp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size (cells per side)
    #[arg(long, default_value_t = ninuki::BOARD_SIZE)]
    size: usize,

    /// AI time budget per move in milliseconds
    #[arg(long = "time-ms", default_value_t = 480)]
    time_ms: u64,

    /// Maximum iterative-deepening depth
    #[arg(long, default_value_t = 10)]
    depth: u8,

    /// Candidates kept per search node
    #[arg(long, default_value_t = 30)]
    beam: usize,

    #[arg(long, value_enum, default_value_t = Mode::Pve)]
    mode: Mode,

    /// Your color in PvE
    #[arg(long, value_enum, default_value_t = Color::Black)]
    human: Color,
}

impl Args {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_board_size(self.size.clamp(5, 26))
            .with_time_budget(Duration::from_millis(self.time_ms))
            .with_max_depth(self.depth)
            .with_beam_width(self.beam)
    }

    fn game_mode(&self) -> GameMode {
        match self.mode {
            Mode::Pvp => GameMode::PvP,
            Mode::Pve => GameMode::PvE {
                human_color: match self.human {
                    Color::Black => Stone::Black,
                    Color::White => Stone::White,
                },
            },
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"))
        .init();

    let config = args.config();
    let mode = args.game_mode();
    info!("starting {mode:?} on {0}x{0}, {config:?}", config.board_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Ninuki-renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Ninuki-renju",
        options,
        Box::new(move |cc| Ok(Box::new(NinukiApp::new(cc, mode, config)))),
    )
}
