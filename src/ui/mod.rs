//! GUI module
//!
//! A native egui/eframe front end over the engine. The AI runs on a worker
//! thread against a cloned board; the engine itself stays single-threaded.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::NinukiApp;
pub use game_state::{GameMode, GameResult, GameState, WinType};
