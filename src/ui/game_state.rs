//! Game state behind the GUI: turn flow, AI worker, undo and replay

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::{AIEngine, Board, EngineConfig, GameError, MoveResult, Pos, Stone, CAPTURE_WIN_STONES};

/// Budget for the on-demand hint, kept short so the UI stays responsive.
const HINT_BUDGET: Duration = Duration::from_millis(200);
const HINT_DEPTH: u8 = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat), AI available as a hint
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, GameError>>,
        start_time: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FiveInRow,
    Capture,
    /// The AI had no legal move left
    Resignation,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub win_type: WinType,
    pub winning_line: Option<[Pos; 5]>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub config: EngineConfig,
    pub game_over: Option<GameResult>,
    /// Every move played, in order; the board is always `replay(move_history)`
    pub move_history: Vec<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Replay cursor and the board rebuilt at that point
    replay: Option<(usize, Board)>,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            mode,
            config,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            replay: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.side_to_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Board to draw: the replay snapshot while replaying, else the live game.
    pub fn display_board(&self) -> &Board {
        self.replay.as_ref().map_or(&self.board, |(_, board)| board)
    }

    pub fn replay_cursor(&self) -> Option<usize> {
        self.replay.as_ref().map(|(cursor, _)| *cursor)
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.replay.is_some() {
            return Err("Leave replay (L) to play".to_string());
        }
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn();
        self.board.apply_move(i32::from(pos.row), i32::from(pos.col))?;

        self.move_history.push(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if self.board.has_won(color) {
            self.game_over = Some(self.win_result(pos, color));
            info!("{} wins after {} moves", color.name(), self.move_history.len());
            return Ok(());
        }

        self.move_timer.start();
        Ok(())
    }

    fn win_result(&self, pos: Pos, color: Stone) -> GameResult {
        if self.board.captures(color) >= CAPTURE_WIN_STONES {
            GameResult {
                winner: color,
                win_type: WinType::Capture,
                winning_line: None,
            }
        } else {
            GameResult {
                winner: color,
                win_type: WinType::FiveInRow,
                winning_line: self.board.winning_line(pos),
            }
        }
    }

    /// Start AI thinking on a worker thread against a copy of the board.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let mut board = self.board.clone();
        let config = self.config;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let (result, elapsed) = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.move_timer.ai_thinking_time = Some(elapsed);
        self.apply_ai_result(result);
    }

    fn apply_ai_result(&mut self, result: Result<MoveResult, GameError>) {
        match result {
            Ok(move_result) => {
                self.last_ai_result = Some(move_result);
                if let Err(e) = self.execute_move(move_result.best_move) {
                    warn!("AI produced a rejected move: {e}");
                    self.message = Some(e.to_string());
                }
            }
            Err(GameError::NoLegalMoves) => {
                self.game_over = Some(GameResult {
                    winner: self.current_turn().opponent(),
                    win_type: WinType::Resignation,
                    winning_line: None,
                });
                self.message = Some("AI resigns".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Quick AI suggestion for the side to move.
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() || self.replay.is_some() {
            return;
        }

        let mut engine = AIEngine::with_config(self.config);
        match engine.compute_best_move(&mut self.board, HINT_BUDGET, HINT_DEPTH) {
            Ok(mv) => self.suggested_move = Some(mv.pos),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Take back one move (PvP) or the last human/AI pair (PvE) by replaying the rest.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() || self.replay.is_some() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        let keep = self.move_history.len() - undo_count;

        match Board::replay(self.config.board_size, &self.move_history[..keep]) {
            Ok(board) => {
                self.board = board;
                self.move_history.truncate(keep);
                self.game_over = None;
                self.suggested_move = None;
                self.message = None;
                self.move_timer.start();
            }
            Err(e) => self.message = Some(format!("undo failed: {e}")),
        }
    }

    /// Enter replay at the final position, or leave it.
    pub fn toggle_replay(&mut self) {
        if self.replay.is_some() {
            self.replay = None;
        } else if !self.is_ai_thinking() {
            self.replay = Some((self.move_history.len(), self.board.clone()));
        }
    }

    /// Move the replay cursor by `delta` moves, clamped to the game.
    pub fn replay_step(&mut self, delta: isize) {
        let Some((cursor, _)) = self.replay else {
            return;
        };
        let target = cursor
            .saturating_add_signed(delta)
            .min(self.move_history.len());
        if target == cursor {
            return;
        }

        match Board::replay(self.config.board_size, &self.move_history[..target]) {
            Ok(board) => self.replay = Some((target, board)),
            Err(e) => self.message = Some(format!("replay failed: {e}")),
        }
    }
}
