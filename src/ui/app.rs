//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState, WinType};
use super::theme::*;
use crate::{EngineConfig, Stone, CAPTURE_WIN_STONES};

/// Main application window
pub struct NinukiApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl NinukiApp {
    /// Create a new app with the given mode and engine settings
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Start over in `mode`, keeping the engine settings
    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Replay (L)").clicked() {
                        self.state.toggle_replay();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_captures_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("NINUKI-RENJU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{0}x{0} · five in a row or 10 captures", self.state.config.board_size))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.display_board().side_to_move();
            let fill = if turn == Stone::Black { BLACK_STONE } else { WHITE_STONE };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().circle_stroke(rect.center(), 22.0, egui::Stroke::new(1.0, TEXT_MUTED));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if let Some(cursor) = self.state.replay_cursor() {
                        (format!("Replay {}/{}", cursor, self.state.move_history.len()), TIMER_WARNING)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...".to_string(), TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let budget = self.state.config.time_budget.as_secs_f32();
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.6 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render captures card
    fn render_captures_card(&self, ui: &mut egui::Ui) {
        let board = self.state.display_board();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            Self::render_capture_row(ui, Stone::Black, board.captures(Stone::Black));
            ui.add_space(6.0);
            Self::render_capture_row(ui, Stone::White, board.captures(Stone::White));
        });
    }

    /// One pip per captured pair, then the stone count out of the win threshold.
    fn render_capture_row(ui: &mut egui::Ui, stone: Stone, captures: u8) {
        let near_win = captures + 2 >= CAPTURE_WIN_STONES;
        ui.horizontal(|ui| {
            ui.label(RichText::new(stone.name()).size(12.0).color(TEXT_SECONDARY));
            for pair in 0..CAPTURE_WIN_STONES / 2 {
                let color = match (pair * 2 < captures, near_win) {
                    (true, true) => TIMER_WARNING,
                    (true, false) => TEXT_PRIMARY,
                    (false, _) => TEXT_MUTED,
                };
                ui.label(RichText::new("●").size(14.0).color(color));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = format!("{captures}/{CAPTURE_WIN_STONES}");
                let text = if captures >= CAPTURE_WIN_STONES {
                    RichText::new("WIN!").strong().color(WIN_HIGHLIGHT)
                } else if near_win {
                    RichText::new(text).strong().color(TIMER_WARNING)
                } else {
                    RichText::new(text).color(TEXT_SECONDARY)
                };
                ui.label(text.size(14.0));
            });
        });
    }

    /// Clickable label styled as a button
    fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if self.state.mode == GameMode::PvP && Self::action_button(ui, "Hint") {
                    self.state.request_suggestion();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "Replay") {
                    self.state.toggle_replay();
                }
            });

            ui.add_space(8.0);
            let hint = if self.state.replay_cursor().is_some() {
                "Left/Right to step, L to leave"
            } else {
                "U undo · N new · L replay · H hint"
            };
            ui.label(
                RichText::new(format!("Move #{}  {hint}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last search's statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Depth {}", result.depth)).size(11.0).strong().color(TIMER_NORMAL));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            let tt = result.tt;
            ui.label(
                RichText::new(format!(
                    "TT {} entries ({} exact, {} lower, {} upper)",
                    tt.used, tt.exact, tt.lower, tt.upper
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );

            let pos = result.best_move;
            let col = (b'A' + pos.col) as char;
            let row = self.state.config.board_size - usize::from(pos.row);
            ui.add_space(4.0);
            ui.label(RichText::new(format!("-> {col}{row}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            if result.timed_out {
                ui.label(RichText::new("time budget exhausted").size(10.0).color(TIMER_CRITICAL));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let win_type = match result.win_type {
            WinType::FiveInRow => "five in a row",
            WinType::Capture => "10 captures",
            WinType::Resignation => "resignation",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS", result.winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new(format!("by {win_type}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board and forward clicks to the game state
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let replaying = self.state.replay_cursor().is_some();
            let winning_line = if replaying {
                None
            } else {
                self.state.game_over.and_then(|r| r.winning_line)
            };
            let interactive = !replaying
                && self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                self.state.display_board(),
                self.state.suggested_move,
                winning_line,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::L) {
                self.state.toggle_replay();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.replay_step(-1);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.state.replay_step(1);
            }
        });
    }
}

impl eframe::App for NinukiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.replay_cursor().is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}
