//! Draw list for the current match state.
//!
//! Pure function of state: the same match always yields the same commands.

use proto::{Color, DrawCommand, DrawRect, FontSize, MatchMode, OutputCommand};

use crate::{Match, MatchState, Side};

const DIVIDER_SPACING: usize = 30;
const DIVIDER_DASH: (f32, f32) = (4.0, 15.0);

const HELP_TEXT: &str = "M: Mute | P: Pause | R: Restart | ESC: Quit";
const CREDIT_TEXT: &str = "Developed by Shahzeb";

fn text(text: impl Into<String>, size: FontSize, color: Color, x: f32, y: f32) -> OutputCommand {
    DrawCommand::Text {
        text: text.into(),
        size,
        color,
        x,
        y,
    }
    .into()
}

pub fn mode_label(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Ai => "AI",
        MatchMode::TwoPlayer => "Two-Player",
    }
}

pub fn winner_banner(mode: MatchMode, winner: Side) -> &'static str {
    match (mode, winner) {
        (MatchMode::Ai, Side::Left) => "You Win!",
        (MatchMode::Ai, Side::Right) => "AI Wins!",
        (MatchMode::TwoPlayer, Side::Left) => "Player 1 Wins!",
        (MatchMode::TwoPlayer, Side::Right) => "Player 2 Wins!",
    }
}

/// Build the full frame: playfield, entities, scores and banners
pub fn draw_commands(game: &Match) -> Vec<OutputCommand> {
    let config = game.config();
    let mut cmds = vec![DrawCommand::Clear(Color::BLACK).into()];

    // Center divider
    let (dash_w, dash_h) = DIVIDER_DASH;
    for y in (0..config.height as usize).step_by(DIVIDER_SPACING) {
        cmds.push(
            DrawCommand::Rect {
                rect: DrawRect {
                    x: config.width / 2.0 - dash_w / 2.0,
                    y: y as f32,
                    w: dash_w,
                    h: dash_h,
                },
                color: Color::GRAY,
            }
            .into(),
        );
    }

    for side in [Side::Left, Side::Right] {
        cmds.push(
            DrawCommand::Rect {
                rect: game.paddle(side).rect.into(),
                color: Color::GREEN,
            }
            .into(),
        );
    }
    cmds.push(
        DrawCommand::Ellipse {
            rect: game.ball().rect.into(),
            color: Color::RED,
        }
        .into(),
    );

    let score = game.score();
    let mid = config.width / 2.0;
    cmds.push(text(score.left.to_string(), FontSize::Big, Color::WHITE, mid - 80.0, 20.0));
    cmds.push(text(score.right.to_string(), FontSize::Big, Color::WHITE, mid + 50.0, 20.0));

    cmds.push(text(CREDIT_TEXT, FontSize::Small, Color::GRAY, 10.0, config.height - 28.0));

    match game.state() {
        MatchState::NotStarted => {
            cmds.push(text("Press SPACE to Start", FontSize::Medium, Color::WHITE, 270.0, 240.0));
            cmds.push(text(
                "Press 1: Play vs AI    Press 2: Two Players",
                FontSize::Small,
                Color::WHITE,
                230.0,
                280.0,
            ));
            cmds.push(text(
                format!("Selected Mode: {}", mode_label(game.mode())),
                FontSize::Small,
                Color::GRAY,
                320.0,
                310.0,
            ));
        }
        MatchState::Paused => {
            cmds.push(text("PAUSED", FontSize::Big, Color::WHITE, 340.0, 260.0));
        }
        MatchState::GameOver => {
            let winner = score.leader();
            cmds.push(text(
                winner_banner(game.mode(), winner),
                FontSize::Big,
                Color::WHITE,
                320.0,
                230.0,
            ));
            cmds.push(text("Press R to Restart", FontSize::Small, Color::WHITE, 330.0, 280.0));
        }
        MatchState::Playing => {}
    }

    cmds.push(text(HELP_TEXT, FontSize::Small, Color::GRAY, 170.0, config.height - 50.0));

    cmds
}
