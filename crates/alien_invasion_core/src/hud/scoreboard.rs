use crate::game::Game;
use crate::hud::{TEXT_COLOR, TEXT_SCALE};
use crate::rect::Rect;
use crate::render::font::{text_width, GLYPH_HEIGHT};
use crate::render::sprite::SHIP_SPRITE;
use crate::render::FrameBuffer;

/// Gap between the score text and the top/right screen edges.
const MARGIN: i32 = 20;
/// Vertical gap between the score and the level below it.
const LINE_GAP: i32 = 10;
/// Offset of the remaining-ships row from the top-left corner.
const SHIPS_MARGIN: i32 = 10;

/// Round to the nearest ten (ties to even) and group thousands with commas.
pub fn format_score(score: u64) -> String {
    let (tens, ones) = (score / 10, score % 10);
    let rounded = if ones > 5 || (ones == 5 && tens % 2 == 1) {
        (tens + 1) * 10
    } else {
        tens * 10
    };
    group_thousands(rounded)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Score at the top right, high score at the top center, level under the
/// score and one ship icon per remaining life at the top left.
pub fn draw(game: &Game, frame: &mut FrameBuffer) {
    let settings = game.settings();
    let stats = game.stats();
    let screen_width = settings.screen_width as i32;
    let line_height = (GLYPH_HEIGHT * TEXT_SCALE) as i32;

    let score = format_score(stats.score);
    let score_right = screen_width - MARGIN;
    let score_x = score_right - text_width(&score, TEXT_SCALE) as i32;
    frame.draw_text(&score, score_x, MARGIN, TEXT_SCALE, TEXT_COLOR);

    let high_score = format_score(stats.high_score);
    let high_x = screen_width / 2 - (text_width(&high_score, TEXT_SCALE) / 2) as i32;
    frame.draw_text(&high_score, high_x, MARGIN, TEXT_SCALE, TEXT_COLOR);

    let level = stats.level.to_string();
    let level_x = score_right - text_width(&level, TEXT_SCALE) as i32;
    let level_y = MARGIN + line_height + LINE_GAP;
    frame.draw_text(&level, level_x, level_y, TEXT_SCALE, TEXT_COLOR);

    for i in 0..stats.ships_left {
        let icon = Rect::new(
            SHIPS_MARGIN + (i * settings.ship_width) as i32,
            SHIPS_MARGIN,
            settings.ship_width,
            settings.ship_height,
        );
        frame.draw_sprite(&SHIP_SPRITE, icon, settings.ship_color);
    }
}
