use alien_invasion_common::color::Color;

use crate::hud::TEXT_SCALE;
use crate::rect::Rect;
use crate::render::font::{text_width, GLYPH_HEIGHT};
use crate::render::FrameBuffer;

pub const BUTTON_WIDTH: u32 = 200;
pub const BUTTON_HEIGHT: u32 = 50;

/// A solid button with a centered label.
#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub button_color: Color,
    pub text_color: Color,
    pub label: &'static str,
}

impl Button {
    /// The green "Play" button in the middle of the screen.
    pub fn play(screen_width: u32, screen_height: u32) -> Self {
        Self {
            rect: Rect::centered_at(
                (screen_width / 2) as i32,
                (screen_height / 2) as i32,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            button_color: Color::GREEN,
            text_color: Color::WHITE,
            label: "Play",
        }
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        frame.fill_rect(self.rect, self.button_color);

        let x = self.rect.center_x() - (text_width(self.label, TEXT_SCALE) / 2) as i32;
        let y = self.rect.center_y() - (GLYPH_HEIGHT * TEXT_SCALE / 2) as i32;
        frame.draw_text(self.label, x, y, TEXT_SCALE, self.text_color);
    }
}
