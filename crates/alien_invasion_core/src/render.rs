//! Software renderer drawing the game into an RGB24 frame buffer.

pub mod font;
pub mod sprite;

use alien_invasion_common::color::Color;

use crate::game::Game;
use crate::rect::Rect;
use sprite::{Sprite, ALIEN_SPRITE, SHIP_SPRITE};

/// Mutable view over a row-major RGB24 pixel buffer.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Returns `None` if `pixels` is not exactly `width * height * 3` bytes.
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        if pixels.len() != width * height * 3 {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some(Color::new_rgb(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(3) {
            color.write_rgb24(pixel);
        }
    }

    /// Intersection of `rect` with the buffer, as pixel ranges.
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = rect.left().max(0) as usize;
        let y0 = rect.top().max(0) as usize;
        let x1 = (rect.right().max(0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0) as usize).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = y * self.width * 3;
            for pixel in self.pixels[row + x0 * 3..row + x1 * 3].chunks_exact_mut(3) {
                color.write_rgb24(pixel);
            }
        }
    }

    /// Draw `sprite` stretched over `rect` with nearest-neighbour sampling.
    pub fn draw_sprite(&mut self, sprite: &Sprite, rect: Rect, color: Color) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let sy = (y as i64 - rect.top() as i64) * sprite.height() as i64 / rect.height as i64;
            for x in x0..x1 {
                let sx =
                    (x as i64 - rect.left() as i64) * sprite.width() as i64 / rect.width as i64;
                if sprite.is_set(sx as u32, sy as u32) {
                    let idx = (y * self.width + x) * 3;
                    color.write_rgb24(&mut self.pixels[idx..idx + 3]);
                }
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Color) {
        let mut origin_x = x;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if font::glyph_pixel(&rows, col, row) {
                        let px = origin_x + (col * scale) as i32;
                        let py = y + (row * scale) as i32;
                        self.fill_rect(Rect::new(px, py, scale, scale), color);
                    }
                }
            }
            origin_x += font::advance(scale) as i32;
        }
    }
}

/// Render the whole game into `screen`, an RGB24 buffer sized for the
/// game's screen settings.
pub fn render(game: &Game, screen: &mut [u8]) {
    let settings = game.settings();
    let (width, height) = (
        settings.screen_width as usize,
        settings.screen_height as usize,
    );
    let len = screen.len();
    match FrameBuffer::new(screen, width, height) {
        Some(mut frame) => draw_game(game, &mut frame),
        None => log::warn!(
            "Screen buffer holds {} bytes, expected {} for {}x{}",
            len,
            width * height * 3,
            width,
            height
        ),
    }
}

/// Background, ship, bullets, aliens, then the HUD on top.
pub fn draw_game(game: &Game, frame: &mut FrameBuffer) {
    let settings = game.settings();
    frame.fill(settings.bg_color);

    frame.draw_sprite(&SHIP_SPRITE, game.ship().rect, settings.ship_color);

    for bullet in game.bullets() {
        frame.fill_rect(bullet.rect, settings.bullet_color);
    }

    for alien in game.aliens() {
        frame.draw_sprite(&ALIEN_SPRITE, alien.rect, settings.alien_color);
    }

    if !game.stats().game_active {
        game.play_button().draw(frame);
    }

    crate::hud::scoreboard::draw(game, frame);
}
