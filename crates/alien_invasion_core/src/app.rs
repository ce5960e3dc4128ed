use std::time::Instant;

use crate::game::Game;
use crate::render;
use crate::SCREEN_SCALE;
use alien_invasion_common::app::App;
use alien_invasion_common::key::{Key, MouseButton};

/// SDL2-facing application wrapper for the game.
///
/// `Q` quits; everything else is forwarded to the `Game`.
#[derive(Default)]
pub struct AlienInvasionApp {
    should_exit: bool,
    pub game: Game,
}

impl AlienInvasionApp {
    pub fn new(game: Game) -> Self {
        Self {
            should_exit: false,
            game,
        }
    }
}

impl App for AlienInvasionApp {
    fn init(&mut self) {
        log::info!("Alien Invasion init");
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.game.update(Instant::now());
        render::render(&self.game, screen_state);
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        log::debug!("Key event: {:?} pressed={}", key, is_pressed);
        if key == Key::Q && is_pressed {
            self.should_exit = true;
            return;
        }
        self.game.handle_key(key, is_pressed);
    }

    fn handle_mouse_click(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left && self.game.handle_click(x, y) {
            log::debug!("Play clicked at ({}, {})", x, y);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!(
            "Alien Invasion exit (high score {})",
            self.game.stats().high_score
        );
    }

    fn cursor_visible(&self) -> bool {
        self.game.cursor_visible()
    }

    fn width(&self) -> u32 {
        self.game.settings().screen_width
    }

    fn height(&self) -> u32 {
        self.game.settings().screen_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Alien Invasion".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_requests_exit() {
        let mut app = AlienInvasionApp::default();
        assert!(!app.should_exit());
        app.handle_key_event(Key::Q, false);
        assert!(!app.should_exit());
        app.handle_key_event(Key::Q, true);
        assert!(app.should_exit());
    }

    #[test]
    fn only_left_click_presses_play() {
        let mut app = AlienInvasionApp::default();
        let rect = app.game.play_button().rect;
        assert!(app.cursor_visible());

        app.handle_mouse_click(MouseButton::Right, rect.center_x(), rect.center_y());
        assert!(!app.game.stats().game_active);

        app.handle_mouse_click(MouseButton::Left, rect.center_x(), rect.center_y());
        assert!(app.game.stats().game_active);
        assert!(!app.cursor_visible());
    }

    #[test]
    fn update_fills_screen_buffer() {
        let mut app = AlienInvasionApp::default();
        let (w, h) = (app.width() as usize, app.height() as usize);
        let mut screen = vec![0u8; w * h * 3];
        app.update(&mut screen);
        let bg = app.game.settings().bg_color;
        let last = (w * h - 1) * 3;
        assert_eq!(&screen[last..], &[bg.r, bg.g, bg.b]);
    }
}
