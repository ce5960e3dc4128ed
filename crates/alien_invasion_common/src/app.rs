use crate::key::{Key, MouseButton};

/// Contract between a frontend (window, input, presentation) and a game.
///
/// The frontend owns the RGB24 screen buffer and calls `update` once per
/// frame; coordinates passed to `handle_mouse_click` are logical pixels,
/// already divided by `scale`.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn handle_mouse_click(&mut self, button: MouseButton, x: i32, y: i32);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    /// Whether the OS pointer should be shown over the window.
    fn cursor_visible(&self) -> bool {
        true
    }

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
