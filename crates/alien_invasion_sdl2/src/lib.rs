use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use typed_builder::TypedBuilder;

pub use alien_invasion_common::app::App;
pub use sdl2;

use alien_invasion_common::key::{Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Target duration of one frame; the loop sleeps off whatever is left.
    #[builder(default = Duration::from_micros(16_667))]
    pub target_frame: Duration,
}

pub struct SdlContext {
    pub sdl_context: sdl2::Sdl,
    pub event_pump: sdl2::EventPump,
    pub canvas: WindowCanvas,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub pixel_format: PixelFormat,
    pub target_frame: Duration,
}

impl SdlContext {
    pub fn new(sdl_init_info: SdlInitInfo) -> Result<Self> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            target_frame,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        log::info!("Opened '{}' window at {}x{} (scale {})", title, width, height, scale);

        Ok(Self {
            sdl_context,
            event_pump,
            canvas,
            width,
            height,
            scale,
            pixel_format,
            target_frame,
        })
    }

    pub fn run(sdl_init_info: SdlInitInfo, app: impl App) -> Result<()> {
        let mut context = Self::new(sdl_init_info)?;
        context.run_app(app)
    }

    fn run_app(&mut self, mut app: impl App) -> Result<()> {
        let creator = self.canvas.texture_creator();
        let mut texture = creator.create_texture_streaming(
            map_pixel_format(self.pixel_format),
            self.width,
            self.height,
        )?;

        let color_size = map_pixel_format_size(self.pixel_format);
        let mut screen_state = vec![0u8; (self.width * color_size * self.height) as usize];
        let mouse = self.sdl_context.mouse();
        let scale = self.scale.max(1) as i32;

        app.init();
        let mut cursor_visible = app.cursor_visible();
        mouse.show_cursor(cursor_visible);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                        app.handle_mouse_click(map_mouse_button(mouse_btn), x / scale, y / scale);
                    }
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            if app.cursor_visible() != cursor_visible {
                cursor_visible = !cursor_visible;
                mouse.show_cursor(cursor_visible);
            }

            texture.update(None, &screen_state, (self.width * color_size) as usize)?;
            self.canvas.clear();
            self.canvas
                .copy(&texture, None, None)
                .map_err(|e| anyhow!(e))?;
            self.canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < self.target_frame {
                std::thread::sleep(self.target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Q => Key::Q,
        _ => Key::None,
    }
}

pub fn map_mouse_button(button: sdl2::mouse::MouseButton) -> MouseButton {
    match button {
        sdl2::mouse::MouseButton::Left => MouseButton::Left,
        sdl2::mouse::MouseButton::Middle => MouseButton::Middle,
        sdl2::mouse::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}
