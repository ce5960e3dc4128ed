use crate::rect::Rect;
use crate::settings::Settings;

/// Net horizontal intent resolved from the two movement flags.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShipMove {
    Left,
    Right,
}

/// The player's ship, pinned to the bottom of the screen.
#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Sub-pixel horizontal position; `rect.x` is its truncation.
    x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    screen_width: u32,
    screen_height: u32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
        };
        ship.center_ship();
        ship
    }

    /// Which way the ship wants to go. Right takes precedence when both
    /// flags are set.
    pub fn intent(&self) -> Option<ShipMove> {
        if self.moving_right {
            Some(ShipMove::Right)
        } else if self.moving_left {
            Some(ShipMove::Left)
        } else {
            None
        }
    }

    /// Move according to the movement flags, stopping at the screen edges.
    pub fn update(&mut self, settings: &Settings) {
        match self.intent() {
            Some(ShipMove::Right) if self.rect.right() < self.screen_width as i32 => {
                self.x += settings.ship_speed;
            }
            Some(ShipMove::Left) if self.rect.left() > 0 => {
                self.x -= settings.ship_speed;
            }
            _ => return,
        }
        self.rect.x = self.x as i32;
    }

    /// Put the ship back at the bottom center of the screen.
    pub fn center_ship(&mut self) {
        self.rect.x = (self.screen_width as i32 - self.rect.width as i32) / 2;
        self.rect.y = self.screen_height as i32 - self.rect.height as i32;
        self.x = self.rect.x as f32;
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_sits_bottom_center() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        assert_eq!(ship.rect.center_x(), 600);
        assert_eq!(ship.rect.bottom(), 800);
    }

    #[test]
    fn accumulates_sub_pixel_motion() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        let start = ship.rect.x;
        ship.moving_right = true;
        ship.update(&settings);
        assert_eq!(ship.rect.x, start + 1);
        ship.update(&settings);
        assert_eq!(ship.rect.x, start + 3);
    }

    #[test]
    fn right_wins_when_both_flags_set() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        let start = ship.rect.x;
        ship.moving_left = true;
        ship.moving_right = true;
        assert_eq!(ship.intent(), Some(ShipMove::Right));
        for _ in 0..4 {
            ship.update(&settings);
        }
        assert_eq!(ship.rect.x, start + 6);
    }

    #[test]
    fn stops_at_screen_edges() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);

        ship.moving_left = true;
        for _ in 0..1_000 {
            ship.update(&settings);
        }
        assert!(ship.rect.left() <= 0);
        assert!(ship.rect.left() > -2);

        ship.stop();
        ship.moving_right = true;
        for _ in 0..1_000 {
            ship.update(&settings);
        }
        assert!(ship.rect.right() >= 1200);
        assert!(ship.rect.right() < 1202);
    }

    #[test]
    fn center_ship_restores_position() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        let home = ship.rect;
        ship.moving_left = true;
        for _ in 0..50 {
            ship.update(&settings);
        }
        assert_ne!(ship.rect, home);
        ship.center_ship();
        assert_eq!(ship.rect, home);
    }
}
