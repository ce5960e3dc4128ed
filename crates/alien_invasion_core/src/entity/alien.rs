use crate::rect::Rect;
use crate::settings::Settings;

/// A single member of the alien fleet.
#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    /// Sub-pixel horizontal position; `rect.x` is its truncation.
    x: f32,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            x: x as f32,
        }
    }

    /// Move sideways in the current fleet direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction.sign();
        self.rect.x = self.x as i32;
    }

    /// True if the alien touches either side of the screen.
    pub fn check_edges(&self, screen_width: u32) -> bool {
        self.rect.right() >= screen_width as i32 || self.rect.left() <= 0
    }

    /// Move down by `dy` pixels.
    pub fn drop_by(&mut self, dy: i32) {
        self.rect.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FleetDirection;

    #[test]
    fn follows_fleet_direction() {
        let mut settings = Settings::default();
        let mut alien = Alien::new(100, 50, 60, 58);
        alien.update(&settings);
        assert_eq!(alien.rect.x, 101);

        settings.fleet_direction = FleetDirection::Left;
        alien.update(&settings);
        alien.update(&settings);
        assert_eq!(alien.rect.x, 99);
        assert_eq!(alien.rect.y, 50);
    }

    #[test]
    fn detects_edges() {
        assert!(Alien::new(0, 10, 60, 58).check_edges(1200));
        assert!(Alien::new(1140, 10, 60, 58).check_edges(1200));
        assert!(!Alien::new(1, 10, 60, 58).check_edges(1200));
        assert!(!Alien::new(1139, 10, 60, 58).check_edges(1200));
    }

    #[test]
    fn drop_moves_down_only() {
        let mut alien = Alien::new(60, 58, 60, 58);
        alien.drop_by(20);
        assert_eq!((alien.rect.x, alien.rect.y), (60, 78));
    }
}
