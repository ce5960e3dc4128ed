use crate::entity::Ship;
use crate::rect::Rect;
use crate::settings::Settings;

/// A projectile fired straight up from the ship.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    y: f32,
}

impl Bullet {
    /// Spawn a bullet with its top edge centered on the ship's top edge.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let x = ship.rect.center_x() - (settings.bullet_width / 2) as i32;
        Self::at(settings, x, ship.rect.top())
    }

    /// A bullet with its top-left corner at `(x, y)`.
    pub fn at(settings: &Settings, x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, settings.bullet_width, settings.bullet_height),
            y: y as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }

    /// True once the bullet has fully left through the top of the screen.
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_on_ship_midtop() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let bullet = Bullet::new(&settings, &ship);
        assert_eq!(bullet.rect.top(), ship.rect.top());
        assert_eq!(bullet.rect.center_x(), ship.rect.center_x());
        assert_eq!((bullet.rect.width, bullet.rect.height), (3, 15));
    }

    #[test]
    fn travels_up_until_off_screen() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        let start = bullet.rect.y;

        bullet.update(&settings);
        assert_eq!(bullet.rect.y, start - 3);

        let mut ticks = 1;
        while !bullet.is_off_screen() {
            bullet.update(&settings);
            ticks += 1;
        }
        // 752 px from the ship top plus the 15 px body, 3 px per tick.
        assert_eq!(ticks, 256);
    }
}
