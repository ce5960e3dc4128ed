//! Collision and progression rules for one simulation tick.
//!
//! Every function works on explicitly borrowed pieces of the game so the
//! orchestrator stays the sole owner of state.

use crate::entity::{Alien, Bullet, Ship};
use crate::fleet;
use crate::settings::Settings;
use crate::stats::GameStats;

/// What the tick asks the orchestrator to do next.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Continue,
    /// The ship was rammed or an alien landed.
    ShipHit,
}

/// Result of subtracting a life.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LifeLoss {
    /// Ships remain; a fresh fleet has been built.
    NextShip,
    GameOver,
}

/// Run steps 1 to 8 of a tick. The ship has already moved.
pub fn step(
    settings: &mut Settings,
    stats: &mut GameStats,
    ship: &Ship,
    bullets: &mut Vec<Bullet>,
    aliens: &mut Vec<Alien>,
) -> TickOutcome {
    update_bullets(settings, bullets);

    let destroyed = resolve_bullet_hits(bullets, aliens);
    if destroyed > 0 {
        stats.score += settings.alien_points * destroyed as u64;
        stats.check_high_score();
    }

    if aliens.is_empty() {
        start_next_level(settings, stats, bullets, aliens);
    }

    update_aliens(settings, aliens);

    if ship_collided(ship, aliens) || aliens_reached_bottom(settings, aliens) {
        TickOutcome::ShipHit
    } else {
        TickOutcome::Continue
    }
}

/// Drop bullets that left the screen, then move the rest.
pub fn update_bullets(settings: &Settings, bullets: &mut Vec<Bullet>) {
    bullets.retain(|bullet| !bullet.is_off_screen());
    for bullet in bullets.iter_mut() {
        bullet.update(settings);
    }
}

/// Remove every bullet that overlaps an alien along with all aliens it
/// overlaps. A bullet can take out several aliens at once; an alien already
/// destroyed by an earlier bullet can't absorb a later one.
///
/// Returns the number of aliens destroyed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let mut destroyed = 0;
    bullets.retain(|bullet| {
        let before = aliens.len();
        aliens.retain(|alien| !bullet.rect.intersects(&alien.rect));
        let hits = before - aliens.len();
        destroyed += hits;
        hits == 0
    });
    destroyed
}

/// The fleet was wiped out: clear the sky, bring in a faster fleet.
pub fn start_next_level(
    settings: &mut Settings,
    stats: &mut GameStats,
    bullets: &mut Vec<Bullet>,
    aliens: &mut Vec<Alien>,
) {
    bullets.clear();
    fleet::populate(settings, aliens);
    settings.increase_speed();
    stats.level += 1;
    log::info!(
        "Fleet cleared, starting level {} (score {})",
        stats.level,
        stats.score
    );
}

/// Bounce the fleet off the screen edges, then move every alien.
pub fn update_aliens(settings: &mut Settings, aliens: &mut [Alien]) {
    if aliens
        .iter()
        .any(|alien| alien.check_edges(settings.screen_width))
    {
        change_fleet_direction(settings, aliens);
    }
    for alien in aliens.iter_mut() {
        alien.update(settings);
    }
}

/// Drop the entire fleet and reverse its direction.
pub fn change_fleet_direction(settings: &mut Settings, aliens: &mut [Alien]) {
    for alien in aliens.iter_mut() {
        alien.drop_by(settings.fleet_drop_speed);
    }
    settings.fleet_direction = settings.fleet_direction.reversed();
}

pub fn ship_collided(ship: &Ship, aliens: &[Alien]) -> bool {
    aliens.iter().any(|alien| alien.rect.intersects(&ship.rect))
}

pub fn aliens_reached_bottom(settings: &Settings, aliens: &[Alien]) -> bool {
    let bottom = settings.screen_height as i32;
    aliens.iter().any(|alien| alien.rect.bottom() >= bottom)
}

/// Take one ship away. While ships remain the round restarts with a fresh
/// fleet and a centered ship; the last ship ends the game and leaves the
/// board as it was.
pub fn lose_life(
    settings: &Settings,
    stats: &mut GameStats,
    ship: &mut Ship,
    bullets: &mut Vec<Bullet>,
    aliens: &mut Vec<Alien>,
) -> LifeLoss {
    stats.ships_left = stats.ships_left.saturating_sub(1);
    if stats.ships_left > 0 {
        bullets.clear();
        fleet::populate(settings, aliens);
        ship.center_ship();
        LifeLoss::NextShip
    } else {
        stats.game_active = false;
        LifeLoss::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use crate::settings::FleetDirection;

    #[test]
    fn one_bullet_can_destroy_overlapping_aliens() {
        let settings = Settings::default();
        let mut aliens = vec![
            Alien::new(100, 100, 60, 58),
            Alien::new(102, 110, 60, 58),
            Alien::new(400, 100, 60, 58),
        ];
        let mut bullets = vec![Bullet::at(&settings, 130, 120)];

        let destroyed = resolve_bullet_hits(&mut bullets, &mut aliens);

        assert_eq!(destroyed, 2);
        assert!(bullets.is_empty());
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].rect.x, 400);
    }

    #[test]
    fn second_bullet_passes_through_dead_alien() {
        let settings = Settings::default();
        let mut aliens = vec![Alien::new(100, 100, 60, 58)];
        let mut bullets = vec![
            Bullet::at(&settings, 110, 120),
            Bullet::at(&settings, 120, 120),
        ];

        assert_eq!(resolve_bullet_hits(&mut bullets, &mut aliens), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.x, 120);
    }

    #[test]
    fn off_screen_bullets_are_removed_before_moving() {
        let settings = Settings::default();
        let mut bullets = vec![
            Bullet::at(&settings, 10, -15),
            Bullet::at(&settings, 20, -14),
        ];
        update_bullets(&settings, &mut bullets);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.x, 20);
    }

    #[test]
    fn edge_contact_drops_and_reverses_fleet() {
        let mut settings = Settings::default();
        let mut aliens = vec![Alien::new(1140, 100, 60, 58), Alien::new(500, 100, 60, 58)];

        update_aliens(&mut settings, &mut aliens);

        assert_eq!(settings.fleet_direction, FleetDirection::Left);
        assert_eq!(aliens[0].rect, Rect::new(1139, 120, 60, 58));
        assert_eq!(aliens[1].rect, Rect::new(499, 120, 60, 58));
    }

    #[test]
    fn detects_ship_contact_and_landing() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let rammer = Alien::new(ship.rect.x, ship.rect.y - 57, 60, 58);
        let hovering = Alien::new(ship.rect.x, ship.rect.y - 58, 60, 58);
        assert!(ship_collided(&ship, &[rammer]));
        assert!(!ship_collided(&ship, &[hovering.clone()]));

        let landed = Alien::new(10, 742, 60, 58);
        assert!(aliens_reached_bottom(&settings, &[landed]));
        assert!(!aliens_reached_bottom(&settings, &[hovering]));
    }

    #[test]
    fn losing_last_ship_keeps_board() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.game_active = true;
        stats.ships_left = 1;
        let mut ship = Ship::new(&settings);
        let mut bullets = vec![Bullet::new(&settings, &ship)];
        let mut aliens = vec![Alien::new(10, 742, 60, 58)];

        let outcome = lose_life(&settings, &mut stats, &mut ship, &mut bullets, &mut aliens);

        assert_eq!(outcome, LifeLoss::GameOver);
        assert_eq!(stats.ships_left, 0);
        assert!(!stats.game_active);
        assert_eq!(aliens.len(), 1);
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn losing_a_spare_ship_rebuilds_round() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.game_active = true;
        let mut ship = Ship::new(&settings);
        let home = ship.rect;
        ship.rect.x = 0;
        let mut bullets = vec![Bullet::new(&settings, &ship)];
        let mut aliens = vec![Alien::new(10, 742, 60, 58)];

        let outcome = lose_life(&settings, &mut stats, &mut ship, &mut bullets, &mut aliens);

        assert_eq!(outcome, LifeLoss::NextShip);
        assert_eq!(stats.ships_left, 2);
        assert!(stats.game_active);
        assert!(bullets.is_empty());
        assert_eq!(aliens.len(), 36);
        assert_eq!(ship.rect, home);
    }
}
