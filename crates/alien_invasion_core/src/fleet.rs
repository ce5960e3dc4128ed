//! Grid layout for the alien fleet.
//!
//! Aliens are spaced one alien width apart horizontally, with a one-width
//! margin on each side. Vertically the fleet starts one alien height from the
//! top and leaves room for three alien heights plus the ship at the bottom.

use crate::entity::Alien;
use crate::settings::Settings;

/// Number of columns and rows the fleet occupies.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FleetLayout {
    pub columns: u32,
    pub rows: u32,
}

impl FleetLayout {
    pub fn compute(
        screen_width: u32,
        screen_height: u32,
        alien_width: u32,
        alien_height: u32,
        ship_height: u32,
    ) -> Self {
        let (screen_width, screen_height) = (screen_width as i64, screen_height as i64);
        let (alien_width, alien_height) = (alien_width.max(1) as i64, alien_height.max(1) as i64);

        let available_x = screen_width - 2 * alien_width;
        let available_y = screen_height - 3 * alien_height - ship_height as i64;

        Self {
            columns: (available_x.max(0) / (2 * alien_width)) as u32,
            rows: (available_y.max(0) / (2 * alien_height)) as u32,
        }
    }

    pub fn for_settings(settings: &Settings) -> Self {
        Self::compute(
            settings.screen_width,
            settings.screen_height,
            settings.alien_width,
            settings.alien_height,
            settings.ship_height,
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Top-left corner of the alien at `(column, row)`.
pub fn alien_position(column: u32, row: u32, alien_width: u32, alien_height: u32) -> (i32, i32) {
    let x = alien_width + 2 * alien_width * column;
    let y = alien_height + 2 * alien_height * row;
    (x as i32, y as i32)
}

/// Refill `aliens` in place with a complete fleet.
pub fn populate(settings: &Settings, aliens: &mut Vec<Alien>) -> FleetLayout {
    let layout = FleetLayout::for_settings(settings);
    let (width, height) = (settings.alien_width, settings.alien_height);

    aliens.clear();
    aliens.reserve(layout.len());
    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let (x, y) = alien_position(column, row, width, height);
            aliens.push(Alien::new(x, y, width, height));
        }
    }

    log::debug!(
        "Built fleet of {} aliens ({} columns x {} rows)",
        aliens.len(),
        layout.columns,
        layout.rows
    );
    layout
}
