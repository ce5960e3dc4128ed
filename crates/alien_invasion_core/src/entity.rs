mod alien;
mod bullet;
mod ship;

pub use alien::Alien;
pub use bullet::Bullet;
pub use ship::{Ship, ShipMove};
