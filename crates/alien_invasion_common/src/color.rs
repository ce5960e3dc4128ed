#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Write this color into one RGB24 pixel slot.
    #[inline]
    pub fn write_rgb24(&self, pixel: &mut [u8]) {
        pixel[0] = self.r;
        pixel[1] = self.g;
        pixel[2] = self.b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_rgb24_fills_three_bytes() {
        let mut px = [0u8; 4];
        Color::new_rgb(1, 2, 3).write_rgb24(&mut px);
        assert_eq!(px, [1, 2, 3, 0]);
    }
}
