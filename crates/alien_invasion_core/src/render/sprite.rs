/// A 1-bit image; `X` marks a lit pixel.
#[derive(Copy, Clone, Debug)]
pub struct Sprite {
    rows: &'static [&'static str],
}

impl Sprite {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> u32 {
        self.rows.first().map_or(0, |row| row.len() as u32)
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_set(&self, col: u32, row: u32) -> bool {
        self.rows
            .get(row as usize)
            .and_then(|r| r.as_bytes().get(col as usize))
            .is_some_and(|&b| b == b'X')
    }
}

pub const SHIP_SPRITE: Sprite = Sprite::new(&[
    "......X......",
    ".....XXX.....",
    ".....XXX.....",
    ".XXXXXXXXXXX.",
    "XXXXXXXXXXXXX",
    "XXXXXXXXXXXXX",
    "XXXXXXXXXXXXX",
    "XXXXXXXXXXXXX",
]);

pub const ALIEN_SPRITE: Sprite = Sprite::new(&[
    "..X.....X..",
    "...X...X...",
    "..XXXXXXX..",
    ".XX.XXX.XX.",
    "XXXXXXXXXXX",
    "X.XXXXXXX.X",
    "X.X.....X.X",
    "...XX.XX...",
]);
