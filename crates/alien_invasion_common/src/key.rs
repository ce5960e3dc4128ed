/// Logical keys understood by the game, independent of the frontend.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Key {
    Left,
    Right,
    Space,
    Q,
    #[default]
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other,
}
