/// Frontend-independent keys the game reacts to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Space,
    Up,
    Return,
    Escape,
    None,
}

impl Key {
    /// Keys that make the bird flap (and start a round from the splash screen).
    pub fn is_flap(self) -> bool {
        matches!(self, Key::Space | Key::Up | Key::Return)
    }
}
