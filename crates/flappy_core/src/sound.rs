/// Sound effects the game asks its frontend to play.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sound {
    Die,
    Hit,
    Point,
    Swoosh,
    Wing,
}

impl Sound {
    pub const ALL: [Sound; 5] = [
        Sound::Die,
        Sound::Hit,
        Sound::Point,
        Sound::Swoosh,
        Sound::Wing,
    ];

    /// File stem of the effect inside a sound pack.
    pub const fn name(self) -> &'static str {
        match self {
            Sound::Die => "die",
            Sound::Hit => "hit",
            Sound::Point => "point",
            Sound::Swoosh => "swoosh",
            Sound::Wing => "wing",
        }
    }
}
