use crate::bitmap::Mask;

/// Screen position of a sprite's top-left corner, in pixels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel-exact overlap test between two positioned masks.
///
/// Returns true iff some screen pixel is opaque in both masks. Only the
/// intersection of the two bounding boxes is scanned.
pub fn collides(a_pos: Point, a: &Mask, b_pos: Point, b: &Mask) -> bool {
    let left = a_pos.x.max(b_pos.x);
    let top = a_pos.y.max(b_pos.y);
    let right = (a_pos.x + a.width() as i32).min(b_pos.x + b.width() as i32);
    let bottom = (a_pos.y + a.height() as i32).min(b_pos.y + b.height() as i32);
    if left >= right || top >= bottom {
        return false;
    }

    for y in top..bottom {
        let (ay, by) = ((y - a_pos.y) as u32, (y - b_pos.y) as u32);
        for x in left..right {
            if a.is_opaque((x - a_pos.x) as u32, ay) && b.is_opaque((x - b_pos.x) as u32, by) {
                return true;
            }
        }
    }
    false
}
