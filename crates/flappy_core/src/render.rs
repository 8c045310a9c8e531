use std::rc::Rc;

use flappy_common::Color;

use crate::bitmap::{Bitmap, Sprite};

/// Blit `image` with its top-left corner at (`x`, `y`).
#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub image: Rc<Bitmap>,
    pub x: i32,
    pub y: i32,
}

impl DrawCommand {
    pub fn new(image: Rc<Bitmap>, x: i32, y: i32) -> Self {
        Self { image, x, y }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Anchor {
    Top,
    Bottom,
}

/// Distance kept from the screen edge when placing score digits.
const SCORE_MARGIN: i32 = 10;

/// Queue the glyphs for `value`, laid out left to right.
pub fn layout_number(
    value: u32,
    digits: &[Sprite; 10],
    align: Align,
    anchor: Anchor,
    (screen_width, screen_height): (i32, i32),
    out: &mut Vec<DrawCommand>,
) {
    let glyphs: Vec<&Sprite> = value
        .to_string()
        .bytes()
        .map(|b| &digits[(b - b'0') as usize])
        .collect();
    let total_width: i32 = glyphs.iter().map(|g| g.width()).sum();

    let mut x = match align {
        Align::Left => SCORE_MARGIN,
        Align::Center => screen_width / 2 - total_width / 2,
        Align::Right => screen_width - SCORE_MARGIN - total_width,
    };
    let y = match anchor {
        Anchor::Top => SCORE_MARGIN,
        Anchor::Bottom => screen_height - SCORE_MARGIN - digits[0].height(),
    };
    for glyph in glyphs {
        out.push(DrawCommand::new(Rc::clone(glyph.image()), x, y));
        x += glyph.width();
    }
}

/// Software compositor producing the RGB24 buffer the frontend uploads.
pub struct Frame {
    width: usize,
    height: usize,
    clear: Color,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            clear: Color::SKY,
        }
    }

    pub fn buffer_len(&self) -> usize {
        self.width * self.height * 3
    }

    /// Clear `screen` and draw `commands` in order, alpha-blending and
    /// clipping at the edges.
    pub fn rasterize(&self, commands: &[DrawCommand], screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), self.buffer_len());
        for px in screen.chunks_exact_mut(3) {
            px.copy_from_slice(&[self.clear.r, self.clear.g, self.clear.b]);
        }
        for command in commands {
            self.blit(command, screen);
        }
    }

    fn blit(&self, command: &DrawCommand, screen: &mut [u8]) {
        let image = &command.image;
        let x0 = command.x.max(0);
        let y0 = command.y.max(0);
        let x1 = (command.x + image.width() as i32).min(self.width as i32);
        let y1 = (command.y + image.height() as i32).min(self.height as i32);

        for y in y0..y1 {
            let sy = (y - command.y) as u32;
            for x in x0..x1 {
                let src = image.pixel((x - command.x) as u32, sy);
                if src.a == 0 {
                    continue;
                }
                let i = (y as usize * self.width + x as usize) * 3;
                let dst = Color::new_rgb(screen[i], screen[i + 1], screen[i + 2]);
                let out = src.over(dst);
                screen[i..i + 3].copy_from_slice(&[out.r, out.g, out.b]);
            }
        }
    }
}
