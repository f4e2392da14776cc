use macroquad::prelude::*;

pub(crate) const CHARS_PER_LINE: usize = 255;
pub(crate) const FONT_SIZE: u16 = 16;

/// A text line with a fixed capacity. Writes past the capacity are cut.
#[derive(Clone, Debug)]
pub(crate) struct Line {
    buf: String,
    pub(crate) color: Color,
}

impl Line {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::with_capacity(CHARS_PER_LINE),
            color: WHITE,
        }
    }

    pub(crate) fn put(&mut self, s: &str) {
        let used = self.buf.len();
        if used >= CHARS_PER_LINE {
            return;
        }
        let remaining = CHARS_PER_LINE - used;

        let mut end = s.len().min(remaining);
        while !s.is_char_boundary(end) {
            end -= 1;
        }

        self.buf.push_str(&s[..end]);
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }
}

impl std::fmt::Write for Line {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.put(s);
        Ok(())
    }
}

/// Draws `lines` top to bottom, starting at `(x, y)` in screen space.
/// When `align_right` is set, `x` is the right edge of the text.
pub(crate) fn draw_lines<'a>(
    lines: impl IntoIterator<Item = &'a Line>,
    x: f32,
    y: f32,
    align_right: bool,
) {
    set_default_camera();

    let mut y = y + FONT_SIZE as f32;
    for line in lines {
        let x = if align_right {
            x - measure_text(line.as_str(), None, FONT_SIZE, 1.0).width
        } else {
            x
        };
        draw_text(line.as_str(), x, y, FONT_SIZE as f32, line.color);
        y += FONT_SIZE as f32;
    }
}
