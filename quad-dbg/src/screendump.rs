use std::fmt;
use std::sync::{LazyLock, Mutex};

use macroquad::prelude::*;

use crate::screentext::{Line, draw_lines};

const DUMP_CAPACITY: usize = 100;

pub static GLOBAL_DUMP: LazyLock<ScreenDump> = LazyLock::new(ScreenDump::new);

/// Writes a formatted line into the per-frame value dump.
#[macro_export]
macro_rules! dump {
    ($($arg:tt)+) => {
        $crate::GLOBAL_DUMP.put_line(format_args!($($arg)+))
    };
}

/// Lines of values collected during one frame. The dump is wiped at
/// the start of every frame with [ScreenDump::new_frame].
pub struct ScreenDump(Mutex<ScreenDumpBuff>);

impl ScreenDump {
    pub fn new() -> Self {
        ScreenDump(Mutex::new(ScreenDumpBuff::new()))
    }

    pub fn new_frame() {
        if let Ok(mut buff) = GLOBAL_DUMP.0.lock() {
            buff.reset();
        }
    }

    pub fn draw() {
        let Ok(buff) = GLOBAL_DUMP.0.lock() else {
            return;
        };

        draw_lines(buff.lines(), screen_width(), 0.0, true);
    }

    pub fn put_line(&self, args: fmt::Arguments) {
        let Ok(mut buff) = self.0.lock() else {
            return;
        };

        if let Some(line) = buff.next_line() {
            let _ = fmt::write(line, args);
        }
    }

    pub fn line_count(&self) -> usize {
        self.0.lock().map(|buff| buff.used).unwrap_or(0)
    }
}

impl Default for ScreenDump {
    fn default() -> Self {
        ScreenDump::new()
    }
}

struct ScreenDumpBuff {
    lines: Vec<Line>,
    used: usize,
}

impl ScreenDumpBuff {
    fn new() -> Self {
        ScreenDumpBuff {
            lines: Vec::with_capacity(DUMP_CAPACITY),
            used: 0,
        }
    }

    fn next_line(&mut self) -> Option<&mut Line> {
        if self.used >= DUMP_CAPACITY {
            return None;
        }
        if self.used >= self.lines.len() {
            self.lines.push(Line::new());
        }

        let line = &mut self.lines[self.used];
        self.used += 1;
        Some(line)
    }

    fn reset(&mut self) {
        self.used = 0;
        self.lines.iter_mut().for_each(Line::clear);
    }

    fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().take(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_capped() {
        let dump = ScreenDump::new();

        for idx in 0..DUMP_CAPACITY * 2 {
            dump.put_line(format_args!("value {idx}"));
        }

        assert_eq!(dump.line_count(), DUMP_CAPACITY);
    }

    #[test]
    fn dump_lines_keep_text() {
        let dump = ScreenDump::new();
        dump.put_line(format_args!("FPS: {}", 60));

        let buff = dump.0.lock().unwrap();
        let lines = buff.lines().map(Line::as_str).collect::<Vec<_>>();
        assert_eq!(lines, ["FPS: 60"]);
    }
}
