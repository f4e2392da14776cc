use std::fmt::Write;
use std::sync::{LazyLock, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use macroquad::prelude::*;

use crate::screentext::{Line, draw_lines};

const DBG_MSG_LIFE: f32 = 3.0;
const DBG_MSG_CAP: usize = 30;

struct DebugMsg {
    line: Line,
    spawn_time: f32,
}

struct DebugMsgStore {
    cursor: usize,
    msgs: Vec<DebugMsg>,
}

impl DebugMsgStore {
    fn new() -> Self {
        Self {
            cursor: 0,
            msgs: (0..DBG_MSG_CAP)
                .map(|_| DebugMsg {
                    line: Line::new(),
                    spawn_time: f32::NEG_INFINITY,
                })
                .collect(),
        }
    }

    fn put(&mut self, record: &Record, time: f32) {
        let msg = &mut self.msgs[self.cursor];

        msg.line.clear();
        msg.line.color = level_color(record.level());
        let _ = write!(&mut msg.line, "[{}] {}", record.level(), record.args());
        msg.spawn_time = time;

        self.cursor = (self.cursor + 1) % DBG_MSG_CAP;
    }

    /// Messages younger than [DBG_MSG_LIFE], oldest first.
    fn alive(&self, time: f32) -> impl Iterator<Item = &Line> {
        let (newer, older) = self.msgs.split_at(self.cursor);
        older
            .iter()
            .chain(newer)
            .filter(move |msg| msg.spawn_time + DBG_MSG_LIFE >= time)
            .map(|msg| &msg.line)
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => RED,
        Level::Warn => YELLOW,
        Level::Info => GREEN,
        Level::Debug => WHITE,
        Level::Trace => GRAY,
    }
}

static DEBUG_MSGS: LazyLock<Mutex<DebugMsgStore>> =
    LazyLock::new(|| Mutex::new(DebugMsgStore::new()));

struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());

        if let Ok(mut store) = DEBUG_MSGS.lock() {
            store.put(record, get_time() as f32);
        }
    }

    fn flush(&self) {}
}

/// Installs the on-screen logger. Every record also goes to stderr.
pub fn init_on_screen_log() -> Result<(), SetLoggerError> {
    log::set_logger(&ON_SCREEN_LOG)?;
    log::set_max_level(log::STATIC_MAX_LEVEL);
    if log::max_level() == LevelFilter::Off {
        eprintln!("Logging is compiled out");
    }

    Ok(())
}

/// Draws the recent log messages in the top-left corner.
pub fn draw_log() {
    let Ok(store) = DEBUG_MSGS.lock() else {
        return;
    };

    draw_lines(store.alive(get_time() as f32), 0.0, 0.0, false);
}
