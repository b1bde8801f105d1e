//! Process-wide `log` recorder for asserting on emitted records.
//!
//! The recorder is installed once per test binary. Tests run in parallel, so
//! filter by target and by a message unique to the test.

use std::sync::{Mutex, Once};

static RECORDS: Mutex<Vec<CapturedRecord>> = Mutex::new(Vec::new());

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

struct Recorder;

impl log::Log for Recorder {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

/// Install the recorder as the global logger.
pub fn install() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&Recorder).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Records from `target` whose message contains `needle`.
pub fn records_matching(target: &str, needle: &str) -> Vec<CapturedRecord> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r.target == target && r.message.contains(needle))
        .cloned()
        .collect()
}
