//! Capturing logger for tests. Records are kept per thread, so parallel
//! tests only see their own output.

use log::{Level, LevelFilter, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

struct CaptureLogger;

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

pub fn init() {
    INIT.call_once(|| {
        let _ = log::set_logger(&CAPTURE_LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

pub fn clear() {
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn records_at(level: Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
