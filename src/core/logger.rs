use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

static MY_LOGGER: Lazy<MyLogger> = Lazy::new(|| MyLogger {
    console : AtomicBool::new(true),
    file    : Mutex::new(None),
});

struct MyLogger {
    console : AtomicBool,
    file    : Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if self.console.load(Ordering::Relaxed) {
            println!("{}", line);
        }
        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = writeln!(fp, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = fp.flush();
            }
        }
    }
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs the crate logger. Log lines go to stdout and, when `file` is
/// given, are appended to that file as well. Calling it again only updates
/// the level and the output file.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    let fp = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {e}", path))
            .ok()
    });

    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = fp;
    }
    MY_LOGGER.console.store(true, Ordering::Relaxed);

    match log::set_logger(&*MY_LOGGER) {
        Ok(_) => INSTALLED.store(true, Ordering::Relaxed),
        Err(_) if INSTALLED.load(Ordering::Relaxed) => {},
        Err(e) => eprintln!("Installing logger error: {e}"),
    }
    log::set_max_level(level);
}

pub fn revert_console_output() {
    MY_LOGGER.console.store(false, Ordering::Relaxed);
}

/// Silences logging and closes the log file. The installed logger stays in
/// place, as `log` only allows one per process, so a later `setup` resumes
/// output through it.
pub fn teardown() {
    log::logger().flush();
    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = None;
    }
    log::set_max_level(LevelFilter::Off);
}
