//! Log bridge for the settings-search command-line tool.
//!
//! Routes every `log::info!()` etc. to stderr, or to a file when one is given,
//! so outline output on stdout stays clean for piping.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the
//! `log_level` field of the config file.
use parking_lot::Mutex;
use settings_search_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

enum Sink {
    Stderr,
    File(File),
}

struct LogBridge {
    level: log::LevelFilter,
    sink: Mutex<Sink>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            record.args(),
        );
        let mut sink = self.sink.lock();
        // A failing log sink must never take the tool down with it
        let _ = match &mut *sink {
            Sink::Stderr => io::stderr().write_all(line.as_bytes()),
            Sink::File(file) => file.write_all(line.as_bytes()).and_then(|_| file.flush()),
        };
    }

    fn flush(&self) {
        if let Sink::File(file) = &mut *self.sink.lock() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(
    timestamp: &str,
    level: log::Level,
    target: &str,
    args: &std::fmt::Arguments,
) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, args)
}

/// Pick the effective level from the CLI flag, `RUST_LOG`, and the config.
pub fn resolve_level(cli_level: Option<LogLevel>, config_level: LogLevel) -> log::LevelFilter {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LogLevel>().ok());
    cli_level
        .or(env_level)
        .unwrap_or(config_level)
        .to_level_filter()
}

/// Install the log bridge as the global logger.
///
/// Only the first call installs anything; later calls are ignored, which keeps
/// tests that share a process from fighting over the logger.
pub fn init_log_bridge(level: log::LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    if BRIDGE.get().is_some() {
        return Ok(());
    }
    let sink = match log_file {
        Some(path) => Sink::File(OpenOptions::new().create(true).append(true).open(path)?),
        None => Sink::Stderr,
    };
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        sink: Mutex::new(sink),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
    Ok(())
}
