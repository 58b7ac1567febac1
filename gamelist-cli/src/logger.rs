//! Console logger: `info` and below on stdout, warnings and errors on
//! stderr, optionally mirrored to a log file without ANSI codes.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&chrono::Local::now().format("%H:%M:%S%.3f ").to_string());
        }
        if record.level() >= Level::Debug {
            line.push_str(&format!("[{}] ", record.target()));
        }
        line.push_str(&record.args().to_string());
        line
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// `--quiet` wins over `--verbose`.
fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = level_for(quiet, verbose);
    let logfile = logfile.map(File::create).transpose()?.map(Mutex::new);

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        timestamps: verbose && !quiet,
        logfile,
    }))
    .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
