// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

pub(crate) struct Logger;

impl Logger {
    /// Tracing goes to stdout, interleaved with the program's own output. Without `verbose`
    /// nothing is logged at all.
    pub fn initialize(verbose: bool) {
        let level = if verbose { LevelFilter::Trace } else { LevelFilter::Off };

        let result = Builder::new()
            .filter_level(level)
            .target(Target::Stdout)
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to install the logger: {e}");
            return;
        }

        log::info!("Logger is initialized");
    }
}
