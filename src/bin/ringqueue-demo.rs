#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;

use std::process;

use clap::{App, Arg, ArgMatches};

use ringqueue::config::DemoConfig;
use ringqueue::{demo, logger, Result};

fn main() {
    let matches = App::new("ringqueue-demo")
        .about("A writer and a late reader sharing an overwriting ring queue")
        .version(crate_version!())
        .arg(
            Arg::with_name("config")
                .short("C")
                .long("config")
                .value_name("FILE")
                .help("Set the TOML configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .value_name("N")
                .help("Set the queue capacity")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("L")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level")
                .possible_values(&["trace", "debug", "info", "warn", "error", "critical"])
                .takes_value(true),
        )
        .get_matches();

    let cfg = match load_config(&matches) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    // `load_config` validated the level already.
    let level = cfg.level().unwrap_or(slog::Level::Info);
    let logger = logger::init_log(level);

    match demo::run(&cfg, &logger) {
        Ok(read) => info!(logger, "done"; "values" => ?read),
        Err(e) => {
            crit!(logger, "demo failed"; "err" => %e);
            drop(logger);
            process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches<'_>) -> Result<DemoConfig> {
    let mut cfg = match matches.value_of("config") {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };

    if matches.is_present("capacity") {
        cfg.capacity = value_t!(matches, "capacity", usize)
            .map_err(|e| ringqueue::Error::InvalidArgument(e.message))?;
    }
    if let Some(level) = matches.value_of("log-level") {
        cfg.log_level = level.to_owned();
    }

    cfg.validate()?;
    Ok(cfg)
}
