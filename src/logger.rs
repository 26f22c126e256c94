use slog::{Drain, Level, Logger};

/// Builds a terminal logger that drops records below `level`.
///
/// Records are formatted on a background thread; keep the returned logger (or a clone) alive
/// until the end of `main` so the last records get flushed.
pub fn init_log(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .thread_name("slogger".to_owned())
        .build()
        .fuse();
    let drain = drain.filter_level(level).fuse();

    Logger::root(drain, o!("module" => "ringqueue-demo"))
}

/// A logger that discards everything.
pub fn discard() -> Logger {
    Logger::root(slog::Discard, o!())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_accepts_records() {
        let logger = discard();
        info!(logger, "dropped"; "value" => 1);
        debug!(logger.new(o!("child" => true)), "also dropped");
    }
}
