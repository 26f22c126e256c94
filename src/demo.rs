//! A writer thread and a reader thread sharing one small queue.
//!
//! The reader starts late on purpose, so the writer overruns the queue and the oldest values get
//! overwritten before anyone reads them.

use std::panic;
use std::sync::Arc;
use std::thread;

use slog::Logger;

use crate::config::DemoConfig;
use crate::errors::Result;
use crate::util::mp::mc::RingQueue;

pub fn run(cfg: &DemoConfig, logger: &Logger) -> Result<Vec<i64>> {
    cfg.validate()?;
    let queue = Arc::new(RingQueue::new(cfg.capacity)?);

    info!(logger, "starting demo";
        "capacity" => cfg.capacity,
        "values" => cfg.values,
        "reads" => cfg.reads);

    let writer = {
        let queue = Arc::clone(&queue);
        let cfg = cfg.clone();
        let logger = logger.new(o!("thread" => "writer"));
        thread::Builder::new()
            .name("writer".to_owned())
            .spawn(move || write_values(&queue, &cfg, &logger))?
    };
    let reader = {
        let queue = Arc::clone(&queue);
        let cfg = cfg.clone();
        let logger = logger.new(o!("thread" => "reader"));
        thread::Builder::new()
            .name("reader".to_owned())
            .spawn(move || read_values(&queue, &cfg, &logger))?
    };

    if let Err(e) = writer.join() {
        panic::resume_unwind(e);
    }
    let read = match reader.join() {
        Ok(read) => read,
        Err(e) => panic::resume_unwind(e),
    };

    info!(logger, "demo finished"; "read" => ?read, "left" => %queue);
    Ok(read)
}

fn write_values(queue: &RingQueue<i64>, cfg: &DemoConfig, logger: &Logger) {
    thread::sleep(cfg.writer_delay());
    for value in 1..=cfg.values as i64 {
        if value > 1 {
            thread::sleep(cfg.step_delay());
        }
        queue.insert(value);
        info!(logger, "pushed"; "value" => value, "queue" => %queue);
    }
}

fn read_values(queue: &RingQueue<i64>, cfg: &DemoConfig, logger: &Logger) -> Vec<i64> {
    thread::sleep(cfg.reader_delay());
    let mut read = Vec::with_capacity(cfg.reads);
    for i in 0..cfg.reads {
        if i > 0 {
            thread::sleep(cfg.step_delay());
        }
        match queue.remove_timeout(cfg.read_timeout()) {
            Ok(value) => {
                info!(logger, "popped"; "value" => value, "queue" => %queue);
                read.push(value);
            }
            Err(e) => {
                warn!(logger, "giving up"; "err" => %e, "read" => read.len());
                break;
            }
        }
    }
    read
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use slog::{Drain, OwnedKVList, Record};

    use crate::logger;

    /// Keeps the message of every record.
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Drain for Collect {
        type Ok = ();
        type Err = slog::Never;

        fn log(&self, record: &Record<'_>, _: &OwnedKVList) -> std::result::Result<(), slog::Never> {
            if let Ok(mut messages) = self.0.lock() {
                messages.push(record.msg().to_string());
            }
            Ok(())
        }
    }

    fn fast_config() -> DemoConfig {
        DemoConfig {
            writer_delay_ms: 0,
            reader_delay_ms: 300,
            step_delay_ms: 10,
            read_timeout_ms: 100,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_overflowed_run() {
        // The writer is done long before the reader wakes up, so only the last two values
        // survive and the third read times out.
        let cfg = fast_config();
        let read = run(&cfg, &logger::discard()).unwrap();
        assert_eq!(read, vec![4, 5]);
    }

    #[test]
    fn test_no_overflow_with_room() {
        let cfg = DemoConfig {
            capacity: 5,
            reads: 5,
            ..fast_config()
        };
        let read = run(&cfg, &logger::discard()).unwrap();
        assert_eq!(read, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_config() {
        let cfg = DemoConfig {
            capacity: 0,
            ..fast_config()
        };
        assert!(run(&cfg, &logger::discard()).is_err());
    }

    #[test]
    fn test_one_record_per_value() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::root(Collect(messages.clone()), o!());

        let read = run(&fast_config(), &logger).unwrap();
        assert_eq!(read, vec![4, 5]);

        let messages = messages.lock().unwrap();
        let count = |msg: &str| messages.iter().filter(|m| m.as_str() == msg).count();
        assert_eq!(count("pushed"), 5);
        assert_eq!(count("popped"), 2);
        assert_eq!(count("giving up"), 1);
        assert_eq!(messages.len(), 5 + 2 + 1 + 2);
    }
}
