use std::fs;
use std::path::Path;
use std::time::Duration;

use slog::Level;

use crate::errors::{Error, Result};

/// Settings for the writer/reader demo.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct DemoConfig {
    pub capacity: usize,
    /// Values `1..=values` are written.
    pub values: usize,
    pub reads: usize,
    pub writer_delay_ms: u64,
    /// Should exceed the time the writer takes to fill the queue, so it overflows.
    pub reader_delay_ms: u64,
    pub step_delay_ms: u64,
    /// How long each read waits before the reader gives up.
    pub read_timeout_ms: u64,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            capacity: 2,
            values: 5,
            reads: 3,
            writer_delay_ms: 500,
            reader_delay_ms: 2000,
            step_delay_ms: 500,
            read_timeout_ms: 5000,
            log_level: "info".to_owned(),
        }
    }
}

impl DemoConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<DemoConfig> {
        let s = fs::read_to_string(path)?;
        toml::from_str(&s).map_err(|e| Error::Config(format!("malformed toml: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_owned()));
        }
        // Usability guard only: a timed-out read just stops the reader, but a run set up this way
        // can end no other way.
        if self.reads > self.values {
            return Err(Error::Config(format!(
                "reads ({}) must not exceed values ({})",
                self.reads, self.values
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| Error::Config(format!("unknown log level {:?}", self.log_level)))
    }

    pub fn writer_delay(&self) -> Duration {
        Duration::from_millis(self.writer_delay_ms)
    }

    pub fn reader_delay(&self) -> Duration {
        Duration::from_millis(self.reader_delay_ms)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let cfg = DemoConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.level().unwrap(), Level::Info);
        assert_eq!(cfg.reader_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "capacity = 4").unwrap();
        writeln!(f, "step-delay-ms = 10").unwrap();
        writeln!(f, "log-level = \"debug\"").unwrap();
        f.flush().unwrap();

        let cfg = DemoConfig::from_file(f.path()).unwrap();
        assert_eq!(cfg.capacity, 4);
        assert_eq!(cfg.step_delay(), Duration::from_millis(10));
        assert_eq!(cfg.level().unwrap(), Level::Debug);
        // Unset keys keep their defaults.
        assert_eq!(cfg.values, 5);
        assert_eq!(cfg.reads, 3);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        match DemoConfig::from_file(dir.path().join("missing.toml")) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }

        let path = dir.path().join("bad.toml");
        fs::write(&path, "capacity = \"lots\"").unwrap();
        match DemoConfig::from_file(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_validate() {
        let mut cfg = DemoConfig::default();
        cfg.capacity = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = DemoConfig::default();
        cfg.reads = cfg.values + 1;
        assert!(cfg.validate().is_err());

        let mut cfg = DemoConfig::default();
        cfg.log_level = "loud".to_owned();
        assert!(cfg.validate().is_err());
    }
}
