use std::io;
use std::result;
use std::time::Duration;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        InvalidArgument(msg: String) {
            description(msg)
            display("invalid argument: {}", msg)
        }
        Timeout(after: Duration) {
            description("timeout reached, no element available")
            display("timeout reached after {:?}, no element available", after)
        }
        Io(err: io::Error) {
            from()
            cause(err)
            display("{}", err)
        }
        Config(msg: String) {
            description(msg)
            display("invalid config: {}", msg)
        }
    }
}

impl Error {
    /// Returns `true` if a timed removal gave up with the queue empty.
    pub fn is_timeout(&self) -> bool {
        match *self {
            Error::Timeout(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
