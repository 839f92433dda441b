use crate::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            println!("{}", self.format(value));
        }
    }

    fn format(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::Logger;

    #[test]
    fn format() {
        let line = Logger::new().format("dispatching 3 requests");
        assert!(line.starts_with("dispatching 3 requests (00:00."));
        assert!(line.ends_with(" elapsed)"));
    }

    #[test]
    fn disabled() {
        assert!(Logger::new().enabled());
        assert!(!Logger::disabled().enabled());
    }
}
