use crate::{Error, Logger};
use std::{env, error};

#[derive(Debug, Clone)]
pub struct Configuration {
    max_concurrency: isize,
    log: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    /// Reads `MAX_CONCURRENCY` (default 5) and `LOG` (default false) from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let max_concurrency = var_map(&lookup, "MAX_CONCURRENCY", |value| value.parse::<isize>(), Some(5)).map_err(Error::Configuration)?;
        let log = var_map(&lookup, "LOG", |value| value.parse::<bool>(), Some(false)).map_err(Error::Configuration)?;
        Ok(Self { max_concurrency, log })
    }

    pub fn max_concurrency(&self) -> isize {
        self.max_concurrency
    }

    pub fn log(&self) -> bool {
        self.log
    }

    pub fn logger(&self) -> Logger {
        if self.log() {
            Logger::new()
        } else {
            Logger::disabled()
        }
    }
}
