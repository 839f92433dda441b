pub mod batcher;
pub mod chronometer;
pub mod client;
pub mod concurrent_calls;
pub mod configuration;
pub mod error;
pub mod fetch;
pub mod logger;

#[cfg(test)]
mod test_server;

pub use self::{
    batcher::{divide, Batcher},
    chronometer::Chronometer,
    client::{Client, ClientResponse},
    concurrent_calls::{concurrent_call, concurrent_calls},
    configuration::Configuration,
    error::Error,
    fetch::{Fetch, Response},
    logger::Logger,
};
use serde_json::Value;

/// Fetches `urls` over HTTP with the concurrency limit of `configuration`.
///
/// Each chunk is logged to stdout only when `LOG=true`; logging is off by default.
pub async fn fetch_all(urls: &[impl AsRef<str> + Clone], configuration: &Configuration) -> Result<Vec<Value>, Error> {
    let client = Client::new();
    concurrent_calls(&client, urls, configuration.max_concurrency(), &configuration.logger()).await
}
