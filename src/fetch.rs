use crate::Error;
use serde::de::DeserializeOwned;
use std::future::Future;

/// A response whose body can be decoded as JSON.
///
/// Decoding is a separate suspension point from fetching: `json` may still
/// need to read the body from the transport.
pub trait Response {
    fn json<T: DeserializeOwned>(self) -> impl Future<Output = Result<T, Error>>;
}

/// Asynchronous fetch capability used by `concurrent_calls`.
pub trait Fetch {
    type Response: Response;

    fn fetch(&self, url: &str) -> impl Future<Output = Result<Self::Response, Error>>;
}
