use crate::{Error, Fetch, Response};
use hyper::body::HttpBody;
use serde::de::DeserializeOwned;

/// HTTP/1 fetch capability backed by a pooled `hyper` client.
#[derive(Clone)]
pub struct Client {
    client: hyper::Client<hyper::client::HttpConnector>,
}

pub struct ClientResponse {
    url: String,
    response: hyper::Response<hyper::Body>,
}

impl Client {
    pub fn new() -> Self {
        Self {
            client: hyper::Client::new(),
        }
    }
}

impl Fetch for Client {
    type Response = ClientResponse;

    async fn fetch(&self, url: &str) -> Result<ClientResponse, Error> {
        let uri: hyper::Uri = url.parse().map_err(|error| Error::invalid_url(url, error))?;
        let request = hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(uri)
            .header("accept", "application/json")
            .body(hyper::Body::empty())
            .map_err(|error| Error::invalid_url(url, error))?;
        let response = self.client.request(request).await.map_err(|error| Error::transport(url, error))?;
        Ok(ClientResponse {
            url: url.to_string(),
            response,
        })
    }
}

impl ClientResponse {
    pub fn status(&self) -> hyper::StatusCode {
        self.response.status()
    }
}

impl Response for ClientResponse {
    // Status is not checked: an error page with a JSON body still decodes.
    async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let Self { url, mut response } = self;
        let mut body = Vec::new();
        while let Some(chunk) = response.body_mut().data().await {
            body.extend_from_slice(&chunk.map_err(|error| Error::transport(&url, error))?);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
