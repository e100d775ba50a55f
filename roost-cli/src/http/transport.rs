//! Authenticated transport to the API.

use std::sync::Arc;

use anyhow::Error;

use derive_more::{Display, Error};

use futures_util::future::BoxFuture;

use http::{HeaderValue, Method, StatusCode, header};

use roost_model::{error::ErrorResponse, request::Params};

use serde_json::Value;

use crate::config::ApiConfig;

/// The two primitives the API client is built on.
pub trait Transport: Send + Sync {
    /// Fetches `endpoint` and returns the response body.
    fn get<'a>(&'a self, endpoint: &'a str, params: &'a Params) -> BoxFuture<'a, Result<Value, Error>>;

    /// Posts to a mutation `endpoint`.
    fn post<'a>(&'a self, endpoint: &'a str, params: &'a Params) -> BoxFuture<'a, Result<(), Error>>;
}

/// A [`Transport`] over HTTPS.
///
/// Cheaply cloneable, as it uses an `Arc` to track internal state and manage
/// connections.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    state: Arc<TransportState>,
}

#[derive(Debug)]
struct TransportState {
    endpoint: String,
    access_token: String,
}

impl HttpTransport {
    /// Creates a new transport.
    pub fn new(config: &ApiConfig) -> Result<HttpTransport, Error> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .deflate(true)
            .user_agent(concat!("roost/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let state = TransportState {
            endpoint: config.endpoint.to_owned(),
            access_token: config.access_token.to_owned(),
        };

        Ok(HttpTransport {
            http,
            state: Arc::new(state),
        })
    }

    /// Makes a request to the API.
    ///
    /// Parameters are sent in the query string for both methods.
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<reqwest::Response, Error> {
        let query = serde_urlencoded::to_string(params)?;

        let mut url = format!("{}{}.json", self.state.endpoint, endpoint);
        if !query.is_empty() {
            url = format!("{}?{}", url, query);
        }

        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, url).build()?;
        request.headers_mut().insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.state.access_token))?,
        );

        let res = self.http.execute(request).await?;

        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res.text().await?;

        match serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|res| res.errors.into_iter().next())
        {
            Some(error) => Err(error.into()),
            None => Err(HttpStatusError { status, body }.into()),
        }
    }
}

impl Transport for HttpTransport {
    fn get<'a>(&'a self, endpoint: &'a str, params: &'a Params) -> BoxFuture<'a, Result<Value, Error>> {
        Box::pin(async move {
            let res = self.send(Method::GET, endpoint, params).await?;

            Ok(res.json().await?)
        })
    }

    fn post<'a>(&'a self, endpoint: &'a str, params: &'a Params) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(async move {
            self.send(Method::POST, endpoint, params).await?;

            Ok(())
        })
    }
}

/// The API answered with a failure status and no error payload.
#[derive(Debug, Display, Error)]
#[display("api responded with {status}: {body}")]
pub struct HttpStatusError {
    pub status: StatusCode,
    pub body: String,
}
