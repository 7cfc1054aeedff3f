//! HTTP client for the Grooveshark ws3 API.
//!
//! Every remote interaction goes through one choke point,
//! [`GroovesharkClient::call`]:
//!
//! 1. Build the request envelope `{method, parameters, header: {wsKey, sessionID}}`
//! 2. Serialize it once; HMAC-MD5 sign those exact bytes (see [`crate::sign`])
//! 3. POST the bytes to `api.grooveshark.com/ws3.php?sig=<hex>`
//! 4. Unwrap the `{result?, errors?}` response envelope
//!
//! A non-empty `errors` array maps to [`Error::Remote`]; a non-200 status to
//! [`Error::Transport`]; an absent or empty `result` is the "no data"
//! sentinel `Ok(None)`, not an error.
//!
//! API methods are implemented in separate modules (`session`, `user`,
//! `playlist`, `song`, `album`, `artist`, `search`, `stream`) as
//! `impl GroovesharkClient` blocks.

use crate::error::{Error, Result};
use crate::sign::message_signature;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const API_HOST: &str = "api.grooveshark.com";
const API_ENDPOINT: &str = "/ws3.php";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const TIMEOUT: Duration = Duration::from_secs(6);

/// Client configuration.
///
/// `key` and `secret` are issued by the service and must be non-empty;
/// everything else is optional initial state.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key (`wsKey` in the request header).
    pub key: String,
    /// Shared signing secret.
    pub secret: String,
    /// Initial session id, if one was stored from a previous run.
    pub session_id: Option<String>,
    /// Initial country, if one was stored from a previous run. This is the
    /// opaque value returned by `getCountry` (or a plain country string) and
    /// is echoed verbatim into country-scoped requests.
    pub country: Option<Value>,
    /// Skip TLS certificate verification. The historical endpoint served an
    /// unverifiable certificate; this is off by default and should stay off
    /// unless talking to such an endpoint.
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Configuration with the given credentials and no initial state.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            session_id: None,
            country: None,
            accept_invalid_certs: false,
        }
    }
}

/// Blocking client for the Grooveshark ws3 API.
///
/// Holds the credentials plus two pieces of mutable state: the session id
/// and the country. Both are plain fields mutated only through explicit
/// setters (and the `start_session` / `get_country` side effects); a client
/// instance is not safe for unsynchronized concurrent mutation.
pub struct GroovesharkClient {
    http: Client,
    ws_key: String,
    secret: String,
    session_id: Option<String>,
    country: Option<Value>,
    // Test hook: replaces both the per-call scheme and the fixed host/path.
    endpoint: Option<String>,
}

#[derive(Serialize)]
struct RequestEnvelope<'a> {
    method: &'a str,
    parameters: &'a Value,
    header: RequestHeader<'a>,
}

#[derive(Serialize)]
struct RequestHeader<'a> {
    #[serde(rename = "wsKey")]
    ws_key: &'a str,
    #[serde(rename = "sessionID")]
    session_id: &'a str,
}

impl GroovesharkClient {
    /// Create a client from credentials with no session or country set.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `key` or `secret` is empty.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::from_config(Config::new(key, secret))
    }

    /// Create a client from a full [`Config`].
    pub fn from_config(config: Config) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a client that posts to `endpoint` instead of the fixed API
    /// host (the per-call scheme selection is bypassed). Intended for tests
    /// against a local mock server.
    pub fn with_endpoint(config: Config, endpoint: impl Into<String>) -> Result<Self> {
        Self::build(config, Some(endpoint.into()))
    }

    fn build(config: Config, endpoint: Option<String>) -> Result<Self> {
        if config.key.is_empty() || config.secret.is_empty() {
            return Err(Error::Config(
                "a valid key and secret are required".to_owned(),
            ));
        }
        let http = Client::builder()
            .user_agent(format!("grooveshark-api-rs-{}", config.key))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(TIMEOUT)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            ws_key: config.key,
            secret: config.secret,
            session_id: config.session_id.filter(|s| !s.is_empty()),
            country: config.country,
            endpoint,
        })
    }

    /// The current session id, if any.
    pub fn session(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Set the session id for subsequent calls.
    pub fn set_session(&mut self, session_id: impl Into<String>) {
        self.session_id = Some(session_id.into());
    }

    /// The stored country value, if any.
    pub fn country(&self) -> Option<&Value> {
        self.country.as_ref()
    }

    /// Set the country echoed into country-scoped requests. Accepts either
    /// the opaque record returned by
    /// [`get_country`](Self::get_country) or a plain country string.
    pub fn set_country(&mut self, country: impl Into<Value>) {
        self.country = Some(country.into());
    }

    pub(crate) fn store_country(&mut self, country: Value) {
        self.country = Some(country);
    }

    pub(crate) fn store_session(&mut self, session_id: String) {
        self.session_id = Some(session_id);
    }

    /// Issue a signed API call. Requires a session id.
    ///
    /// `result_key` selects a sub-field of the response `result` to return;
    /// `None` returns the whole `result` value. `secure` switches the POST
    /// to HTTPS (the service restricts the session/authentication methods
    /// to it).
    ///
    /// Returns `Ok(None)` when the service reports no data: an unparsable
    /// body, an empty `result`, or a missing `result_key` sub-field.
    pub(crate) fn call(
        &self,
        method: &str,
        parameters: Value,
        result_key: Option<&str>,
        secure: bool,
    ) -> Result<Option<Value>> {
        self.dispatch(method, &parameters, result_key, secure, true)
    }

    /// Same as [`call`](Self::call) without the session requirement; only
    /// the session-bootstrap path uses it, sending an empty `sessionID`
    /// header field.
    pub(crate) fn call_sessionless(
        &self,
        method: &str,
        parameters: Value,
        result_key: Option<&str>,
        secure: bool,
    ) -> Result<Option<Value>> {
        self.dispatch(method, &parameters, result_key, secure, false)
    }

    fn dispatch(
        &self,
        method: &str,
        parameters: &Value,
        result_key: Option<&str>,
        secure: bool,
        require_session: bool,
    ) -> Result<Option<Value>> {
        let session_id = self.session_id.as_deref().unwrap_or("");
        if require_session && session_id.is_empty() {
            return Err(Error::SessionRequired {
                method: method.to_owned(),
            });
        }

        let envelope = RequestEnvelope {
            method,
            parameters,
            header: RequestHeader {
                ws_key: &self.ws_key,
                session_id,
            },
        };
        // Serialized exactly once; the signature covers the transmitted bytes.
        let body = serde_json::to_vec(&envelope)?;
        let sig = message_signature(&body, &self.secret);
        let url = self.endpoint_url(secure, &sig);

        debug!(method, secure, "dispatching API call");
        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Transport {
                status: status.as_u16(),
            });
        }

        let Ok(json) = serde_json::from_str::<Value>(&resp.text()?) else {
            // Garbage body counts as "no data", matching the original.
            return Ok(None);
        };

        if let Some(first) = json["errors"].as_array().and_then(|e| e.first()) {
            let code = first["code"].as_i64().unwrap_or(0);
            let message = first["message"].as_str().unwrap_or("").to_owned();
            debug!(method, code, "API returned error envelope");
            return Err(Error::Remote { code, message });
        }

        let result = &json["result"];
        if is_empty_value(result) {
            return Ok(None);
        }
        match result_key {
            Some(key) => match result.get(key) {
                Some(Value::Null) | None => Ok(None),
                Some(v) => Ok(Some(v.clone())),
            },
            None => Ok(Some(result.clone())),
        }
    }

    fn endpoint_url(&self, secure: bool, sig: &str) -> String {
        match &self.endpoint {
            Some(base) => format!("{base}?sig={sig}"),
            None => {
                let scheme = if secure { "https" } else { "http" };
                format!("{scheme}://{API_HOST}{API_ENDPOINT}?sig={sig}")
            }
        }
    }
}

/// Attach an optional `limit` parameter; the service treats a zero limit as
/// absent, so it is only sent when positive.
pub(crate) fn with_limit(mut params: Value, limit: Option<u64>) -> Value {
    if let Some(limit) = limit.filter(|l| *l > 0) {
        params["limit"] = serde_json::json!(limit);
    }
    params
}

/// "Empty" in the sense the original contract used for the no-data
/// sentinel: null, false, 0, "", "0", or an empty array/object.
fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
