//! Session lifecycle and account methods.
//!
//! # Endpoints
//!
//! ## `startSession` (HTTPS)
//!
//! Response: `{ "result": { "success": true, "sessionID": "..." } }`
//!
//! The only method dispatched without a session; the returned id is stored
//! on the client for every subsequent call.
//!
//! ## `authenticate` (HTTPS)
//!
//! Request parameters: `{ "login": "...", "password": "..." }`
//!
//! Response `result`: `{ "UserID": 123, "Email": "...", "FName": "...",
//! "LName": "...", "IsPremium": 1 }`. A result without a `UserID` means the
//! credentials were rejected.
//!
//! ## `getCountry`
//!
//! Returns an opaque country record for the caller's (or the given) IP.
//! The record is stored on the client and echoed verbatim into the
//! country-scoped methods.

use crate::client::GroovesharkClient;
use crate::error::{Error, Result};
use crate::types::{UserInfo, parse_user};
use serde_json::{Value, json};
use std::net::Ipv4Addr;

impl GroovesharkClient {
    /// Ping the service.
    ///
    /// Returns the raw `result` value (a greeting string), or `None` if the
    /// service had nothing to say.
    pub fn ping_service(&self) -> Result<Option<Value>> {
        self.call("pingService", json!({}), None, false)
    }

    /// Open a new session and store its id on the client.
    ///
    /// Returns the new session id, or `None` if the service did not issue
    /// one (in which case the client state is left untouched).
    pub fn start_session(&mut self) -> Result<Option<String>> {
        let result = self.call_sessionless("startSession", json!({}), Some("sessionID"), true)?;
        // An empty id is no session; leave the client state untouched.
        let Some(id) = result.as_ref().and_then(Value::as_str).filter(|id| !id.is_empty())
        else {
            return Ok(None);
        };
        self.store_session(id.to_owned());
        Ok(Some(id.to_owned()))
    }

    /// Log out any authenticated user from the current session.
    ///
    /// Returns the service's `success` flag; `false` when the service
    /// reported no data.
    pub fn logout(&self) -> Result<bool> {
        let result = self.call("logout", json!({}), Some("success"), false)?;
        Ok(result.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    /// Authenticate a user against the current session.
    ///
    /// `username` may be the account's username or email; the password is
    /// sent unmodified. Returns `None` without a network call when either
    /// input is empty, and `None` when the service rejects the credentials
    /// (its result carries no `UserID`).
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<UserInfo>> {
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }
        let params = json!({ "login": username, "password": password });
        let result = self.call("authenticate", params, None, true)?;
        Ok(result.map(|v| parse_user(&v)).filter(|u| u.user_id != 0))
    }

    /// Information about the user authenticated on the current session.
    pub fn get_user_info(&self) -> Result<Option<UserInfo>> {
        let result = self.call("getUserInfo", json!({}), None, true)?;
        Ok(result.map(|v| parse_user(&v)))
    }

    /// Look up the country record for `ip`, or for the calling host when
    /// `ip` is `None`, and store it on the client for the country-scoped
    /// methods.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`], before any network activity, when `ip` is not
    /// a well-formed public IPv4 address.
    pub fn get_country(&mut self, ip: Option<&str>) -> Result<Option<Value>> {
        let mut params = json!({});
        if let Some(ip) = ip.filter(|ip| !ip.is_empty()) {
            if !is_public_ipv4(ip) {
                return Err(Error::Validation(format!(
                    "invalid IP sent to getCountry: {ip}"
                )));
            }
            params["ip"] = json!(ip);
        }
        let country = self.call("getCountry", params, None, false)?;
        if let Some(country) = &country {
            self.store_country(country.clone());
        }
        Ok(country)
    }
}

/// Accept only well-formed, publicly routable IPv4 addresses, rejecting the
/// private, loopback, link-local, documentation, broadcast, and
/// 240.0.0.0/4 ranges.
fn is_public_ipv4(ip: &str) -> bool {
    let Ok(addr) = ip.parse::<Ipv4Addr>() else {
        return false;
    };
    !(addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_unspecified()
        || addr.octets()[0] >= 240)
}
