//! Breach corpus lookups using the k-anonymity range API.
//!
//! Only the first five hex characters of the password's SHA-1 digest ever leave
//! the process; the matching suffix is searched locally in the response.

use crate::config::HIBP_RANGE_URL;
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use sha1::{Digest, Sha1};
use zeroize::Zeroizing;

pub const PREFIX_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "camelCase")]
pub enum BreachStatus {
    Found(u64),
    NotFound,
    LookupFailed,
}

/// Anything that can answer a range query for a five-character hash prefix.
pub trait RangeSource {
    fn fetch_range(&self, prefix: &str) -> Result<String>;
}

pub struct HibpClient {
    client: Client,
    endpoint: String,
}

impl HibpClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vaultpass/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::BreachCheckUnavailable(e.to_string()))?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Uses a preconfigured `client`; `endpoint` must end where the prefix goes.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_default_endpoint() -> Result<Self> {
        Self::new(HIBP_RANGE_URL)
    }
}

impl RangeSource for HibpClient {
    fn fetch_range(&self, prefix: &str) -> Result<String> {
        let url = format!("{}{}", self.endpoint, prefix);
        log::debug!("Querying breach range {}", url);

        let resp = self
            .client
            .get(&url)
            .header("Add-Padding", "true")
            .send()
            .map_err(|e| Error::BreachCheckUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::BreachCheckUnavailable(format!(
                "range API responded with status code {}",
                status
            )));
        }

        resp.text()
            .map_err(|e| Error::BreachCheckUnavailable(e.to_string()))
    }
}

/// Uppercase hex SHA-1 of `password`, split into the 5-char prefix that is sent
/// and the 35-char suffix that is kept.
pub fn hash_password(password: &str) -> (String, Zeroizing<String>) {
    let digest = Zeroizing::new(hex::encode_upper(Sha1::digest(password.as_bytes())));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    (prefix.to_string(), Zeroizing::new(suffix.to_string()))
}

/// Scans a `SUFFIX:COUNT` listing for `suffix`. Padding records carry a count of
/// zero and read as absent.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (line_suffix, count) = line.split_once(':').ok_or_else(|| {
            Error::BreachCheckUnavailable(format!("malformed range record \"{}\"", line))
        })?;

        if line_suffix.eq_ignore_ascii_case(suffix) {
            let count = count.trim().parse::<u64>().map_err(|e| {
                Error::BreachCheckUnavailable(format!("invalid breach count: {}", e))
            })?;
            return Ok((count > 0).then_some(count));
        }
    }

    Ok(None)
}

pub fn lookup<S: RangeSource>(password: &str, source: &S) -> Result<Option<u64>> {
    let (prefix, suffix) = hash_password(password);
    let body = source.fetch_range(&prefix)?;
    find_suffix(&body, &suffix)
}

/// Three-way breach check; any transport or parse failure is `LookupFailed`,
/// never `NotFound`.
pub fn check_password<S: RangeSource>(password: &str, source: &S) -> BreachStatus {
    match lookup(password, source) {
        Ok(Some(count)) => BreachStatus::Found(count),
        Ok(None) => BreachStatus::NotFound,
        Err(e) => {
            log::warn!("{}", e);
            BreachStatus::LookupFailed
        }
    }
}
