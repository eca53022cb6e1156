// src/core/net.rs
// Single blocking GET with browser-like headers. No retries.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, REFERER, USER_AGENT};

use crate::config::consts;
use crate::config::options::RunOptions;
use crate::error::ScrapeError;

/// Fetch `opts.url` and return the body decoded with the declared charset
/// (falling back to UTF-8).
///
/// Timeout, transport failure and any non-2xx status are errors.
pub fn http_get(opts: &RunOptions) -> Result<String, ScrapeError> {
    let url = opts.url.as_str();
    let client = Client::builder()
        .timeout(opts.timeout)
        .build()
        .map_err(|e| classify(url, opts.timeout, e))?;

    let mut req = client
        .get(url)
        .header(USER_AGENT, consts::USER_AGENT)
        .header(ACCEPT_LANGUAGE, consts::ACCEPT_LANGUAGE);
    if let Some(referer) = &opts.referer {
        req = req.header(REFERER, referer.as_str());
    }

    info!("GET {url}");
    let resp = req.send().map_err(|e| classify(url, opts.timeout, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp
        .text_with_charset(consts::FALLBACK_CHARSET)
        .map_err(|e| classify(url, opts.timeout, e))?;
    debug!("{url}: {} bytes", body.len());
    Ok(body)
}

fn classify(url: &str, timeout: Duration, e: reqwest::Error) -> ScrapeError {
    if e.is_timeout() {
        ScrapeError::Timeout { url: s!(url), timeout }
    } else {
        ScrapeError::Transport { url: s!(url), source: e }
    }
}
