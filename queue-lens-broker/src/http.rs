//! Generic HTTP request handling
//!
//! Unified request/response plumbing for the management client: send the
//! request, map transport and status failures onto [`BrokerError`], read and
//! log the (truncated) body, and parse JSON responses.
//!
//! Every call is a single attempt. Failed fetches are reported to the caller
//! as-is; whether and when to issue a new request is the caller's decision.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::BrokerError;
use crate::log_text::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, etc.)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging and `NotFound` context)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any 2xx response
    /// * `Err(BrokerError)` for transport failures and non-2xx statuses
    pub(crate) async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), BrokerError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BrokerError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                BrokerError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        // 鉴权失败：凭证无效或权限不足
        if matches!(status_code, 401 | 403) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Unauthorized (HTTP {status_code}) for {url}");
            return Err(BrokerError::Unauthorized {
                raw_message: (!body.is_empty()).then_some(body),
            });
        }

        // vhost 或队列不存在
        if status_code == 404 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Not found (HTTP 404): {url}");
            return Err(BrokerError::NotFound {
                resource: url.to_string(),
                raw_message: (!body.is_empty()).then_some(body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| BrokerError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        if !(200..300).contains(&status_code) {
            log::error!("Broker API error (HTTP {status_code}) for {url}");
            return Err(BrokerError::ApiError {
                status: status_code,
                raw_message: response_text,
            });
        }

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(BrokerError::ParseError)` - parsing failed
    pub(crate) fn parse_json<T>(response_text: &str) -> Result<T, BrokerError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            BrokerError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrokerError;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, BrokerError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, BrokerError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(BrokerError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_array() {
        let result: Result<Vec<u32>, BrokerError> = HttpUtils::parse_json("[1,2,3]");
        assert!(matches!(&result, Ok(v) if v == &vec![1, 2, 3]));
    }
}
