use serde::{Deserialize, Serialize};

/// Unified error type for all management-API operations.
///
/// Every fetch is a single attempt: a failed call reports one of these
/// variants instead of returning a partial result. All variants are
/// serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BrokerError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken transfer, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The management API rejected the credentials (HTTP 401/403).
    Unauthorized {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested vhost or queue does not exist (HTTP 404).
    NotFound {
        /// Path of the resource that was not found.
        resource: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The management API answered with an unexpected status code.
    ApiError {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        raw_message: String,
    },

    /// Failed to parse the management API's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl BrokerError {
    /// 是否为预期行为（资源不存在、凭证被拒等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::NotFound { .. })
    }
}

impl std::fmt::Display for BrokerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::Unauthorized { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Resource '{resource}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource}' not found")
                }
            }
            Self::ApiError {
                status,
                raw_message,
            } => {
                write!(f, "Broker API error (HTTP {status}): {raw_message}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for BrokerError {}

/// Convenience type alias for `Result<T, BrokerError>`.
pub type Result<T> = std::result::Result<T, BrokerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = BrokerError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = BrokerError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_unauthorized_with_message() {
        let e = BrokerError::Unauthorized {
            raw_message: Some("bad credentials".to_string()),
        };
        assert_eq!(e.to_string(), "Unauthorized: bad credentials");
    }

    #[test]
    fn display_unauthorized_without_message() {
        let e = BrokerError::Unauthorized { raw_message: None };
        assert_eq!(e.to_string(), "Unauthorized");
    }

    #[test]
    fn display_not_found_with_message() {
        let e = BrokerError::NotFound {
            resource: "/queues/prod/orders".to_string(),
            raw_message: Some("no queue 'orders'".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "Resource '/queues/prod/orders' not found: no queue 'orders'"
        );
    }

    #[test]
    fn display_not_found_without_message() {
        let e = BrokerError::NotFound {
            resource: "/vhosts".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Resource '/vhosts' not found");
    }

    #[test]
    fn display_api_error() {
        let e = BrokerError::ApiError {
            status: 500,
            raw_message: "internal error".to_string(),
        };
        assert_eq!(e.to_string(), "Broker API error (HTTP 500): internal error");
    }

    #[test]
    fn display_parse_error() {
        let e = BrokerError::ParseError {
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "Parse error: bad json");
    }

    #[test]
    fn expected_variants() {
        assert!(BrokerError::Unauthorized { raw_message: None }.is_expected());
        assert!(BrokerError::NotFound {
            resource: "/vhosts".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(!BrokerError::NetworkError { detail: "x".into() }.is_expected());
        assert!(!BrokerError::Timeout { detail: "x".into() }.is_expected());
        assert!(!BrokerError::ParseError { detail: "x".into() }.is_expected());
        assert!(!BrokerError::ApiError {
            status: 500,
            raw_message: "x".into(),
        }
        .is_expected());
    }

    #[test]
    fn serialize_json_tagged() {
        let e = BrokerError::ApiError {
            status: 502,
            raw_message: "bad gateway".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ApiError\""));
        assert!(json.contains("\"status\":502"));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<BrokerError> = vec![
            BrokerError::NetworkError { detail: "d".into() },
            BrokerError::Timeout { detail: "d".into() },
            BrokerError::Unauthorized { raw_message: None },
            BrokerError::NotFound {
                resource: "/queues/v".into(),
                raw_message: None,
            },
            BrokerError::ApiError {
                status: 500,
                raw_message: "oops".into(),
            },
            BrokerError::ParseError { detail: "bad".into() },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: BrokerError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
