use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Ошибки самого хоста при проксировании запроса.
///
/// Ответы сервиса (включая его коды ошибок и маркер `{"error": ...}`)
/// передаются как есть и в этот тип не попадают.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Upstream request timed out: {url}")]
    Timeout { url: String },

    #[error("Upstream unreachable: {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read upstream response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ProxyError {
    pub(crate) fn from_request(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Unreachable {
                url: url.to_string(),
                source: e,
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Client(_) | Self::Unreachable { .. } | Self::Body { .. } => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

// Только текст: JSON `{"error": ...}` страница приняла бы за "нет данных",
// а не за ошибку запроса.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
