use super::error::ProxyError;
use crate::shared::config::UpstreamConfig;
use axum::body::Bytes;

/// HTTP-клиент для сервиса данных
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

/// Ответ сервиса как есть
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        // Сервис данных рядом с хостом, системный прокси не используется
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .no_proxy()
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path_and_query` добавляется как есть, вместе с query
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// GET `path_and_query` к сервису, с любым статусом ответа
    pub async fn get(&self, path_and_query: &str) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url_for(path_and_query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProxyError::from_request(&url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|source| ProxyError::Body {
            url: url.clone(),
            source,
        })?;

        if status >= 400 {
            tracing::warn!("Upstream answered {} for {}", status, url);
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
