//! Проксирование к сервису данных индикаторов.
//!
//! Хост ничего не обрабатывает сам: статус, content type и тело ответа
//! сервиса доходят до страницы без изменений.

pub mod client;
pub mod error;
pub mod handlers;

pub use client::{UpstreamClient, UpstreamResponse};
pub use error::ProxyError;
pub use handlers::AppState;
