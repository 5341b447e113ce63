use axum::{middleware, routing::get, Router};
use contracts::dashboards::d402_indicator_explorer::query::FORWARDED_PATHS;
use std::path::Path;
use tower_http::services::ServeDir;

use crate::system::middleware::request_logger::request_logger;
use crate::upstream::{handlers::forward, AppState};

/// Конфигурация всех роутов приложения: health, проксируемые эндпоинты
/// данных и собранный фронтенд как fallback
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let mut router = Router::new().route("/health", get(|| async { "ok" }));

    for path in FORWARDED_PATHS {
        router = router.route(path, get(forward));
    }

    router
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
