use contracts::dashboards::d402_indicator_explorer::dto::error_marker;
use contracts::dashboards::d402_indicator_explorer::query::LIST_INDICATORS_PATH;
use contracts::dashboards::d402_indicator_explorer::{
    AvailabilityQuery, AvailableCountriesResponse, CatalogError, DataPayload, DataQuery,
    Indicator,
};
use gloo_net::http::{Request, Response};

// Пути относительные: страницу отдаёт тот же хост, что проксирует данные.

/// Получить справочник индикаторов (GET /list-indicators)
pub async fn fetch_indicators() -> Result<Vec<Indicator>, String> {
    let value = match read_json(LIST_INDICATORS_PATH).await? {
        Marked::NoData(error) => return Err(CatalogError::Unavailable(error).to_string()),
        Marked::Value(v) => v,
    };
    Indicator::catalog_from_value(value).map_err(|e| e.to_string())
}

/// Страны с данными по индикатору за период (GET /available-countries)
pub async fn fetch_available_countries(
    query: &AvailabilityQuery,
) -> Result<AvailableCountriesResponse, String> {
    let value = read_json(&query.path()).await?;
    match value {
        Marked::NoData(error) => Ok(AvailableCountriesResponse::NoData { error }),
        Marked::Value(v) => {
            serde_json::from_value(v).map_err(|e| format!("Failed to parse response: {}", e))
        }
    }
}

/// Данные индикатора (GET /get-data)
pub async fn fetch_data(query: &DataQuery) -> Result<DataPayload, String> {
    match read_json(&query.data_path()).await? {
        Marked::NoData(message) => Ok(DataPayload::NoData { message }),
        Marked::Value(v) => Ok(DataPayload::from_value(v)),
    }
}

enum Marked {
    NoData(String),
    Value(serde_json::Value),
}

/// Сервис может вернуть маркер `{"error": ...}` вместе с кодом ошибки,
/// поэтому тело проверяется раньше статуса.
async fn read_json(path: &str) -> Result<Marked, String> {
    let response: Response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let ok = response.ok();
    let status = response.status();

    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", status, e))?;

    if let Some(message) = error_marker(&value) {
        return Ok(Marked::NoData(message));
    }
    if !ok {
        return Err(format!("HTTP error: {}", status));
    }
    Ok(Marked::Value(value))
}
