//! Endpoint paths and query strings of the upstream data service.
//!
//! All four endpoints are read-only GETs driven by query parameters.
//! Lists (`countries`, `years`) travel as comma-separated values.

pub const LIST_INDICATORS_PATH: &str = "/list-indicators";
pub const AVAILABLE_COUNTRIES_PATH: &str = "/available-countries";
pub const GET_DATA_PATH: &str = "/get-data";
pub const PLOT_DATA_PATH: &str = "/plot-data";

/// Every path the host forwards to the upstream service
pub const FORWARDED_PATHS: [&str; 4] = [
    LIST_INDICATORS_PATH,
    AVAILABLE_COUNTRIES_PATH,
    GET_DATA_PATH,
    PLOT_DATA_PATH,
];

/// Parameters of `/available-countries`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub indicator: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl AvailabilityQuery {
    pub fn query_string(&self) -> String {
        format!(
            "indicator={}&startYear={}&endYear={}",
            urlencoding::encode(&self.indicator),
            self.start_year,
            self.end_year
        )
    }

    /// Path with query, relative to the service base
    pub fn path(&self) -> String {
        format!("{}?{}", AVAILABLE_COUNTRIES_PATH, self.query_string())
    }
}

/// Parameters shared by `/get-data` and `/plot-data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    pub indicator: String,
    pub countries: Vec<String>,
    pub years: Vec<i32>,
}

impl DataQuery {
    pub fn query_string(&self) -> String {
        let countries = self
            .countries
            .iter()
            .map(|c| urlencoding::encode(c).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        let years = self
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "indicator={}&countries={}&years={}",
            urlencoding::encode(&self.indicator),
            countries,
            years
        )
    }

    pub fn data_path(&self) -> String {
        format!("{}?{}", GET_DATA_PATH, self.query_string())
    }

    /// The chart is referenced by URL only; it is never fetched as JSON.
    pub fn plot_path(&self) -> String {
        format!("{}?{}", PLOT_DATA_PATH, self.query_string())
    }
}
