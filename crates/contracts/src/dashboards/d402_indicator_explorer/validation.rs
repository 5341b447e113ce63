use super::query::DataQuery;
use thiserror::Error;

/// Lower bound of the year sliders
pub const MIN_YEAR: i32 = 1980;
/// Years past the current one that the sliders still offer (projections)
pub const PROJECTION_YEARS: i32 = 5;
pub const DEFAULT_START_YEAR: i32 = 2010;
pub const DEFAULT_END_YEAR: i32 = 2024;

/// Form errors caught before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an indicator.")]
    MissingIndicator,
    #[error("Please select at least one country.")]
    NoCountries,
    #[error("The start year cannot exceed the end year.")]
    InvertedYears { start_year: i32, end_year: i32 },
}

/// Check the fetch form and expand the year range into the request query.
///
/// Checks run in a fixed order: indicator, countries, years.
pub fn validate_fetch(
    indicator: &str,
    countries: &[String],
    start_year: i32,
    end_year: i32,
) -> Result<DataQuery, ValidationError> {
    if indicator.trim().is_empty() {
        return Err(ValidationError::MissingIndicator);
    }
    if countries.is_empty() {
        return Err(ValidationError::NoCountries);
    }
    if start_year > end_year {
        return Err(ValidationError::InvertedYears {
            start_year,
            end_year,
        });
    }
    Ok(DataQuery {
        indicator: indicator.to_string(),
        countries: countries.to_vec(),
        years: (start_year..=end_year).collect(),
    })
}

/// Pair of year sliders.
///
/// Both values stay within `[min, max]`; whenever a change leaves
/// `start > end`, `end` snaps to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
    min: i32,
    max: i32,
}

impl YearRange {
    /// Default range 2010..=2024 within `[MIN_YEAR, current_year + PROJECTION_YEARS]`
    pub fn for_current_year(current_year: i32) -> Self {
        Self::new(
            MIN_YEAR,
            current_year + PROJECTION_YEARS,
            DEFAULT_START_YEAR,
            DEFAULT_END_YEAR,
        )
    }

    pub fn new(min: i32, max: i32, start: i32, end: i32) -> Self {
        let max = max.max(min);
        let mut range = Self {
            start: min,
            end: min,
            min,
            max,
        };
        range.set_end(end);
        range.set_start(start);
        range
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_start(&mut self, year: i32) {
        self.start = year.clamp(self.min, self.max);
        self.snap();
    }

    pub fn set_end(&mut self, year: i32) {
        self.end = year.clamp(self.min, self.max);
        self.snap();
    }

    fn snap(&mut self) {
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Every year of the inclusive range
    pub fn years(&self) -> Vec<i32> {
        (self.start..=self.end).collect()
    }

    pub fn label(&self) -> String {
        format!("{} ~ {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_indicator() {
        let countries = vec!["USA".to_string()];
        assert_eq!(
            validate_fetch("", &countries, 2010, 2020),
            Err(ValidationError::MissingIndicator)
        );
    }

    #[test]
    fn test_no_countries() {
        let err = validate_fetch("NGDP_RPCH", &[], 2010, 2020).unwrap_err();
        assert_eq!(err, ValidationError::NoCountries);
        assert_eq!(err.to_string(), "Please select at least one country.");
    }

    #[test]
    fn test_inverted_years() {
        let countries = vec!["USA".to_string()];
        let err = validate_fetch("NGDP_RPCH", &countries, 2015, 2010).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvertedYears {
                start_year: 2015,
                end_year: 2010
            }
        );
        assert_eq!(err.to_string(), "The start year cannot exceed the end year.");
    }

    #[test]
    fn test_indicator_checked_before_countries() {
        assert_eq!(
            validate_fetch(" ", &[], 2015, 2010),
            Err(ValidationError::MissingIndicator)
        );
    }

    #[test]
    fn test_valid_form_expands_years() {
        let countries = vec!["USA".to_string(), "KOR".to_string()];
        let query = validate_fetch("NGDP_RPCH", &countries, 2020, 2023).unwrap();
        assert_eq!(query.years, vec![2020, 2021, 2022, 2023]);
        assert_eq!(query.countries, countries);

        let single = validate_fetch("NGDP_RPCH", &countries, 2020, 2020).unwrap();
        assert_eq!(single.years, vec![2020]);
    }

    #[test]
    fn test_end_snaps_to_start() {
        let mut range = YearRange::new(1980, 2030, 2010, 2015);
        for start in 2016..=2030 {
            range.set_start(start);
            assert_eq!(range.end(), start);
        }

        let mut range = YearRange::new(1980, 2030, 2010, 2015);
        range.set_end(2005);
        assert_eq!(range.start(), 2010);
        assert_eq!(range.end(), 2010);
    }

    #[test]
    fn test_values_are_clamped() {
        let mut range = YearRange::new(1980, 2030, 2010, 2015);
        range.set_start(1900);
        assert_eq!(range.start(), 1980);
        range.set_end(2100);
        assert_eq!(range.end(), 2030);
    }

    #[test]
    fn test_default_range() {
        let range = YearRange::for_current_year(2026);
        assert_eq!((range.start(), range.end()), (2010, 2024));
        assert_eq!((range.min(), range.max()), (1980, 2031));
        assert_eq!(range.label(), "2010 ~ 2024");
        assert_eq!(range.years().len(), 15);
    }
}
