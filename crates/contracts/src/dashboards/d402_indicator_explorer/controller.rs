//! Page controller for the indicator explorer.
//!
//! The controller owns every piece of page state and reacts to discrete
//! user commands. It never performs I/O: each handler returns the effects
//! (requests to issue, notices to show) for the UI layer to execute, and the
//! UI feeds request completions back through the `on_*` methods.
//!
//! Requests carry a `RequestToken`. Only the latest token per concern
//! (country availability, data fetch) is accepted; older completions are
//! dropped without touching state.

use super::dto::{AvailableCountriesResponse, DataPayload, DataRecord, Indicator};
use super::presets::PresetGroup;
use super::query::{AvailabilityQuery, DataQuery};
use super::selection::SelectionStore;
use super::validation::{validate_fetch, ValidationError, YearRange};

const COUNTRIES_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default)]
struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    fn next(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Blocking dialog shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
    /// Close automatically after this many milliseconds
    pub auto_close_ms: Option<u32>,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            text: text.into(),
            auto_close_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeTicket(u64);

/// Notice currently on screen.
///
/// Every `show` issues a fresh ticket, even for a notice equal to the one
/// already shown, so an auto-close timer only closes the notice it was
/// started for.
#[derive(Debug, Clone, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
    issued: u64,
}

impl NoticeSlot {
    pub fn show(&mut self, notice: Notice) -> NoticeTicket {
        self.issued += 1;
        self.current = Some(notice);
        NoticeTicket(self.issued)
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_current(&self, ticket: NoticeTicket) -> bool {
        self.current.is_some() && ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Idle,
    Loading,
    Ready { count: usize },
    NoData,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    NoData,
    Failed,
}

/// Discrete user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerCommand {
    SelectIndicator(String),
    ChangeStartYear(i32),
    ChangeEndYear(i32),
    PickCountry(String),
    RemoveCountry(String),
    ClearSelection,
    ApplyPreset(PresetGroup),
    RetractPreset(PresetGroup),
    Fetch,
}

/// Work the UI layer performs on behalf of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEffect {
    LoadIndicators,
    LoadCountries {
        token: RequestToken,
        query: AvailabilityQuery,
    },
    FetchData {
        token: RequestToken,
        query: DataQuery,
    },
    Notify(Notice),
}

#[derive(Debug, Clone)]
pub struct ExplorerController {
    indicators: Vec<Indicator>,
    indicator: String,
    years: YearRange,
    selection: SelectionStore,
    availability: AvailabilityStatus,
    fetch: FetchStatus,
    payload_text: Option<String>,
    records: Vec<DataRecord>,
    plot_path: Option<String>,
    alert: Option<String>,
    countries_seq: RequestSequence,
    data_seq: RequestSequence,
    pending_countries: Option<AvailabilityQuery>,
    pending_data: Option<DataQuery>,
}

impl ExplorerController {
    pub fn new(current_year: i32) -> Self {
        Self {
            indicators: Vec::new(),
            indicator: String::new(),
            years: YearRange::for_current_year(current_year),
            selection: SelectionStore::new(),
            availability: AvailabilityStatus::Idle,
            fetch: FetchStatus::Idle,
            payload_text: None,
            records: Vec::new(),
            plot_path: None,
            alert: None,
            countries_seq: RequestSequence::default(),
            data_seq: RequestSequence::default(),
            pending_countries: None,
            pending_data: None,
        }
    }

    /// Effects to run once when the page mounts
    pub fn start(&self) -> Vec<ExplorerEffect> {
        vec![ExplorerEffect::LoadIndicators]
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn availability(&self) -> AvailabilityStatus {
        self.availability
    }

    /// The country selector is only initialised once an availability set
    /// has been received.
    pub fn selector_ready(&self) -> bool {
        matches!(self.availability, AvailabilityStatus::Ready { .. })
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }

    /// Text of the raw payload panel
    pub fn payload_text(&self) -> Option<&str> {
        self.payload_text.as_deref()
    }

    pub fn records(&self) -> &[DataRecord] {
        &self.records
    }

    /// Chart image path; `None` means the placeholder image is shown
    pub fn plot_path(&self) -> Option<&str> {
        self.plot_path.as_deref()
    }

    /// Inline alert banner
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_current_countries(&self, token: RequestToken) -> bool {
        self.countries_seq.is_latest(token)
    }

    pub fn is_current_data(&self, token: RequestToken) -> bool {
        self.data_seq.is_latest(token)
    }

    pub fn handle(&mut self, command: ExplorerCommand) -> Vec<ExplorerEffect> {
        match command {
            ExplorerCommand::SelectIndicator(code) => {
                self.indicator = code;
                self.reload_countries()
            }
            ExplorerCommand::ChangeStartYear(year) => {
                let before = self.years;
                self.years.set_start(year);
                self.years_changed(before)
            }
            ExplorerCommand::ChangeEndYear(year) => {
                let before = self.years;
                self.years.set_end(year);
                self.years_changed(before)
            }
            ExplorerCommand::PickCountry(code) => {
                self.selection.pick(&code);
                Vec::new()
            }
            ExplorerCommand::RemoveCountry(code) => {
                self.selection.remove(&code);
                Vec::new()
            }
            ExplorerCommand::ClearSelection => {
                self.selection.clear_selection();
                Vec::new()
            }
            ExplorerCommand::ApplyPreset(preset) => match self.selection.apply_preset(preset) {
                Ok(_) => Vec::new(),
                Err(e) => vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Warning,
                    "Cannot select",
                    e.to_string(),
                ))],
            },
            ExplorerCommand::RetractPreset(preset) => {
                self.selection.retract_preset(preset);
                Vec::new()
            }
            ExplorerCommand::Fetch => self.fetch(),
        }
    }

    fn years_changed(&mut self, before: YearRange) -> Vec<ExplorerEffect> {
        if self.years == before {
            return Vec::new();
        }
        self.reload_countries()
    }

    /// Availability depends on indicator and years; nothing is requested
    /// while no indicator is chosen.
    fn reload_countries(&mut self) -> Vec<ExplorerEffect> {
        if self.indicator.trim().is_empty() {
            return Vec::new();
        }
        let query = AvailabilityQuery {
            indicator: self.indicator.clone(),
            start_year: self.years.start(),
            end_year: self.years.end(),
        };
        let token = self.countries_seq.next();
        self.selection.clear_available();
        self.availability = AvailabilityStatus::Loading;
        self.pending_countries = Some(query.clone());
        vec![ExplorerEffect::LoadCountries { token, query }]
    }

    fn fetch(&mut self) -> Vec<ExplorerEffect> {
        let query = match validate_fetch(
            &self.indicator,
            self.selection.selected(),
            self.years.start(),
            self.years.end(),
        ) {
            Ok(q) => q,
            Err(e) => return vec![ExplorerEffect::Notify(validation_notice(&e))],
        };
        let token = self.data_seq.next();
        self.fetch = FetchStatus::Loading;
        self.alert = None;
        self.pending_data = Some(query.clone());
        vec![ExplorerEffect::FetchData { token, query }]
    }

    pub fn on_indicators_loaded(
        &mut self,
        result: Result<Vec<Indicator>, String>,
    ) -> Vec<ExplorerEffect> {
        match result {
            Ok(indicators) => {
                self.indicators = indicators;
                Vec::new()
            }
            Err(_) => vec![ExplorerEffect::Notify(Notice::new(
                NoticeLevel::Error,
                "Error",
                "The indicator list could not be loaded.",
            ))],
        }
    }

    pub fn on_countries_loaded(
        &mut self,
        token: RequestToken,
        result: Result<AvailableCountriesResponse, String>,
    ) -> Vec<ExplorerEffect> {
        if !self.countries_seq.is_latest(token) {
            return Vec::new();
        }
        let query = self.pending_countries.take();

        let response = match result {
            Ok(r) => r,
            Err(_) => {
                self.availability = AvailabilityStatus::Failed;
                return vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Error,
                    "Error",
                    "A problem occurred while loading country data.",
                ))];
            }
        };

        match response.into_countries() {
            Some(countries) if !countries.is_empty() => {
                let count = countries.len();
                self.selection.replace_available(countries);
                self.availability = AvailabilityStatus::Ready { count };
                let indicator = query.map(|q| q.indicator).unwrap_or_default();
                let mut notice = Notice::new(
                    NoticeLevel::Success,
                    "Country list loaded",
                    format!("{} provides data for {} countries.", indicator, count),
                );
                notice.auto_close_ms = Some(COUNTRIES_NOTICE_MS);
                vec![ExplorerEffect::Notify(notice)]
            }
            _ => {
                self.availability = AvailabilityStatus::NoData;
                vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Warning,
                    "No data",
                    "No country provides data for this indicator and year range.",
                ))]
            }
        }
    }

    pub fn on_data_loaded(
        &mut self,
        token: RequestToken,
        result: Result<DataPayload, String>,
    ) -> Vec<ExplorerEffect> {
        if !self.data_seq.is_latest(token) {
            return Vec::new();
        }
        let query = self.pending_data.take();

        match result {
            Ok(payload @ DataPayload::Data { .. }) => {
                self.fetch = FetchStatus::Loaded;
                self.payload_text = payload.pretty();
                self.records = match payload {
                    DataPayload::Data { records, .. } => records.unwrap_or_default(),
                    DataPayload::NoData { .. } => Vec::new(),
                };
                self.plot_path = query.map(|q| q.plot_path());
                vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Success,
                    "Data loaded",
                    "Economic data loaded successfully.",
                ))]
            }
            Ok(DataPayload::NoData { .. }) => {
                self.fetch = FetchStatus::NoData;
                self.payload_text = Some("Data could not be loaded.".to_string());
                self.records.clear();
                self.plot_path = None;
                self.alert = Some("No data is available for these conditions.".to_string());
                vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Error,
                    "No data",
                    "Data for these conditions could not be loaded.",
                ))]
            }
            Err(_) => {
                self.fetch = FetchStatus::Failed;
                self.alert = Some("An error occurred while requesting data.".to_string());
                vec![ExplorerEffect::Notify(Notice::new(
                    NoticeLevel::Error,
                    "Request failed",
                    "An error occurred while requesting data.",
                ))]
            }
        }
    }
}

fn validation_notice(error: &ValidationError) -> Notice {
    match error {
        ValidationError::MissingIndicator | ValidationError::NoCountries => {
            Notice::new(NoticeLevel::Warning, "Selection required", error.to_string())
        }
        ValidationError::InvertedYears { .. } => {
            Notice::new(NoticeLevel::Error, "Input error", error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn countries_response(codes: &[&str]) -> AvailableCountriesResponse {
        let map: BTreeMap<String, String> = codes
            .iter()
            .map(|c| (c.to_string(), format!("{} name", c)))
            .collect();
        AvailableCountriesResponse::Countries(map)
    }

    fn countries_token(effects: &[ExplorerEffect]) -> RequestToken {
        effects
            .iter()
            .find_map(|e| match e {
                ExplorerEffect::LoadCountries { token, .. } => Some(*token),
                _ => None,
            })
            .expect("no LoadCountries effect")
    }

    fn data_request(effects: &[ExplorerEffect]) -> Option<(RequestToken, DataQuery)> {
        effects.iter().find_map(|e| match e {
            ExplorerEffect::FetchData { token, query } => Some((*token, query.clone())),
            _ => None,
        })
    }

    fn notice(effects: &[ExplorerEffect]) -> &Notice {
        effects
            .iter()
            .find_map(|e| match e {
                ExplorerEffect::Notify(n) => Some(n),
                _ => None,
            })
            .expect("no notice")
    }

    /// Controller with NGDP_RPCH chosen and the given countries available
    fn loaded(codes: &[&str]) -> ExplorerController {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string()));
        let token = countries_token(&effects);
        c.on_countries_loaded(token, Ok(countries_response(codes)));
        c
    }

    #[test]
    fn test_start_loads_indicators() {
        let c = ExplorerController::new(2026);
        assert_eq!(c.start(), vec![ExplorerEffect::LoadIndicators]);
    }

    #[test]
    fn test_indicator_load_failure_notifies() {
        let mut c = ExplorerController::new(2026);
        let effects = c.on_indicators_loaded(Err("boom".to_string()));
        assert_eq!(notice(&effects).level, NoticeLevel::Error);
        assert!(c.indicators().is_empty());
    }

    #[test]
    fn test_select_indicator_requests_availability() {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string()));

        match &effects[..] {
            [ExplorerEffect::LoadCountries { query, .. }] => {
                assert_eq!(query.indicator, "NGDP_RPCH");
                assert_eq!((query.start_year, query.end_year), (2010, 2024));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
        assert_eq!(c.availability(), AvailabilityStatus::Loading);
    }

    #[test]
    fn test_empty_indicator_requests_nothing() {
        let mut c = ExplorerController::new(2026);
        assert!(c
            .handle(ExplorerCommand::SelectIndicator(String::new()))
            .is_empty());
        assert_eq!(c.availability(), AvailabilityStatus::Idle);
    }

    #[test]
    fn test_countries_loaded_populates_selector() {
        let c = loaded(&["USA", "CAN", "GBR"]);
        assert_eq!(c.availability(), AvailabilityStatus::Ready { count: 3 });
        assert!(c.selector_ready());
        assert_eq!(c.selection().available().len(), 3);
    }

    #[test]
    fn test_countries_success_notice_auto_closes() {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("LUR".to_string()));
        let effects = c.on_countries_loaded(
            countries_token(&effects),
            Ok(countries_response(&["USA", "KOR"])),
        );
        let n = notice(&effects);
        assert_eq!(n.level, NoticeLevel::Success);
        assert_eq!(n.text, "LUR provides data for 2 countries.");
        assert_eq!(n.auto_close_ms, Some(3000));
    }

    #[test]
    fn test_no_data_marker_keeps_selector_empty() {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string()));
        let effects = c.on_countries_loaded(
            countries_token(&effects),
            Ok(AvailableCountriesResponse::NoData {
                error: "none".to_string(),
            }),
        );

        assert_eq!(notice(&effects).level, NoticeLevel::Warning);
        assert_eq!(c.availability(), AvailabilityStatus::NoData);
        assert!(!c.selector_ready());
        assert!(c.selection().available().is_empty());
    }

    #[test]
    fn test_empty_mapping_is_no_data() {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string()));
        let effects = c.on_countries_loaded(
            countries_token(&effects),
            Ok(AvailableCountriesResponse::Countries(BTreeMap::new())),
        );

        assert_eq!(notice(&effects).level, NoticeLevel::Warning);
        assert_eq!(c.availability(), AvailabilityStatus::NoData);
        assert!(!c.selector_ready());
    }

    #[test]
    fn test_repeated_identical_notice_gets_new_ticket() {
        let mut slot = NoticeSlot::default();
        let text = "NGDP_RPCH provides data for 2 countries.";
        let first = slot.show(Notice::new(NoticeLevel::Success, "Country list loaded", text));
        let second = slot.show(Notice::new(NoticeLevel::Success, "Country list loaded", text));

        assert_ne!(first, second);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some(text));
    }

    #[test]
    fn test_availability_transport_failure() {
        let mut c = ExplorerController::new(2026);
        let effects = c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string()));
        let effects = c.on_countries_loaded(countries_token(&effects), Err("offline".to_string()));

        assert_eq!(notice(&effects).level, NoticeLevel::Error);
        assert_eq!(c.availability(), AvailabilityStatus::Failed);
    }

    #[test]
    fn test_stale_availability_response_is_dropped() {
        let mut c = ExplorerController::new(2026);
        let first = countries_token(
            &c.handle(ExplorerCommand::SelectIndicator("NGDP_RPCH".to_string())),
        );
        let second = countries_token(&c.handle(ExplorerCommand::SelectIndicator("LUR".to_string())));

        assert!(!c.is_current_countries(first));
        assert!(c
            .on_countries_loaded(first, Ok(countries_response(&["USA"])))
            .is_empty());
        assert_eq!(c.availability(), AvailabilityStatus::Loading);

        c.on_countries_loaded(second, Ok(countries_response(&["KOR", "JPN"])));
        assert_eq!(c.availability(), AvailabilityStatus::Ready { count: 2 });
    }

    #[test]
    fn test_year_change_reloads_and_snaps_end() {
        let mut c = loaded(&["USA"]);
        let effects = c.handle(ExplorerCommand::ChangeStartYear(2030));

        assert_eq!(c.years().end(), 2030);
        match &effects[..] {
            [ExplorerEffect::LoadCountries { query, .. }] => {
                assert_eq!((query.start_year, query.end_year), (2030, 2030));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_year_change_without_indicator_requests_nothing() {
        let mut c = ExplorerController::new(2026);
        assert!(c.handle(ExplorerCommand::ChangeEndYear(2020)).is_empty());
        assert_eq!(c.years().end(), 2020);
        assert!(c.handle(ExplorerCommand::ChangeEndYear(2020)).is_empty());
    }

    #[test]
    fn test_unchanged_years_do_not_reload() {
        let mut c = loaded(&["USA"]);
        assert!(c.handle(ExplorerCommand::ChangeStartYear(2010)).is_empty());
    }

    #[test]
    fn test_indicator_change_keeps_selection() {
        let mut c = loaded(&["USA", "CAN"]);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        let effects = c.handle(ExplorerCommand::SelectIndicator("LUR".to_string()));
        c.on_countries_loaded(countries_token(&effects), Ok(countries_response(&["KOR"])));

        assert_eq!(c.selection().selected(), &["USA".to_string()]);
    }

    #[test]
    fn test_apply_g7_against_partial_availability() {
        let mut c = loaded(&["USA", "CAN", "GBR"]);
        let effects = c.handle(ExplorerCommand::ApplyPreset(PresetGroup::G7));

        assert!(effects.is_empty());
        let mut selected = c.selection().selected().to_vec();
        selected.sort();
        assert_eq!(selected, vec!["CAN", "GBR", "USA"]);
        assert!(c.selection().is_applied(PresetGroup::G7));
    }

    #[test]
    fn test_apply_preset_without_members_warns() {
        let mut c = loaded(&["NOR"]);
        let effects = c.handle(ExplorerCommand::ApplyPreset(PresetGroup::Brics));

        let n = notice(&effects);
        assert_eq!(n.level, NoticeLevel::Warning);
        assert_eq!(
            n.text,
            "No BRICS country has data for the selected indicator."
        );
        assert!(c.selection().selected().is_empty());
        assert!(!c.selection().is_applied(PresetGroup::Brics));
    }

    #[test]
    fn test_fetch_without_countries_is_rejected() {
        let mut c = loaded(&["USA"]);
        let effects = c.handle(ExplorerCommand::Fetch);

        assert!(data_request(&effects).is_none());
        assert_eq!(notice(&effects).text, "Please select at least one country.");
        assert_eq!(c.fetch_status(), FetchStatus::Idle);
    }

    #[test]
    fn test_fetch_without_indicator_is_rejected() {
        let mut c = ExplorerController::new(2026);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        let effects = c.handle(ExplorerCommand::Fetch);

        assert!(data_request(&effects).is_none());
        assert_eq!(notice(&effects).text, "Please select an indicator.");
    }

    #[test]
    fn test_fetch_success_renders_payload_and_plot() {
        let mut c = loaded(&["USA", "CHN"]);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        c.handle(ExplorerCommand::PickCountry("CHN".to_string()));
        c.handle(ExplorerCommand::ChangeEndYear(2012));

        let effects = c.handle(ExplorerCommand::Fetch);
        let (token, query) = data_request(&effects).unwrap();
        assert_eq!(query.years, vec![2010, 2011, 2012]);
        assert_eq!(c.fetch_status(), FetchStatus::Loading);

        let payload = DataPayload::from_value(json!([
            {"Year": 2010, "Country": "USA", "Value": 2.7}
        ]));
        let effects = c.on_data_loaded(token, Ok(payload));

        assert_eq!(notice(&effects).level, NoticeLevel::Success);
        assert_eq!(c.fetch_status(), FetchStatus::Loaded);
        assert_eq!(c.records().len(), 1);
        assert!(c.payload_text().unwrap().contains("\"Country\": \"USA\""));
        assert_eq!(
            c.plot_path(),
            Some("/plot-data?indicator=NGDP_RPCH&countries=USA,CHN&years=2010,2011,2012")
        );
        assert!(c.alert().is_none());
    }

    #[test]
    fn test_fetch_no_data_shows_placeholder_and_alert() {
        let mut c = loaded(&["USA"]);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        let (token, _) = data_request(&c.handle(ExplorerCommand::Fetch)).unwrap();

        let effects = c.on_data_loaded(
            token,
            Ok(DataPayload::NoData {
                message: "failed".to_string(),
            }),
        );

        assert_eq!(notice(&effects).level, NoticeLevel::Error);
        assert_eq!(c.fetch_status(), FetchStatus::NoData);
        assert!(c.plot_path().is_none());
        assert!(c.alert().is_some());
        assert_eq!(c.payload_text(), Some("Data could not be loaded."));
    }

    #[test]
    fn test_fetch_transport_failure_keeps_previous_payload() {
        let mut c = loaded(&["USA"]);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        let (token, _) = data_request(&c.handle(ExplorerCommand::Fetch)).unwrap();
        c.on_data_loaded(token, Ok(DataPayload::from_value(json!([]))));
        let previous = c.payload_text().map(str::to_string);

        let (token, _) = data_request(&c.handle(ExplorerCommand::Fetch)).unwrap();
        assert!(c.alert().is_none());
        let effects = c.on_data_loaded(token, Err("network".to_string()));

        assert_eq!(notice(&effects).title, "Request failed");
        assert_eq!(c.fetch_status(), FetchStatus::Failed);
        assert_eq!(c.alert(), Some("An error occurred while requesting data."));
        assert_eq!(c.payload_text().map(str::to_string), previous);
    }

    #[test]
    fn test_stale_data_response_is_dropped() {
        let mut c = loaded(&["USA"]);
        c.handle(ExplorerCommand::PickCountry("USA".to_string()));
        let (first, _) = data_request(&c.handle(ExplorerCommand::Fetch)).unwrap();
        let (second, _) = data_request(&c.handle(ExplorerCommand::Fetch)).unwrap();

        assert!(c
            .on_data_loaded(first, Err("late".to_string()))
            .is_empty());
        assert_eq!(c.fetch_status(), FetchStatus::Loading);
        assert!(c.is_current_data(second));
    }

    #[test]
    fn test_chip_removal_keeps_preset_flag() {
        let mut c = loaded(&["USA", "CAN"]);
        c.handle(ExplorerCommand::ApplyPreset(PresetGroup::G7));
        c.handle(ExplorerCommand::RemoveCountry("USA".to_string()));

        assert!(c.selection().is_applied(PresetGroup::G7));
        assert_eq!(c.selection().summary(), "CAN");

        c.handle(ExplorerCommand::RetractPreset(PresetGroup::G7));
        assert!(!c.selection().is_applied(PresetGroup::G7));
        assert_eq!(c.selection().summary(), "");
    }
}
