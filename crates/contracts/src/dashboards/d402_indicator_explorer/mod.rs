//! d402: economic indicator explorer.
//!
//! Shared between the WASM page and the host server:
//! - wire DTOs and endpoint paths of the upstream data service
//! - preset country groups and the selection store they reconcile against
//! - form validation and the year range slider model
//! - `ExplorerController`, the toolkit-independent command handler that
//!   owns all page state and emits effects for the UI layer to execute

pub mod controller;
pub mod dto;
pub mod presets;
pub mod query;
pub mod selection;
pub mod validation;

pub use controller::{
    AvailabilityStatus, ExplorerCommand, ExplorerController, ExplorerEffect, FetchStatus, Notice,
    NoticeLevel, NoticeSlot, NoticeTicket, RequestToken,
};
pub use dto::{
    AvailableCountriesResponse, CatalogError, Country, DataPayload, DataRecord, Indicator,
};
pub use presets::PresetGroup;
pub use query::{AvailabilityQuery, DataQuery};
pub use selection::{ApplyOutcome, PresetError, SelectionStore};
pub use validation::{validate_fetch, ValidationError, YearRange};
