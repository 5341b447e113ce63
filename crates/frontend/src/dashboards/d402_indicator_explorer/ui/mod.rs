mod country_picker;
mod indicator_picker;
mod notice_dialog;
mod page;
mod preset_bar;
mod result_panel;
mod selected_countries;
mod year_range;

pub use page::IndicatorExplorerPage;
