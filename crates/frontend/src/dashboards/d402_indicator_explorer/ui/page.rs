use super::country_picker::CountryPicker;
use super::indicator_picker::IndicatorPicker;
use super::notice_dialog::NoticeDialog;
use super::preset_bar::PresetBar;
use super::result_panel::ResultPanel;
use super::selected_countries::SelectedCountries;
use super::year_range::YearRangeSlider;
use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::{ExplorerCommand, FetchStatus};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn IndicatorExplorerPage() -> impl IntoView {
    let vm = ExplorerViewModel::new();

    // Load the indicator catalog on mount
    Effect::new(move |_| vm.start());

    let fetching = Signal::derive(move || {
        vm.controller
            .with(|c| c.fetch_status() == FetchStatus::Loading)
    });

    view! {
        <div id="d402_indicator_explorer--dashboard" class="explorer">
            <h2 class="section-title">"IMF economic indicator explorer"</h2>

            <form class="explorer__form" on:submit=|ev| ev.prevent_default()>
                <IndicatorPicker vm=vm />
                <YearRangeSlider vm=vm />
                <PresetBar vm=vm />
                <CountryPicker vm=vm />
                <SelectedCountries vm=vm />

                <div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.dispatch(ExplorerCommand::Fetch)
                        disabled=fetching
                    >
                        "Fetch data"
                    </Button>
                </div>
            </form>

            <ResultPanel vm=vm />
            <NoticeDialog vm=vm />
        </div>
    }
}
