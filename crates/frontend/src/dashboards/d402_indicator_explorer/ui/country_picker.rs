use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::selection::matches_prefix;
use contracts::dashboards::d402_indicator_explorer::{
    AvailabilityStatus, Country, ExplorerCommand,
};
use leptos::prelude::*;
use thaw::*;

/// Searchable multi-select over the available countries.
///
/// Clicking an option toggles it in the selection. The search matches the
/// start of the country name only.
#[component]
pub fn CountryPicker(vm: ExplorerViewModel) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let status = Memo::new(move |_| vm.controller.with(|c| c.availability()));

    let options = Memo::new(move |_| {
        let term = search.get();
        vm.controller.with(|c| {
            c.selection()
                .available()
                .iter()
                .filter(|country| matches_prefix(&country.name, &term))
                .cloned()
                .collect::<Vec<Country>>()
        })
    });

    view! {
        <div class="form__group">
            <label class="form__label" for="countries">"Countries"</label>
            {move || match status.get() {
                AvailabilityStatus::Idle => view! {
                    <span class="text-muted">"Choose an indicator to list its countries."</span>
                }
                .into_any(),
                AvailabilityStatus::Loading => view! {
                    <div id="loading-countries">
                        <Spinner />
                        <span id="loading-message">"Loading the country list..."</span>
                    </div>
                }
                .into_any(),
                AvailabilityStatus::NoData => view! {
                    <span class="text-muted">"No country has data for this selection."</span>
                }
                .into_any(),
                AvailabilityStatus::Failed => view! {
                    <span class="text-muted">"The country list is unavailable."</span>
                }
                .into_any(),
                AvailabilityStatus::Ready { count } => view! {
                    <div id="countries">
                        <div id="country-count">{format!("📌 {} countries provide data.", count)}</div>
                        <div class="country-picker__toolbar">
                            <input
                                class="form__input"
                                type="search"
                                placeholder="Search countries (multiple selection)"
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| vm.dispatch(ExplorerCommand::ClearSelection)
                            >
                                "Clear"
                            </Button>
                        </div>
                        <ul class="country-list">
                            <For
                                each=move || options.get()
                                key=|c| c.code.clone()
                                children=move |country: Country| {
                                    let code = country.code.clone();
                                    let is_selected = Signal::derive(move || {
                                        vm.controller.with(|c| c.selection().is_selected(&code))
                                    });
                                    let code = country.code.clone();
                                    view! {
                                        <li
                                            class=move || {
                                                if is_selected.get() {
                                                    "country-option country-option--selected"
                                                } else {
                                                    "country-option"
                                                }
                                            }
                                            on:click=move |_| {
                                                let command = if is_selected.get_untracked() {
                                                    ExplorerCommand::RemoveCountry(code.clone())
                                                } else {
                                                    ExplorerCommand::PickCountry(code.clone())
                                                };
                                                vm.dispatch(command);
                                            }
                                        >
                                            {country.name}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
