use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use crate::shared::icons::icon;
use contracts::dashboards::d402_indicator_explorer::ExplorerCommand;
use leptos::prelude::*;

/// Removable chip per selected country plus the hidden field carrying the
/// comma-separated selection
#[component]
pub fn SelectedCountries(vm: ExplorerViewModel) -> impl IntoView {
    let chips = Memo::new(move |_| vm.controller.with(|c| c.selection().chips()));
    let summary = Memo::new(move |_| vm.controller.with(|c| c.selection().summary()));

    view! {
        <div class="form__group">
            <label class="form__label" for="selectedCountries">"Selected countries"</label>
            <input type="hidden" name="selectedCountries" prop:value=move || summary.get() />
            <input
                id="selectedCountries"
                class="form__input"
                readonly=true
                placeholder="No country selected"
                prop:value=move || summary.get()
            />
            <ul id="selectedCountriesList" class="chip-list">
                <For
                    each=move || chips.get()
                    key=|(code, _)| code.clone()
                    children=move |(code, name)| {
                        view! {
                            <li class="chip">
                                {name}
                                <button
                                    type="button"
                                    class="button button--icon remove-country"
                                    title="Remove"
                                    on:click=move |_| {
                                        vm.dispatch(ExplorerCommand::RemoveCountry(code.clone()))
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
