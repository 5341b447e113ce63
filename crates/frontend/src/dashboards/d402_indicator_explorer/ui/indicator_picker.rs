use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::{ExplorerCommand, Indicator};
use leptos::prelude::*;

/// Indicator dropdown. Changing it reloads the available countries.
#[component]
pub fn IndicatorPicker(vm: ExplorerViewModel) -> impl IntoView {
    let indicators = Memo::new(move |_| vm.controller.with(|c| c.indicators().to_vec()));
    let selected = Memo::new(move |_| vm.controller.with(|c| c.indicator().to_string()));

    view! {
        <div class="form__group">
            <label class="form__label" for="indicator">"Indicator"</label>
            <select
                id="indicator"
                class="form__select"
                on:change=move |ev| {
                    vm.dispatch(ExplorerCommand::SelectIndicator(event_target_value(&ev)));
                }
            >
                <option value="" selected=move || selected.get().is_empty()>
                    "Select an economic indicator"
                </option>
                <For
                    each=move || indicators.get()
                    key=|i| i.code.clone()
                    children=move |i: Indicator| {
                        let code = i.code.clone();
                        let is_selected = move || selected.get() == code;
                        view! {
                            <option value=i.code selected=is_selected>
                                {i.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
