use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::ExplorerCommand;
use leptos::prelude::*;

/// Start/end year sliders with a "start ~ end" caption
#[component]
pub fn YearRangeSlider(vm: ExplorerViewModel) -> impl IntoView {
    let years = Memo::new(move |_| vm.controller.with(|c| c.years()));
    let min = move || years.get().min().to_string();
    let max = move || years.get().max().to_string();

    view! {
        <div class="form__group">
            <label class="form__label">
                "Years: "
                <strong id="yearLabel">{move || years.get().label()}</strong>
            </label>
            <input
                id="startYear"
                type="range"
                min=min
                max=max
                prop:value=move || years.get().start().to_string()
                on:input=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                        vm.dispatch(ExplorerCommand::ChangeStartYear(year));
                    }
                }
            />
            <input
                id="endYear"
                type="range"
                min=min
                max=max
                prop:value=move || years.get().end().to_string()
                on:input=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                        vm.dispatch(ExplorerCommand::ChangeEndYear(year));
                    }
                }
            />
        </div>
    }
}
