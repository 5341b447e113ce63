use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::{ExplorerCommand, PresetGroup};
use leptos::prelude::*;
use thaw::*;

/// One select/deselect button pair per preset; only one of the pair is
/// visible depending on the preset's applied flag.
#[component]
pub fn PresetBar(vm: ExplorerViewModel) -> impl IntoView {
    view! {
        <div class="preset-bar">
            {PresetGroup::ALL
                .into_iter()
                .map(|preset| {
                    let applied = Signal::derive(move || {
                        vm.controller.with(|c| c.selection().is_applied(preset))
                    });
                    view! {
                        <Show
                            when=move || !applied.get()
                            fallback=move || {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        size=ButtonSize::Small
                                        on_click=move |_| {
                                            vm.dispatch(ExplorerCommand::RetractPreset(preset))
                                        }
                                    >
                                        {format!("Deselect {}", preset.label())}
                                    </Button>
                                }
                            }
                        >
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                on_click=move |_| vm.dispatch(ExplorerCommand::ApplyPreset(preset))
                            >
                                {format!("Select {}", preset.label())}
                            </Button>
                        </Show>
                    }
                })
                .collect_view()}
        </div>
    }
}
