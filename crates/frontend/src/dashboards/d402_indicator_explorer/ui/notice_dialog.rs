use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use contracts::dashboards::d402_indicator_explorer::NoticeLevel;
use leptos::prelude::*;
use thaw::*;

fn level_mark(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✅",
        NoticeLevel::Warning => "⚠️",
        NoticeLevel::Error => "🚨",
    }
}

/// Modal notice raised by the controller (validation, no data, failures)
#[component]
pub fn NoticeDialog(vm: ExplorerViewModel) -> impl IntoView {
    let title = move || {
        vm.notice.with(|slot| {
            slot.current()
                .map(|n| format!("{} {}", level_mark(n.level), n.title))
                .unwrap_or_default()
        })
    };
    let text = move || {
        vm.notice
            .with(|slot| slot.current().map(|n| n.text.clone()))
            .unwrap_or_default()
    };

    view! {
        <Dialog open=vm.notice_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{text}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.close_notice()
                        >
                            "OK"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
