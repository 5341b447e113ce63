use crate::dashboards::d402_indicator_explorer::ui::IndicatorExplorerPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <IndicatorExplorerPage />
        </ConfigProvider>
    }
}
