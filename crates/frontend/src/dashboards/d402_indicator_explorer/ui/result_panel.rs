use crate::dashboards::d402_indicator_explorer::view_model::ExplorerViewModel;
use crate::shared::json_viewer::JsonViewer;
use contracts::dashboards::d402_indicator_explorer::{DataRecord, FetchStatus};
use leptos::prelude::*;
use thaw::*;

const NO_DATA_IMAGE: &str = "/public/no-data.svg";

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Chart image, inline alert, records table and raw payload
#[component]
pub fn ResultPanel(vm: ExplorerViewModel) -> impl IntoView {
    let status = Memo::new(move |_| vm.controller.with(|c| c.fetch_status()));
    let alert = Memo::new(move |_| vm.controller.with(|c| c.alert().map(str::to_string)));
    let plot = Memo::new(move |_| vm.controller.with(|c| c.plot_path().map(str::to_string)));
    let payload = Memo::new(move |_| {
        vm.controller
            .with(|c| c.payload_text().map(str::to_string))
    });
    let records = Memo::new(move |_| vm.controller.with(|c| c.records().to_vec()));

    // payload and chart stay hidden while loading and after a failed request
    let shows_result =
        move || matches!(status.get(), FetchStatus::Loaded | FetchStatus::NoData);

    view! {
        <section class="result">
            <Show when=move || status.get() == FetchStatus::Loading>
                <div id="loading">
                    <Spinner />
                    <span>"Loading data..."</span>
                </div>
            </Show>

            {move || alert.get().map(|text| {
                let intent = if status.get() == FetchStatus::NoData {
                    MessageBarIntent::Warning
                } else {
                    MessageBarIntent::Error
                };
                view! {
                    <MessageBar intent=intent>
                        <div id="alert-box">{text}</div>
                    </MessageBar>
                }
            })}

            <Show when=shows_result>
                <img
                    id="gdpPlot"
                    class="result__plot"
                    alt="Indicator chart"
                    src=move || plot.get().unwrap_or_else(|| NO_DATA_IMAGE.to_string())
                />

                {move || {
                    let rows = records.get();
                    (!rows.is_empty()).then(|| view! { <RecordsTable rows=rows /> })
                }}

                {move || match (status.get(), payload.get()) {
                    (FetchStatus::Loaded, Some(json)) => view! {
                        <JsonViewer
                            json_content=json
                            title="Raw data".to_string()
                            file_name="indicator_data.json"
                        />
                    }
                    .into_any(),
                    (_, Some(text)) => view! { <pre id="jsonData">{text}</pre> }.into_any(),
                    (_, None) => ().into_any(),
                }}
            </Show>
        </section>
    }
}

#[component]
fn RecordsTable(rows: Vec<DataRecord>) -> impl IntoView {
    view! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>"Year"</th>
                    <th>"Country"</th>
                    <th>"Value"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|r| {
                        view! {
                            <tr>
                                <td>{r.year}</td>
                                <td>{r.country}</td>
                                <td>{format_value(r.value)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
