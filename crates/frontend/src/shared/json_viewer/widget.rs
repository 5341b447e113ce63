use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::download::{download_text, JSON_MIME};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Просмотр JSON с копированием и скачиванием
#[component]
pub fn JsonViewer(
    /// JSON строка для отображения
    json_content: String,
    #[prop(optional)]
    title: Option<String>,
    /// Имя файла для скачивания
    file_name: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let content_for_copy = json_content.clone();
    let content_for_download = json_content.clone();
    let size = json_content.chars().count();
    let lines = json_content.lines().count();

    // Копирование в буфер обмена
    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&content_for_copy, move || {
            set_copied.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                set_copied.set(false);
            });
        });
    };

    // Скачать JSON файл
    let handle_download = move |_| {
        if let Err(e) = download_text(&content_for_download, file_name, JSON_MIME) {
            log::error!("JSON download failed: {}", e);
        }
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div class="json-viewer__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! {
                                <>
                                    {icon("check")}
                                    {"Copied!"}
                                </>
                            }.into_any()
                        } else {
                            view! {
                                <>
                                    {icon("copy")}
                                    {"Copy"}
                                </>
                            }.into_any()
                        }}
                    </button>
                    <button
                        type="button"
                        class="button button--success"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre id="jsonData" class="json-viewer__content">
                    {json_content}
                </pre>
            </div>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{format!("{} characters", size)}</strong>
                {" | "}
                {"Lines: "}
                <strong>{lines}</strong>
            </div>
        </div>
    }
}
