//! Export buttons and the data-table toggle attached to chart replies.

use charts::export::{DEFAULT_CSV_FILENAME, EXPORT_IMAGE_FILENAME};
use charts::table::{generate_data_table, toggle_label};
use leptos::prelude::*;
use protocol::Record;

use crate::util::download::{export_data_as_csv, save_chart_as_image};

/// "Save PNG" for the rendered chart, plus "Download Data" when the reply
/// carried records.
#[component]
pub fn ChartActions(src: String, data: Vec<Record>) -> impl IntoView {
    let has_data = !data.is_empty();
    let on_png = move |_| {
        save_chart_as_image(&src, EXPORT_IMAGE_FILENAME);
    };
    let on_csv = move |_| {
        export_data_as_csv(&data, DEFAULT_CSV_FILENAME);
    };

    view! {
        <div class="chart-actions">
            <button class="chart-action-btn" on:click=on_png>"Save PNG"</button>
            {has_data.then(|| {
                view! {
                    <button class="chart-action-btn" on:click=on_csv>"Download Data"</button>
                }
            })}
        </div>
    }
}

/// Button that shows or hides a formatted table of `data`. Hidden initially.
#[component]
pub fn DataTableToggle(data: Vec<Record>) -> impl IntoView {
    let visible = RwSignal::new(false);
    let table_html = generate_data_table(&data);

    view! {
        <button class="data-table-toggle" on:click=move |_| visible.update(|v| *v = !*v)>
            {move || toggle_label(visible.get())}
        </button>
        <div
            class="data-table-wrapper"
            style:display=move || if visible.get() { "block" } else { "none" }
            inner_html=table_html
        ></div>
    }
}
