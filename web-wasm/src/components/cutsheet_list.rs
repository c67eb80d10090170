//! カットシート一覧コンポーネント

use cutsheet_common::{ListPanel, ListRow, ListView};
use leptos::prelude::*;

#[component]
pub fn CutsheetList<F>(panel: Memo<ListPanel>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"Cut Sheets"</h2>
            </div>
            <div id="parts-list" class="panel__body">
                {move || {
                    let on_select = on_select.clone();
                    match panel.get() {
                        ListPanel::Loading { message } => {
                            view! { <div class="panel__empty">{message}</div> }.into_any()
                        }
                        ListPanel::Failed { message } => {
                            view! { <div class="panel__empty panel__empty--error">{message}</div> }.into_any()
                        }
                        ListPanel::Ready(ListView::Empty { message }) => {
                            view! { <div class="panel__empty">{message}</div> }.into_any()
                        }
                        ListPanel::Ready(ListView::Rows(rows)) => rows
                            .into_iter()
                            .map(|row| view! { <CutsheetCard row=row on_select=on_select.clone() /> })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn CutsheetCard<F>(row: ListRow, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let path = row.path.clone();

    view! {
        <button
            type="button"
            class="part-card"
            aria-selected={if row.selected { "true" } else { "false" }}
            on:click=move |_| on_select(path.clone())
        >
            <div class="part-card__title">{row.title}</div>
            <div class="part-card__meta">
                <span class="badge">{row.badge}</span>
                <span>{row.path}</span>
            </div>
        </button>
    }
}
