//! ヘッダーコンポーネント（ステータス行付き）

use leptos::prelude::*;

#[component]
pub fn Header(status: Memo<String>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Cutsheet Viewer"</h1>
            <p id="status" class="status">{move || status.get()}</p>
        </header>
    }
}
