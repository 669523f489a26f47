//! 検索ボックスコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(text: ReadSignal<String>, on_input: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <input
            class="searchBar"
            type="search"
            aria-label="Search projects"
            placeholder="🔍 Search projects…"
            prop:value=move || text.get()
            on:input=move |ev| on_input(event_target_value(&ev))
        />
    }
}
