//! プロジェクトページ
//!
//! コントローラを `RwSignal` に1つだけ持ち、チャート・凡例・一覧は
//! 同じ `Memo<FilterView>` を購読する。書き込みはこのページのハンドラだけ。

use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::render::projects_title;
use portfolio_common::{Controller, DismissPolicy, FilterView, HeadingLevel};
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::api::projects::load_projects;
use crate::components::{
    legend::Legend,
    pie_chart::PieChart,
    project_list::ProjectList,
    search_bar::SearchBar,
};

#[component]
pub fn ProjectsPage(data_url: String) -> impl IntoView {
    let controller = RwSignal::new(Controller::default());

    spawn_local(async move {
        match load_projects(&data_url).await {
            Ok(store) => {
                console::log!(format!("loaded {} projects", store.len()));
                controller.update(|c| c.replace_records(store.into_records()));
            }
            Err(e) => console::error!(format!("Error fetching JSON: {}", e)),
        }
    });

    view! { <ProjectsView controller=controller /> }
}

/// チャート・凡例・検索欄・一覧と、フィルタ解除リスナー
#[component]
pub fn ProjectsView(controller: RwSignal<Controller>) -> impl IntoView {
    let filter = Memo::new(move |_| controller.with(|c| c.view().clone()));
    let total = Memo::new(move |_| controller.with(|c| c.store().len()));
    let matching = Signal::derive(move || filter.with(|f: &FilterView| f.matching.clone()));

    // 検索欄の表示文字列（大文字小文字はそのまま）
    let (search_text, set_search_text) = signal(String::new());

    let on_toggle = move |label: String| controller.update(|c| c.toggle_category(&label));

    let on_search = move |text: String| {
        controller.update(|c| c.set_query(&text));
        set_search_text.set(text);
    };

    // 許可領域の外をクリックしたら検索・選択を解除
    let policy = DismissPolicy::default();
    let dismiss = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let inside = |selector: &str| matches!(target.closest(selector), Ok(Some(_)));
        if policy.should_dismiss(inside) {
            set_search_text.set(String::new());
            controller.update(|c| c.clear());
        }
    });
    on_cleanup(move || dismiss.remove());

    view! {
        <h1 class="projects-title">{move || projects_title(total.get())}</h1>
        <div class="container">
            <PieChart filter=filter on_toggle=on_toggle />
            <Legend filter=filter on_toggle=on_toggle />
        </div>
        <SearchBar text=search_text on_input=on_search />
        <ProjectList records=matching heading=HeadingLevel::H2 />
    }
}
