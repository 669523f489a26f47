//! プロジェクトページをマウントしてクリック操作を検証するブラウザテスト

#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use portfolio_common::{Controller, ProjectStore};
use portfolio_wasm::pages::projects::ProjectsView;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture_controller() -> RwSignal<Controller> {
    let store = ProjectStore::from_json(
        r#"[
            {"title": "Lab 1", "year": "2022"},
            {"title": "Lab 2", "year": "2023"},
            {"title": "Lab 3", "year": "2024"}
        ]"#,
    )
    .unwrap();
    RwSignal::new(Controller::new(store))
}

fn create_host() -> HtmlElement {
    let host: HtmlElement = gloo::utils::document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    gloo::utils::body().append_child(&host).unwrap();
    host
}

fn count(host: &HtmlElement, selector: &str) -> u32 {
    host.query_selector_all(selector).unwrap().length()
}

fn selected(controller: RwSignal<Controller>) -> Option<String> {
    controller.with_untracked(|c| c.state().selected_category.clone())
}

/// 先頭以外の凡例項目をクリックしても選択が残り、クリックはwindowまで届かない
#[wasm_bindgen_test]
async fn test_legend_click_keeps_selection() {
    let host = create_host();
    let controller = fixture_controller();
    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! { <ProjectsView controller=controller /> }
    });

    let bubbled = Arc::new(AtomicUsize::new(0));
    let counter = bubbled.clone();
    let listener = window_event_listener(leptos::ev::click, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(count(&host, ".legend li"), 3);
    let item: HtmlElement = host
        .query_selector_all(".legend li")
        .unwrap()
        .item(1)
        .unwrap()
        .dyn_into()
        .unwrap();
    item.click();
    TimeoutFuture::new(0).await;

    assert_eq!(bubbled.load(Ordering::SeqCst), 0);
    assert_eq!(selected(controller).as_deref(), Some("2023"));
    assert_eq!(count(&host, ".legend li"), 1);
    assert_eq!(count(&host, ".legend li.selected"), 1);
    assert_eq!(count(&host, "#projects-plot path.selected"), 1);
    assert_eq!(count(&host, ".projects article"), 1);

    listener.remove();
    drop(handle);
    host.remove();
}

/// ウェッジのクリックでも同じ年が選択され、2回目で解除される
#[wasm_bindgen_test]
async fn test_wedge_click_toggles_selection() {
    let host = create_host();
    let controller = fixture_controller();
    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! { <ProjectsView controller=controller /> }
    });

    let click = || {
        let init = EventInit::new();
        init.set_bubbles(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    };

    let wedge = host
        .query_selector_all("#projects-plot path")
        .unwrap()
        .item(2)
        .unwrap();
    wedge.dispatch_event(&click()).unwrap();
    TimeoutFuture::new(0).await;

    assert_eq!(selected(controller).as_deref(), Some("2024"));
    assert_eq!(count(&host, "#projects-plot path"), 1);
    assert_eq!(count(&host, ".legend li.selected"), 1);

    let wedge = host.query_selector("#projects-plot path").unwrap().unwrap();
    wedge.dispatch_event(&click()).unwrap();
    TimeoutFuture::new(0).await;

    assert_eq!(selected(controller), None);
    assert_eq!(count(&host, "#projects-plot path"), 3);
    assert_eq!(count(&host, ".legend li.selected"), 0);

    drop(handle);
    host.remove();
}

/// チャート・凡例・検索欄の外をクリックすると解除される
#[wasm_bindgen_test]
async fn test_click_outside_clears_filters() {
    let host = create_host();
    let controller = fixture_controller();
    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! { <ProjectsView controller=controller /> }
    });

    controller.update(|c| {
        c.set_query("lab");
        c.toggle_category("2022");
    });
    TimeoutFuture::new(0).await;
    assert_eq!(count(&host, ".projects article"), 1);

    let title: HtmlElement = host
        .query_selector(".projects-title")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    title.click();
    TimeoutFuture::new(0).await;

    assert!(controller.with_untracked(|c| c.state().is_default()));
    assert_eq!(count(&host, ".projects article"), 3);
    assert_eq!(count(&host, ".legend li.selected"), 0);

    drop(handle);
    host.remove();
}
