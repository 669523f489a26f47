//! Portfolio Site (Leptos + WASM)

mod app;
mod components;
pub mod pages;
mod api;
pub mod storage;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// ナビ・テーマ切替・ページ固有UIを body の先頭に描画する
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let host: HtmlElement = gloo::utils::document().create_element("div")?.dyn_into()?;
    host.set_id("site-root");
    gloo::utils::body().prepend_with_node_1(&host)?;

    leptos::mount::mount_to(host, app::App).forget();
    Ok(())
}
