//! テーマ切替コンポーネント

use gloo::console;
use leptos::prelude::*;
use portfolio_common::theme::{load_scheme, save_scheme};
use portfolio_common::ColorScheme;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use crate::storage::LocalThemeStore;

/// ルート要素の `color-scheme` を設定（Automaticは削除）
fn apply_color_scheme(scheme: ColorScheme) -> Result<(), JsValue> {
    let root: HtmlElement = gloo::utils::document_element().dyn_into()?;
    let style = root.style();
    match scheme.css_value() {
        Some(value) => style.set_property("color-scheme", value),
        None => style.remove_property("color-scheme").map(|_| ()),
    }
}

#[component]
pub fn ThemeSelect() -> impl IntoView {
    let initial = load_scheme(&LocalThemeStore::new());
    if let Err(e) = apply_color_scheme(initial) {
        console::error!(format!("color-scheme apply failed: {:?}", e));
    }
    let (scheme, set_scheme) = signal(initial);

    let on_input = move |ev: leptos::ev::Event| {
        let Some(selected) = ColorScheme::parse(&event_target_value(&ev)) else {
            return;
        };
        set_scheme.set(selected);
        if let Err(e) = apply_color_scheme(selected) {
            console::error!(format!("color-scheme apply failed: {:?}", e));
        }
        if let Err(e) = save_scheme(&mut LocalThemeStore::new(), selected) {
            console::error!(e.to_string());
        }
    };

    view! {
        <label class="color-scheme">
            "Theme: "
            <select on:input=on_input>
                {ColorScheme::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.as_str()
                                selected=move || scheme.get() == option
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
