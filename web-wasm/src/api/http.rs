//! fetch 共通処理
//!
//! 失敗（ネットワーク・ステータス異常）はすべて `Error::Fetch` にまとめる。

use portfolio_common::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> Error {
    Error::Fetch(format!("{:?}", value))
}

/// ステータス異常時のメッセージ
pub fn status_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Failed to fetch: HTTP {}", status)
    } else {
        format!("Failed to fetch: HTTP {} {}", status, status_text)
    }
}

/// GETしてレスポンス本文を文字列で返す
pub async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Fetch(status_message(resp.status(), &resp.status_text())));
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| Error::Fetch("response body is not text".into()))
}
