//! メインアプリケーションコンポーネント
//!
//! 全ページ共通のナビとテーマ切替を描画し、現在のパスに応じて
//! ページ固有のUIを追加する。

use gloo::console;
use leptos::prelude::*;
use portfolio_common::{nav_links, Location, Page, SiteConfig};
use crate::components::{nav::Nav, theme_select::ThemeSelect};
use crate::pages::{home::HomePage, projects::ProjectsPage};

/// 設定上書き用の `<script type="application/json">` のID
const CONFIG_ELEMENT_ID: &str = "site-config";

/// 上書き設定を解釈。なし・不正ならデフォルト
fn parse_site_config(json: Option<&str>) -> SiteConfig {
    match json.map(SiteConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            console::error!(format!("invalid site config, using defaults: {}", e));
            SiteConfig::default()
        }
        None => SiteConfig::default(),
    }
}

fn load_site_config() -> SiteConfig {
    let text = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse_site_config(text.as_deref())
}

fn current_location() -> Location {
    let location = gloo::utils::window().location();
    Location::new(
        &location.host().unwrap_or_default(),
        &location.pathname().unwrap_or_default(),
    )
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let location = current_location();
    let links = nav_links(&config, &location);

    let page = match Page::detect(&config, &location) {
        Page::Home => view! {
            <HomePage
                data_url=config.data_url(&location.hostname)
                profile_url=config.profile_url()
                latest_count=config.latest_count
            />
        }
        .into_any(),
        Page::Projects => view! {
            <ProjectsPage data_url=config.data_url(&location.hostname) />
        }
        .into_any(),
        Page::Other => ().into_any(),
    };

    view! {
        <Nav links=links />
        <ThemeSelect />
        {page}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_config_missing() {
        assert_eq!(parse_site_config(None), SiteConfig::default());
    }

    #[test]
    fn test_parse_site_config_override() {
        let config = parse_site_config(Some(r#"{"github_user": "octocat"}"#));
        assert_eq!(config.profile_url(), "https://api.github.com/users/octocat");
        assert_eq!(config.latest_count, 4);
    }
}
