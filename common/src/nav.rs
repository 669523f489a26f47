//! ナビゲーションリンク生成とページ判定

use crate::config::SiteConfig;

/// 現在のページ位置（`window.location` の必要部分）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// ポート込みのホスト
    pub host: String,
    pub hostname: String,
    pub pathname: String,
}

impl Location {
    pub fn new(host: &str, pathname: &str) -> Self {
        let hostname = host.split(':').next().unwrap_or(host);
        Self {
            host: host.to_string(),
            hostname: hostname.to_string(),
            pathname: pathname.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub title: String,
    /// 表示中のページ
    pub current: bool,
    /// 別ホスト（新しいタブで開く）
    pub external: bool,
}

/// 絶対URLを (host, pathname) に分解
fn split_absolute(url: &str) -> (&str, &str) {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    }
}

pub fn nav_links(config: &SiteConfig, location: &Location) -> Vec<NavLink> {
    config
        .pages
        .iter()
        .map(|page| {
            let href = config.resolve_href(&location.hostname, &page.url);
            let (host, pathname) = if page.is_absolute() {
                let (h, p) = split_absolute(&href);
                (h.to_string(), p.to_string())
            } else {
                (location.host.clone(), href.clone())
            };

            NavLink {
                current: host == location.host && pathname == location.pathname,
                external: host != location.host,
                title: page.title.clone(),
                href,
            }
        })
        .collect()
}

/// スクリプトが動作するページの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    /// ナビとテーマのみ（Contact / Resume など）
    Other,
}

impl Page {
    pub fn detect(config: &SiteConfig, location: &Location) -> Self {
        let base = config.base_path(&location.hostname);
        let Some(rest) = location.pathname.strip_prefix(base) else {
            return Page::Other;
        };
        let rest = rest.trim_end_matches("index.html");

        if rest.is_empty() {
            Page::Home
        } else if rest.trim_end_matches('/') == "projects" {
            Page::Projects
        } else {
            Page::Other
        }
    }
}
