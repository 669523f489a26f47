//! サイト設定
//!
//! デプロイ先（ローカル / GitHub Pages）によってベースパスが変わる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// ナビゲーションに並べるページ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// ベースパスからの相対URL、または `http` で始まる絶対URL
    pub url: String,
    pub title: String,
}

impl PageLink {
    fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.url.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 公開環境のベースパス（GitHub Pagesのリポジトリ名）
    pub base_path: String,
    /// ローカル開発サーバのベースパス
    pub local_base_path: String,
    pub local_hosts: Vec<String>,
    /// プロジェクト一覧JSON（ベースパスからの相対）
    pub data_path: String,
    pub github_api: String,
    pub github_user: String,
    /// トップページに表示する最新プロジェクト数
    pub latest_count: usize,
    pub pages: Vec<PageLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/Lab-5/".into(),
            local_base_path: "/".into(),
            local_hosts: vec!["localhost".into(), "127.0.0.1".into()],
            data_path: "lib/projects.json".into(),
            github_api: "https://api.github.com/users/".into(),
            github_user: "SAMSOOSEO".into(),
            latest_count: 4,
            pages: vec![
                PageLink::new("", "Home"),
                PageLink::new("projects/", "Projects"),
                PageLink::new("contact/", "Contact"),
                PageLink::new("resume/", "CV & Resume"),
                PageLink::new("https://github.com/samsooseo", "GitHub"),
            ],
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み（欠けているフィールドはデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for path in [&self.base_path, &self.local_base_path] {
            if !path.starts_with('/') || !path.ends_with('/') {
                return Err(Error::Config(format!(
                    "base path must start and end with '/': {}",
                    path
                )));
            }
        }
        Ok(())
    }

    pub fn is_local(&self, hostname: &str) -> bool {
        self.local_hosts.iter().any(|h| h == hostname)
    }

    pub fn base_path(&self, hostname: &str) -> &str {
        if self.is_local(hostname) {
            &self.local_base_path
        } else {
            &self.base_path
        }
    }

    /// 相対URLにはベースパスを付け、絶対URLはそのまま
    pub fn resolve_href(&self, hostname: &str, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.base_path(hostname), url)
        }
    }

    pub fn data_url(&self, hostname: &str) -> String {
        self.resolve_href(hostname, &self.data_path)
    }

    pub fn profile_url(&self) -> String {
        format!("{}{}", self.github_api, self.github_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages() {
        let config = SiteConfig::default();
        let titles: Vec<&str> = config.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "Projects", "Contact", "CV & Resume", "GitHub"]);
        assert!(config.pages[4].is_absolute());
        assert!(!config.pages[0].is_absolute());
    }

    #[test]
    fn test_base_path_by_host() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path("localhost"), "/");
        assert_eq!(config.base_path("127.0.0.1"), "/");
        assert_eq!(config.base_path("samsooseo.github.io"), "/Lab-5/");
    }

    #[test]
    fn test_resolve_href() {
        let config = SiteConfig::default();
        assert_eq!(config.resolve_href("localhost", "projects/"), "/projects/");
        assert_eq!(config.resolve_href("user.github.io", "projects/"), "/Lab-5/projects/");
        assert_eq!(
            config.resolve_href("user.github.io", "https://github.com/samsooseo"),
            "https://github.com/samsooseo"
        );
    }

    #[test]
    fn test_data_and_profile_urls() {
        let config = SiteConfig::default();
        assert_eq!(config.data_url("localhost"), "/lib/projects.json");
        assert_eq!(config.data_url("user.github.io"), "/Lab-5/lib/projects.json");
        assert_eq!(config.profile_url(), "https://api.github.com/users/SAMSOOSEO");
    }

    #[test]
    fn test_from_json_partial() {
        let config = SiteConfig::from_json(r#"{"base_path": "/portfolio/", "latest_count": 3}"#).unwrap();
        assert_eq!(config.base_path, "/portfolio/");
        assert_eq!(config.latest_count, 3);
        assert_eq!(config.data_path, "lib/projects.json");
        assert_eq!(config.pages.len(), 5);
    }

    #[test]
    fn test_from_json_invalid_base_path() {
        let result = SiteConfig::from_json(r#"{"base_path": "portfolio"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
