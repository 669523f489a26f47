//! 「フィルタ外クリックで解除」ポリシー
//!
//! グローバルなクリックリスナー1つで判定する。許可領域（チャート・凡例・検索欄）
//! のいずれかの内側で発生したクリックは無視し、それ以外でフィルタを解除する。

/// プロジェクトページの許可領域
pub const FILTER_REGIONS: [&str; 3] = ["#projects-plot", ".legend", ".searchBar"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissPolicy {
    allow: Vec<String>,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::new(FILTER_REGIONS)
    }
}

impl DismissPolicy {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow: selectors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn selectors(&self) -> &[String] {
        &self.allow
    }

    /// `inside(selector)` はクリック対象がそのセレクタ内にあるか（`Element::closest`）
    pub fn should_dismiss<F>(&self, inside: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        !self.allow.iter().any(|selector| inside(selector))
    }
}
