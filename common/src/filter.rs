//! フィルタ状態
//!
//! 検索クエリ（小文字化済み）と選択中カテゴリの2次元状態。
//! どの組み合わせも有効で、永続化はしない。

use crate::types::ProjectRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub selected_category: Option<String>,
}

impl FilterState {
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_lowercase();
    }

    /// 同じキーなら解除、違うキーなら選択
    pub fn toggle_category(&mut self, key: &str) {
        if self.selected_category.as_deref() == Some(key) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(key.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.selected_category.is_none()
    }

    /// 唯一のフィルタ述語: クエリ一致 AND (未選択 OR 年が一致)
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        record.matches_query(&self.query)
            && self
                .selected_category
                .as_deref()
                .map_or(true, |year| record.year == year)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_category.as_deref() == Some(key)
    }
}
