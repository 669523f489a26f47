//! プロジェクトカード描画用の表示値
//!
//! 欠けている任意フィールドは固定の代替テキスト/画像で埋める。

use crate::types::ProjectRecord;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";
pub const MISSING_DESCRIPTION: &str = "Description not available.";

/// カード見出しのレベル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    #[default]
    H3,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

pub fn image_src(record: &ProjectRecord) -> &str {
    match record.image.as_deref() {
        Some(src) if !src.is_empty() => src,
        _ => PLACEHOLDER_IMAGE,
    }
}

pub fn description_text(record: &ProjectRecord) -> &str {
    match record.description.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => MISSING_DESCRIPTION,
    }
}

/// プロジェクトページ見出し
pub fn projects_title(count: usize) -> String {
    format!("Projects ({})", count)
}
