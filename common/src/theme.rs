//! カラースキーム（テーマ）設定
//!
//! 保存先はキー1つ（`colorScheme`）の文字列。ブラウザでは localStorage、
//! テストではメモリ上のストアを使う。

use crate::error::Result;
use std::collections::HashMap;

/// 保存キー
pub const STORAGE_KEY: &str = "colorScheme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    /// OS設定に従う（`light dark`）
    #[default]
    Automatic,
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Automatic, ColorScheme::Light, ColorScheme::Dark];

    /// 保存値・`<option value>` に使う文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Automatic => "light dark",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Automatic => "Automatic",
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }

    /// 未知の値は None
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// ルート要素の `color-scheme` に設定する値（Automaticはプロパティ削除）
    pub fn css_value(&self) -> Option<&'static str> {
        match self {
            ColorScheme::Automatic => None,
            other => Some(other.as_str()),
        }
    }
}

/// テーマ文字列の保存先
pub trait ThemeStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// 起動時の保存値を読む。未保存・不明値・読込失敗はいずれも Automatic
pub fn load_scheme<S: ThemeStore + ?Sized>(store: &S) -> ColorScheme {
    store
        .read(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|v| ColorScheme::parse(&v))
        .unwrap_or_default()
}

/// ユーザーが選択を変えるたびに保存
pub fn save_scheme<S: ThemeStore + ?Sized>(store: &mut S, scheme: ColorScheme) -> Result<()> {
    store.write(STORAGE_KEY, scheme.as_str())
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    values: HashMap<String, String>,
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
