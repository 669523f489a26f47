//! localStorage によるテーマ保存
//!
//! 値はJSONエンコードせず生の文字列で保存する（`colorScheme` = `"dark"` など）。

use portfolio_common::{Error, Result, ThemeStore};
use web_sys::Storage;

pub struct LocalThemeStore {
    storage: Option<Storage>,
}

impl LocalThemeStore {
    /// プライベートモード等で localStorage が使えない場合も生成は成功する
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage is unavailable".into()))
    }
}

impl Default for LocalThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalThemeStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
