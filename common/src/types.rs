//! プロジェクトレコードの型定義
//!
//! `lib/projects.json` の1要素に対応する。`title`/`description`/`image`/`year`
//! 以外のフィールドは `extra` にそのまま保持し、検索対象にも含める。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// プロジェクト1件
///
/// JSONオブジェクトを一度順序付きの `Map` として受け取り、既知フィールドを
/// 取り出す。型が想定と違う値（数値のタイトル、null など）も文字列に正規化するので、
/// 1件の形の崩れで一覧全体の読み込みが失敗することはない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ProjectRecord {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// カテゴリキー（年）。数値で書かれていても文字列に正規化する
    pub year: String,

    /// その他のフィールド（出現順を保持）
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// 読み込み元JSONでのキーの出現順
    #[serde(skip)]
    field_order: Vec<String>,
}

impl From<Map<String, Value>> for ProjectRecord {
    fn from(mut map: Map<String, Value>) -> Self {
        let field_order: Vec<String> = map.keys().cloned().collect();
        let text = |value: Option<Value>| value.map(|v| value_text(&v)).unwrap_or_default();
        let optional = |value: Option<Value>| match value {
            None | Some(Value::Null) => None,
            Some(v) => Some(value_text(&v)),
        };

        Self {
            title: text(map.shift_remove("title")),
            description: optional(map.shift_remove("description")),
            image: optional(map.shift_remove("image")),
            year: text(map.shift_remove("year")),
            extra: map,
            field_order,
        }
    }
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            ..Default::default()
        }
    }

    fn field_text(&self, key: &str) -> Option<String> {
        match key {
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            "image" => Some(self.image.clone().unwrap_or_default()),
            "year" => Some(self.year.clone()),
            other => self.extra.get(other).map(value_text),
        }
    }

    /// 検索対象のキー列。読み込み元の順序に、後から設定されたフィールドを続ける
    fn search_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.field_order.iter().map(String::as_str).collect();
        let known = [
            ("title", !self.title.is_empty()),
            ("description", self.description.is_some()),
            ("image", self.image.is_some()),
            ("year", !self.year.is_empty()),
        ];
        for (key, present) in known {
            if present && !keys.contains(&key) {
                keys.push(key);
            }
        }
        for key in self.extra.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }

    /// 全フィールド値を元のキー順に改行で連結し小文字化した検索対象文字列
    ///
    /// 画像URLなど非テキスト的なフィールドも含む。存在しないキーは含めない。
    pub fn haystack(&self) -> String {
        self.search_keys()
            .into_iter()
            .filter_map(|key| self.field_text(key))
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }

    /// `query` は小文字化済みであること
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.haystack().contains(query)
    }
}

/// JSON値を表示用テキストに変換
///
/// null は空文字、配列は要素を `,` で連結する。
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
