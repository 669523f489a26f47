//! プロジェクトストア
//!
//! ページ起動時に一度だけ読み込まれる不変のレコード列を保持する。

use crate::error::Result;
use crate::types::ProjectRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
}

impl ProjectStore {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// JSON配列からストアを構築
    ///
    /// 配列でない、またはレコード形状でない要素を含む場合は `Error::Json`。
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// 新しく読み込んだ一覧で全置換
    pub fn replace(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
    }

    pub fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// 先頭 `n` 件（トップページの最新プロジェクト表示用）
    pub fn latest(&self, n: usize) -> &[ProjectRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = r#"[
        {"title": "A", "year": "2023"},
        {"title": "B", "year": "2023"},
        {"title": "C", "year": "2024"},
        {"title": "D", "year": "2022"},
        {"title": "E", "year": "2021"}
    ]"#;

    #[test]
    fn test_from_json() {
        let store = ProjectStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.records()[2].title, "C");
    }

    #[test]
    fn test_from_json_not_array() {
        let result = ProjectStore::from_json(r#"{"title": "A"}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ProjectStore::from_json("<!DOCTYPE html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_tolerates_non_string_fields() {
        let json = r#"[
            {"title": "A", "year": "2023"},
            {"title": null, "year": "2024"},
            {"title": 42, "description": 7, "year": 2024}
        ]"#;
        let store = ProjectStore::from_json(json).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[1].title, "");
        assert_eq!(store.records()[2].title, "42");
        assert_eq!(store.records()[2].description.as_deref(), Some("7"));
    }

    #[test]
    fn test_latest() {
        let store = ProjectStore::from_json(SAMPLE).unwrap();
        let latest: Vec<&str> = store.latest(4).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(latest, vec!["A", "B", "C", "D"]);
        assert_eq!(store.latest(10).len(), 5);
        assert!(ProjectStore::default().latest(4).is_empty());
    }

    #[test]
    fn test_replace() {
        let mut store = ProjectStore::from_json(SAMPLE).unwrap();
        store.replace(vec![ProjectRecord::new("Z", "2025")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "Z");
    }
}
