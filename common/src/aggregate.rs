//! カテゴリ集計
//!
//! 一致レコードを年ごとに数える。カテゴリの並びは一致レコード内での初出順。

use crate::types::ProjectRecord;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAggregate {
    entries: Vec<CategoryCount>,
}

impl CategoryAggregate {
    /// 毎回ゼロから構築する（差分更新はしない）
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        let mut entries: Vec<CategoryCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records {
            match index.get(record.year.as_str()) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(record.year.as_str(), entries.len());
                    entries.push(CategoryCount {
                        label: record.year.clone(),
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let records = vec![
            ProjectRecord::new("A", "2022"),
            ProjectRecord::new("B", "2024"),
            ProjectRecord::new("C", "2022"),
            ProjectRecord::new("D", "2023"),
        ];
        let aggregate = CategoryAggregate::from_records(&records);
        let labels: Vec<&str> = aggregate.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["2022", "2024", "2023"]);
        assert_eq!(aggregate.get("2022"), Some(2));
        assert_eq!(aggregate.total(), 4);
    }

    #[test]
    fn test_order_follows_subset_not_full_list() {
        let records = vec![
            ProjectRecord::new("A", "2022"),
            ProjectRecord::new("B", "2024"),
            ProjectRecord::new("C", "2022"),
        ];
        // 2022の最初のレコードを除いた部分集合でも2024が先頭になる
        let aggregate = CategoryAggregate::from_records(records[1..].iter());
        assert_eq!(aggregate.entries()[0].label, "2024");
        assert_eq!(aggregate.entries()[1].label, "2022");
    }

    #[test]
    fn test_empty() {
        let aggregate = CategoryAggregate::from_records(std::iter::empty());
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.total(), 0);
        assert_eq!(aggregate.get("2024"), None);
    }
}
