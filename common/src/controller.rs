//! フィルタ/選択コントローラ
//!
//! `FilterState` を唯一所有し、状態が変わるたびに `FilterView` を作り直す。
//! チャート・凡例・一覧はすべて同じ `FilterView` から描画するので、
//! 操作完了後にどれか1つだけ古い状態を表示することはない。

use crate::aggregate::CategoryAggregate;
use crate::filter::FilterState;
use crate::store::ProjectStore;
use crate::types::ProjectRecord;

/// 1回の再計算結果（3ビュー共通のスナップショット）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterView {
    pub matching: Vec<ProjectRecord>,
    pub aggregate: CategoryAggregate,
    pub selected: Option<String>,
}

impl FilterView {
    pub fn compute(records: &[ProjectRecord], state: &FilterState) -> Self {
        let matching: Vec<ProjectRecord> = records
            .iter()
            .filter(|r| state.matches(r))
            .cloned()
            .collect();
        let aggregate = CategoryAggregate::from_records(&matching);

        Self {
            matching,
            aggregate,
            selected: state.selected_category.clone(),
        }
    }

    /// ウェッジ/凡例項目を選択表示にするか
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.as_deref() == Some(label)
    }

    /// 一致0件は正常状態（何も描画しない）
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controller {
    store: ProjectStore,
    state: FilterState,
    view: FilterView,
}

impl Controller {
    pub fn new(store: ProjectStore) -> Self {
        let mut controller = Self {
            store,
            state: FilterState::default(),
            view: FilterView::default(),
        };
        controller.recompute();
        controller
    }

    pub fn set_query(&mut self, text: &str) {
        self.state.set_query(text);
        self.recompute();
    }

    pub fn toggle_category(&mut self, key: &str) {
        self.state.toggle_category(key);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.recompute();
    }

    /// 読み込み直した一覧に差し替え、現在の状態で再計算
    pub fn replace_records(&mut self, records: Vec<ProjectRecord>) {
        self.store.replace(records);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = FilterView::compute(self.store.records(), &self.state);
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &FilterView {
        &self.view
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}
