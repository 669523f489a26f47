//! 円グラフのレイアウトとSVGパス生成
//!
//! 角度は12時方向を0として時計回り。各ウェッジの角度位置は件数の降順
//! （同数はデータ順）で割り当てるが、返すウェッジ列はデータ順のまま。

use crate::aggregate::CategoryAggregate;
use std::f64::consts::{PI, TAU};

/// Tableau10 カラースキーム
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f",
    "#edc949", "#af7aa1", "#ff9da7", "#9c755f", "#bab0ab",
];

/// 円グラフの外径（viewBox `-50 -50 100 100` に対応）
pub const OUTER_RADIUS: f64 = 50.0;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    /// データ順のインデックス（色の決定に使う）
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn color(&self) -> &'static str {
        color_for(self.index)
    }

    pub fn path(&self, radius: f64) -> String {
        arc_path(self.start_angle, self.end_angle, radius)
    }
}

/// データ順インデックスから色を決める（10色で循環）
pub fn color_for(index: usize) -> &'static str {
    TABLEAU10[index % TABLEAU10.len()]
}

/// 集計結果から円グラフのウェッジを計算
pub fn pie_layout(aggregate: &CategoryAggregate) -> Vec<Wedge> {
    let entries = aggregate.entries();
    let total = aggregate.total();
    let scale = if total == 0 { 0.0 } else { TAU / total as f64 };

    // 件数降順（stable sortなので同数はデータ順）
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[b].count.cmp(&entries[a].count));

    let mut angles = vec![(0.0, 0.0); entries.len()];
    let mut cursor = 0.0;
    for i in order {
        let end = cursor + entries[i].count as f64 * scale;
        angles[i] = (cursor, end);
        cursor = end;
    }

    entries
        .iter()
        .zip(angles)
        .enumerate()
        .map(|(index, (entry, (start_angle, end_angle)))| Wedge {
            label: entry.label.clone(),
            count: entry.count,
            index,
            start_angle,
            end_angle,
        })
        .collect()
}

fn point(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// 中心から伸びる扇形のSVGパス
///
/// 一周分のウェッジは半円弧2本で描く（始点と終点が一致すると弧が消えるため）。
pub fn arc_path(start_angle: f64, end_angle: f64, radius: f64) -> String {
    let span = end_angle - start_angle;
    if span <= EPSILON || radius <= 0.0 {
        return String::new();
    }

    if span >= TAU - EPSILON {
        let (x0, y0) = point(start_angle, radius);
        let (x1, y1) = point(start_angle + PI, radius);
        return format!(
            "M{:.3},{:.3}A{r:.3},{r:.3},0,1,1,{:.3},{:.3}A{r:.3},{r:.3},0,1,1,{:.3},{:.3}Z",
            x0, y0, x1, y1, x0, y0,
            r = radius
        );
    }

    let (x0, y0) = point(start_angle, radius);
    let (x1, y1) = point(end_angle, radius);
    let large_arc = if span > PI { 1 } else { 0 };
    format!(
        "M{:.3},{:.3}A{r:.3},{r:.3},0,{},1,{:.3},{:.3}L0,0Z",
        x0, y0, large_arc, x1, y1,
        r = radius
    )
}
