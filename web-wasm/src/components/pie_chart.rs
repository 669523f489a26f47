//! 年別円グラフコンポーネント
//!
//! ウェッジをクリックすると、その年の選択をトグルする。
//! 選択状態は凡例と同じ `FilterView` から読むので、両者がずれることはない。

use leptos::prelude::*;
use portfolio_common::{pie_layout, FilterView, OUTER_RADIUS};

#[component]
pub fn PieChart<F>(filter: Memo<FilterView>, on_toggle: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let wedges = move || {
        filter.with(|snapshot| {
            pie_layout(&snapshot.aggregate)
                .into_iter()
                .map(|wedge| {
                    let selected = snapshot.is_selected(&wedge.label);
                    let on_toggle = on_toggle.clone();
                    let label = wedge.label.clone();
                    view! {
                        <path
                            d=wedge.path(OUTER_RADIUS)
                            fill=wedge.color()
                            class:selected=selected
                            cursor="pointer"
                            on:click=move |ev| {
                                // 再描画でこの要素が外れた後に解除リスナーへ届かないよう止める
                                ev.stop_propagation();
                                on_toggle(label.clone());
                            }
                        />
                    }
                })
                .collect_view()
        })
    };

    view! {
        <svg id="projects-plot" viewBox="-50 -50 100 100">
            {wedges}
        </svg>
    }
}
