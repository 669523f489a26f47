//! 凡例コンポーネント

use leptos::prelude::*;
use portfolio_common::chart::color_for;
use portfolio_common::FilterView;

#[component]
pub fn Legend<F>(filter: Memo<FilterView>, on_toggle: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let items = move || {
        filter.with(|snapshot| {
            snapshot.aggregate
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let selected = snapshot.is_selected(&entry.label);
                    let on_toggle = on_toggle.clone();
                    let label = entry.label.clone();
                    view! {
                        <li
                            class="legend-item"
                            class:selected=selected
                            style=format!("--color:{}", color_for(i))
                            on:click=move |ev| {
                                // 再描画でこの要素が外れた後に解除リスナーへ届かないよう止める
                                ev.stop_propagation();
                                on_toggle(label.clone());
                            }
                        >
                            <span class="swatch"></span>
                            {format!(" {} ", entry.label)}
                            <em>{format!("({})", entry.count)}</em>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! { <ul class="legend">{items}</ul> }
}
