//! プロジェクト一覧（共通の描画プリミティブ）
//!
//! コンテナの中身をレコードごとの `<article>` で丸ごと置き換える。

use leptos::prelude::*;
use portfolio_common::render::{description_text, image_src};
use portfolio_common::{HeadingLevel, ProjectRecord};

#[component]
pub fn ProjectList(
    #[prop(into)] records: Signal<Vec<ProjectRecord>>,
    #[prop(optional)] heading: HeadingLevel,
) -> impl IntoView {
    view! {
        <div class="projects">
            {move || {
                records
                    .get()
                    .into_iter()
                    .map(|record| view! { <ProjectCard record=record heading=heading /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ProjectCard(record: ProjectRecord, heading: HeadingLevel) -> impl IntoView {
    let title = record.title.clone();
    let heading_view = match heading {
        HeadingLevel::H2 => view! { <h2>{title.clone()}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3>{title.clone()}</h3> }.into_any(),
    };

    view! {
        <article>
            {heading_view}
            <img src=image_src(&record).to_string() alt=title />
            <p>{description_text(&record).to_string()}</p>
        </article>
    }
}
