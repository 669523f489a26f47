//! トップページ
//!
//! 最新プロジェクトとGitHub統計を並行して読み込む。どちらかの取得に失敗しても
//! もう一方の表示には影響しない。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{HeadingLevel, ProjectRecord};
use crate::api::projects::load_projects;
use crate::components::{profile_stats::ProfileStats, project_list::ProjectList};

#[component]
pub fn HomePage(data_url: String, profile_url: String, latest_count: usize) -> impl IntoView {
    let (latest, set_latest) = signal(Vec::<ProjectRecord>::new());

    spawn_local(async move {
        match load_projects(&data_url).await {
            Ok(store) => set_latest.set(store.latest(latest_count).to_vec()),
            Err(e) => console::error!(format!("Error fetching JSON: {}", e)),
        }
    });

    view! {
        <section class="latest-projects">
            <h2>"Latest Projects"</h2>
            <ProjectList records=latest heading=HeadingLevel::H3 />
        </section>
        <ProfileStats url=profile_url />
    }
}
