//! GitHubプロフィール統計コンポーネント
//!
//! プロジェクト一覧の取得とは独立して読み込む。失敗時は何も表示しない。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::GithubProfile;
use crate::api::github::fetch_profile;

#[component]
pub fn ProfileStats(url: String) -> impl IntoView {
    let (profile, set_profile) = signal(None::<GithubProfile>);

    spawn_local(async move {
        match fetch_profile(&url).await {
            Ok(p) => set_profile.set(Some(p)),
            Err(e) => console::error!(format!("Error fetching JSON: {}", e)),
        }
    });

    view! {
        <div id="profile-stats">
            {move || {
                profile.get().map(|p| {
                    view! {
                        <dl>
                            {p.stats()
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <dt>{label}</dt>
                                        <dd>{value.to_string()}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    }
                })
            }}
        </div>
    }
}
