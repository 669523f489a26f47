//! GitHubプロフィール取得

use crate::api::http::fetch_text;
use portfolio_common::{GithubProfile, Result};

pub async fn fetch_profile(url: &str) -> Result<GithubProfile> {
    let body = fetch_text(url).await?;
    GithubProfile::from_json(&body)
}
