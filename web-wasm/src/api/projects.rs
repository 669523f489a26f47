//! プロジェクト一覧の読み込み

use crate::api::http::fetch_text;
use portfolio_common::{ProjectStore, Result};

/// `lib/projects.json` を取得してストアを作る
///
/// 本文がレコード配列でなければ `Error::Json`。追加フィールドの順序を保つため
/// テキストで受け取って serde_json で解析する。
pub async fn load_projects(url: &str) -> Result<ProjectStore> {
    let body = fetch_text(url).await?;
    ProjectStore::from_json(&body)
}
