//! GitHubプロフィール統計

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// `GET /users/{user}` のうち表示に使うフィールド
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubProfile {
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub public_gists: u64,
}

impl GithubProfile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `<dl>` に並べる (見出し, 値)
    pub fn stats(&self) -> [(&'static str, u64); 4] {
        [
            ("Followers:", self.followers),
            ("Following:", self.following),
            ("Public Repos:", self.public_repos),
            ("Public Gists:", self.public_gists),
        ]
    }
}
