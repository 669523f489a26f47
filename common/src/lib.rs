//! Portfolio Common Library
//!
//! プロジェクト一覧のフィルタ/選択ロジックと、サイト共通の設定・型。
//! ブラウザAPIに依存しないのでホスト上でテストできる。

pub mod types;
pub mod error;
pub mod store;
pub mod filter;
pub mod aggregate;
pub mod controller;
pub mod chart;
pub mod render;
pub mod theme;
pub mod config;
pub mod nav;
pub mod dismiss;
pub mod profile;

pub use types::ProjectRecord;
pub use error::{Error, Result};
pub use store::ProjectStore;
pub use filter::FilterState;
pub use aggregate::{CategoryAggregate, CategoryCount};
pub use controller::{Controller, FilterView};
pub use chart::{pie_layout, Wedge, OUTER_RADIUS};
pub use render::HeadingLevel;
pub use theme::{ColorScheme, ThemeStore};
pub use config::{PageLink, SiteConfig};
pub use nav::{nav_links, Location, NavLink, Page};
pub use dismiss::DismissPolicy;
pub use profile::GithubProfile;
