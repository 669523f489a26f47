//! ナビゲーションコンポーネント

use leptos::prelude::*;
use portfolio_common::NavLink;

#[component]
pub fn Nav(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <nav>
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            class:current=link.current
                            target=link.external.then_some("_blank")
                            rel=link.external.then_some("noopener noreferrer")
                        >
                            {link.title}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
