//! Links to the analysis screens.

use leptos::prelude::*;
use session::Route;

#[component]
pub fn Sidebar(active: Route) -> impl IntoView {
    view! {
        <aside class="side-wrap">
            <nav class="side-nav">
                {Route::ANALYSIS
                    .into_iter()
                    .map(|route| {
                        let class = if route == active { "side-btn side-btn--active" } else { "side-btn" };
                        view! { <a href=route.hash() class=class>{route.title()}</a> }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
