//! Landing page with shortcuts to the analysis screens.

use leptos::prelude::*;
use session::Route;

use crate::components::nav_bar::NavBar;

const CARD_TONES: [&str; 4] = ["cyan", "green", "blue", "pink"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <NavBar/>
            <main class="hero">
                <h1 class="hero-title">"සිංහල භාෂාව"</h1>
                <div class="cards">
                    {Route::ANALYSIS
                        .into_iter()
                        .zip(CARD_TONES)
                        .map(|(route, tone)| {
                            view! {
                                <a class=format!("card {tone}") href=route.hash()>{route.title()}</a>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}
