//! Top navigation bar with the account control.

use leptos::prelude::*;
use session::{NavBarState, Route};

use crate::state::auth::{AuthState, SessionHandle};

/// Brand, home link, and either the signed-in email with a logout button or a
/// login link. Shows no account control while the session is being checked.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();

    let account = move || match auth.with(AuthState::nav_bar) {
        NavBarState::Pending => ().into_any(),
        NavBarState::SignedIn { email } => view! {
            <span class="nav-user">{email}</span>
            <button class="nav-login" on:click=move |_| session.get_value().logout()>
                "Logout"
            </button>
        }
        .into_any(),
        NavBarState::SignedOut => view! {
            <a class="nav-login" href=Route::Login.hash()>"Login"</a>
        }
        .into_any(),
    };

    view! {
        <header class="navbar">
            <div class="nav-left">
                <a class="nav-brand" href=Route::Home.hash()>"Sinhala Plagiarism Tool"</a>
            </div>
            <div class="nav-right">
                <a class="nav-profile" href=Route::Home.hash()>"Home"</a>
                {account}
            </div>
        </header>
    }
}
