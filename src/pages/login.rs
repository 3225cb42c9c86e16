//! Sign-in page: email + password form and Google sign-in.

use leptos::prelude::*;
use session::federated::ButtonText;
use session::{OperationKind, Route, submit_login};

use crate::components::google_button::GoogleButton;
use crate::state::auth::{AuthState, SessionHandle};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = move || auth.with(|state| state.is_busy(OperationKind::Login));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.is_busy(OperationKind::Login)) {
            return;
        }
        error.set(String::new());
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let store = session.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = submit_login(&store, &email_value, &password_value).await {
                error.set(e.message);
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-modal" role="dialog" aria-labelledby="login-title">
                <h2 id="login-title" class="login-title">"Sign in"</h2>
                <a class="login-create" href=Route::Signup.hash()>"Don't have an account? Sign up"</a>
                <form class="login-form" on:submit=on_submit>
                    <label class="lbl-block" for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class="login-input"
                        placeholder="name@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="lbl-block" for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="login-input"
                        placeholder="Enter your password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-error">{move || error.get()}</div>
                    </Show>
                    <button type="submit" class="btn-continue" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Continue" }}
                    </button>
                </form>
                <div class="divider">
                    <span>"or"</span>
                </div>
                <div class="oauth-list">
                    <GoogleButton text=ButtonText::SignInWith error=error/>
                </div>
            </div>
        </div>
    }
}
