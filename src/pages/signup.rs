//! Account creation page.

use leptos::prelude::*;
use session::federated::ButtonText;
use session::{OperationKind, Route, submit_register};

use crate::components::google_button::GoogleButton;
use crate::state::auth::{AuthState, SessionHandle};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = move || auth.with(|state| state.is_busy(OperationKind::Register));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.is_busy(OperationKind::Register)) {
            return;
        }
        error.set(String::new());
        let (email_value, password_value, confirm_value) =
            (email.get_untracked(), password.get_untracked(), confirm.get_untracked());
        let store = session.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = submit_register(&store, &email_value, &password_value, &confirm_value).await {
                error.set(e.message);
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-modal" role="dialog" aria-labelledby="signup-title">
                <h2 id="signup-title" class="login-title">"Create account"</h2>
                <a class="login-create" href=Route::Login.hash()>"Already have an account? Sign in"</a>
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
                        placeholder="At least 6 characters"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="lbl-block" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class="login-input"
                        placeholder="Repeat your password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-error">{move || error.get()}</div>
                    </Show>
                    <button type="submit" class="btn-continue" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <div class="divider">
                    <span>"or"</span>
                </div>
                <div class="oauth-list">
                    <GoogleButton text=ButtonText::SignUpWith error=error/>
                </div>
            </div>
        </div>
    }
}
