//! Google sign-in button.
//!
//! Renders the Google Identity widget when a client id is configured and a
//! disabled placeholder otherwise. Widget credentials go straight to the
//! session store; failures land in the page's `error` signal. The widget is
//! initialized once per page load, so a mount only installs its handler and
//! renders the button.

use leptos::prelude::*;
use session::federated::{ButtonText, FederatedConfig};
use session::{ClientConfig, OperationKind};

use crate::state::auth::AuthState;

#[component]
pub fn GoogleButton(text: ButtonText, error: RwSignal<String>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let Some(client_id) = config.federated.client_id().map(str::to_owned) else {
        return view! {
            <button type="button" class="oauth-btn" disabled>
                <span class="oauth-icon">"G"</span>
                " "
                {FederatedConfig::unavailable_label()}
            </button>
        }
        .into_any();
    };

    let host = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use crate::util::google_identity::{CredentialHandler, install_handler, release_handler, render_button};

        let store = crate::state::auth::use_session();
        let handler: CredentialHandler = std::rc::Rc::new(move |response: session::CredentialResponse| {
            error.set(String::new());
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = session::handle_credential_response(&store, &response).await {
                    error.set(e.message);
                }
            });
        });
        let token = install_handler(handler);
        on_cleanup(move || release_handler(token));

        Effect::new(move || {
            let Some(el) = host.get() else {
                return;
            };
            if let Err(e) = render_button(&el, &client_id, &session::ButtonOptions::new(text)) {
                log::warn!("google sign-in unavailable: {e}");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client_id, text, error);
    }

    view! {
        <div class="google-signin" node_ref=host></div>
        <Show when=move || auth.with(|state| state.is_busy(OperationKind::Federated))>
            <p class="login-message">"Signing in with Google..."</p>
        </Show>
    }
    .into_any()
}
