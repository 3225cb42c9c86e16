//! Root application component with hash routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use session::{ClientConfig, Route, RouteGuard, SessionStore};

use crate::net::api::HttpAuthBackend;
use crate::pages::analysis::{PlaceholderPage, SemanticSimilarityPage};
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::auth::{decide, install_route_guard};
use crate::util::navigation::{HashNavigator, current_route, install_hash_listener};
use crate::util::storage::BrowserCredentialStore;

/// Backend location and Google client id, fixed at build time.
pub fn build_config() -> ClientConfig {
    ClientConfig::from_values(option_env!("PLAGIARISM_API_URL"), option_env!("GOOGLE_CLIENT_ID"))
}

/// Auth gating rules for every screen.
pub fn route_guard() -> RouteGuard {
    RouteGuard::new()
}

fn render_route(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::Login => view! { <LoginPage/> }.into_any(),
        Route::Signup => view! { <SignupPage/> }.into_any(),
        Route::SemanticSimilarity => view! { <SemanticSimilarityPage/> }.into_any(),
        Route::Paraphrase | Route::WritingStyle | Route::Pretrained => {
            view! { <PlaceholderPage route=route/> }.into_any()
        }
    }
}

/// Root application component.
///
/// Builds the session store, mirrors it into a signal, provides both through
/// context, and renders whatever screen the route guard resolves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = build_config();
    let store = Rc::new(SessionStore::new(
        HttpAuthBackend::new(config.clone()),
        BrowserCredentialStore,
        Box::new(HashNavigator),
    ));

    let auth = RwSignal::new(AuthState::from(&store.snapshot()));
    store.subscribe(move |snapshot| auth.set(AuthState::from(snapshot)));

    let route = RwSignal::new(current_route());
    let handle: SessionHandle = StoredValue::new_local(Rc::clone(&store));

    provide_context(auth);
    provide_context(route);
    provide_context(handle);
    provide_context(config);

    install_hash_listener(route);
    let guard = route_guard();
    install_route_guard(guard.clone(), route, auth);

    leptos::task::spawn_local(async move { store.hydrate().await });

    // Memoized so pending-flag updates do not remount the current page.
    let screen = Memo::new(move |_| auth.with(|state| decide(&guard, route.get(), state)).screen());

    view! {
        <Title text=move || format!("{} | Plagiarism Checker", route.get().title())/>
        {move || match screen.get() {
            Some(route) => render_route(route),
            None => view! { <div class="app-loading">"Loading..."</div> }.into_any(),
        }}
    }
}
