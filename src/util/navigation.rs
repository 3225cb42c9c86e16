//! Hash-fragment navigation.
//!
//! The location hash is the only route source. [`install_hash_listener`]
//! feeds `hashchange` events into a route signal; [`navigate_to`] writes the
//! hash, which in turn fires the listener.

use leptos::prelude::*;
use session::{Navigator, Route};

/// Route named by the current location hash.
pub fn current_route() -> Route {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().hash().ok()).map_or_else(Route::default, |hash| Route::from_hash(&hash))
    }
    #[cfg(not(feature = "csr"))]
    {
        Route::default()
    }
}

/// Point the location hash at `route`. A no-op if it is already there.
pub fn navigate_to(route: Route) {
    #[cfg(feature = "csr")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let target = route.hash();
        if location.hash().ok().as_deref() == Some(target.as_str()) {
            return;
        }
        if let Err(e) = location.set_hash(&target) {
            log::warn!("failed to navigate to {target}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// Keep `route` in step with the location hash for the owner's lifetime.
pub fn install_hash_listener(route: RwSignal<Route>) {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            route.set(current_route());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// [`Navigator`] that writes the location hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate(&self, route: Route) {
        navigate_to(route);
    }
}
