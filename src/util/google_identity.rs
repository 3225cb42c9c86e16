//! Bridge to the Google Identity Services script (`google.accounts.id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is initialized once per page load with a single callback. That
//! callback forwards each credential to whichever button is mounted now.
//! Buttons install a handler on mount and release it on cleanup, so moving
//! between the sign-in and sign-up pages only re-renders the button.
//!
//! The script is loaded by `index.html`; this module only looks it up on
//! `window`. A missing script is reported to the caller, never a panic.

#[cfg(test)]
#[path = "google_identity_test.rs"]
mod google_identity_test;

use std::cell::RefCell;
use std::rc::Rc;

use session::federated::CredentialResponse;
#[cfg(feature = "csr")]
use session::federated::ButtonOptions;

pub type CredentialHandler = Rc<dyn Fn(CredentialResponse)>;

/// Identifies one installed handler so a stale cleanup cannot evict a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandlerToken(u64);

thread_local! {
    static ACTIVE_HANDLER: RefCell<Option<(HandlerToken, CredentialHandler)>> = const { RefCell::new(None) };
    static NEXT_HANDLER: RefCell<u64> = const { RefCell::new(0) };
    #[cfg(feature = "csr")]
    static WIDGET_INITIALIZED: RefCell<bool> = const { RefCell::new(false) };
}

/// Route widget credentials to `handler`, replacing any previous one.
pub fn install_handler(handler: CredentialHandler) -> HandlerToken {
    let token = NEXT_HANDLER.with(|next| {
        let mut next = next.borrow_mut();
        *next += 1;
        HandlerToken(*next)
    });
    ACTIVE_HANDLER.with(|slot| *slot.borrow_mut() = Some((token, handler)));
    token
}

/// Drop the handler installed under `token`, if it is still the active one.
pub fn release_handler(token: HandlerToken) {
    ACTIVE_HANDLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().is_some_and(|(active, _)| *active == token) {
            *slot = None;
        }
    });
}

/// Hand `response` to the active handler. False when no button is mounted.
pub fn dispatch(response: CredentialResponse) -> bool {
    let handler = ACTIVE_HANDLER.with(|slot| slot.borrow().as_ref().map(|(_, handler)| Rc::clone(handler)));
    match handler {
        Some(handler) => {
            handler(response);
            true
        }
        None => false,
    }
}

/// Render the widget's button into `host`, initializing the widget with
/// `client_id` the first time this succeeds.
///
/// # Errors
///
/// Returns a display string when the script is not loaded or a call into it
/// fails.
#[cfg(feature = "csr")]
pub fn render_button(host: &web_sys::Element, client_id: &str, options: &ButtonOptions) -> Result<(), String> {
    let id = accounts_id()?;
    if !WIDGET_INITIALIZED.with(|ready| *ready.borrow()) {
        initialize(&id, client_id)?;
        WIDGET_INITIALIZED.with(|ready| *ready.borrow_mut() = true);
    }

    let options = serde_json::to_string(options).map_err(|e| e.to_string())?;
    let options = js_sys::JSON::parse(&options).map_err(js_err)?;
    method(&id, "renderButton")?.call2(&id, host, &options).map_err(js_err)?;
    Ok(())
}

#[cfg(feature = "csr")]
fn js_err(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "csr")]
fn method(target: &wasm_bindgen::JsValue, name: &str) -> Result<js_sys::Function, String> {
    use wasm_bindgen::{JsCast, JsValue};

    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_err)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("google.accounts.id.{name} is not a function"))
}

#[cfg(feature = "csr")]
fn accounts_id() -> Result<wasm_bindgen::JsValue, String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let google = Reflect::get(&window, &JsValue::from_str("google")).map_err(js_err)?;
    if google.is_undefined() {
        return Err("Google Identity script not loaded".to_owned());
    }
    let accounts = Reflect::get(&google, &JsValue::from_str("accounts")).map_err(js_err)?;
    Reflect::get(&accounts, &JsValue::from_str("id")).map_err(js_err)
}

#[cfg(feature = "csr")]
fn initialize(id: &wasm_bindgen::JsValue, client_id: &str) -> Result<(), String> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::Closure;

    let callback = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        let raw = js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()).unwrap_or_default();
        match serde_json::from_str::<CredentialResponse>(&raw) {
            Ok(response) => {
                if !dispatch(response) {
                    log::warn!("google credential arrived with no sign-in button mounted");
                }
            }
            Err(e) => log::warn!("unreadable credential response: {e}"),
        }
    });

    let init = Object::new();
    Reflect::set(&init, &JsValue::from_str("client_id"), &JsValue::from_str(client_id)).map_err(js_err)?;
    Reflect::set(&init, &JsValue::from_str("callback"), callback.as_ref()).map_err(js_err)?;
    method(id, "initialize")?.call1(id, &init).map_err(js_err)?;
    // Single callback for the page's lifetime.
    callback.forget();
    Ok(())
}
