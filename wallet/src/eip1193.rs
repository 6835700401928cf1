//! `window.ethereum` bindings for wasm targets.
//!
//! The provider object is untyped, so all access goes through `js_sys`
//! reflection rather than generated bindings.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::WalletError;

fn rejected(value: JsValue) -> WalletError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    WalletError::Rejected(message)
}

/// Returns the injected provider object, if any.
fn provider() -> Option<JsValue> {
    let window = web_sys::window()?;
    let eth = Reflect::get(window.as_ref(), &JsValue::from_str("ethereum")).ok()?;
    (!eth.is_undefined() && !eth.is_null()).then_some(eth)
}

pub fn provider_detected() -> bool {
    provider().is_some()
}

/// Calls `ethereum.request({ method, params? })` and awaits the promise.
async fn request(method: &str, params: Option<JsValue>) -> Result<JsValue, WalletError> {
    let eth = provider().ok_or(WalletError::ProviderAbsent)?;
    let request_fn: Function = Reflect::get(&eth, &JsValue::from_str("request"))
        .map_err(rejected)?
        .dyn_into()
        .map_err(|_| WalletError::Rejected("provider has no request method".into()))?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(rejected)?;
    if let Some(params) = params {
        Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(rejected)?;
    }

    let promise: Promise = request_fn
        .call1(&eth, &args)
        .map_err(rejected)?
        .dyn_into()
        .map_err(|_| WalletError::Rejected("provider request did not return a promise".into()))?;

    JsFuture::from(promise).await.map_err(rejected)
}

/// `eth_requestAccounts`: the list of account addresses the user has
/// authorized, first entry being the active one.
pub async fn request_accounts() -> Result<Vec<String>, WalletError> {
    let result = request("eth_requestAccounts", None).await?;
    let accounts = Array::from(&result)
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    Ok(accounts)
}

/// `wallet_requestPermissions` with an `eth_accounts` scope: prompts the user
/// to (re-)select which accounts the page may use.
pub async fn request_account_permission() -> Result<(), WalletError> {
    let scope = Object::new();
    Reflect::set(
        &scope,
        &JsValue::from_str("eth_accounts"),
        &JsValue::from(Object::new()),
    )
    .map_err(rejected)?;
    let params = Array::of1(&scope);
    request("wallet_requestPermissions", Some(params.into()))
        .await
        .map(|_| ())
}
