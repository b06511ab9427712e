//! Browser host
//!
//! Detects a Telegram-WebApp-style bridge on the window object (ready/expand
//! signals, theme colors, promise-based cloud storage) and falls back to
//! LocalStorage when the game runs in a plain browser tab.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::{Fetch, HostBridge, Theme};

pub struct WebHost {
    webapp: Option<js_sys::Object>,
}

impl WebHost {
    /// Probe `window.Telegram.WebApp`.
    pub fn new() -> Self {
        let webapp = web_sys::window()
            .map(JsValue::from)
            .and_then(|w| Reflect::get(&w, &"Telegram".into()).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|tg| Reflect::get(&tg, &"WebApp".into()).ok())
            .and_then(|v| v.dyn_into::<js_sys::Object>().ok());
        if webapp.is_some() {
            log::info!("host bridge detected");
        } else {
            log::info!("no host bridge, using LocalStorage");
        }
        Self { webapp }
    }

    /// Call a no-argument method on the bridge object.
    fn call0(&self, name: &str) {
        let Some(app) = &self.webapp else { return };
        let method = Reflect::get(app, &name.into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(method) = method {
            if method.call0(app).is_err() {
                log::warn!("host call {name} failed");
            }
        }
    }

    fn theme_param(&self, key: &str) -> Option<String> {
        let app = self.webapp.as_ref()?;
        let params = Reflect::get(app, &"themeParams".into()).ok()?;
        Reflect::get(&params, &key.into()).ok()?.as_string()
    }

    /// `CloudStorage.<name>(…args)`, returning the promise it hands back.
    fn cloud_invoke(&self, name: &str, args: &[JsValue]) -> Option<Promise> {
        let app = self.webapp.as_ref()?;
        let storage = Reflect::get(app, &"CloudStorage".into()).ok()?;
        if storage.is_undefined() || storage.is_null() {
            return None;
        }
        let method = Reflect::get(&storage, &name.into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let result = match args {
            [a] => method.call1(&storage, a),
            [a, b] => method.call2(&storage, a, b),
            _ => method.call0(&storage),
        }
        .ok()?;
        result.dyn_into::<Promise>().ok()
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for WebHost {
    fn ready(&self) {
        self.call0("ready");
    }

    fn expand_viewport(&self) {
        self.call0("expand");
    }

    fn theme(&self) -> Theme {
        let fallback = Theme::default();
        Theme {
            background: self
                .theme_param("bg_color")
                .unwrap_or(fallback.background),
            wall: self.theme_param("button_color").unwrap_or(fallback.wall),
            player: self.theme_param("text_color").unwrap_or(fallback.player),
        }
    }

    fn fetch_value(&self, key: &str) -> Fetch {
        if let Some(promise) = self.cloud_invoke("getItem", &[key.into()]) {
            let fetch = Fetch::pending();
            let slot = fetch.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(value) => slot.fulfill(value.as_string()),
                    Err(err) => {
                        log::warn!("cloud read failed: {err:?}");
                        slot.fulfill(None);
                    }
                }
            });
            return fetch;
        }
        Fetch::ready(Self::local_storage().and_then(|s| s.get_item(key).ok()).flatten())
    }

    fn store_value(&self, key: &str, value: &str) {
        if let Some(promise) = self.cloud_invoke("setItem", &[key.into(), value.into()]) {
            spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("cloud write failed: {err:?}");
                }
            });
            return;
        }
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("LocalStorage write failed");
                }
            }
            None => log::warn!("no storage available, value not saved"),
        }
    }
}
