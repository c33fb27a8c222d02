//! Time source for the date stamps shown in the UI.

use wasm_bindgen::JsValue;

/// Injected clock so components never reach for the global date directly.
pub trait Clock {
    /// Locale-formatted date for "today", e.g. `1/15/2026`.
    fn today(&self) -> String;
}

/// The browser's clock, formatted the way `Date.toLocaleDateString` does it.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_date_string("en-US", &JsValue::UNDEFINED)
            .into()
    }
}

#[cfg(test)]
pub struct FixedClock(pub String);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
impl Default for FixedClock {
    fn default() -> Self {
        Self("1/15/2026".to_string())
    }
}
