//! Page-global flags set by the server-rendered shell.
//!
//! The shell emits a small inline script assigning `window.show_tips`; the
//! hydrated page reads it back once on load.

#[cfg(test)]
#[path = "page_flags_test.rs"]
mod page_flags_test;

/// Name of the `window` property carrying the tip dialog flag.
pub const SHOW_TIPS_GLOBAL: &str = "show_tips";

/// Inline script body that publishes the tip flag to the page.
pub fn show_tips_script(show_tips: bool) -> String {
    format!("window.{SHOW_TIPS_GLOBAL} = {show_tips};")
}

/// Read `window.show_tips`. Anything but a boolean `true` reads as `false`.
pub fn show_tips_flag() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(SHOW_TIPS_GLOBAL))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
