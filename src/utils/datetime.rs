use js_sys::{Array, Date, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

/// Locale-aware date+time display string: numeric hour/minute, numeric day,
/// short month, numeric year (e.g. "15 Mar 2024, 14:30" under en-GB).
/// Shared by booking date, departure time and arrival time so all three
/// render identically.
pub fn format_date_time(timestamp: &str) -> String {
    let date = Date::new(&JsValue::from_str(timestamp));

    let options = Object::new();
    for (key, value) in [
        ("hour", "numeric"),
        ("minute", "numeric"),
        ("day", "numeric"),
        ("month", "short"),
        ("year", "numeric"),
    ] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }

    // Empty locale list = runtime default locale, same as passing undefined
    // to toLocaleDateString.
    let formatter = Intl::DateTimeFormat::new(&Array::new(), &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &date)
        .ok()
        .and_then(|formatted| formatted.as_string())
        .unwrap_or_else(|| String::from(date.to_string()))
}
