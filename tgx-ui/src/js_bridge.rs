//! Browser interop: fetch, alerts and scrolling.
//!
//! Scrolling goes through `js_sys::eval()` wrapped in try/catch so a missing
//! element or a throwing browser API never takes the app down.

use tgx_core::error::{PlannerError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TripGenix JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Smoothly scroll the element with `id` into view.
///
/// Deferred to the next tick so a freshly revealed section has been laid
/// out. Does nothing if the element does not exist.
pub fn scroll_into_view(id: &str) {
    let id = serde_json::to_string(id).unwrap_or_default();
    call_js(&format!(
        r#"
        setTimeout(function() {{
            var el = document.getElementById({id});
            if (el) el.scrollIntoView({{ behavior: 'smooth' }});
        }}, 0);
        "#,
    ));
}

/// Blocking user notification.
pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message).is_ok());
    if shown != Some(true) {
        log::warn!("alert unavailable: {}", message);
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn browser_error(value: JsValue) -> PlannerError {
    PlannerError::Browser(describe(&value))
}

/// POST a JSON body and return the response text.
///
/// A rejected fetch is a transport error and a non-2xx status an HTTP
/// error; the body is only read for successful responses.
pub async fn post_json(url: &str, body: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| PlannerError::Browser("no window".to_string()))?;

    let headers = Headers::new().map_err(browser_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(browser_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(browser_error)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| PlannerError::Transport(describe(&e)))?;
    let response: Response = response.dyn_into().map_err(browser_error)?;

    if !response.ok() {
        return Err(PlannerError::HttpStatus(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(browser_error)?)
        .await
        .map_err(|e| PlannerError::Transport(describe(&e)))?;
    text.as_string()
        .ok_or_else(|| PlannerError::Browser("response body is not text".to_string()))
}
