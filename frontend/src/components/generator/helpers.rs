//! Browser glue for the generation form.
//!
//! - **Network**: posting the `FormData` snapshot with a timeout and an abort
//!   signal, and reducing the response to an [`HttpReply`].
//! - **Clipboard**: `navigator.clipboard.writeText` through `js_sys`.
//! - **User Feedback**: blocking alerts for failed generations and temporary
//!   toasts for non-blocking notices.

use common::model::media::MediaChoice;
use common::requests::fields;
use common::submission::{HttpReply, TransportError};
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, FormData, HtmlElement};

/// Posts `form` to `endpoint` and waits at most `timeout_ms`.
///
/// The body of a non-2xx response is not read. When the timeout wins the race
/// the request is aborted through `controller`; an abort that was not caused by
/// the timeout is reported as a cancellation.
pub async fn send_generation(
    endpoint: &str,
    form: FormData,
    controller: Option<AbortController>,
    timeout_ms: u32,
) -> Result<HttpReply, TransportError> {
    let signal = controller.as_ref().map(|c| c.signal());
    let request = Request::post(endpoint)
        .abort_signal(signal.as_ref())
        .body(form)
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let exchange = Box::pin(async move {
        let response = request.send().await?;
        if !response.ok() {
            return Ok(HttpReply::new(response.status(), String::new()));
        }
        let body = response.text().await?;
        Ok::<_, gloo_net::Error>(HttpReply::new(response.status(), body))
    });

    match select(exchange, Box::pin(TimeoutFuture::new(timeout_ms))).await {
        Either::Left((Ok(reply), _)) => Ok(reply),
        Either::Left((Err(err), _)) => {
            if signal.as_ref().is_some_and(|s| s.aborted()) {
                Err(TransportError::Cancelled)
            } else {
                Err(TransportError::Network(err.to_string()))
            }
        }
        Either::Right(_) => {
            if let Some(controller) = &controller {
                controller.abort();
            }
            Err(TransportError::Timeout(timeout_ms))
        }
    }
}

/// Reads `user_media_choice` from the snapshot.
pub fn media_choice_of(form: &FormData) -> Option<MediaChoice> {
    form.get(fields::USER_MEDIA_CHOICE)
        .as_string()
        .and_then(|value| MediaChoice::from_form_value(&value))
}

/// Writes `text` to the system clipboard. The error carries the browser's
/// reason when access is denied or the API is missing.
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(describe_js_error)?;
    if clipboard.is_undefined() {
        return Err("clipboard API unavailable".to_string());
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe_js_error)?
        .dyn_into()
        .map_err(describe_js_error)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe_js_error)?
        .dyn_into()
        .map_err(describe_js_error)?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(describe_js_error)
}

fn describe_js_error(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Blocking notification for failed generations.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the DOM; the toast removes itself
/// after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
