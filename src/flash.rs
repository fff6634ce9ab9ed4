use crate::constants::FLASH_DISMISS_DELAY_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Flash banners dismiss themselves a few seconds after wiring. Banners the
// user closes first are simply gone when the timer fires. Banners added to
// the page later are not covered.
pub fn schedule_auto_dismiss(document: &web::Document) {
    let banners = match document.query_selector_all(".alert-dismissible") {
        Ok(list) => list,
        Err(_) => return,
    };
    for i in 0..banners.length() {
        if let Some(banner) = banners.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            schedule_dismiss(banner);
        }
    }
}

// Dismissal goes through the banner's own close button so the page's
// dismiss transition still runs.
fn schedule_dismiss(banner: web::Element) {
    let dismiss = Closure::once(move || {
        if let Ok(Some(close)) = banner.query_selector(".btn-close") {
            if let Some(close) = close.dyn_ref::<web::HtmlElement>() {
                close.click();
            }
        }
    });
    if let Some(window) = web::window() {
        let callback: &js_sys::Function = dismiss.as_ref().unchecked_ref();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback,
                FLASH_DISMISS_DELAY_MS,
            )
            .ok();
    }
    dismiss.forget();
}
