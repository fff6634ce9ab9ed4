use crate::core::selection;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror the picker's current selection into the file-name label and the
/// submit button's enabled state. Either element may be absent.
pub fn refresh_selection(document: &web::Document, input: &web::HtmlInputElement) {
    let name = input.files().and_then(|files| files.get(0)).map(|f| f.name());
    let view = selection::view_for(name.as_deref());

    if let Some(label) = document.get_element_by_id("selected-file") {
        label.set_text_content(Some(&view.label));
    }
    if let Some(button) = document.get_element_by_id("upload-btn") {
        if let Some(button) = button.dyn_ref::<web::HtmlButtonElement>() {
            button.set_disabled(!view.submit_enabled);
        }
    }
}

// Keep the label and submit button in step with manual picker use.
pub fn wire_file_input(document: &web::Document) {
    let input = match document.get_element_by_id("scan-file") {
        Some(el) => el,
        None => {
            log::debug!("[upload] no #scan-file input; skipping");
            return;
        }
    };
    let input: web::HtmlInputElement = match input.dyn_into() {
        Ok(input) => input,
        Err(_) => return,
    };

    let doc = document.clone();
    let input_for_closure = input.clone();
    dom::add_event_listener(&input, "change", move |_ev| {
        refresh_selection(&doc, &input_for_closure);
    });

    // Reflect a selection already present on load (e.g. after back-navigation)
    refresh_selection(document, &input);
}
