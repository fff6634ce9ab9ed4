use crate::dom;
use crate::upload;
use wasm_bindgen::JsCast;
use web_sys as web;

// Class applied while a drag hovers the drop zone (Bootstrap border accent).
const HIGHLIGHT_CLASS: &str = "border-primary";

pub fn wire_drop_zone(document: &web::Document) {
    let zone = match document.query_selector(".upload-area") {
        Ok(Some(el)) => el,
        _ => {
            log::debug!("[dragdrop] no .upload-area zone; skipping");
            return;
        }
    };

    for event in ["dragenter", "dragover"] {
        let zone_for_closure = zone.clone();
        dom::add_drag_listener(&zone, event, move |ev| {
            suppress(&ev);
            _ = zone_for_closure.class_list().add_1(HIGHLIGHT_CLASS);
        });
    }

    {
        let zone_for_closure = zone.clone();
        dom::add_drag_listener(&zone, "dragleave", move |ev| {
            suppress(&ev);
            _ = zone_for_closure.class_list().remove_1(HIGHLIGHT_CLASS);
        });
    }

    let zone_for_closure = zone.clone();
    let doc = document.clone();
    dom::add_drag_listener(&zone, "drop", move |ev| {
        suppress(&ev);
        _ = zone_for_closure.class_list().remove_1(HIGHLIGHT_CLASS);
        forward_dropped_files(&doc, &ev);
    });
}

// Dropped files land in the regular picker so one submit path serves both.
fn forward_dropped_files(document: &web::Document, ev: &web::DragEvent) {
    let files = match ev.data_transfer().and_then(|dt| dt.files()) {
        Some(files) => files,
        None => return,
    };
    if let Some(input) = document.get_element_by_id("scan-file") {
        if let Some(input) = input.dyn_ref::<web::HtmlInputElement>() {
            input.set_files(Some(&files));
            upload::refresh_selection(document, input);
        }
    }
}

// Keeps the browser from navigating to a dropped file.
fn suppress(ev: &web::DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
