#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod dragdrop;
mod flash;
mod particles;
mod upload;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neuroscan-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Each effect checks for its own markup and no-ops when the hosting page
// does not carry it; only a missing document is a hard failure.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    particles::spawn_field(&document);
    upload::wire_file_input(&document);
    dragdrop::wire_drop_zone(&document);
    flash::schedule_auto_dismiss(&document);

    log::info!("page effects wired");
    Ok(())
}
