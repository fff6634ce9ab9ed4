use crate::constants::{PARTICLE_COUNT, PARTICLE_DELAY_MAX_SEC};
use crate::core::particles::sample;
use web_sys as web;

// Fill the decorative particle field behind the page content, when the
// hosting page provides one.
pub fn spawn_field(document: &web::Document) {
    let container = match document.get_element_by_id("particles") {
        Some(el) => el,
        None => {
            log::debug!("[particles] no #particles container; skipping");
            return;
        }
    };

    let mut rng = rand::thread_rng();
    for placement in sample(&mut rng, PARTICLE_COUNT, PARTICLE_DELAY_MAX_SEC) {
        let particle = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => continue,
        };
        particle.set_class_name("particle");
        _ = particle.set_attribute("style", &placement.style_css());
        _ = container.append_child(&particle);
    }
}
