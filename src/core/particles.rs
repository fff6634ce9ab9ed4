use rand::Rng;

// Viewport-relative placement for one decorative particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left_vw: f64,
    pub top_vh: f64,
    pub delay_sec: f64,
}

impl Placement {
    /// Inline style text applied to the particle node. The hosting page's
    /// stylesheet supplies the `.particle` animation itself.
    pub fn style_css(&self) -> String {
        format!(
            "left:{}vw;top:{}vh;animation-delay:{}s",
            self.left_vw, self.top_vh, self.delay_sec
        )
    }
}

/// Draw `count` placements, uniform over the viewport, with animation start
/// offsets spread uniformly over `[0, delay_max_sec)`.
pub fn sample<R: Rng>(rng: &mut R, count: usize, delay_max_sec: f64) -> Vec<Placement> {
    (0..count)
        .map(|_| Placement {
            left_vw: rng.gen_range(0.0..100.0),
            top_vh: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen_range(0.0..delay_max_sec),
        })
        .collect()
}
