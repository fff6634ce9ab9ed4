// Page-effect tuning constants. Kept here so the code carries no magic
// numbers; the hosting page owns the markup these effects attach to.

// Decorative particle field size
pub const PARTICLE_COUNT: usize = 50;

// Particle animation start offsets are spread over this window (seconds)
pub const PARTICLE_DELAY_MAX_SEC: f64 = 20.0;

// Flash banners dismiss themselves this long after wiring (milliseconds)
pub const FLASH_DISMISS_DELAY_MS: i32 = 5000;
