// Timing, layout and threshold constants shared by every landing page profile.

// Navigation
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed header clearance for in-page jumps
pub const NAVBAR_SCROLLED_AT_PX: f64 = 50.0;

// Contact
pub const SHOP_CONTACT_EMAIL: &str = "contact@nookstride.com";

// Reveal zones
pub const REVEAL_RATIO_THRESHOLD: f64 = 0.1; // 10% of the element visible
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0; // fire slightly before full visibility
pub const REVEAL_START_LINE: f64 = 0.8; // element top crosses 80% of the viewport
pub const SECTION_HEADER_START_LINE: f64 = 0.85;
pub const FOOTER_START_LINE: f64 = 0.9;

// Deferred work (milliseconds)
pub const SETTLE_DELAY_MS: u32 = 100; // initial in-viewport check after load
pub const SUBMIT_DELAY_MS: u32 = 500; // simulated network latency

// Standard reveal tween
pub const REVEAL_DURATION_SEC: f32 = 0.8;
pub const REVEAL_SHIFT_PX: f32 = 50.0;
pub const HEADER_SHIFT_PX: f32 = 30.0;

// Modal entrance and exit (seconds)
pub const MODAL_FADE_IN_SEC: f32 = 0.3;
pub const MODAL_POP_IN_SEC: f32 = 0.4;
pub const MODAL_ICON_SEC: f32 = 0.6;
pub const MODAL_ICON_DELAY_SEC: f32 = 0.2;
pub const MODAL_SHRINK_SEC: f32 = 0.3;
pub const MODAL_FADE_OUT_SEC: f32 = 0.2;
pub const MODAL_OVERLAP_SEC: f32 = 0.1;
pub const MODAL_SHRUNK_SCALE: f32 = 0.7;
pub const BACK_OVERSHOOT: f32 = 1.7;

// Parallax
pub const PARALLAX_FACTOR: f64 = 0.5; // background moves at half the scroll speed
pub const PARALLAX_Y_PERCENT: f32 = -50.0; // scrubbed background travel

// Hover
pub const HOVER_DURATION_SEC: f32 = 0.3;
pub const HOVER_BUTTON_SCALE: f32 = 1.05;
pub const HOVER_CARD_LIFT_PX: f32 = -8.0;
pub const HOVER_CARD_LIFT_TALL_PX: f32 = -10.0;
