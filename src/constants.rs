// DOM hooks the front-end looks up. Kept free of web-sys so host tests can
// include this file directly.

// Page configuration on <body>
pub const PROFILE_ATTR: &str = "data-site-profile";
pub const CONTACT_EMAIL_ATTR: &str = "data-contact-email";

// In-page links handled by the navigation dispatcher
pub const NAV_LINK_SELECTOR: &str = ".nav-link, .footer-link, a[href=\"#contact\"]";
// Buttons that jump to a section named by their attribute
pub const SCROLL_BUTTON_SELECTOR: &str = "[data-scroll-to]";
pub const SCROLL_TO_ATTR: &str = "data-scroll-to";
// Hero buttons wired by id: (button id, section id)
pub const SECTION_BUTTONS: [(&str, &str); 2] = [("explore-guides", "guides"), ("view-pricing", "pricing")];

// "Buy now" buttons carry the product name
pub const BUY_NOW_SELECTOR: &str = "[data-product]";
pub const PRODUCT_ATTR: &str = "data-product";

// Package buttons carry the package name
pub const PACKAGE_SELECTOR: &str = ".package-btn[data-package]";
pub const PACKAGE_ATTR: &str = "data-package";

// Contact form
pub const CONTACT_FORM_IDS: [&str; 2] = ["contactForm", "contact-form"];
pub const NAME_FIELD_NAMES: [&str; 1] = ["name"];
pub const EMAIL_FIELD_NAMES: [&str; 1] = ["email"];
// The agency page calls its message field "projectDetails"
pub const MESSAGE_FIELD_NAMES: [&str; 2] = ["message", "projectDetails"];

// Modal
pub const CLOSE_BUTTON_ID: &str = "close-modal";
pub const CLOSE_BUTTON_SELECTOR: &str = ".modal-close, [data-close-modal]";
pub const ESCAPE_KEY: &str = "Escape";

// Intersection feed
pub const INTERSECTION_ROOT_MARGIN_PX: f64 = 50.0;

// Scroll progress bar, created when the page lacks one
pub const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(90deg, #d4a574, #c08552); z-index: 9999; transition: width 0.1s ease;";

#[inline]
pub fn root_margin(bottom_px: f64) -> String {
    format!("0px 0px -{}px 0px", bottom_px.max(0.0))
}

#[inline]
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * step_ms as u64)
}

#[inline]
pub fn field_selector(name: &str) -> String {
    format!("[name=\"{name}\"]")
}
