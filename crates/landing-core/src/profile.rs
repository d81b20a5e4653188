//! Per-page configuration.
//!
//! The three landing pages share one behaviour and differ in constants:
//! header clearance, validation strictness, submission latency, how reveals
//! are detected and how the modal animates. A page picks its profile with
//! `<body data-site-profile="...">`.

use crate::constants::{HEADER_OFFSET_PX, PARALLAX_FACTOR, SHOP_CONTACT_EMAIL, SUBMIT_DELAY_MS};
use crate::effects::Visibility;
use crate::form::ValidationPolicy;
use crate::modal::{ModalMotion, ModalSetup};
use crate::motion::Target;
pub use crate::reveal::RevealFeed;
use crate::scroll::{ParallaxMode, ScrollSetup};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteProfile {
    /// Software agency page: animation-engine timelines, header-offset scrolling.
    #[default]
    Agency,
    /// Gift shop page: class-toggled reveals from an intersection observer.
    GiftShop,
    /// Salon page: engine reveals, delayed submission, scroll progress bar.
    Salon,
}

impl SiteProfile {
    pub const ALL: [SiteProfile; 3] = [SiteProfile::Agency, SiteProfile::GiftShop, SiteProfile::Salon];

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteProfile::Agency => "agency",
            SiteProfile::GiftShop => "gift-shop",
            SiteProfile::Salon => "salon",
        }
    }

    /// Profile named by the page's body attribute. Missing or unknown values
    /// fall back to the default profile.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::parse::<SiteProfile>) {
            Some(Ok(profile)) => profile,
            Some(Err(e)) => {
                log::warn!("[page] {e}, falling back to {}", SiteProfile::default());
                SiteProfile::default()
            }
            None => SiteProfile::default(),
        }
    }
}

impl fmt::Display for SiteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown site profile `{0}`")]
pub struct UnknownProfile(pub String);

impl FromStr for SiteProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SiteProfile::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub profile: SiteProfile,
    /// Fixed header clearance for in-page jumps; `None` aligns sections to the top.
    pub header_offset: Option<f64>,
    pub validation: ValidationPolicy,
    pub submit_delay_ms: Option<u32>,
    /// Default feed for reveal targets that do not name one.
    pub reveal_feed: RevealFeed,
    pub modal: ModalSetup,
    pub scroll: ScrollSetup,
    pub contact_section: &'static str,
    /// Address quoted in package inquiry notifications; `data-contact-email`
    /// on `<body>` overrides the preset.
    pub contact_email: Option<String>,
}

impl SiteConfig {
    pub fn for_profile(profile: SiteProfile) -> Self {
        match profile {
            SiteProfile::Agency => Self {
                profile,
                header_offset: Some(HEADER_OFFSET_PX),
                validation: ValidationPolicy {
                    require_email_format: false,
                },
                submit_delay_ms: None,
                reveal_feed: RevealFeed::Poll,
                modal: ModalSetup {
                    backdrop: Target::id("successModal"),
                    content: Target::selector(".modal-content"),
                    icon: Target::selector(".modal-icon"),
                    visibility: Visibility::Display("flex"),
                    motion: ModalMotion::FadeAndPop,
                },
                scroll: ScrollSetup {
                    navbar: Some(Target::id("navbar")),
                    parallax: ParallaxMode::Scrubbed,
                    progress_bar: None,
                },
                contact_section: "contact",
                contact_email: None,
            },
            SiteProfile::GiftShop => Self {
                profile,
                header_offset: None,
                validation: ValidationPolicy {
                    require_email_format: true,
                },
                submit_delay_ms: None,
                reveal_feed: RevealFeed::Intersection,
                modal: ModalSetup {
                    backdrop: Target::selector(".modal-overlay"),
                    content: Target::selector(".modal-overlay .modal"),
                    icon: Target::selector(".modal-overlay .modal-icon"),
                    visibility: Visibility::Class("visible"),
                    motion: ModalMotion::Instant,
                },
                scroll: ScrollSetup {
                    navbar: None,
                    parallax: ParallaxMode::Translate {
                        target: Target::selector(".hero-bg"),
                        factor: PARALLAX_FACTOR,
                    },
                    progress_bar: None,
                },
                contact_section: "contact",
                contact_email: Some(SHOP_CONTACT_EMAIL.to_string()),
            },
            SiteProfile::Salon => Self {
                profile,
                header_offset: None,
                validation: ValidationPolicy {
                    require_email_format: false,
                },
                submit_delay_ms: Some(SUBMIT_DELAY_MS),
                reveal_feed: RevealFeed::Poll,
                modal: ModalSetup {
                    backdrop: Target::id("successModal"),
                    content: Target::selector(".modal-content"),
                    icon: Target::selector(".modal-icon"),
                    visibility: Visibility::Class("active"),
                    motion: ModalMotion::PopWithIcon,
                },
                scroll: ScrollSetup {
                    navbar: None,
                    parallax: ParallaxMode::Scrubbed,
                    progress_bar: Some(Target::id("scroll-progress")),
                },
                contact_section: "contact",
                contact_email: None,
            },
        }
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_profile(SiteProfile::Agency)
    }
}
