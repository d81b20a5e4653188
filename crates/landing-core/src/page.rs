//! One landing page: the state machines wired together.
//!
//! Every handler takes an event payload (already reduced to plain values by
//! the front-end) and returns the [`Effects`] to apply. Layout reads are passed
//! in as closures so nothing here needs a browser.

use crate::choreography::{Choreography, RevealSpec};
use crate::constants::SETTLE_DELAY_MS;
use crate::effects::{Deferred, Effect, Effects};
use crate::form::{ContactForm, FormSubmission, SubmitOutcome};
use crate::geometry::{Rect, Viewport};
use crate::modal::{ClickTarget, DismissTrigger, ModalController};
use crate::motion::{Completion, Target};
use crate::nav::{NavOutcome, Navigator};
use crate::profile::SiteConfig;
use crate::reveal::{IntersectionEntry, RevealChange, RevealObserver, RevealTarget, TargetId};
use crate::scroll::{ScrollEffects, ScrollMetrics};
use smallvec::smallvec;

pub struct LandingPage {
    config: SiteConfig,
    choreography: Choreography,
    pub reveals: RevealObserver,
    pub scroll: ScrollEffects,
    pub modal: ModalController,
    pub form: ContactForm,
    pub nav: Navigator,
}

impl LandingPage {
    pub fn new(config: SiteConfig) -> Self {
        let choreography = Choreography::for_profile(config.profile);
        Self {
            reveals: RevealObserver::new(),
            scroll: ScrollEffects::new(config.scroll.clone()),
            modal: ModalController::new(config.modal.clone()),
            form: ContactForm::new(config.validation, config.submit_delay_ms),
            nav: Navigator::new(config.header_offset),
            choreography,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    pub fn reveal_specs(&self) -> &[RevealSpec] {
        &self.choreography.reveals
    }

    /// Load-time effects: intro animations, then the deferred settle check.
    pub fn boot(&self) -> Effects {
        log::info!("[page] boot profile={}", self.config.profile);
        let mut out = self.choreography.intro.clone();
        out.push(Effect::Schedule {
            after_ms: SETTLE_DELAY_MS,
            event: Deferred::Settle,
        });
        out
    }

    pub fn watch(&mut self, target: RevealTarget) -> Effects {
        self.reveals.watch(target).into_iter().collect()
    }

    /// Reveal whatever is already on screen. Runs once, after the settle delay.
    pub fn settle(
        &mut self,
        viewport: &Viewport,
        rect_of: impl FnMut(TargetId) -> Option<Rect>,
    ) -> (Vec<RevealChange>, Effects) {
        let changes = self.reveals.settle(viewport, rect_of);
        let effects = self.reveals.effects_for(&changes);
        (changes, effects)
    }

    /// Ask for a frame after a scroll or resize event. `false` means one is
    /// already queued and the event can be dropped.
    pub fn request_frame(&mut self) -> bool {
        self.scroll.gate.request()
    }

    /// The queued frame: scroll effects plus polled reveals.
    pub fn frame(
        &mut self,
        metrics: &ScrollMetrics,
        viewport: &Viewport,
        rect_of: impl FnMut(TargetId) -> Option<Rect>,
    ) -> (Vec<RevealChange>, Effects) {
        self.scroll.gate.begin_frame();
        let mut out = self.scroll.frame(metrics);
        let changes = self.reveals.poll(viewport, rect_of);
        out.extend(self.reveals.effects_for(&changes));
        (changes, out)
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> (Vec<RevealChange>, Effects) {
        let changes = self.reveals.on_intersections(entries);
        let effects = self.reveals.effects_for(&changes);
        (changes, effects)
    }

    pub fn submit(&mut self, submission: FormSubmission) -> (SubmitOutcome, Effects) {
        let (outcome, mut out) = self.form.submit(submission);
        if outcome == SubmitOutcome::Accepted {
            out.extend(self.finish_submission());
        }
        (outcome, out)
    }

    fn finish_submission(&mut self) -> Effects {
        let mut out = self.modal.open();
        out.extend(self.form.reset());
        out
    }

    /// A timer scheduled through [`Effect::Schedule`] fired. `Settle` needs
    /// layout and is answered by [`settle`](Self::settle) instead.
    pub fn on_deferred(&mut self, event: Deferred) -> Effects {
        match event {
            Deferred::FinishSubmission => self.finish_submission(),
            Deferred::Settle => Effects::new(),
        }
    }

    pub fn navigate(
        &self,
        href: &str,
        page_y_offset: f64,
        top_of: impl FnOnce(&str) -> Option<f64>,
    ) -> NavOutcome {
        self.nav.dispatch(href, page_y_offset, top_of)
    }

    pub fn navigate_to_section(
        &self,
        section: &str,
        page_y_offset: f64,
        top_of: impl FnOnce(&str) -> Option<f64>,
    ) -> NavOutcome {
        self.nav.dispatch_section(section, page_y_offset, top_of)
    }

    /// "Buy now": jump to the contact form and prefill the message.
    pub fn buy_now(
        &mut self,
        product: &str,
        page_y_offset: f64,
        top_of: impl FnOnce(&str) -> Option<f64>,
    ) -> Effects {
        let contact = self.config.contact_section;
        let mut out = self.navigate_to_section(contact, page_y_offset, top_of).effects();
        out.extend(self.form.prefill_interest(product));
        out
    }

    pub fn package_inquiry(&self, package: &str) -> Effects {
        let text = match &self.config.contact_email {
            Some(email) => format!(
                "Thank you for your interest in the {package}! Contact us at {email} to complete your purchase."
            ),
            None => format!("Thank you for your interest in the {package}! Contact us to complete your purchase."),
        };
        smallvec![Effect::Alert(text)]
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Effects {
        self.modal.on_click(target)
    }

    pub fn close_modal(&mut self) -> Effects {
        self.modal.dismiss(DismissTrigger::CloseButton)
    }

    pub fn on_key(&mut self, key: &str) -> Effects {
        self.modal.on_key(key)
    }

    pub fn on_complete(&mut self, completion: Completion) -> Effects {
        self.modal.on_complete(completion)
    }

    /// Tween for hovering the element under `handle`; `index` picks the hover
    /// pair from the choreography.
    pub fn hover(&self, index: usize, handle: u32, entering: bool) -> Option<Effect> {
        self.choreography
            .hovers
            .get(index)
            .map(|(_, hover)| Effect::Animate(hover.request(Target::Handle(handle), entering)))
    }
}
