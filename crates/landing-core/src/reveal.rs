//! Trigger observer for scroll reveals.
//!
//! Each watched element flips between hidden and revealed independently. Two
//! feeds are supported and may be mixed: rectangles polled once per animation
//! frame ([`RevealObserver::poll`]) and batched intersection callbacks
//! ([`RevealObserver::on_intersections`]). Only real flips produce a
//! [`RevealChange`], so staying inside the zone never re-queues a tween.

use crate::effects::{Effect, Effects};
use crate::geometry::{Rect, Viewport};
use crate::motion::{AnimationRequest, Ease, Target, TriggerPosition, VisualState};
use fnv::FnvHashMap;

/// Front-end handle of a watched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal at most once for the page's lifetime.
    Once,
    /// Reveal on every entry, hide again on every exit.
    Toggle,
}

/// How a target's position reaches the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFeed {
    /// Bounding rectangles read once per animation frame after scroll/resize.
    Poll,
    /// Browser intersection callbacks.
    Intersection,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealZone {
    /// At least `threshold` of the element is visible above a viewport whose
    /// bottom edge is pulled up by `bottom_margin` px.
    Ratio { threshold: f64, bottom_margin: f64 },
    /// The element point has scrolled up to a viewport line (`top 80%`).
    StartLine(TriggerPosition),
}

impl RevealZone {
    pub fn is_inside(&self, rect: &Rect, viewport: &Viewport) -> bool {
        match self {
            RevealZone::Ratio {
                threshold,
                bottom_margin,
            } => {
                let ratio = viewport.visible_ratio(rect, *bottom_margin);
                ratio > 0.0 && ratio >= *threshold
            }
            RevealZone::StartLine(pos) => pos.crossed(rect, viewport),
        }
    }

    /// Whether an intersection record puts the element inside the zone. The
    /// browser also reports intersecting elements below the threshold, e.g.
    /// on the first callback after `observe`.
    pub fn admits(&self, entry: &IntersectionEntry) -> bool {
        match self {
            RevealZone::Ratio { threshold, .. } => {
                entry.is_intersecting && entry.ratio > 0.0 && entry.ratio >= *threshold
            }
            RevealZone::StartLine(_) => entry.is_intersecting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStyle {
    /// Toggle a class and let a CSS transition do the rest.
    Class(&'static str),
    /// Ask the animation engine for a tween between the two states.
    Tween {
        duration: f32,
        ease: Ease,
        stagger: Option<f32>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealTarget {
    /// Element whose position is watched.
    pub id: TargetId,
    /// What flips when the watched element crosses the zone. Often a group of
    /// cards inside the watched grid.
    pub animates: Target,
    pub initial: VisualState,
    pub revealed: VisualState,
    pub zone: RevealZone,
    pub mode: RevealMode,
    pub style: RevealStyle,
    pub feed: RevealFeed,
}

impl RevealTarget {
    /// State applied at load, before anything is revealed.
    pub fn initial_effect(&self) -> Option<Effect> {
        match self.style {
            RevealStyle::Tween { .. } if !self.initial.is_empty() => Some(Effect::Set {
                targets: self.animates.clone(),
                state: self.initial,
            }),
            _ => None,
        }
    }

    pub fn effect_for(&self, state: RevealState) -> Effect {
        match (self.style, state) {
            (RevealStyle::Class(class), RevealState::Revealed) => Effect::AddClass {
                targets: self.animates.clone(),
                class,
            },
            (RevealStyle::Class(class), RevealState::Hidden) => Effect::RemoveClass {
                targets: self.animates.clone(),
                class,
            },
            (
                RevealStyle::Tween {
                    duration,
                    ease,
                    stagger,
                },
                state,
            ) => {
                let to = match state {
                    RevealState::Revealed => self.revealed,
                    RevealState::Hidden => self.initial,
                };
                let mut req = AnimationRequest::to(self.animates.clone(), to)
                    .duration(duration)
                    .ease(ease)
                    .overwrite();
                req.stagger = stagger;
                Effect::Animate(req)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealChange {
    pub id: TargetId,
    pub state: RevealState,
    /// The target will never change again and can be unobserved.
    pub finished: bool,
}

/// One intersection-observer record, already mapped to a handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub id: TargetId,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

struct Slot {
    target: RevealTarget,
    state: RevealState,
    observing: bool,
}

#[derive(Default)]
pub struct RevealObserver {
    slots: FnvHashMap<TargetId, Slot>,
    order: Vec<TargetId>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `target`, replacing any earlier registration under the
    /// same id. Returns the load-time state to apply, if any.
    pub fn watch(&mut self, target: RevealTarget) -> Option<Effect> {
        let id = target.id;
        let initial = target.initial_effect();
        let previous = self.slots.insert(
            id,
            Slot {
                target,
                state: RevealState::Hidden,
                observing: true,
            },
        );
        if previous.is_none() {
            self.order.push(id);
        }
        initial
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn state(&self, id: TargetId) -> Option<RevealState> {
        self.slots.get(&id).map(|s| s.state)
    }

    pub fn is_observing(&self, id: TargetId) -> bool {
        self.slots.get(&id).is_some_and(|s| s.observing)
    }

    pub fn target(&self, id: TargetId) -> Option<&RevealTarget> {
        self.slots.get(&id).map(|s| &s.target)
    }

    /// Ids still being watched, in registration order.
    pub fn observed(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.order.iter().copied().filter(|id| self.is_observing(*id))
    }

    /// Watched ids fed by `feed`.
    pub fn observed_by(&self, feed: RevealFeed) -> impl Iterator<Item = TargetId> + '_ {
        self.observed()
            .filter(move |id| self.slots.get(id).is_some_and(|s| s.target.feed == feed))
    }

    /// Reveal every target already on screen at load. One-shot targets fully
    /// inside the viewport count even when their zone would not fire yet;
    /// toggling targets follow their zone so the next poll agrees.
    pub fn settle(
        &mut self,
        viewport: &Viewport,
        mut rect_of: impl FnMut(TargetId) -> Option<Rect>,
    ) -> Vec<RevealChange> {
        let ids: Vec<TargetId> = self.observed().collect();
        let mut changes = Vec::new();
        for id in ids {
            let Some(rect) = rect_of(id) else { continue };
            let Some(slot) = self.slots.get(&id) else { continue };
            let in_zone = slot.target.zone.is_inside(&rect, viewport);
            let on_screen = slot.target.mode == RevealMode::Once && viewport.contains(&rect);
            if in_zone || on_screen {
                changes.extend(self.apply(id, true));
            }
        }
        changes
    }

    /// Recompute every polled target from fresh rectangles.
    pub fn poll(
        &mut self,
        viewport: &Viewport,
        mut rect_of: impl FnMut(TargetId) -> Option<Rect>,
    ) -> Vec<RevealChange> {
        let ids: Vec<TargetId> = self.observed_by(RevealFeed::Poll).collect();
        let mut changes = Vec::new();
        for id in ids {
            let Some(rect) = rect_of(id) else { continue };
            let inside = self
                .slots
                .get(&id)
                .is_some_and(|s| s.target.zone.is_inside(&rect, viewport));
            changes.extend(self.apply(id, inside));
        }
        changes
    }

    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<RevealChange> {
        entries
            .iter()
            .filter_map(|e| {
                let inside = self.slots.get(&e.id)?.target.zone.admits(e);
                self.apply(e.id, inside)
            })
            .collect()
    }

    pub fn effects_for(&self, changes: &[RevealChange]) -> Effects {
        changes
            .iter()
            .filter_map(|c| self.slots.get(&c.id).map(|s| s.target.effect_for(c.state)))
            .collect()
    }

    fn apply(&mut self, id: TargetId, inside: bool) -> Option<RevealChange> {
        let slot = self.slots.get_mut(&id)?;
        if !slot.observing {
            return None;
        }
        let next = match (slot.state, inside, slot.target.mode) {
            (RevealState::Hidden, true, _) => RevealState::Revealed,
            (RevealState::Revealed, false, RevealMode::Toggle) => RevealState::Hidden,
            _ => return None,
        };
        slot.state = next;
        let finished = slot.target.mode == RevealMode::Once;
        if finished {
            slot.observing = false;
        }
        log::debug!("[reveal] {:?} {:?} -> {:?}", id, slot.target.animates, next);
        Some(RevealChange {
            id,
            state: next,
            finished,
        })
    }
}
