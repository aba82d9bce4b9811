//! Handle-owning tween engine.
//!
//! Elements are registered up front and addressed by [`ElementId`]. Time is
//! always passed in by the caller (elapsed since some fixed origin), which
//! keeps every operation deterministic.

use super::tween::{Property, Tween, TweenSpec, VisualState};
use std::collections::HashMap;
use std::time::Duration;

/// Handle to an element owned by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

#[derive(Debug, Default)]
struct Element {
    state: VisualState,
    tweens: Vec<Tween>,
}

/// Owns element visual states and the tweens driving them.
#[derive(Debug, Default)]
pub struct Animator {
    elements: HashMap<ElementId, Element>,
    next_id: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element in its resting state.
    pub fn register(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::default());
        id
    }

    /// Drops an element and every tween on it.
    pub fn unregister(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sets property values immediately.
    pub fn set(&mut self, id: ElementId, values: &[(Property, f64)]) {
        if let Some(element) = self.elements.get_mut(&id) {
            for &(property, value) in values {
                element.state.set(property, value);
            }
        }
    }

    /// Starts one tween per property toward the given values.
    pub fn to(&mut self, id: ElementId, values: &[(Property, f64)], spec: TweenSpec, now: Duration) {
        if let Some(element) = self.elements.get_mut(&id) {
            for &(property, value) in values {
                element.tweens.push(Tween::new(property, value, now, spec));
            }
        }
    }

    /// Cancels tweens on `id`, either all of them or only those on `property`.
    ///
    /// Properties keep whatever value they reached at the last tick.
    pub fn kill_tweens_of(&mut self, id: ElementId, property: Option<Property>) {
        if let Some(element) = self.elements.get_mut(&id) {
            match property {
                Some(property) => element.tweens.retain(|t| t.property != property),
                None => element.tweens.clear(),
            }
        }
    }

    /// Whether `id` has any tween that is waiting or running at `now`.
    pub fn is_tweening(&self, id: ElementId, now: Duration) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|e| e.tweens.iter().any(|t| t.is_pending(now)))
    }

    /// Number of live tweens on `id` for `property`.
    pub fn tween_count(&self, id: ElementId, property: Property) -> usize {
        self.elements
            .get(&id)
            .map(|e| e.tweens.iter().filter(|t| t.property == property).count())
            .unwrap_or(0)
    }

    /// True while any element still has tweens to run.
    pub fn is_animating(&self) -> bool {
        self.elements.values().any(|e| !e.tweens.is_empty())
    }

    /// Advances every tween to `now` and drops the finished ones.
    ///
    /// Returns true if anything is still animating afterward.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut animating = false;
        for element in self.elements.values_mut() {
            let Element { state, tweens } = element;
            tweens.retain_mut(|tween| !tween.sample(state, now));
            animating |= !tweens.is_empty();
        }
        animating
    }

    pub fn state(&self, id: ElementId) -> Option<VisualState> {
        self.elements.get(&id).map(|e| e.state)
    }

    /// Inline style for `id`; empty for unknown handles.
    pub fn style(&self, id: ElementId) -> String {
        self.state(id).map(|s| s.to_css()).unwrap_or_default()
    }

    /// Cancels everything and forgets every element.
    pub fn revert(&mut self) {
        self.elements.clear();
    }
}
