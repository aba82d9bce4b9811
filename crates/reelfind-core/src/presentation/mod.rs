//! Card presentation and its animation lifecycle.
//!
//! [`Presentation`] owns one animator handle per rendered card plus one for
//! the search button. Lifecycle hooks replace element lookups:
//!
//! - [`Presentation::sync`] on every result-set identity change: tears down
//!   the previous cards, registers the new ones and starts the staggered
//!   entrance
//! - `card_enter` / `card_leave` / `button_enter` / `button_leave`: scale
//!   hover, each cancelling the in-flight scale tween first
//! - [`Presentation::button_press`]: shrink then return; purely cosmetic
//! - [`Presentation::teardown`] when the page goes away

mod card;

pub use card::CardView;

use crate::animation::{AnimationConfig, Animator, ElementId, Property, TweenSpec};
use crate::movie::ResultSet;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// A card on screen and its animator handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub view: CardView,
    pub handle: ElementId,
}

#[derive(Debug)]
pub struct Presentation {
    config: AnimationConfig,
    animator: Animator,
    result_id: Option<u64>,
    cards: Vec<RenderedCard>,
    button: ElementId,
}

impl Presentation {
    pub fn new(config: AnimationConfig) -> Self {
        let mut animator = Animator::new();
        let button = animator.register();
        Self {
            config,
            animator,
            result_id: None,
            cards: Vec::new(),
            button,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    /// Rebuilds the cards if `results` has a new identity.
    ///
    /// Returns true when a rebuild (and a new entrance) happened.
    pub fn sync(&mut self, results: &ResultSet, now: Duration) -> bool {
        if self.result_id == Some(results.id()) {
            return false;
        }

        for card in self.cards.drain(..) {
            self.animator.unregister(card.handle);
        }

        self.result_id = Some(results.id());
        let mut seen = HashSet::new();
        self.cards = results
            .movies()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut view = CardView::from_record(record, index);
                // The catalog can list one id twice; render keys must stay unique.
                if !seen.insert(view.key.clone()) {
                    view.key = format!("{}-{}", view.key, index);
                    seen.insert(view.key.clone());
                }
                RenderedCard {
                    view,
                    handle: self.animator.register(),
                }
            })
            .collect();

        let hidden = [
            (Property::TranslateY, self.config.entrance_offset_y),
            (Property::Opacity, self.config.entrance_opacity),
        ];
        let rest = [(Property::TranslateY, 0.0), (Property::Opacity, 1.0)];

        for (index, card) in self.cards.iter().enumerate() {
            let delay = self.config.entrance_stagger * index as u32;
            self.animator.set(card.handle, &hidden);
            self.animator
                .to(card.handle, &rest, self.config.entrance.with_delay(delay), now);
        }

        debug!(
            "Presenting result set {} with {} cards",
            results.id(),
            self.cards.len()
        );
        true
    }

    pub fn card_enter(&mut self, index: usize, now: Duration) {
        if let Some(handle) = self.card_handle(index) {
            self.scale_to(handle, self.config.card_hover_scale, now);
        }
    }

    pub fn card_leave(&mut self, index: usize, now: Duration) {
        if let Some(handle) = self.card_handle(index) {
            self.scale_to(handle, 1.0, now);
        }
    }

    pub fn button_enter(&mut self, now: Duration) {
        self.scale_to(self.button, self.config.button_hover_scale, now);
    }

    pub fn button_leave(&mut self, now: Duration) {
        self.scale_to(self.button, 1.0, now);
    }

    /// Quick shrink then return to natural scale.
    pub fn button_press(&mut self, now: Duration) {
        let button = self.button;
        let press = TweenSpec::new(self.config.press_duration, self.config.defaults.easing);
        let release = self.config.defaults.with_delay(self.config.press_duration);

        self.animator.kill_tweens_of(button, Some(Property::Scale));
        self.animator
            .to(button, &[(Property::Scale, self.config.press_scale)], press, now);
        self.animator
            .to(button, &[(Property::Scale, 1.0)], release, now);
    }

    pub fn tick(&mut self, now: Duration) -> bool {
        self.animator.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn card_style(&self, index: usize) -> String {
        self.card_handle(index)
            .map(|handle| self.animator.style(handle))
            .unwrap_or_default()
    }

    pub fn button_style(&self) -> String {
        self.animator.style(self.button)
    }

    /// Cancels every tween and drops every handle, button included.
    pub fn teardown(&mut self) {
        self.animator.revert();
        self.cards.clear();
        self.result_id = None;
    }

    fn card_handle(&self, index: usize) -> Option<ElementId> {
        self.cards.get(index).map(|card| card.handle)
    }

    fn scale_to(&mut self, handle: ElementId, scale: f64, now: Duration) {
        self.animator.kill_tweens_of(handle, Some(Property::Scale));
        self.animator
            .to(handle, &[(Property::Scale, scale)], self.config.defaults, now);
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::VisualState;
    use crate::movie::MovieRecord;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn results(count: usize) -> ResultSet {
        ResultSet::publish(
            (0..count)
                .map(|i| MovieRecord {
                    title: Some(format!("Movie {}", i)),
                    ..MovieRecord::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_sync_only_on_identity_change() {
        let mut presentation = Presentation::default();
        let set = results(3);

        assert!(presentation.sync(&set, ms(0)));
        assert!(!presentation.sync(&set.clone(), ms(10)));
        assert_eq!(presentation.cards().len(), 3);

        assert!(presentation.sync(&results(3), ms(20)));
    }

    #[test]
    fn test_entrance_starts_hidden_and_staggers() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(3), ms(0));

        for card in presentation.cards() {
            let state = presentation.animator().state(card.handle).unwrap();
            assert_eq!(state.translate_y, -50.0);
            assert_eq!(state.opacity, 0.0);
        }

        presentation.tick(ms(100));
        let states: Vec<VisualState> = presentation
            .cards()
            .iter()
            .map(|c| presentation.animator().state(c.handle).unwrap())
            .collect();
        assert_ne!(states[0].translate_y, -50.0);
        assert_eq!(states[1].translate_y, -50.0);
        assert_eq!(states[2].translate_y, -50.0);

        presentation.tick(ms(300));
        let second = presentation
            .animator()
            .state(presentation.cards()[1].handle)
            .unwrap();
        assert_ne!(second.translate_y, -50.0);

        // Last card starts at 400ms and runs 1s.
        assert!(presentation.tick(ms(1399)));
        assert!(!presentation.tick(ms(1400)));
        for card in presentation.cards() {
            assert_eq!(
                presentation.animator().state(card.handle).unwrap(),
                VisualState::REST
            );
        }
    }

    #[test]
    fn test_resync_tears_down_previous_cards() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(4), ms(0));
        let old: Vec<ElementId> = presentation.cards().iter().map(|c| c.handle).collect();

        presentation.card_enter(2, ms(50));
        presentation.sync(&results(1), ms(100));

        for handle in old {
            assert!(!presentation.animator().contains(handle));
        }
        // Button plus one new card.
        assert_eq!(presentation.animator().len(), 2);
    }

    #[test]
    fn test_sync_to_empty_clears_cards() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(2), ms(0));
        assert!(presentation.sync(&ResultSet::publish(Vec::new()), ms(10)));
        assert!(presentation.cards().is_empty());
        assert_eq!(presentation.animator().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_get_unique_keys() {
        let record = |id: &str| MovieRecord {
            id: Some(id.to_string()),
            ..MovieRecord::default()
        };
        let set = ResultSet::publish(vec![
            record("tt0279077"),
            record("tt0279077"),
            MovieRecord::default(),
            record("2"),
        ]);

        let mut presentation = Presentation::default();
        presentation.sync(&set, ms(0));

        let keys: Vec<&str> = presentation
            .cards()
            .iter()
            .map(|c| c.view.key.as_str())
            .collect();
        assert_eq!(keys, vec!["tt0279077", "tt0279077-1", "2", "2-3"]);
    }

    #[test]
    fn test_hover_on_settled_card_needs_frames() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(1), ms(0));
        assert!(!presentation.tick(ms(2000)));
        assert!(!presentation.is_animating());

        presentation.card_enter(0, ms(2100));
        assert!(presentation.is_animating());
        assert!(!presentation.tick(ms(2300)));
        assert!(!presentation.is_animating());
    }

    #[test]
    fn test_rapid_hover_keeps_single_scale_tween() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(2), ms(0));
        let handle = presentation.cards()[0].handle;

        for step in 0..20u64 {
            let now = ms(step * 7);
            if step % 2 == 0 {
                presentation.card_enter(0, now);
            } else {
                presentation.card_leave(0, now);
            }
            presentation.tick(now + ms(3));
            assert!(presentation.animator().tween_count(handle, Property::Scale) <= 1);
        }

        presentation.card_leave(0, ms(500));
        presentation.tick(ms(2000));
        let state = presentation.animator().state(handle).unwrap();
        assert_eq!(state.scale, 1.0);
        assert!(!presentation.animator().is_tweening(handle, ms(2000)));
    }

    #[test]
    fn test_hover_does_not_cancel_entrance() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(1), ms(0));
        let handle = presentation.cards()[0].handle;

        presentation.card_enter(0, ms(100));
        assert_eq!(
            presentation.animator().tween_count(handle, Property::TranslateY),
            1
        );

        presentation.tick(ms(1500));
        let state = presentation.animator().state(handle).unwrap();
        assert_eq!(state.translate_y, 0.0);
        assert_eq!(state.opacity, 1.0);
        assert!((state.scale - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_button_hover_and_press() {
        let mut presentation = Presentation::default();
        let button = presentation.button();

        presentation.button_enter(ms(0));
        presentation.tick(ms(200));
        assert!((presentation.animator().state(button).unwrap().scale - 1.2).abs() < 1e-9);

        presentation.button_press(ms(300));
        assert_eq!(presentation.animator().tween_count(button, Property::Scale), 2);

        presentation.tick(ms(400));
        assert!((presentation.animator().state(button).unwrap().scale - 0.7).abs() < 1e-9);

        presentation.tick(ms(600));
        assert_eq!(presentation.animator().state(button).unwrap().scale, 1.0);
        assert!(!presentation.is_animating());

        presentation.button_leave(ms(700));
        assert_eq!(presentation.animator().tween_count(button, Property::Scale), 1);
    }

    #[test]
    fn test_hover_on_missing_card_is_ignored() {
        let mut presentation = Presentation::default();
        presentation.card_enter(5, ms(0));
        assert!(!presentation.is_animating());
        assert_eq!(presentation.card_style(5), "");
    }

    #[test]
    fn test_teardown_drops_everything() {
        let mut presentation = Presentation::default();
        presentation.sync(&results(3), ms(0));
        presentation.button_enter(ms(0));

        presentation.teardown();
        assert!(presentation.animator().is_empty());
        assert!(presentation.cards().is_empty());
        assert!(!presentation.is_animating());
    }
}
