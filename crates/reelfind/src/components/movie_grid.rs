use super::{AnimationMessage, MovieCard};
use crate::platform;
use dioxus::prelude::*;
use reelfind_core::presentation::Presentation;

/// Responsive grid of the current result set's cards.
#[component]
pub fn MovieGrid(presentation: Signal<Presentation>) -> Element {
    let animation = use_coroutine_handle::<AnimationMessage>();
    let cards: Vec<_> = {
        let current = presentation.read();
        current
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (index, card.view.clone(), current.card_style(index)))
            .collect()
    };

    rsx! {
        section { class: "rf-grid",
            for (index, view, style) in cards {
                MovieCard {
                    key: "{view.key}",
                    view,
                    style,
                    on_hover: move |entered: bool| {
                        let now = platform::now();
                        if entered {
                            presentation.write().card_enter(index, now);
                        } else {
                            presentation.write().card_leave(index, now);
                        }
                        animation.send(AnimationMessage::Wake);
                    },
                }
            }
        }
    }
}
