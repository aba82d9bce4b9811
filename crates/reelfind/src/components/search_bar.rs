use super::AnimationMessage;
use crate::platform;
use dioxus::prelude::*;
use reelfind_core::presentation::Presentation;

/// Query input and search button.
///
/// The press animation and the submit start together; the submit never
/// waits on the animation.
#[component]
pub fn SearchBar(
    query: Signal<String>,
    presentation: Signal<Presentation>,
    on_query: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_submit.call(());
        }
    };

    let animation = use_coroutine_handle::<AnimationMessage>();
    let button_style = presentation.read().button_style();

    rsx! {
        div { class: "rf-search",
            input {
                class: "rf-search-input",
                r#type: "text",
                placeholder: "FLCL",
                value: "{query}",
                oninput: move |evt| {
                    let value = evt.value();
                    query.set(value.clone());
                    on_query.call(value);
                },
                onkeydown: handle_keydown,
            }
            button {
                class: "rf-search-button",
                style: "{button_style}",
                onmouseenter: move |_| {
                    presentation.write().button_enter(platform::now());
                    animation.send(AnimationMessage::Wake);
                },
                onmouseleave: move |_| {
                    presentation.write().button_leave(platform::now());
                    animation.send(AnimationMessage::Wake);
                },
                onclick: move |_| {
                    presentation.write().button_press(platform::now());
                    animation.send(AnimationMessage::Wake);
                    on_submit.call(());
                },
                "Search"
            }
        }
    }
}
