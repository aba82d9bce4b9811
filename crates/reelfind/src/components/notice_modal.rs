use crate::platform;
use dioxus::prelude::*;
use reelfind_core::notifier::{Notice, NoticeKind};

/// Renders the current notice, if any, over a backdrop.
///
/// Progress notices block the page and cannot be closed. Every other notice
/// closes on its OK button, a backdrop click or Escape. Success notices also
/// close themselves after their `auto_dismiss`; the timer only clears the
/// notice it was started for.
#[component]
pub fn NoticeModal(notice: Signal<Option<Notice>>) -> Element {
    use_effect(move || {
        let Some((id, delay)) = notice
            .read()
            .as_ref()
            .and_then(|n| n.auto_dismiss.map(|delay| (n.id, delay)))
        else {
            return;
        };

        spawn(async move {
            platform::sleep(delay).await;
            let still_showing = notice.peek().as_ref().map(|n| n.id) == Some(id);
            if still_showing {
                notice.set(None);
            }
        });
    });

    let Some(current) = notice.read().clone() else {
        return rsx! {};
    };

    let modifier = current.kind.css_modifier();

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape && closes_from_outside(notice.peek().as_ref()) {
            notice.set(None);
        }
    };

    rsx! {
        div {
            class: "rf-modal-backdrop",
            tabindex: "-1",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| {
                if closes_from_outside(notice.peek().as_ref()) {
                    notice.set(None);
                }
            },
            onkeydown: handle_keydown,

            div {
                class: "rf-modal rf-modal--{modifier}",
                role: if current.kind == NoticeKind::Error { "alertdialog" } else { "dialog" },
                onclick: move |evt| evt.stop_propagation(),

                if current.kind == NoticeKind::Progress {
                    div { class: "rf-spinner" }
                }

                h2 { class: "rf-modal-title", "{current.title}" }
                p { class: "rf-modal-text", "{current.text}" }

                if current.shows_confirm_button() {
                    button {
                        class: "rf-modal-confirm",
                        onclick: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Whether a backdrop click or Escape may close `notice`.
fn closes_from_outside(notice: Option<&Notice>) -> bool {
    notice.is_some_and(Notice::is_dismissable)
}
