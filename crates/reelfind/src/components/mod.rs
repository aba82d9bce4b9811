//! UI components for the Reelfind page.
//!
//! - [`App`]: owns the search session, the presentation and the notice
//! - `search_bar`: controlled query input and the search button
//! - `movie_grid` / `movie_card`: the animated result cards
//! - `notice_modal`: progress, error, info and success notices
//!
//! Session state flows one way: the session broadcasts on a watch channel,
//! a task mirrors it into a signal, and the presentation re-syncs whenever
//! the result set's identity changes. The animation loop only runs frames
//! while a tween is in flight; anything that starts one sends
//! [`AnimationMessage::Wake`].

mod movie_card;
mod movie_grid;
mod notice_modal;
mod search_bar;

pub use movie_card::MovieCard;
pub use movie_grid::MovieGrid;
pub use notice_modal::NoticeModal;
pub use search_bar::SearchBar;

use crate::notifier::SignalNotifier;
use crate::platform;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use reelfind_core::api::HttpMovieApi;
use reelfind_core::config::SearchConfig;
use reelfind_core::notifier::{Notice, NoticeKind};
use reelfind_core::presentation::Presentation;
use reelfind_core::session::{SearchSession, SessionState, SubmitOutcome};
use std::rc::Rc;
use std::time::Duration;

type AppSession = SearchSession<HttpMovieApi, SignalNotifier>;

/// Animation frame interval (~60fps).
const FRAME: Duration = Duration::from_millis(16);

/// Wakes the animation loop after a tween was started.
///
/// Children reach it through `use_coroutine_handle::<AnimationMessage>()`.
pub enum AnimationMessage {
    Wake,
}

/// Messages for the search coroutine
enum SearchMessage {
    /// Search for whatever the session's query currently is.
    SubmitCurrent,
}

fn build_session(config: SearchConfig, notice: Signal<Option<Notice>>) -> Option<Rc<AppSession>> {
    match HttpMovieApi::new(&config) {
        Ok(api) => Some(Rc::new(SearchSession::new(
            api,
            SignalNotifier::new(notice),
            config,
        ))),
        Err(e) => {
            error!("Failed to build catalog client: {}", e);
            None
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(SearchConfig::default);
    let mut notice = use_signal(|| None::<Notice>);
    let mut presentation = use_signal(Presentation::default);
    let mut state = use_signal({
        let default_query = config.default_query.clone();
        move || SessionState::new(&default_query)
    });
    let query = use_signal({
        let default_query = config.default_query.clone();
        move || default_query
    });

    let session = use_hook({
        let config = config.clone();
        move || {
            let session = build_session(config, notice);
            if session.is_none() {
                notice.set(Some(Notice {
                    id: 0,
                    kind: NoticeKind::Error,
                    title: "Search unavailable".to_string(),
                    text: reelfind_core::config::GENERIC_ERROR_MESSAGE.to_string(),
                    auto_dismiss: None,
                }));
            }
            session
        }
    });

    // Mirror session state into a signal
    use_future({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move {
                let Some(session) = session else { return };
                let mut rx = session.subscribe();
                state.set(rx.borrow_and_update().clone());
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    state.set(next);
                }
            }
        }
    });

    // Search coroutine; each submit runs as its own task so a newer one
    // never waits on an older one.
    let search_task = use_coroutine({
        let session = session.clone();
        move |mut rx: UnboundedReceiver<SearchMessage>| {
            let session = session.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    let Some(session) = session.clone() else {
                        continue;
                    };
                    match msg {
                        SearchMessage::SubmitCurrent => {
                            spawn(async move {
                                match session.submit_current().await {
                                    SubmitOutcome::Published { count } => {
                                        info!("Showing {} movies", count);
                                    }
                                    outcome => info!("Search ended: {:?}", outcome),
                                }
                            });
                        }
                    }
                }
            }
        }
    });

    // Initial search for the default query
    use_hook(move || search_task.send(SearchMessage::SubmitCurrent));

    // Animation loop; parked until something starts a tween
    let animation_task = use_coroutine(move |mut rx: UnboundedReceiver<AnimationMessage>| {
        async move {
            while let Some(AnimationMessage::Wake) = rx.next().await {
                while presentation.peek().is_animating() {
                    platform::sleep(FRAME).await;
                    presentation.write().tick(platform::now());
                }
            }
        }
    });

    // Rebuild cards whenever a new result set is published
    use_effect(move || {
        let results = state.read().results.clone();
        if presentation.write().sync(&results, platform::now()) {
            animation_task.send(AnimationMessage::Wake);
        }
    });

    use_drop({
        let session = session.clone();
        move || {
            if let Some(session) = session {
                session.close();
            }
            if let Ok(mut presentation) = presentation.try_write() {
                presentation.teardown();
            }
        }
    });

    let on_query = {
        let session = session.clone();
        move |value: String| {
            if let Some(session) = session.as_ref() {
                session.set_query(&value);
            }
        }
    };

    let on_submit = move |_: ()| {
        search_task.send(SearchMessage::SubmitCurrent);
    };

    let is_busy = state.read().is_busy;

    rsx! {
        main { class: "rf-page",
            h1 { class: "rf-heading", "Movie Collection" }

            SearchBar {
                query,
                presentation,
                on_query,
                on_submit,
            }

            if is_busy {
                p { class: "rf-loading", "Loading movies..." }
            }

            MovieGrid { presentation }

            NoticeModal { notice }
        }
    }
}
