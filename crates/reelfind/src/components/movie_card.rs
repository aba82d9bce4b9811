use dioxus::prelude::*;
use reelfind_core::presentation::CardView;

/// One movie: poster (linked to IMDb when known), title, year, rank, actors.
///
/// `on_hover` fires `true` on pointer enter and `false` on leave.
#[component]
pub fn MovieCard(view: CardView, style: String, on_hover: EventHandler<bool>) -> Element {
    let poster = rsx! {
        img {
            class: "rf-card-poster",
            src: "{view.poster_url}",
            alt: "{view.title}",
        }
    };

    rsx! {
        article {
            class: "rf-card",
            style: "{style}",
            onmouseenter: move |_| on_hover.call(true),
            onmouseleave: move |_| on_hover.call(false),

            if let Some(href) = view.link.clone() {
                a {
                    href,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {poster}
                }
            } else {
                {poster}
            }

            h2 { class: "rf-card-title", "{view.title}" }
            p { class: "rf-card-meta", "Year: {view.year}" }
            p { class: "rf-card-meta", "Rank: {view.rank}" }
            p { class: "rf-card-actors", "Actors: {view.actors}" }
        }
    }
}
