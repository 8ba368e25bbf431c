use dioxus::prelude::*;

use crate::components::icons::StarIcon;
use crate::routes::freelancer::view_model::WorkCard;
use crate::routes::Route;

/// Portfolio tile on a freelancer profile
///
/// Every tile links to the shared portfolio page; items have no detail route.
#[component]
pub fn WorkCardView(card: WorkCard) -> Element {
    rsx! {
        Link {
            to: Route::FreelancerWork {},
            class: "block border border-border rounded-md p-4 hover:shadow-md transition",

            if !card.image_url.is_empty() {
                img {
                    src: "{card.image_url}",
                    alt: "",
                    loading: "lazy",
                    class: "w-full h-40 object-cover rounded-md"
                }
            } else {
                div { class: "w-full h-40 rounded-md bg-muted" }
            }

            p {
                class: "mt-2",
                "{card.description}"
            }

            div {
                class: "flex items-center mt-2 text-yellow-500",
                StarIcon { class: "w-4 h-4", filled: true }
                span { class: "ml-1", "{card.rating}" }
            }

            p {
                class: "mt-2 text-green-500",
                "From: ${card.price}"
            }
        }
    }
}
