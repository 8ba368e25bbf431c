use dioxus::prelude::*;

use crate::components::icons::{StarIcon, UserIcon};
use crate::routes::freelancer::view_model::ReviewCard;

#[component]
pub fn ReviewCardView(review: ReviewCard) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-4 border border-border p-4 rounded-md",

            if !review.avatar_url.is_empty() {
                img {
                    src: "{review.avatar_url}",
                    alt: "{review.reviewer}",
                    class: "w-12 h-12 rounded-full object-cover flex-shrink-0"
                }
            } else {
                div {
                    class: "w-12 h-12 rounded-full bg-muted flex items-center justify-center flex-shrink-0",
                    UserIcon { class: "w-6 h-6 text-muted-foreground" }
                }
            }

            div {
                h4 {
                    class: "font-semibold",
                    "{review.reviewer}"
                }
                p { "{review.message}" }
                div {
                    class: "flex items-center gap-1 text-yellow-500 mt-1",
                    StarIcon { class: "w-4 h-4", filled: true }
                    "{review.rating}"
                }
            }
        }
    }
}
