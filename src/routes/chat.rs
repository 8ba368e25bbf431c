use dioxus::prelude::*;
use crate::components::icons::{ArrowLeftIcon, MessageCircleIcon};

/// Messaging entry point reached from a profile's "Contact Me" button
///
/// Conversations live in the messaging service; this page only confirms who
/// the conversation is with.
#[component]
pub fn Chat(user_id: String) -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-12",
            button {
                class: "inline-flex items-center gap-2 text-muted-foreground hover:text-foreground mb-6 transition-colors",
                onclick: move |_| navigator.go_back(),
                ArrowLeftIcon { class: "w-4 h-4" }
                "Back"
            }

            div {
                class: "border border-border rounded-lg p-8 text-center",
                MessageCircleIcon { class: "w-12 h-12 text-muted-foreground mx-auto mb-4" }
                h1 {
                    class: "text-2xl font-bold mb-2",
                    "Messages"
                }
                p {
                    class: "text-muted-foreground",
                    "Conversation with user {user_id}"
                }
            }
        }
    }
}
