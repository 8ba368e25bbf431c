use dioxus::prelude::*;

/// Pulsing placeholder shown while a freelancer profile is loading
/// Mirrors the profile header and sections so the page doesn't jump on load
#[component]
pub fn ProfileSkeleton(label: String) -> Element {
    rsx! {
        div {
            class: "p-6",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            p {
                class: "text-center text-muted-foreground text-lg mb-6",
                "{label}"
            }

            div {
                class: "animate-pulse",

                // Header: photo + name block
                div {
                    class: "flex mb-6",
                    div {
                        class: "w-1/4",
                        div { class: "w-40 h-40 rounded-full bg-muted" }
                    }
                    div {
                        class: "w-2/3 pl-6 flex flex-col justify-center gap-3",
                        div { class: "h-6 w-48 bg-muted rounded" }
                        div { class: "h-4 w-24 bg-muted rounded" }
                        div {
                            class: "flex gap-2",
                            for _ in 0..3 {
                                div { class: "h-7 w-20 bg-muted rounded-md" }
                            }
                        }
                        div { class: "h-4 w-32 bg-muted rounded" }
                    }
                }

                // About
                div {
                    class: "mb-6 space-y-2 w-[70%]",
                    div { class: "h-5 w-28 bg-muted rounded" }
                    div { class: "h-4 w-full bg-muted rounded" }
                    div { class: "h-4 w-5/6 bg-muted rounded" }
                }

                // Work grid
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for _ in 0..3 {
                        div { class: "h-56 bg-muted rounded-md" }
                    }
                }
            }
        }
    }
}
