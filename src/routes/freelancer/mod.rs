use dioxus::prelude::*;

pub mod contact;
pub mod view_model;

use crate::components::icons::{GlobeIcon, SendIcon, StarIcon, UserIcon};
use crate::components::{ChipList, ProfileSkeleton, ReviewCardView, WorkCardView};
use crate::routes::Route;
use crate::services::api_error::ProfileError;
use crate::services::freelancer_api;
use crate::stores::api_config;
use crate::utils::{LoadState, RequestSequence};
use contact::contact;
use view_model::ProfileViewModel;

const LOADING_MESSAGE: &str = "Loading freelancer details...";

#[component]
pub fn FreelancerProfile(id: String) -> Element {
    let mut state = use_signal(LoadState::<ProfileViewModel>::default);
    let mut sequence = use_signal(RequestSequence::new);

    // Refetch whenever the route identifier changes
    use_effect(use_reactive(&id, move |id| {
        let ticket = sequence.write().begin();
        state.set(LoadState::Loading);
        let config = api_config::current();

        spawn(async move {
            let result = freelancer_api::fetch_profile(&config, &id).await;

            // A newer identifier took over while this request was in flight
            if !sequence.peek().is_current(ticket) {
                log::debug!("Discarding stale profile response for {}", id);
                return;
            }

            match &result {
                Ok(_) => log::debug!("Loaded freelancer profile {}", id),
                Err(ProfileError::NotFound { status }) => {
                    log::warn!("Freelancer profile {} not found (HTTP {})", id, status)
                }
                Err(e) => log::warn!("Failed to load freelancer profile {}: {}", id, e),
            }

            state.set(result.map(ProfileViewModel::from).into());
        });
    }));

    let current = state.read().clone();
    match current {
        LoadState::Loading => rsx! {
            ProfileSkeleton { label: "{LOADING_MESSAGE}" }
        },
        LoadState::Failed(message) => rsx! {
            ProfileLoadError { message }
        },
        LoadState::Loaded(profile) => rsx! {
            ProfileDetails { profile }
        },
    }
}

#[component]
fn ProfileLoadError(message: String) -> Element {
    rsx! {
        div {
            class: "p-8 text-center",
            role: "alert",
            UserIcon { class: "w-12 h-12 text-muted-foreground mx-auto mb-4" }
            p {
                class: "text-red-500 text-lg",
                "{message}"
            }
            Link {
                to: Route::Home {},
                class: "inline-block mt-4 text-blue-500 hover:underline",
                "Back to home"
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: ProfileViewModel) -> Element {
    let navigator = use_navigator();
    let mut contact_error = use_signal(|| None::<String>);
    let can_contact = profile.can_contact();
    let profile_for_contact = profile.clone();

    rsx! {
        div {
            class: "font-title p-6",

            // Profile header
            div {
                class: "flex mb-6",
                div {
                    class: "w-1/4",
                    img {
                        src: "{profile.photo_url}",
                        alt: "{profile.name}",
                        class: "rounded-full w-fit"
                    }
                }
                div {
                    class: "w-2/3 pl-6 flex flex-col justify-center",
                    h2 {
                        class: "text-2xl font-bold",
                        "{profile.name}"
                    }
                    div {
                        class: "flex items-center text-lg mt-2",
                        StarIcon { class: "w-5 h-5 text-yellow-500", filled: true }
                        span { class: "ml-1", "{profile.rating}" }
                    }
                    ChipList {
                        items: profile.occupation.clone(),
                        class: "flex gap-2 mt-2",
                    }
                    div {
                        class: "mt-2 text-muted-foreground flex items-center gap-2",
                        GlobeIcon { class: "w-5 h-5" }
                        "{profile.country}"
                    }
                    ChipList {
                        items: profile.languages.clone(),
                        class: "flex gap-2 mt-2",
                        chip_class: "px-2 py-1 bg-muted rounded-md",
                    }
                }
            }

            // About + contact card
            div {
                class: "flex mb-6",
                div {
                    class: "w-[70%]",
                    h3 {
                        class: "text-xl font-semibold mb-2",
                        "About Me"
                    }
                    p {
                        class: "whitespace-pre-wrap",
                        "{profile.bio}"
                    }
                }

                div {
                    class: "border-2 border-foreground flex flex-col justify-between w-[30%] ml-4 rounded-lg",
                    div {
                        class: "pl-4 pt-8 font-semibold text-xl flex items-center",
                        img {
                            src: "{profile.photo_url}",
                            alt: "",
                            class: "w-32 rounded-full m-4"
                        }
                        "{profile.name}"
                    }
                    button {
                        class: "m-4 px-8 py-3 flex items-center justify-center gap-2 rounded-lg font-semibold bg-primary text-primary-foreground hover:opacity-90 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_contact,
                        title: if can_contact { "Send a message" } else { "This freelancer has no account to message" },
                        onclick: move |_| {
                            if let Err(e) = contact(&profile_for_contact, &navigator) {
                                log::warn!("Contact action failed: {}", e);
                                contact_error.set(Some(e.to_string()));
                            }
                        },
                        h3 { "Contact Me" }
                        SendIcon { class: "w-5 h-5" }
                    }
                    if let Some(err) = contact_error() {
                        p {
                            class: "px-4 pb-4 text-sm text-red-500",
                            "{err}"
                        }
                    }
                }
            }

            // Skills
            div {
                class: "mb-6",
                h3 {
                    class: "text-xl font-semibold mb-2",
                    "Skills"
                }
                ChipList {
                    items: profile.skills.clone(),
                    class: "flex flex-wrap gap-4",
                    chip_class: "px-4 py-2 border border-border rounded-md",
                }
            }

            // Portfolio
            div {
                class: "mb-6",
                h3 {
                    class: "text-xl font-semibold mb-2",
                    "My Work"
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for card in profile.work.iter() {
                        WorkCardView {
                            key: "{card.key}",
                            card: card.clone()
                        }
                    }
                }
            }

            // Reviews
            div {
                h3 {
                    class: "text-xl font-semibold mb-2",
                    "Reviews"
                }
                div {
                    class: "space-y-4",
                    for review in profile.reviews.iter() {
                        ReviewCardView {
                            key: "{review.key}",
                            review: review.clone()
                        }
                    }
                }
            }
        }
    }
}
