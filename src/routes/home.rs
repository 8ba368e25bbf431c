use dioxus::prelude::*;
use crate::routes::Route;

/// Landing page: open a freelancer profile by identifier
#[component]
pub fn Home() -> Element {
    let mut freelancer_id = use_signal(String::new);
    let navigator = use_navigator();

    let mut open_profile = move || {
        let id = freelancer_id.read().trim().to_string();
        if id.is_empty() {
            return;
        }
        navigator.push(Route::FreelancerProfile { id });
        freelancer_id.set(String::new());
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-16",
            h1 {
                class: "text-4xl font-bold mb-4",
                "Find the right freelancer"
            }
            p {
                class: "text-lg text-muted-foreground mb-8",
                "Open a freelancer's profile to see their skills, past work and reviews."
            }

            div {
                class: "flex gap-2",
                input {
                    class: "flex-1 px-4 py-3 border border-input rounded-lg bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-ring",
                    r#type: "text",
                    placeholder: "Freelancer ID",
                    value: "{freelancer_id}",
                    oninput: move |evt| freelancer_id.set(evt.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            open_profile();
                        }
                    }
                }
                button {
                    class: "px-6 py-3 bg-primary text-primary-foreground rounded-lg font-medium transition hover:opacity-90 disabled:opacity-50",
                    disabled: freelancer_id.read().trim().is_empty(),
                    onclick: move |_| open_profile(),
                    "View profile"
                }
            }
        }
    }
}
