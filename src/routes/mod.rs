use dioxus::prelude::*;

pub mod home;
pub mod freelancer;
pub mod chat;
pub mod freelancer_work;

use home::Home;
use freelancer::FreelancerProfile;
use chat::Chat;
use freelancer_work::FreelancerWork;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/freelancer/:id")]
        FreelancerProfile { id: String },

        #[route("/chat/:user_id")]
        Chat { user_id: String },

        #[route("/freelancerwork")]
        FreelancerWork {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",

            header {
                class: "sticky top-0 z-20 border-b border-border bg-background/95 backdrop-blur",
                div {
                    class: "max-w-6xl mx-auto px-6 h-16 flex items-center justify-between",

                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 hover:opacity-80 transition",
                        div {
                            class: "w-10 h-10 bg-primary rounded-full flex items-center justify-center text-primary-foreground font-bold text-lg",
                            "G"
                        }
                        span { class: "font-semibold text-lg", "Gigboard" }
                    }

                    nav {
                        class: "flex items-center gap-2",
                        NavLink { to: Route::Home {}, label: "Find talent" }
                        NavLink { to: Route::FreelancerWork {}, label: "Portfolio" }
                    }
                }
            }

            main {
                class: "max-w-6xl mx-auto",
                Outlet::<Route> {}
            }

            footer {
                class: "max-w-6xl mx-auto px-6 py-8 text-sm text-muted-foreground",
                "Gigboard - {env!(\"CARGO_PKG_VERSION\")}"
            }
        }
    }
}

// Navigation Link Component
#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let current_route = use_route::<Route>();

    let is_active = match (&to, &current_route) {
        (Route::Home {}, Route::Home {}) => true,
        (Route::FreelancerWork {}, Route::FreelancerWork {}) => true,
        _ => false,
    };

    let font_class = if is_active { "font-bold" } else { "" };

    rsx! {
        Link {
            to: to,
            class: "px-4 py-2 rounded-full hover:bg-accent transition {font_class}",
            "{label}"
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-16 text-center",
            h1 {
                class: "text-3xl font-bold mb-4",
                "Page not found"
            }
            p {
                class: "text-muted-foreground mb-6",
                "Nothing lives at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "text-blue-500 hover:underline",
                "Back to home"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_and_chat_paths() {
        assert_eq!(Route::FreelancerProfile { id: "65af01".to_string() }.to_string(), "/freelancer/65af01");
        assert_eq!(Route::Chat { user_id: "u1".to_string() }.to_string(), "/chat/u1");
        assert_eq!(Route::FreelancerWork {}.to_string(), "/freelancerwork");
    }

    #[test]
    fn test_profile_path_parses_id() {
        let route: Route = "/freelancer/65af01".parse().unwrap();
        assert_eq!(route, Route::FreelancerProfile { id: "65af01".to_string() });
    }
}
