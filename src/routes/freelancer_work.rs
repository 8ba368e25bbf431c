use dioxus::prelude::*;

/// Target of every portfolio tile on a profile page
// TODO: give portfolio items their own detail route once the API exposes item ids
#[component]
pub fn FreelancerWork() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12",
            h1 {
                class: "text-4xl font-bold mb-4",
                "Portfolio"
            }
            p {
                class: "text-lg text-muted-foreground",
                "Browse finished projects from freelancers on Gigboard."
            }
        }
    }
}
