use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChipListProps {
    /// Labels in display order
    pub items: Vec<String>,
    /// Classes for the wrapping row
    #[props(default = "flex flex-wrap gap-2".to_string())]
    pub class: String,
    /// Classes for each label
    #[props(default = "px-2 py-1 border border-border rounded-md".to_string())]
    pub chip_class: String,
}

/// Row of small labels (occupations, languages, skills)
///
/// An empty list renders an empty container, never a placeholder.
#[component]
pub fn ChipList(props: ChipListProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            for (index, item) in props.items.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "{props.chip_class}",
                    "{item}"
                }
            }
        }
    }
}
