//! Navigation capability handed to page actions
//!
//! Actions that move the user elsewhere take a `&impl Navigate` instead of
//! reaching for the router themselves, so they can be exercised without a
//! running Dioxus runtime.

use dioxus::router::Navigator;

use crate::routes::Route;

pub trait Navigate {
    fn go_to(&self, route: Route);
}

impl Navigate for Navigator {
    fn go_to(&self, route: Route) {
        log::debug!("Navigating to {}", route);
        self.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts_navigator<N: Navigate>() {}

    #[test]
    fn test_router_navigator_is_a_navigate_capability() {
        accepts_navigator::<Navigator>();
    }
}
