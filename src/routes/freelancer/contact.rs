use std::fmt;

use super::view_model::ProfileViewModel;
use crate::context::Navigate;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    /// The profile has no account to message
    MissingUserId,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUserId => write!(f, "This freelancer cannot be contacted yet"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Open the messaging view for the freelancer shown on the page
pub fn contact(profile: &ProfileViewModel, navigator: &impl Navigate) -> Result<(), ContactError> {
    let user_id = profile
        .contact_user_id
        .clone()
        .ok_or(ContactError::MissingUserId)?;

    navigator.go_to(Route::Chat { user_id });
    Ok(())
}
