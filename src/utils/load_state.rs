/// Lifecycle of a single fetch-and-render cycle
///
/// One enum instead of separate `loading` / `error` / `data` signals, so the
/// page can never show a stale profile next to an error message.
///
/// ```ignore
/// let mut state = use_signal(LoadState::<ProfileViewModel>::default);
///
/// state.set(LoadState::Loading);
/// state.set(result.map(ProfileViewModel::from).into());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Request issued, nothing to show yet
    Loading,

    /// Request finished with a payload
    Loaded(T),

    /// Request finished with a user-facing error message
    Failed(String),
}

/// Every cycle starts out loading; there is no idle state before the first fetch
impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state: LoadState<i32> = LoadState::default();
        assert_eq!(state, LoadState::Loading);
    }

    #[test]
    fn test_from_result() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(LoadState::from(ok), LoadState::Loaded(1));

        let err: Result<i32, String> = Err("Freelancer not found".to_string());
        assert_eq!(
            LoadState::from(err),
            LoadState::Failed("Freelancer not found".to_string())
        );
    }

    #[test]
    fn test_from_profile_error_uses_display_message() {
        use crate::services::api_error::ProfileError;

        let err: Result<i32, ProfileError> = Err(ProfileError::rejected(None));
        assert_eq!(
            LoadState::from(err),
            LoadState::Failed("Failed to fetch freelancer details".to_string())
        );
    }
}
