use shared::models::User;
use yewdux::Store;

/// Client-side session state: who is signed in, and whether a
/// verification round trip is still in flight.
///
/// Values are only produced through the constructors below, which keeps
/// `is_authenticated == user.is_some()` true at every settled point.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct SessionState {
    /// The verified user, when signed in.
    pub user: Option<User>,
    /// Whether a user is currently signed in.
    pub is_authenticated: bool,
    /// True while the initial or a re-triggered verification is running.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // The app boots into the verification phase.
        Self::checking()
    }
}

impl SessionState {
    /// State while a verification round trip is in flight.
    pub fn checking() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    /// Settled state for a verified user.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// Settled state with nobody signed in.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@x.com".to_string(),
            username: "a".to_string(),
            full_name: None,
            phone_number: None,
        }
    }

    #[test]
    fn constructors_uphold_the_authentication_invariant() {
        for state in [
            SessionState::checking(),
            SessionState::signed_in(sample_user()),
            SessionState::signed_out(),
        ] {
            assert_eq!(state.is_authenticated, state.user.is_some());
        }
    }

    #[test]
    fn checking_is_the_only_loading_state() {
        assert!(SessionState::checking().is_loading);
        assert!(!SessionState::signed_in(sample_user()).is_loading);
        assert!(!SessionState::signed_out().is_loading);
    }

    #[test]
    fn default_state_is_checking() {
        assert_eq!(SessionState::default(), SessionState::checking());
    }

    #[test]
    fn signed_in_carries_the_user() {
        let state = SessionState::signed_in(sample_user());
        assert_eq!(state.user.as_ref().map(|user| user.id), Some(1));
        assert!(state.is_authenticated);
    }

    #[test]
    fn signed_out_clears_everything() {
        let state = SessionState::signed_out();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
    }
}
