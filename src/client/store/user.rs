use crate::model::user::IdentityDto;

/// Signed in character, shared with every page through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<IdentityDto>,
    /// Whether the identity request has completed, used to avoid flashing the login button
    pub fetched: bool,
}

impl UserState {
    /// Forgets the signed in character after the server reports the session as gone.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.fetched = true;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    /// Expect sign out to clear the identity while keeping the page out of its loading state
    #[test]
    fn sign_out_clears_identity() {
        let mut state = UserState {
            user: Some(IdentityDto {
                character_id: 1,
                character_name: "Pilot".to_string(),
                expires_at: Utc::now(),
            }),
            fetched: false,
        };

        state.sign_out();

        assert!(state.user.is_none());
        assert!(state.fetched);
    }
}
