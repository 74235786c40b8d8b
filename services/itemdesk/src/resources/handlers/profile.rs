//! Profile update.

use tracing::info;

use crate::{
    api::{
        error::ApiError,
        types::{Identity, Profile, ProfilePatch},
    },
    state::AppState,
};

impl AppState {
    /// Apply `patch` to the caller's profile.
    pub(crate) async fn update_profile(
        &self,
        identity: &Identity,
        patch: &ProfilePatch,
    ) -> Result<Profile, ApiError> {
        validate_patch(patch)?;

        let profile = self
            .store
            .update_profile(&identity.subject, patch)
            .await
            .ok_or_else(ApiError::user_not_found)?;
        info!(email = %profile.email, "profile updated");
        Ok(profile)
    }
}

/// At least one field, and no blank values.
fn validate_patch(patch: &ProfilePatch) -> Result<(), ApiError> {
    if patch.name.is_none() && patch.email.is_none() {
        return Err(ApiError::validation(
            "request body must contain 'name' or 'email'",
        ));
    }
    if patch.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
        return Err(ApiError::validation("name must not be blank"));
    }
    if patch.email.as_deref().is_some_and(|v| v.trim().is_empty()) {
        return Err(ApiError::validation("email must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        api::types::{Identity, ProfilePatch},
        testing::{SEED_EMAIL, SEED_NAME, test_state},
    };

    fn caller() -> Identity {
        Identity {
            subject: SEED_EMAIL.to_string(),
            expires_at: u64::MAX,
        }
    }

    fn patch(name: Option<&str>, email: Option<&str>) -> ProfilePatch {
        ProfilePatch {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn name_only_patch_leaves_email() {
        let state = test_state();
        let profile = state
            .update_profile(&caller(), &patch(Some("Nama Baru"), None))
            .await
            .unwrap();
        assert_eq!(profile.name, "Nama Baru");
        assert_eq!(profile.email, SEED_EMAIL);
    }

    #[tokio::test]
    async fn email_only_patch_leaves_name() {
        let state = test_state();
        let profile = state
            .update_profile(&caller(), &patch(None, Some("baru@itemdesk.local")))
            .await
            .unwrap();
        assert_eq!(profile.name, SEED_NAME);
        assert_eq!(profile.email, "baru@itemdesk.local");
    }

    #[tokio::test]
    async fn empty_or_blank_patch_is_rejected() {
        let state = test_state();
        for p in [
            patch(None, None),
            patch(Some("  "), None),
            patch(None, Some("")),
        ] {
            let err = state.update_profile(&caller(), &p).await.unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
        }

        let untouched = state
            .update_profile(&caller(), &patch(Some(SEED_NAME), None))
            .await
            .unwrap();
        assert_eq!(untouched.email, SEED_EMAIL);
    }

    #[tokio::test]
    async fn unknown_subject_is_not_found() {
        let state = test_state();
        let ghost = Identity {
            subject: "ghost@itemdesk.local".to_string(),
            expires_at: u64::MAX,
        };
        let err = state
            .update_profile(&ghost, &patch(Some("x"), None))
            .await
            .unwrap_err();
        assert_eq!(err.code, "USER_NOT_FOUND");
    }
}
