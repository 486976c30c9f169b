use crate::{
    ClientConfig, Error,
    models::{Session, UserProfile},
};

/// Read-only view over the browser's persistent key/value storage.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// One-shot check that a signed-in user exists before the page does any work.
///
/// Both the user id and the profile blob written by the login page must be
/// present, the profile must be a JSON object and the id an integer. Any
/// failure means the caller redirects to `ClientConfig::login_path`.
pub fn check_session(storage: &dyn SessionStorage, config: &ClientConfig) -> Result<Session, Error> {
    let token = storage
        .get_item(&config.user_id_key)
        .filter(|token| !token.trim().is_empty());
    let profile = storage
        .get_item(&config.profile_key)
        .filter(|profile| !profile.trim().is_empty());
    let (Some(token), Some(profile)) = (token, profile) else {
        tracing::warn!("No stored session, redirecting to {}", config.login_path);
        return Err(Error::SessionMissing);
    };

    let profile: UserProfile = serde_json::from_str(&profile).map_err(|e| {
        tracing::error!("Failed to parse stored user profile: {}", e);
        e
    })?;
    let user_id = token
        .trim()
        .parse()
        .map_err(|_| Error::InvalidUserId(token.clone()))?;

    tracing::info!("Session found for user {}", user_id);
    Ok(Session { user_id, profile })
}
