//! Brand settings service.

use tracing::info;

use crate::event::EventKind;
use crate::record::BrandProfile;
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("brand name is empty")]
    EmptyBrandName,
    #[error("support email is not an address: {0}")]
    InvalidSupportEmail(String),
}

impl crate::event::ErrorCode for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBrandName => "E_SETTINGS_EMPTY_BRAND_NAME",
            Self::InvalidSupportEmail(_) => "E_SETTINGS_INVALID_SUPPORT_EMAIL",
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Current brand profile.
pub async fn profile(state: &ConsoleState) -> BrandProfile {
    let inner = state.inner.read().await;
    inner.profile.clone()
}

/// Replace the brand profile.
///
/// # Errors
///
/// Returns `EmptyBrandName` for a blank name, `InvalidSupportEmail` when
/// the address has no user or domain part.
pub async fn update_profile(state: &ConsoleState, profile: BrandProfile) -> Result<BrandProfile, SettingsError> {
    if profile.brand_name.trim().is_empty() {
        return Err(SettingsError::EmptyBrandName);
    }
    if !is_plausible_email(&profile.support_email) {
        return Err(SettingsError::InvalidSupportEmail(profile.support_email));
    }

    {
        let mut inner = state.inner.write().await;
        inner.profile = profile.clone();
        inner.version += 1;
    }

    info!(brand = %profile.brand_name, "brand profile updated");
    state.publish(EventKind::ProfileUpdated).await;
    Ok(profile)
}

/// Minimal shape check: one `@` with non-empty user and domain parts.
fn is_plausible_email(addr: &str) -> bool {
    match addr.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
