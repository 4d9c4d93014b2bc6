//! Profile builder — accumulates partial updates into a validated profile.

use skillsphere_core::error::ToolError;
use skillsphere_core::profile::{Profile, ProfileFields};

/// Merges partial field sets into a profile. The merge semantics
/// (set union, last-write-wins scalars, normalization) live on
/// [`Profile::merge`]; this tool adds the empty-input guard and keeps
/// the existing profile untouched on failure.
pub struct ProfileBuilder;

impl ProfileBuilder {
    /// Apply a partial update, returning the resulting profile.
    ///
    /// `existing` is not modified; the caller stores the returned profile.
    pub fn update_profile(
        existing: Option<&Profile>,
        fields: ProfileFields,
    ) -> Result<Profile, ToolError> {
        if fields.is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let mut profile = existing.cloned().unwrap_or_default();
        profile.merge(fields);
        Ok(profile)
    }
}
