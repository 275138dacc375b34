//! Profile editing flow
//!
//! The form draft is seeded from the fetched profile, edited field by field,
//! and submitted as a partial update that carries only the fields the user
//! actually changed. Clearing an optional field sends an explicit null;
//! untouched fields stay off the wire entirely.

use crate::models::{Patch, ProfileUpdate, UserProfile};

/// Draft state of the profile editor
#[derive(Debug, Clone)]
pub struct ProfileForm {
    original: UserProfile,
    full_name: String,
    phone_number: String,
    bio: String,
}

impl ProfileForm {
    /// Seed the draft from the current profile, as fetched from the backend.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            original: profile.clone(),
            full_name: profile.full_name.clone(),
            phone_number: profile.phone_number.clone(),
            bio: profile.bio.clone().unwrap_or_default(),
        }
    }

    pub fn update_field(&mut self, name: &str, raw: &str) {
        match name {
            "full_name" => self.full_name = raw.to_string(),
            "phone_number" => self.phone_number = raw.to_string(),
            "bio" => self.bio = raw.to_string(),
            _ => {}
        }
    }

    /// Build the partial update payload from the draft.
    pub fn submit(&self) -> ProfileUpdate {
        let mut update = ProfileUpdate::default();

        if self.full_name != self.original.full_name {
            update.full_name = Patch::Value(self.full_name.clone());
        }
        if self.phone_number != self.original.phone_number {
            update.phone_number = Patch::Value(self.phone_number.clone());
        }

        let original_bio = self.original.bio.as_deref().unwrap_or_default();
        if self.bio != original_bio {
            update.bio = if self.bio.is_empty() {
                // The user cleared the field; that is a deletion, not "no change".
                Patch::Null
            } else {
                Patch::Value(self.bio.clone())
            };
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn profile() -> UserProfile {
        UserProfile {
            id: 12,
            email: "amina@example.com".to_string(),
            full_name: "Amina Nakato".to_string(),
            phone_number: "+256700000000".to_string(),
            profile_picture: None,
            bio: Some("Tenant in Kampala".to_string()),
            user_type: "tenant".to_string(),
            is_verified: true,
            created_at: Utc.with_ymd_and_hms(2023, 11, 2, 8, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_untouched_form_submits_empty_update() {
        let form = ProfileForm::from_profile(&profile());
        assert!(form.submit().is_empty());
    }

    #[test]
    fn test_only_changed_fields_are_present() {
        let mut form = ProfileForm::from_profile(&profile());
        form.update_field("full_name", "Amina N. Nakato");

        let update = form.submit();
        assert_eq!(
            update.full_name,
            Patch::Value("Amina N. Nakato".to_string())
        );
        assert!(update.phone_number.is_absent());
        assert!(update.bio.is_absent());

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json.as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["full_name"]
        );
    }

    #[test]
    fn test_clearing_bio_sends_explicit_null() {
        let mut form = ProfileForm::from_profile(&profile());
        form.update_field("bio", "");

        let update = form.submit();
        assert_eq!(update.bio, Patch::Null);

        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("bio").unwrap().is_null());
    }

    #[test]
    fn test_reverting_an_edit_drops_the_field() {
        let mut form = ProfileForm::from_profile(&profile());
        form.update_field("phone_number", "+256711111111");
        form.update_field("phone_number", "+256700000000");
        assert!(form.submit().is_empty());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = ProfileForm::from_profile(&profile());
        form.update_field("email", "other@example.com");
        assert!(form.submit().is_empty());
    }
}
