use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{is_blank, User, UserCreate, UserPatch};
use super::UserError;

fn check_name(name: &str) -> Result<(), UserError> {
    if is_blank(name) {
        return Err(UserError::ValidationError("name is required".into()));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), UserError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!("invalid email: {email}"))),
    }
}

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: UserCreate) -> Result<Self, UserError> {
        check_name(&payload.name)?;
        check_email(&payload.email)?;
        let now = Utc::now();
        Ok(Self {
            id,
            role: payload.role,
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            profile: payload.profile,
            created_at: now,
            updated_at: now,
        })
    }

    /// One account per email address, across both roles.
    fn conflict_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(name) = &patch.name {
            check_name(name)?;
        }
        if let Some(email) = &patch.email {
            check_email(email)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            self.email = email.trim().to_lowercase();
        }
        self.profile.merge(patch.profile);
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}
