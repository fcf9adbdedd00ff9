use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{
    is_blank, Complaint, ComplaintCreate, ComplaintPatch, ComplaintResponse, ComplaintStatus,
};
use super::{ComplaintAction, ComplaintError};

impl Complaint {
    fn ensure_pending(&self) -> Result<(), ComplaintError> {
        if self.status != ComplaintStatus::Pending {
            return Err(ComplaintError::AlreadySettled(self.id.clone()));
        }
        Ok(())
    }

    fn settle(&mut self, response: ComplaintResponse) -> Result<Complaint, ComplaintError> {
        self.ensure_pending()?;
        if response.status == ComplaintStatus::Pending {
            return Err(ComplaintError::ValidationError(
                "a response must resolve or reject the complaint".into(),
            ));
        }
        self.status = response.status;
        self.admin_response = response.admin_response.filter(|r| !is_blank(r));
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}

impl Entity for Complaint {
    type Id = String;
    type CreatePayload = ComplaintCreate;
    type Patch = ComplaintPatch;
    type Action = ComplaintAction;
    type ActionResult = Complaint;
    type Error = ComplaintError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: ComplaintCreate) -> Result<Self, ComplaintError> {
        if is_blank(&payload.message) {
            return Err(ComplaintError::ValidationError("message is required".into()));
        }
        if payload.accuser_id == payload.complainant_id {
            return Err(ComplaintError::InvalidParty(
                "cannot file a complaint against yourself".into(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            accuser_id: payload.accuser_id,
            complainant_id: payload.complainant_id,
            message: payload.message.trim().to_string(),
            image: payload.image,
            status: ComplaintStatus::Pending,
            admin_response: None,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, patch: ComplaintPatch) -> Result<(), ComplaintError> {
        if patch.accuser_id != self.accuser_id {
            return Err(ComplaintError::NotAccuser {
                complaint_id: self.id.clone(),
                accuser_id: patch.accuser_id,
            });
        }
        self.ensure_pending()?;
        if let Some(message) = &patch.message {
            if is_blank(message) {
                return Err(ComplaintError::ValidationError("message is required".into()));
            }
        }
        if let Some(message) = patch.message {
            self.message = message.trim().to_string();
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, action: ComplaintAction) -> Result<Complaint, ComplaintError> {
        match action {
            ComplaintAction::Respond(response) => self.settle(response),
        }
    }
}
