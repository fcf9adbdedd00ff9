use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::UserClient;
use crate::complaint_actor::{ComplaintAction, ComplaintError};
use crate::domain::{Complaint, ComplaintCreate, ComplaintFilter, ComplaintPatch, ComplaintResponse};
use crate::user_actor::UserError;

/// Client for interacting with the Complaint actor.
#[derive(Clone)]
pub struct ComplaintClient {
    inner: ResourceClient<Complaint>,
    user_client: UserClient,
}

impl_client_methods!(ComplaintClient, Complaint, ComplaintError, complaint);

impl ComplaintClient {
    pub fn new(inner: ResourceClient<Complaint>, user_client: UserClient) -> Self {
        Self { inner, user_client }
    }

    #[instrument(skip(self, payload), fields(accuser_id = %payload.accuser_id, complainant_id = %payload.complainant_id))]
    pub async fn file(&self, payload: ComplaintCreate) -> Result<Complaint, ComplaintError> {
        debug!("Sending request");
        for id in [&payload.accuser_id, &payload.complainant_id] {
            match self.user_client.fetch_user(id.clone()).await {
                Ok(_) => {}
                Err(UserError::NotFound(id)) => return Err(ComplaintError::InvalidParty(id)),
                Err(e) => return Err(ComplaintError::ActorCommunicationError(e.to_string())),
            }
        }
        let complaint = self.inner.create(payload).await?;
        info!(complaint_id = %complaint.id, "Complaint filed");
        Ok(complaint)
    }

    #[instrument(skip(self, patch))]
    pub async fn edit(&self, id: String, patch: ComplaintPatch) -> Result<Complaint, ComplaintError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self, response))]
    pub async fn respond(
        &self,
        id: String,
        response: ComplaintResponse,
    ) -> Result<Complaint, ComplaintError> {
        debug!("Sending request");
        let complaint = self
            .inner
            .perform_action(id, ComplaintAction::Respond(response))
            .await?;
        info!(complaint_id = %complaint.id, status = ?complaint.status, "Complaint settled");
        Ok(complaint)
    }

    /// Complaints filed by one party, searchable by message or accused name.
    #[instrument(skip(self))]
    pub async fn filed_by(
        &self,
        accuser_id: String,
        filter: ComplaintFilter,
    ) -> Result<Vec<Complaint>, ComplaintError> {
        debug!("Sending request");
        let complaints = self
            .inner
            .list_where(move |c: &Complaint| c.accuser_id == accuser_id)
            .await?;
        let accused = self
            .user_client
            .users_by_ids(complaints.iter().map(|c| c.complainant_id.clone()).collect())
            .await
            .map_err(|e| ComplaintError::ActorCommunicationError(e.to_string()))?;
        Ok(complaints
            .into_iter()
            .filter(|c| {
                let name = accused.get(&c.complainant_id).map_or("", |u| u.name.as_str());
                filter.matches(c, name)
            })
            .collect())
    }
}
