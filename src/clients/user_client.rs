use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{PeopleFilter, Role, User, UserCreate, UserPatch};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Registers a buyer or seller. Emails are unique across both roles.
    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn register(&self, role: Role, mut payload: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        payload.role = role;
        let user = self.inner.create(payload).await?;
        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }

    /// Fetches a user and checks it has the expected role.
    #[instrument(skip(self))]
    pub async fn require_role(&self, id: String, role: Role) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.fetch(id).await?;
        if user.role != role {
            return Err(UserError::WrongRole {
                id: user.id,
                expected: role,
            });
        }
        Ok(user)
    }

    /// Resolves many users in one round trip, keyed by id.
    #[instrument(skip(self, ids))]
    pub async fn users_by_ids(&self, ids: Vec<String>) -> Result<HashMap<String, User>, UserError> {
        debug!(count = ids.len(), "Sending request");
        let users = self
            .inner
            .list_where(move |u: &User| ids.contains(&u.id))
            .await?;
        Ok(users.into_iter().map(|u| (u.id.clone(), u)).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self, role: Role, filter: PeopleFilter) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner
            .list_where(move |u: &User| u.role == role && filter.matches(&u.name, &u.email))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn spawn_users() -> UserClient {
        let seq = AtomicU64::new(1);
        let next_id = move || format!("user_{}", seq.fetch_add(1, Ordering::SeqCst));
        let (actor, inner) = ResourceActor::new("users", 10, next_id);
        tokio::spawn(actor.run());
        UserClient::new(inner)
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let users = spawn_users();
        users
            .register(Role::Buyer, UserCreate::new(Role::Buyer, "Rahim", "rahim@example.com"))
            .await
            .unwrap();

        let again = users
            .register(Role::Seller, UserCreate::new(Role::Seller, "Other", "RAHIM@example.com"))
            .await;
        assert_eq!(again, Err(UserError::AlreadyExists("rahim@example.com".into())));
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_emails_unique() {
        let users = spawn_users();
        let attempts = (0..16).map(|i| {
            let users = users.clone();
            tokio::spawn(async move {
                let payload = UserCreate::new(Role::Buyer, &format!("Rahim {i}"), "rahim@example.com");
                users.register(Role::Buyer, payload).await
            })
        });
        let mut registered = 0;
        for attempt in attempts.collect::<Vec<_>>() {
            if attempt.await.unwrap().is_ok() {
                registered += 1;
            }
        }
        assert_eq!(registered, 1);
    }

    #[tokio::test]
    async fn test_email_change_cannot_take_another_users_address() {
        let users = spawn_users();
        users
            .register(Role::Buyer, UserCreate::new(Role::Buyer, "Rahim", "rahim@example.com"))
            .await
            .unwrap();
        let karim = users
            .register(Role::Seller, UserCreate::new(Role::Seller, "Karim", "karim@example.com"))
            .await
            .unwrap();

        let patch = UserPatch {
            email: Some("Rahim@Example.com".into()),
            ..UserPatch::default()
        };
        assert!(matches!(
            users.update_user(karim.id.clone(), patch).await,
            Err(UserError::AlreadyExists(_))
        ));
        assert_eq!(users.fetch_user(karim.id).await.unwrap().email, "karim@example.com");
    }

    #[tokio::test]
    async fn test_require_role() {
        let users = spawn_users();
        let buyer = users
            .register(Role::Buyer, UserCreate::new(Role::Buyer, "Rahim", "rahim@example.com"))
            .await
            .unwrap();

        assert!(users.require_role(buyer.id.clone(), Role::Buyer).await.is_ok());
        assert_eq!(
            users.require_role(buyer.id.clone(), Role::Seller).await,
            Err(UserError::WrongRole {
                id: buyer.id,
                expected: Role::Seller
            })
        );
    }
}
