use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Failures raised by the framework itself rather than by an entity's hooks.
///
/// Every entity error type converts from this, so clients surface a single
/// error type per resource.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Implements `From<FrameworkError>` for a resource error enum that has
/// `NotFound(String)`, `AlreadyExists(String)` and
/// `ActorCommunicationError(String)` variants.
#[macro_export]
macro_rules! impl_from_framework_error {
    ($error:ident) => {
        impl From<$crate::actor_framework::FrameworkError> for $error {
            fn from(e: $crate::actor_framework::FrameworkError) -> Self {
                use $crate::actor_framework::FrameworkError;
                match e {
                    FrameworkError::NotFound(id) => $error::NotFound(id),
                    FrameworkError::AlreadyExists(id) => $error::AlreadyExists(id),
                    other => $error::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

/// Trait that any document must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: From<FrameworkError> + Send + Sync + Debug + 'static;

    fn id(&self) -> &Self::Id;

    /// Documents keyed by something the caller already knows (a cart keyed by
    /// its buyer) return that key here instead of taking a generated one.
    fn requested_id(_payload: &Self::CreatePayload) -> Option<Self::Id> {
        None
    }

    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// Two documents with the same key cannot coexist in a store. Checked by
    /// the actor on create and update, so no interleaving can slip past it.
    fn conflict_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a document-specific action atomically with respect to other
    /// requests for the same store.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Selection applied inside the actor when listing documents.
pub struct Predicate<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Predicate<T> {
    pub fn new(f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        filter: Option<Predicate<T>>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        info!(actor = self.name, "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self
                        .store
                        .values()
                        .filter(|item| filter.as_ref().map_or(true, |f| f.matches(item)))
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = match self.store.get(&id) {
                        Some(item) => item.on_delete(),
                        None => Err(FrameworkError::NotFound(id.to_string()).into()),
                    };
                    if result.is_ok() {
                        self.store.shift_remove(&id);
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action),
                        None => Err(FrameworkError::NotFound(id.to_string()).into()),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(actor = self.name, documents = self.store.len(), "Actor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, T::Error> {
        let id = match T::requested_id(&payload) {
            Some(id) if self.store.contains_key(&id) => {
                return Err(FrameworkError::AlreadyExists(id.to_string()).into());
            }
            Some(id) => id,
            None => (self.next_id_fn)(),
        };
        let mut item = T::from_create(id.clone(), payload)?;
        item.on_create()?;
        self.ensure_unique(&item)?;
        debug!(actor = self.name, id = %id, "Document created");
        self.store.insert(id, item.clone());
        Ok(item)
    }

    /// Applies the patch to a copy so a rejected update leaves the stored
    /// document untouched.
    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let mut item = match self.store.get(&id) {
            Some(item) => item.clone(),
            None => return Err(FrameworkError::NotFound(id.to_string()).into()),
        };
        item.on_update(patch)?;
        self.ensure_unique(&item)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    fn ensure_unique(&self, item: &T) -> Result<(), T::Error> {
        let Some(key) = item.conflict_key() else {
            return Ok(());
        };
        let taken = self.store.values().any(|other| {
            other.id() != item.id() && other.conflict_key().as_deref() == Some(key.as_str())
        });
        if taken {
            return Err(FrameworkError::AlreadyExists(key).into());
        }
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` on the channel type's behalf.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Stores a new document and returns it as persisted.
    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Like [`ResourceClient::get`] but a missing document is an error.
    pub async fn fetch(&self, id: T::Id) -> Result<T, T::Error> {
        let key = id.to_string();
        self.get(id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(key).into())
    }

    pub async fn list(&self, filter: Option<Predicate<T>>) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn list_where(
        &self,
        f: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, T::Error> {
        self.list(Some(Predicate::new(f))).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), T::Error> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        label: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
        key: Option<String>,
    }

    const UNIQUE_PREFIX: &str = "unique:";

    #[derive(Debug)]
    enum CounterAction {
        Add(u32),
        Take(u32),
    }

    #[derive(Debug, Clone, Error, PartialEq)]
    enum CounterError {
        #[error("counter underflow")]
        Underflow,
        #[error("label is required")]
        MissingLabel,
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    impl Entity for Counter {
        type Id = String;
        type CreatePayload = CounterCreate;
        type Patch = String;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn id(&self) -> &String {
            &self.id
        }

        fn requested_id(payload: &CounterCreate) -> Option<String> {
            payload.key.clone()
        }

        fn conflict_key(&self) -> Option<String> {
            self.label
                .starts_with(UNIQUE_PREFIX)
                .then(|| self.label.clone())
        }

        fn from_create(id: String, payload: CounterCreate) -> Result<Self, CounterError> {
            if payload.label.is_empty() {
                return Err(CounterError::MissingLabel);
            }
            Ok(Self {
                id,
                label: payload.label,
                value: 0,
            })
        }

        fn on_update(&mut self, patch: String) -> Result<(), CounterError> {
            self.label = patch;
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            match action {
                CounterAction::Add(n) => self.value += n,
                CounterAction::Take(n) => {
                    self.value = self.value.checked_sub(n).ok_or(CounterError::Underflow)?;
                }
            }
            Ok(self.value)
        }
    }

    fn spawn_counters() -> ResourceClient<Counter> {
        let seq = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("counter_{}", seq.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new("counters", 10, next_id);
        tokio::spawn(actor.run());
        client
    }

    fn create(label: &str) -> CounterCreate {
        CounterCreate {
            label: label.into(),
            key: None,
        }
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_counters();
        let id = client.create(create("apples")).await.unwrap().id;
        assert_eq!(id, "counter_1");

        assert_eq!(client.perform_action(id.clone(), CounterAction::Add(5)).await, Ok(5));
        assert_eq!(
            client.perform_action(id.clone(), CounterAction::Take(9)).await,
            Err(CounterError::Underflow)
        );

        // A failed action leaves the document untouched
        let counter = client.fetch(id).await.unwrap();
        assert_eq!(counter.value, 5);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_and_filters() {
        let client = spawn_counters();
        for label in ["a", "b", "c", "d"] {
            client.create(create(label)).await.unwrap();
        }
        client.delete("counter_2".to_string()).await.unwrap();

        let labels: Vec<String> = client
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["a", "c", "d"]);

        let only_d = client.list_where(|c| c.label == "d").await.unwrap();
        assert_eq!(only_d.len(), 1);
    }

    #[tokio::test]
    async fn test_requested_ids_are_unique() {
        let client = spawn_counters();
        let keyed = CounterCreate {
            label: "cart".into(),
            key: Some("buyer_1".into()),
        };
        assert_eq!(client.create(keyed).await.map(|c| c.id), Ok("buyer_1".to_string()));

        let again = CounterCreate {
            label: "cart".into(),
            key: Some("buyer_1".into()),
        };
        assert_eq!(
            client.create(again).await,
            Err(CounterError::Framework(FrameworkError::AlreadyExists("buyer_1".into())))
        );
    }

    #[tokio::test]
    async fn test_missing_documents_and_rejected_payloads() {
        let client = spawn_counters();
        assert_eq!(client.create(create("")).await, Err(CounterError::MissingLabel));
        assert_eq!(
            client.update("nope".into(), "x".into()).await,
            Err(CounterError::Framework(FrameworkError::NotFound("nope".into())))
        );
        assert_eq!(client.get("nope".into()).await, Ok(None));
        assert!(matches!(
            client.fetch("nope".into()).await,
            Err(CounterError::Framework(FrameworkError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_conflict_keys_are_enforced_on_create_and_update() {
        let client = spawn_counters();
        client.create(create("unique:pears")).await.unwrap();
        let plums = client.create(create("unique:plums")).await.unwrap();

        assert_eq!(
            client.create(create("unique:pears")).await,
            Err(CounterError::Framework(FrameworkError::AlreadyExists("unique:pears".into())))
        );
        assert_eq!(
            client.update(plums.id.clone(), "unique:pears".into()).await,
            Err(CounterError::Framework(FrameworkError::AlreadyExists("unique:pears".into())))
        );
        assert_eq!(client.fetch(plums.id.clone()).await.unwrap().label, "unique:plums");

        // Re-saving a document under its own key is not a conflict
        assert!(client.update(plums.id, "unique:plums".into()).await.is_ok());
    }
}
