//! # Record Store Actor
//!
//! A task that owns a `HashMap` of records and serves create/get requests
//! over a channel. The map is only ever touched from the actor's loop, so
//! requests are processed one at a time and no lock is needed.
//!
//! - [`Record`]: what a stored type must provide (id type, draft type, checks).
//! - [`StoreActor`]: the server half; call [`run`](StoreActor::run) in a task.
//! - [`StoreClient`]: the cloneable handle used to send requests.

use super::StoreError;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// A type the store can hold.
pub trait Record: Clone + Send + Sync + 'static {
    /// Key assigned by the store on create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload a record is created from.
    type Draft: Send + Sync + Debug;

    /// Builds the record under its freshly issued id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Runs before the record is inserted; an error refuses the create.
    fn on_create(&self) -> Result<(), String> {
        Ok(())
    }
}

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Create {
        draft: T::Draft,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}

pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Record> StoreActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, StoreClient { sender })
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        let record_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { draft, respond_to } => {
                    debug!(record_type, ?draft, "Create");
                    let id = (self.next_id)();
                    let record = T::from_draft(id.clone(), draft);
                    if let Err(reason) = record.on_create() {
                        warn!(record_type, error = %reason, "Create rejected");
                        let _ = respond_to.send(Err(StoreError::Rejected(reason)));
                        continue;
                    }
                    self.records.insert(id.clone(), record);
                    info!(record_type, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}

/// Handle for sending requests to a [`StoreActor`].
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub async fn create(&self, draft: T::Draft) -> Result<T::Id, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { draft, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    impl Record for Note {
        type Id = u64;
        type Draft = String;

        fn from_draft(id: u64, text: String) -> Self {
            Note { id, text }
        }

        fn on_create(&self) -> Result<(), String> {
            if self.text.is_empty() {
                return Err("empty note".into());
            }
            Ok(())
        }
    }

    fn counter() -> impl Fn() -> u64 + Send + Sync + 'static {
        let next = Arc::new(AtomicU64::new(1));
        move || next.fetch_add(1, Ordering::SeqCst)
    }

    #[tokio::test]
    async fn create_then_get() {
        let (actor, client) = StoreActor::<Note>::new(8, counter());
        let handle = tokio::spawn(actor.run());

        let id = client.create("hello".into()).await.unwrap();
        assert_eq!(id, 1);
        let note = client.get(id).await.unwrap().unwrap();
        assert_eq!(note, Note { id: 1, text: "hello".into() });
        assert_eq!(client.get(99).await.unwrap(), None);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn rejected_record_is_not_stored() {
        let (actor, client) = StoreActor::<Note>::new(8, counter());
        tokio::spawn(actor.run());

        assert_eq!(
            client.create(String::new()).await,
            Err(StoreError::Rejected("empty note".into()))
        );
        // The id was consumed but nothing was inserted under it.
        assert_eq!(client.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn requests_after_shutdown_fail() {
        let (actor, client) = StoreActor::<Note>::new(8, counter());
        drop(actor);
        assert_eq!(client.create("late".into()).await, Err(StoreError::Closed));
    }
}
