use crate::model::{ItemId, OrderConfirmation};
use crate::session::{Response, SessionError, SessionRequest, SessionSnapshot};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Handle to a running session actor. Cheap to clone.
///
/// This is what UI event handlers hold: every customer action becomes one
/// request, answered once the actor has applied it.
#[derive(Debug, Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Adds one unit of a menu item. `false` if the item is not on the menu.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item_id: ItemId) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::AddItem { item_id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn increase_quantity(&self, item_id: ItemId) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::IncreaseQuantity { item_id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn decrease_quantity(&self, item_id: ItemId) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::DecreaseQuantity { item_id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: ItemId) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::RemoveItem { item_id, respond_to })
            .await
    }

    /// Stores the table number (also persisted for the next run).
    #[instrument(skip(self))]
    pub async fn set_table(&self, table: &str) -> Result<(), SessionError> {
        let table = table.to_string();
        self.request(|respond_to| SessionRequest::SetTable { table, respond_to })
            .await
    }

    /// Submits the cart. Resolves once the server answered.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<OrderConfirmation, SessionError> {
        debug!("Sending checkout to session");
        self.request(|respond_to| SessionRequest::Checkout { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn dismiss_confirmation(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::DismissConfirmation { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|respond_to| SessionRequest::Snapshot { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }
}
