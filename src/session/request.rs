use super::{SessionError, SessionSnapshot};
use crate::checkout::CheckoutError;
use crate::model::{ItemId, OrderConfirmation};
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Messages processed by the session actor, one at a time.
///
/// Cart commands answer `true` when the cart changed (and was redrawn).
#[derive(Debug)]
pub enum SessionRequest {
    AddItem {
        item_id: ItemId,
        respond_to: Response<bool>,
    },
    IncreaseQuantity {
        item_id: ItemId,
        respond_to: Response<bool>,
    },
    DecreaseQuantity {
        item_id: ItemId,
        respond_to: Response<bool>,
    },
    RemoveItem {
        item_id: ItemId,
        respond_to: Response<bool>,
    },
    SetTable {
        table: String,
        respond_to: Response<()>,
    },
    Checkout {
        respond_to: Response<OrderConfirmation>,
    },
    /// Posted by the submission task back into the mailbox.
    #[doc(hidden)]
    CheckoutFinished {
        outcome: Result<OrderConfirmation, CheckoutError>,
        respond_to: Response<OrderConfirmation>,
    },
    DismissConfirmation {
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<SessionSnapshot>,
    },
}
