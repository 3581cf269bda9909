use super::{Response, Session, SessionError, SessionRequest};
use crate::checkout::{self, CheckoutError};
use crate::clients::{OrderService, SessionClient};
use crate::model::{ItemId, OrderConfirmation};
use crate::render::{ConfirmationView, Renderer};
use crate::storage::TableStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Collaborators injected into [`SessionActor::run`].
#[derive(Clone)]
pub struct SessionContext {
    pub orders: Arc<dyn OrderService>,
    pub renderer: Arc<dyn Renderer>,
    pub tables: Arc<dyn TableStore>,
}

/// Owns one customer's [`Session`] and serializes every change to it.
///
/// # Concurrency Model
/// Requests are handled strictly one after another, so the cart needs no
/// lock. An order submission is the only thing that waits on I/O: it runs in
/// its own task and its result comes back as a `CheckoutFinished` message,
/// so cart requests keep flowing while the order is in flight.
///
/// The actor only keeps a weak handle on its own mailbox. It stops once every
/// [`SessionClient`] is dropped and no submission is outstanding.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    mailbox: mpsc::WeakSender<SessionRequest>,
    session: Session,
}

impl SessionActor {
    pub fn new(session: Session, buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            mailbox: sender.downgrade(),
            session,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until the mailbox closes.
    pub async fn run(mut self, ctx: SessionContext) {
        info!(table = %self.session.table, "Session started");
        ctx.renderer.render_cart(&self.session.cart_view());

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &ctx);
        }

        info!(
            lines = self.session.cart.lines().len(),
            "Session shutdown"
        );
    }

    fn handle(&mut self, msg: SessionRequest, ctx: &SessionContext) {
        match msg {
            SessionRequest::AddItem { item_id, respond_to } => {
                let menu = &self.session.menu;
                let changed = self.session.cart.add_item(menu, item_id);
                self.after_cart_command("AddItem", item_id, changed, ctx, respond_to);
            }
            SessionRequest::IncreaseQuantity { item_id, respond_to } => {
                let changed = self.session.cart.increase_quantity(item_id);
                self.after_cart_command("IncreaseQuantity", item_id, changed, ctx, respond_to);
            }
            SessionRequest::DecreaseQuantity { item_id, respond_to } => {
                let changed = self.session.cart.decrease_quantity(item_id);
                self.after_cart_command("DecreaseQuantity", item_id, changed, ctx, respond_to);
            }
            SessionRequest::RemoveItem { item_id, respond_to } => {
                let changed = self.session.cart.remove_item(item_id);
                self.after_cart_command("RemoveItem", item_id, changed, ctx, respond_to);
            }
            SessionRequest::SetTable { table, respond_to } => {
                debug!(%table, "SetTable");
                if let Err(e) = ctx.tables.save(&table) {
                    warn!(error = %e, "Could not persist table number");
                }
                self.session.table = table;
                let _ = respond_to.send(Ok(()));
            }
            SessionRequest::Checkout { respond_to } => self.start_checkout(ctx, respond_to),
            SessionRequest::CheckoutFinished { outcome, respond_to } => {
                self.finish_checkout(outcome, ctx, respond_to)
            }
            SessionRequest::DismissConfirmation { respond_to } => {
                debug!("DismissConfirmation");
                self.session.confirmation = None;
                ctx.renderer.close_confirmation();
                let _ = respond_to.send(Ok(()));
            }
            SessionRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.session.snapshot()));
            }
        }
    }

    fn after_cart_command(
        &self,
        command: &'static str,
        item_id: ItemId,
        changed: bool,
        ctx: &SessionContext,
        respond_to: Response<bool>,
    ) {
        if changed {
            info!(
                command,
                %item_id,
                items = self.session.cart.item_count(),
                total = %self.session.cart.total(),
                "Cart updated"
            );
            ctx.renderer.render_cart(&self.session.cart_view());
        } else {
            debug!(command, %item_id, "Ignored");
        }
        let _ = respond_to.send(Ok(changed));
    }

    fn start_checkout(&mut self, ctx: &SessionContext, respond_to: Response<OrderConfirmation>) {
        if self.session.checkout_pending {
            warn!("Checkout already pending");
            self.reject(CheckoutError::AlreadyPending, ctx, respond_to);
            return;
        }

        let request = match checkout::prepare_order(&self.session.cart, &self.session.table) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Checkout rejected");
                self.reject(e, ctx, respond_to);
                return;
            }
        };

        let Some(mailbox) = self.mailbox.upgrade() else {
            let _ = respond_to.send(Err(SessionError::ActorClosed));
            return;
        };

        self.session.checkout_pending = true;
        let total = self.session.cart.total();
        let orders = Arc::clone(&ctx.orders);
        info!(table = %request.table_number, lines = request.items.len(), "Checkout started");

        tokio::spawn(async move {
            let outcome = checkout::submit_order(orders.as_ref(), request, total).await;
            if mailbox
                .send(SessionRequest::CheckoutFinished { outcome, respond_to })
                .await
                .is_err()
            {
                warn!("Session closed before the order completed");
            }
        });
    }

    fn finish_checkout(
        &mut self,
        outcome: Result<OrderConfirmation, CheckoutError>,
        ctx: &SessionContext,
        respond_to: Response<OrderConfirmation>,
    ) {
        self.session.checkout_pending = false;
        match outcome {
            Ok(confirmation) => {
                info!(order_id = ?confirmation.order_id, "Checkout complete");
                ctx.renderer
                    .render_confirmation(&ConfirmationView::from(&confirmation));
                self.session.confirmation = Some(confirmation.clone());
                self.session.cart.clear();
                ctx.renderer.render_cart(&self.session.cart_view());
                let _ = respond_to.send(Ok(confirmation));
            }
            Err(e) => self.reject(e, ctx, respond_to),
        }
    }

    fn reject(
        &self,
        error: CheckoutError,
        ctx: &SessionContext,
        respond_to: Response<OrderConfirmation>,
    ) {
        ctx.renderer.alert(&error.user_message());
        let _ = respond_to.send(Err(error.into()));
    }
}
