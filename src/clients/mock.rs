//! # Test Doubles
//!
//! In-memory stand-ins for the REST services and for the session mailbox.
//!
//! - [`MockOrderService`], [`MockMenuService`], [`MockAdminService`]: queue
//!   expected calls with canned answers, then [`verify`](MockOrderService::verify)
//!   that every expectation was consumed.
//! - [`create_mock_session_client`] plus the `expect_*` helpers: drive a
//!   [`SessionClient`] against a raw channel you answer by hand.

use super::{AdminService, ClientError, ClientResult, MenuService, OrderService, SessionClient};
use crate::model::{
    AdminCategory, AdminItem, CategoryId, CategoryPayload, ItemId, ItemPayload, MenuCategory,
    OrderConfirmation, OrderRequest, OrderResponse,
};
use crate::session::{Response, SessionRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// ORDER SERVICE
// =============================================================================

enum OrderExpectation {
    Respond(ClientResult<OrderResponse>),
    /// Answer supplied later by the test through a oneshot.
    Deferred(oneshot::Receiver<ClientResult<OrderResponse>>),
}

/// Order service answering from a queue of expectations.
///
/// # Example
/// ```ignore
/// let mock = MockOrderService::new();
/// mock.expect_submit().return_ok(OrderResponse::accepted(42));
/// // ... hand `Arc::new(mock.clone())` to the session, check out ...
/// mock.verify();
/// ```
#[derive(Clone, Default)]
pub struct MockOrderService {
    expectations: Arc<Mutex<VecDeque<OrderExpectation>>>,
    requests: Arc<Mutex<Vec<OrderRequest>>>,
}

impl MockOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_submit(&self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<OrderRequest> {
        lock(&self.requests).clone()
    }

    /// Panics if an expected submission never happened.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn submit_order(&self, order: &OrderRequest) -> ClientResult<OrderResponse> {
        lock(&self.requests).push(order.clone());
        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(OrderExpectation::Respond(response)) => response,
            Some(OrderExpectation::Deferred(receiver)) => receiver
                .await
                .unwrap_or_else(|_| Err(ClientError::Other("deferred response dropped".into()))),
            None => panic!("Unexpected submit_order call: {:?}", order),
        }
    }
}

/// Builder for `submit_order` expectations.
pub struct SubmitExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<OrderExpectation>>>,
}

impl SubmitExpectationBuilder {
    pub fn return_ok(self, response: OrderResponse) {
        lock(&self.expectations).push_back(OrderExpectation::Respond(Ok(response)));
    }

    pub fn return_err(self, error: ClientError) {
        lock(&self.expectations).push_back(OrderExpectation::Respond(Err(error)));
    }

    /// Leaves the submission hanging until the returned sender is used.
    pub fn defer(self) -> oneshot::Sender<ClientResult<OrderResponse>> {
        let (sender, receiver) = oneshot::channel();
        lock(&self.expectations).push_back(OrderExpectation::Deferred(receiver));
        sender
    }
}

// =============================================================================
// MENU SERVICE
// =============================================================================

/// Menu service returning a fixed menu, or failing with a status.
#[derive(Clone, Default)]
pub struct MockMenuService {
    menu: Vec<MenuCategory>,
    failure_status: Option<u16>,
}

impl MockMenuService {
    pub fn with_menu(menu: Vec<MenuCategory>) -> Self {
        Self {
            menu,
            failure_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            menu: Vec::new(),
            failure_status: Some(status),
        }
    }
}

#[async_trait]
impl MenuService for MockMenuService {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>> {
        match self.failure_status {
            Some(status) => Err(ClientError::Status {
                status,
                message: None,
            }),
            None => Ok(self.menu.clone()),
        }
    }
}

// =============================================================================
// ADMIN SERVICE
// =============================================================================

/// Which admin endpoint was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCall {
    ListCategories,
    CreateCategory,
    UpdateCategory(CategoryId),
    DeleteCategory(CategoryId),
    ListItems,
    CreateItem,
    UpdateItem(ItemId),
    DeleteItem(ItemId),
}

enum AdminReply {
    Categories(Vec<AdminCategory>),
    Items(Vec<AdminItem>),
    Done,
}

struct AdminExpectation {
    call: AdminCall,
    response: ClientResult<AdminReply>,
}

#[derive(Default)]
struct AdminLog {
    calls: Vec<AdminCall>,
    categories: Vec<CategoryPayload>,
    items: Vec<ItemPayload>,
}

/// Admin service answering from a queue of expectations, checked in order.
#[derive(Clone, Default)]
pub struct MockAdminService {
    expectations: Arc<Mutex<VecDeque<AdminExpectation>>>,
    log: Arc<Mutex<AdminLog>>,
}

impl MockAdminService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(&self, call: AdminCall) -> AdminExpectationBuilder {
        AdminExpectationBuilder {
            call,
            expectations: self.expectations.clone(),
        }
    }

    pub fn calls(&self) -> Vec<AdminCall> {
        lock(&self.log).calls.clone()
    }

    /// Category bodies sent to create/update, in order.
    pub fn category_payloads(&self) -> Vec<CategoryPayload> {
        lock(&self.log).categories.clone()
    }

    pub fn item_payloads(&self) -> Vec<ItemPayload> {
        lock(&self.log).items.clone()
    }

    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn answer(&self, call: AdminCall) -> ClientResult<AdminReply> {
        lock(&self.log).calls.push(call);
        match lock(&self.expectations).pop_front() {
            Some(expectation) if expectation.call == call => expectation.response,
            Some(expectation) => panic!(
                "Unexpected admin call {:?}, expected {:?}",
                call, expectation.call
            ),
            None => panic!("Unexpected admin call {:?}", call),
        }
    }

    fn answer_done(&self, call: AdminCall) -> ClientResult<()> {
        match self.answer(call)? {
            AdminReply::Done => Ok(()),
            _ => panic!("Expectation for {:?} carries a list, not a unit reply", call),
        }
    }
}

#[async_trait]
impl AdminService for MockAdminService {
    async fn list_categories(&self) -> ClientResult<Vec<AdminCategory>> {
        match self.answer(AdminCall::ListCategories)? {
            AdminReply::Categories(categories) => Ok(categories),
            _ => panic!("Expectation for ListCategories must return categories"),
        }
    }

    async fn create_category(&self, category: &CategoryPayload) -> ClientResult<()> {
        lock(&self.log).categories.push(category.clone());
        self.answer_done(AdminCall::CreateCategory)
    }

    async fn update_category(&self, id: CategoryId, category: &CategoryPayload) -> ClientResult<()> {
        lock(&self.log).categories.push(category.clone());
        self.answer_done(AdminCall::UpdateCategory(id))
    }

    async fn delete_category(&self, id: CategoryId) -> ClientResult<()> {
        self.answer_done(AdminCall::DeleteCategory(id))
    }

    async fn list_items(&self) -> ClientResult<Vec<AdminItem>> {
        match self.answer(AdminCall::ListItems)? {
            AdminReply::Items(items) => Ok(items),
            _ => panic!("Expectation for ListItems must return items"),
        }
    }

    async fn create_item(&self, item: &ItemPayload) -> ClientResult<()> {
        lock(&self.log).items.push(item.clone());
        self.answer_done(AdminCall::CreateItem)
    }

    async fn update_item(&self, id: ItemId, item: &ItemPayload) -> ClientResult<()> {
        lock(&self.log).items.push(item.clone());
        self.answer_done(AdminCall::UpdateItem(id))
    }

    async fn delete_item(&self, id: ItemId) -> ClientResult<()> {
        self.answer_done(AdminCall::DeleteItem(id))
    }
}

/// Builder for admin expectations.
pub struct AdminExpectationBuilder {
    call: AdminCall,
    expectations: Arc<Mutex<VecDeque<AdminExpectation>>>,
}

impl AdminExpectationBuilder {
    fn push(self, response: ClientResult<AdminReply>) {
        lock(&self.expectations).push_back(AdminExpectation {
            call: self.call,
            response,
        });
    }

    /// Successful create/update/delete.
    pub fn return_ok(self) {
        self.push(Ok(AdminReply::Done));
    }

    pub fn return_categories(self, categories: Vec<AdminCategory>) {
        self.push(Ok(AdminReply::Categories(categories)));
    }

    pub fn return_items(self, items: Vec<AdminItem>) {
        self.push(Ok(AdminReply::Items(items)));
    }

    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }
}

// =============================================================================
// RAW SESSION CHANNEL
// =============================================================================

/// Creates a session client whose requests land on a receiver you control.
///
/// Useful to test code that talks to a session without running the actor:
/// read the request with one of the `expect_*` helpers and answer it.
pub fn create_mock_session_client(
    buffer_size: usize,
) -> (SessionClient, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Next request, whatever it is.
pub async fn expect_request(receiver: &mut mpsc::Receiver<SessionRequest>) -> Option<SessionRequest> {
    receiver.recv().await
}

/// Helper to verify that the next message is an AddItem request
pub async fn expect_add_item(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(ItemId, Response<bool>)> {
    match receiver.recv().await {
        Some(SessionRequest::AddItem { item_id, respond_to }) => Some((item_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Checkout request
pub async fn expect_checkout(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<Response<OrderConfirmation>> {
    match receiver.recv().await {
        Some(SessionRequest::Checkout { respond_to }) => Some(respond_to),
        _ => None,
    }
}
