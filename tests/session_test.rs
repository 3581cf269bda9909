use restaurant_client::checkout::CheckoutError;
use restaurant_client::clients::mock::{MockMenuService, MockOrderService};
use restaurant_client::clients::ClientError;
use restaurant_client::lifecycle::{AppServices, RestaurantApp};
use restaurant_client::model::{ItemId, MenuCategory, MenuItem, OrderResponse};
use restaurant_client::render::{RecordingRenderer, RenderEvent, MENU_LOAD_ERROR};
use restaurant_client::session::SessionError;
use restaurant_client::storage::{MemoryTableStore, TableStore};
use rust_decimal::Decimal;
use std::sync::Arc;

const PIZZA: ItemId = ItemId(1);
const WATER: ItemId = ItemId(2);
const SOUP: ItemId = ItemId(3);

fn menu() -> Vec<MenuCategory> {
    vec![
        MenuCategory::new("Mains", vec![MenuItem::new(1, "Pizza", 9.50)]),
        MenuCategory::new(
            "Drinks",
            vec![
                MenuItem::new(2, "Water", 2.20),
                MenuItem::new(3, "Soup of the day", 5.00).unavailable(),
            ],
        ),
    ]
}

struct Harness {
    app: RestaurantApp,
    orders: MockOrderService,
    renderer: RecordingRenderer,
    tables: Arc<MemoryTableStore>,
}

async fn start_with(menu: MockMenuService, table: Option<&str>) -> Harness {
    let orders = MockOrderService::new();
    let renderer = RecordingRenderer::new();
    let tables = Arc::new(match table {
        Some(table) => MemoryTableStore::with_table(table),
        None => MemoryTableStore::new(),
    });
    let services = AppServices {
        menu: Arc::new(menu),
        orders: Arc::new(orders.clone()),
        renderer: Arc::new(renderer.clone()),
        tables: tables.clone(),
    };
    let app = RestaurantApp::start(services, 8).await;
    Harness {
        app,
        orders,
        renderer,
        tables,
    }
}

async fn start(table: Option<&str>) -> Harness {
    start_with(MockMenuService::with_menu(menu()), table).await
}

/// Walks the pizza through add, add, decrease, decrease.
#[tokio::test]
async fn test_cart_scenario_through_session() {
    let h = start(None).await;
    let session = &h.app.session;

    assert!(session.add_item(PIZZA).await.unwrap());
    let snap = session.snapshot().await.unwrap();
    assert_eq!(snap.lines.len(), 1);
    assert_eq!(snap.lines[0].quantity, 1);
    assert_eq!(snap.total, Decimal::new(950, 2));

    assert!(session.add_item(PIZZA).await.unwrap());
    let snap = session.snapshot().await.unwrap();
    assert_eq!(snap.lines[0].quantity, 2);
    assert_eq!(snap.total, Decimal::new(1900, 2));
    assert_eq!(h.renderer.last_cart().unwrap().checkout_label, "Order (19.00€)");

    assert!(session.decrease_quantity(PIZZA).await.unwrap());
    assert_eq!(session.snapshot().await.unwrap().total, Decimal::new(950, 2));

    assert!(session.decrease_quantity(PIZZA).await.unwrap());
    let snap = session.snapshot().await.unwrap();
    assert!(snap.is_empty());
    assert_eq!(snap.total, Decimal::ZERO);

    let cart = h.renderer.last_cart().unwrap();
    assert!(!cart.checkout_enabled);
    assert_eq!(cart.item_count, 0);

    h.app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ignored_commands_do_not_render() {
    let h = start(None).await;
    let session = &h.app.session;
    session.add_item(WATER).await.unwrap();
    let renders = h.renderer.cart_renders();

    assert!(!session.add_item(ItemId(99)).await.unwrap());
    assert!(!session.increase_quantity(PIZZA).await.unwrap());
    assert!(!session.remove_item(PIZZA).await.unwrap());

    assert_eq!(h.renderer.cart_renders(), renders);
    assert_eq!(session.snapshot().await.unwrap().item_count, 1);
}

#[tokio::test]
async fn test_unavailable_item_is_disabled_in_view_but_addable() {
    let h = start(None).await;
    let session = &h.app.session;

    assert!(session.add_item(SOUP).await.unwrap());
    assert!(session.add_item(SOUP).await.unwrap());

    let snap = session.snapshot().await.unwrap();
    assert_eq!(snap.lines.len(), 1);
    assert_eq!(snap.lines[0].quantity, 2);
    assert_eq!(snap.item_count, 2);

    let menu = h.renderer.events().into_iter().find_map(|event| match event {
        RenderEvent::Menu(menu) => Some(menu),
        _ => None,
    });
    assert!(!menu.unwrap().categories[1].items[1].available);
}

#[tokio::test]
async fn test_checkout_without_table_sends_nothing() {
    let h = start(None).await;
    let session = &h.app.session;
    session.add_item(PIZZA).await.unwrap();

    let err = session.checkout().await.unwrap_err();

    assert_eq!(err, SessionError::Checkout(CheckoutError::MissingTable));
    assert!(h.orders.requests().is_empty());
    assert_eq!(session.snapshot().await.unwrap().item_count, 1);
    assert_eq!(h.renderer.alerts(), vec!["Please enter a table number.".to_string()]);
}

#[tokio::test]
async fn test_checkout_with_empty_cart_sends_nothing() {
    let h = start(Some("5")).await;

    let err = h.app.session.checkout().await.unwrap_err();

    assert_eq!(err.checkout(), Some(&CheckoutError::EmptyCart));
    assert!(h.orders.requests().is_empty());
    assert_eq!(h.renderer.alerts(), vec!["Your cart is empty.".to_string()]);
}

#[tokio::test]
async fn test_successful_checkout_clears_cart() {
    let h = start(Some("12")).await;
    h.orders.expect_submit().return_ok(OrderResponse::accepted(42));
    let session = &h.app.session;
    session.add_item(PIZZA).await.unwrap();
    session.add_item(PIZZA).await.unwrap();
    session.add_item(WATER).await.unwrap();

    let confirmation = session.checkout().await.unwrap();

    assert_eq!(confirmation.order_id.map(|id| id.0), Some(42));
    assert_eq!(confirmation.table_number, "12");
    assert_eq!(confirmation.total, Decimal::new(2120, 2));

    let sent = h.orders.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].table_number, "12");
    assert_eq!(sent[0].total, 21.2);
    assert_eq!(sent[0].items.len(), 2);

    let snap = session.snapshot().await.unwrap();
    assert!(snap.is_empty());
    assert!(!snap.checkout_pending);
    assert_eq!(snap.confirmation, Some(confirmation));

    let shown = h.renderer.confirmations();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].order_id.as_deref(), Some("42"));
    assert_eq!(shown[0].total, "21.20€");
    assert!(h.renderer.alerts().is_empty());

    session.dismiss_confirmation().await.unwrap();
    assert_eq!(session.snapshot().await.unwrap().confirmation, None);
    assert_eq!(h.renderer.events().last(), Some(&RenderEvent::CloseConfirmation));

    h.orders.verify();
}

#[tokio::test]
async fn test_rejected_order_keeps_cart() {
    let h = start(Some("3")).await;
    h.orders
        .expect_submit()
        .return_ok(OrderResponse::rejected("out of stock"));
    let session = &h.app.session;
    session.add_item(PIZZA).await.unwrap();

    let err = session.checkout().await.unwrap_err();

    assert!(err.to_string().contains("out of stock"));
    assert_eq!(session.snapshot().await.unwrap().item_count, 1);
    assert_eq!(h.renderer.alerts(), vec!["Order failed: out of stock".to_string()]);
    assert!(h.renderer.confirmations().is_empty());
}

#[tokio::test]
async fn test_transport_failure_shows_generic_message() {
    let h = start(Some("3")).await;
    h.orders
        .expect_submit()
        .return_err(ClientError::Other("connection refused".into()));
    let session = &h.app.session;
    session.add_item(WATER).await.unwrap();

    let err = session.checkout().await.unwrap_err();

    assert!(matches!(err.checkout(), Some(CheckoutError::Transport(_))));
    assert_eq!(
        h.renderer.alerts(),
        vec!["Order failed. Please try again later.".to_string()]
    );
    assert_eq!(session.snapshot().await.unwrap().item_count, 1);
}

#[tokio::test]
async fn test_second_checkout_while_pending_is_refused() {
    let h = start(Some("8")).await;
    let responder = h.orders.expect_submit().defer();
    h.app.session.add_item(PIZZA).await.unwrap();

    let session = h.app.session.clone();
    let first = tokio::spawn(async move { session.checkout().await });

    while !h.app.session.snapshot().await.unwrap().checkout_pending {
        tokio::task::yield_now().await;
    }

    let err = h.app.session.checkout().await.unwrap_err();
    assert_eq!(err, SessionError::Checkout(CheckoutError::AlreadyPending));

    // The cart stays usable while the order is in flight.
    assert!(h.app.session.add_item(WATER).await.unwrap());

    responder.send(Ok(OrderResponse::accepted(7))).unwrap();
    let confirmation = first.await.unwrap().unwrap();

    assert_eq!(confirmation.order_id.map(|id| id.0), Some(7));
    let sent = h.orders.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].items.len(), 1);
    assert_eq!(sent[0].items[0].id, PIZZA);

    // Lines added while the order was in flight are cleared with the rest.
    let snap = h.app.session.snapshot().await.unwrap();
    assert!(!snap.checkout_pending);
    assert!(snap.is_empty());
    assert_eq!(snap.item_count, 0);
    h.orders.verify();
    h.app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_failure_renders_message() {
    let h = start_with(MockMenuService::failing(500), Some("1")).await;

    assert!(h
        .renderer
        .events()
        .contains(&RenderEvent::MenuError(MENU_LOAD_ERROR.to_string())));
    assert!(h.app.menu().is_empty());
    assert!(!h.app.session.add_item(PIZZA).await.unwrap());
}

#[tokio::test]
async fn test_menu_is_rendered_on_start() {
    let h = start(None).await;

    let menu = h.renderer.events().into_iter().find_map(|event| match event {
        RenderEvent::Menu(menu) => Some(menu),
        _ => None,
    });
    let menu = menu.expect("menu rendered");
    assert_eq!(menu.categories.len(), 2);
    assert!(!menu.categories[1].items[1].available);
}

#[tokio::test]
async fn test_table_is_restored_and_persisted() {
    let h = start(Some("4")).await;
    assert_eq!(h.app.session.snapshot().await.unwrap().table, "4");

    h.app.session.set_table("11").await.unwrap();

    assert_eq!(h.app.session.snapshot().await.unwrap().table, "11");
    assert_eq!(h.tables.load().unwrap().as_deref(), Some("11"));
}

#[tokio::test]
async fn test_shutdown_stops_session() {
    let h = start(None).await;
    let session = h.app.session.clone();
    drop(session);

    h.app.shutdown().await.unwrap();
}
