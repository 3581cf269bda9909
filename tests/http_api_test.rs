use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use restaurant_client::admin::{AdminConsole, AdminOutcome};
use restaurant_client::clients::{AdminService, ClientError, HttpApi, MenuService, OrderService};
use restaurant_client::config::ClientConfig;
use restaurant_client::model::{
    CategoryForm, CategoryId, CategoryPayload, ItemForm, ItemId, OrderLine, OrderRequest,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type Calls = Arc<Mutex<Vec<String>>>;

fn record(calls: &Calls, call: String) {
    calls.lock().unwrap().push(call);
}

async fn menu() -> Json<Value> {
    Json(json!([
        {
            "name": "Mains",
            "description": "From the oven",
            "items": [
                {"id": 1, "name": "Pizza", "price": 9.5, "available": true, "image_url": null},
                {"id": 2, "name": "Lasagna", "description": "Beef", "price": 12.0, "available": false}
            ]
        },
        {"name": "Drinks", "items": [{"id": 3, "name": "Water", "price": 2.2}]}
    ]))
}

async fn order(State(calls): State<Calls>, Json(body): Json<Value>) -> Response {
    record(&calls, format!("POST order {}", body));
    match body["table_number"].as_str() {
        Some("0") => (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Invalid table"})),
        )
            .into_response(),
        Some("500") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => Json(json!({"success": true, "order_id": 42})).into_response(),
    }
}

async fn list_categories() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Mains", "description": null, "order": 0},
        {"id": 2, "name": "Drinks", "order": 1}
    ]))
}

async fn create_category(State(calls): State<Calls>, Json(body): Json<CategoryPayload>) -> Response {
    record(&calls, format!("POST category {}", body.name));
    if body.name == "Mains" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Category already exists"})),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({"success": true, "id": 3}))).into_response()
}

async fn update_category(
    State(calls): State<Calls>,
    Path(id): Path<u32>,
    Json(body): Json<CategoryPayload>,
) -> StatusCode {
    record(&calls, format!("PUT category {} {}", id, body.name));
    StatusCode::OK
}

async fn delete_category(State(calls): State<Calls>, Path(id): Path<u32>) -> StatusCode {
    record(&calls, format!("DELETE category {}", id));
    if id == 99 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn list_items() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn update_item(State(calls): State<Calls>, Path(id): Path<u32>) -> Json<Value> {
    record(&calls, format!("PUT item {}", id));
    Json(json!({"success": false, "error": "Category not found"}))
}

async fn delete_item() -> StatusCode {
    StatusCode::FORBIDDEN
}

async fn serve(calls: Calls) -> String {
    let app = Router::new()
        .route("/restaurant/api/client/menu", get(menu))
        .route("/restaurant/api/client/order", post(order))
        .route(
            "/restaurant/api/admin/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/restaurant/api/admin/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/restaurant/api/admin/items", get(list_items))
        .route(
            "/restaurant/api/admin/items/{id}",
            put(update_item).delete(delete_item),
        )
        .with_state(calls);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/restaurant/api", addr)
}

async fn api() -> (HttpApi, Calls) {
    let calls = Calls::default();
    let base = serve(calls.clone()).await;
    let api = HttpApi::new(&ClientConfig::new(base).with_timeout(5)).unwrap();
    (api, calls)
}

fn order_for(table: &str) -> OrderRequest {
    OrderRequest {
        table_number: table.into(),
        total: 19.0,
        items: vec![OrderLine {
            id: ItemId(1),
            quantity: 2,
            price: 9.5,
        }],
    }
}

#[tokio::test]
async fn test_fetch_menu_decodes_defaults() {
    let (api, _) = api().await;

    let menu = api.fetch_menu().await.unwrap();

    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].description.as_deref(), Some("From the oven"));
    assert_eq!(menu[0].items[0].image_url, None);
    assert!(!menu[0].items[1].available);
    assert!(menu[1].items[0].available);
    assert_eq!(menu[1].description, None);
}

#[tokio::test]
async fn test_order_accepted() {
    let (api, calls) = api().await;

    let response = api.submit_order(&order_for("12")).await.unwrap();

    assert!(response.success);
    assert_eq!(response.order_id.map(|id| id.0), Some(42));

    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded.len(), 1);
    let body: Value = serde_json::from_str(recorded[0].trim_start_matches("POST order ")).unwrap();
    assert_eq!(body["table_number"], "12");
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_order_rejection_body_is_decoded_despite_status() {
    let (api, _) = api().await;

    let response = api.submit_order(&order_for("0")).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Invalid table"));
}

#[tokio::test]
async fn test_order_undecodable_body_is_transport_error() {
    let (api, _) = api().await;

    let err = api.submit_order(&order_for("500")).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let config = ClientConfig::new("http://127.0.0.1:1/restaurant/api").with_timeout(2);
    let api = HttpApi::new(&config).unwrap();

    let err = api.fetch_menu().await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_admin_verbs_and_paths() {
    let (api, calls) = api().await;
    let payload = CategoryPayload {
        name: "Desserts".into(),
        description: String::new(),
        order: 2,
    };

    let categories = api.list_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].order, 1);

    api.create_category(&payload).await.unwrap();
    api.update_category(CategoryId(2), &payload).await.unwrap();
    api.delete_category(CategoryId(2)).await.unwrap();

    assert_eq!(
        calls.lock().unwrap().clone(),
        vec![
            "POST category Desserts".to_string(),
            "PUT category 2 Desserts".to_string(),
            "DELETE category 2".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_admin_status_mapping() {
    let (api, _) = api().await;

    assert!(matches!(api.list_items().await, Err(ClientError::Unauthorized)));
    assert!(matches!(api.delete_item(ItemId(1)).await, Err(ClientError::Forbidden)));
    let err = api.delete_category(CategoryId(99)).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, message: None }));
}

#[tokio::test]
async fn test_admin_console_over_http() {
    let (api, _) = api().await;
    let mut console = AdminConsole::new(Arc::new(api), "/restaurant/admin/login");

    let listed = console.load_categories().await.listed().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(console.category_options()[0].name, "Mains");

    let mut duplicate = CategoryForm::new("Mains");
    assert_eq!(
        console.submit_category(&mut duplicate).await,
        AdminOutcome::Failed("Error: Category already exists".into())
    );

    let mut fresh = CategoryForm::new("Wine");
    assert_eq!(
        console.submit_category(&mut fresh).await,
        AdminOutcome::Saved { created: true }
    );

    assert_eq!(
        console.load_items().await,
        AdminOutcome::RedirectToLogin("/restaurant/admin/login".into())
    );
}

#[tokio::test]
async fn test_admin_refusal_in_success_body_is_reported() {
    let (api, calls) = api().await;
    let console = AdminConsole::new(Arc::new(api), "/restaurant/admin/login");
    let mut form = ItemForm::new("Pizza", 9.5, 8);
    form.edit_id = Some(ItemId(5));

    let outcome = console.submit_item(&mut form).await;

    assert_eq!(outcome, AdminOutcome::Failed("Error: Category not found".into()));
    assert_eq!(form.edit_id, Some(ItemId(5)));
    assert_eq!(calls.lock().unwrap().clone(), vec!["PUT item 5".to_string()]);
}
