use crate::clients::{ClientError, HttpApi, MenuService, OrderService, SessionClient};
use crate::config::ClientConfig;
use crate::model::Menu;
use crate::render::{MenuView, Renderer, MENU_LOAD_ERROR};
use crate::session::{self, SessionContext};
use crate::storage::{FileTableStore, TableStore};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Collaborators of a customer application.
#[derive(Clone)]
pub struct AppServices {
    pub menu: Arc<dyn MenuService>,
    pub orders: Arc<dyn OrderService>,
    pub renderer: Arc<dyn Renderer>,
    pub tables: Arc<dyn TableStore>,
}

impl AppServices {
    /// HTTP services plus a file table store, as configured.
    pub fn from_config(
        config: &ClientConfig,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self, ClientError> {
        let api = Arc::new(HttpApi::new(config)?);
        Ok(Self {
            menu: api.clone(),
            orders: api,
            renderer,
            tables: Arc::new(FileTableStore::new(&config.table_file)),
        })
    }
}

/// The customer application context.
///
/// `RestaurantApp` owns the startup sequence and the session task:
/// - **Startup**: fetch and render the menu (or the menu error), restore the
///   table number, spawn the session actor
/// - **Access**: [`session`](Self::session) is the only way to reach the cart
/// - **Shutdown**: close the session mailbox and wait for the task
///
/// # Example
///
/// ```ignore
/// let app = RestaurantApp::start(services, 32).await;
/// app.session.add_item(ItemId(1)).await?;
/// app.session.checkout().await?;
/// app.shutdown().await?;
/// ```
pub struct RestaurantApp {
    /// Client for the session actor
    pub session: SessionClient,

    menu: Menu,

    handle: tokio::task::JoinHandle<()>,
}

impl RestaurantApp {
    /// Starts the application. Never fails: a menu that cannot be loaded
    /// leaves an empty menu and the error message on screen.
    pub async fn start(services: AppServices, buffer_size: usize) -> Self {
        let menu = match services.menu.fetch_menu().await {
            Ok(categories) => {
                let menu = Menu::new(categories);
                info!(categories = menu.categories().len(), "Menu loaded");
                services.renderer.render_menu(&MenuView::from(&menu));
                menu
            }
            Err(e) => {
                error!(error = %e, "Menu load failed");
                services.renderer.render_menu_error(MENU_LOAD_ERROR);
                Menu::default()
            }
        };

        let table = match services.tables.load() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Could not restore table number");
                String::new()
            }
        };

        let (actor, session) = session::new(menu.clone(), table, buffer_size);
        let handle = tokio::spawn(actor.run(SessionContext {
            orders: services.orders,
            renderer: services.renderer,
            tables: services.tables,
        }));

        Self {
            session,
            menu,
            handle,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Gracefully shuts down the session.
    ///
    /// Dropping the client closes the mailbox once any clones handed out
    /// are gone too and any submitted order has been answered.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the session task ended cleanly
    /// - `Err(String)` if it panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down application...");
        drop(self.session);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(format!("Session task failed: {:?}", e));
        }

        info!("Application shutdown complete.");
        Ok(())
    }
}
