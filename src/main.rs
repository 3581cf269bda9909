//! `restaurant`: command-line front end of the ordering client.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use restaurant_client::admin::{AdminConsole, AdminOutcome};
use restaurant_client::clients::{HttpApi, MenuService};
use restaurant_client::config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TABLE_FILE, DEFAULT_TIMEOUT_SECS,
};
use restaurant_client::lifecycle::{setup_tracing, AppServices, RestaurantApp};
use restaurant_client::model::{CategoryForm, CategoryId, ItemForm, ItemId, Menu};
use restaurant_client::money::{format_price, to_decimal};
use restaurant_client::render::{ConsoleRenderer, MenuView, Renderer, MENU_LOAD_ERROR};
use restaurant_client::storage::{FileTableStore, TableStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Restaurant table-ordering client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API root
    #[arg(long, env = "RESTAURANT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "RESTAURANT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// File holding the saved table number
    #[arg(long, env = "RESTAURANT_TABLE_FILE", default_value = DEFAULT_TABLE_FILE)]
    table_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the menu
    Menu,
    /// Put items in a cart and place the order
    Order {
        /// Table number (defaults to the saved one)
        #[arg(short, long)]
        table: Option<String>,
        /// Menu item id, repeat for more units
        #[arg(short, long = "item", required = true)]
        items: Vec<u32>,
    },
    /// Show or change the saved table number
    Table {
        #[arg(long)]
        set: Option<String>,
    },
    /// Manage the menu
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommands {
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    Items {
        #[command(subcommand)]
        command: ItemCommands,
    },
}

#[derive(Subcommand, Debug)]
enum CategoryCommands {
    List,
    /// Create a category, or update it with --id
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        order: i32,
        #[arg(long)]
        id: Option<u32>,
    },
    Delete {
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
enum ItemCommands {
    List,
    /// Create an item, or update it with --id
    Add {
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: u32,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        unavailable: bool,
        #[arg(long, default_value_t = 0)]
        order: i32,
        #[arg(long)]
        id: Option<u32>,
    },
    Delete {
        id: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.api_url)
        .with_timeout(cli.timeout)
        .with_table_file(&cli.table_file);

    match cli.command {
        Commands::Menu => show_menu(&config).await,
        Commands::Order { table, items } => place_order(&config, table, items).await,
        Commands::Table { set } => table(&config, set),
        Commands::Admin { command } => admin(&config, command).await,
    }
}

async fn show_menu(config: &ClientConfig) -> Result<()> {
    let api = HttpApi::new(config).context("building HTTP client")?;
    let categories = api.fetch_menu().await.map_err(|e| {
        tracing::error!(error = %e, "Menu load failed");
        anyhow!(MENU_LOAD_ERROR)
    })?;
    ConsoleRenderer::new().render_menu(&MenuView::from(&Menu::new(categories)));
    Ok(())
}

async fn place_order(config: &ClientConfig, table: Option<String>, items: Vec<u32>) -> Result<()> {
    let renderer = Arc::new(ConsoleRenderer::new());
    let services = AppServices::from_config(config, renderer).context("building HTTP client")?;
    let app = RestaurantApp::start(services, config.channel_capacity).await;

    if let Some(table) = table {
        app.session.set_table(&table).await?;
    }
    for id in items {
        let item_id = ItemId(id);
        match app.menu().find_item_by_id(item_id) {
            Some(item) if !item.available => {
                eprintln!("Item {id} is unavailable, skipped");
            }
            _ => {
                if !app.session.add_item(item_id).await? {
                    eprintln!("Item {id} is not on the menu, skipped");
                }
            }
        }
    }

    let result = app.session.checkout().await;
    app.shutdown().await.map_err(|e| anyhow!(e))?;

    let confirmation = result?;
    info!(order_id = ?confirmation.order_id, "Done");
    Ok(())
}

fn table(config: &ClientConfig, set: Option<String>) -> Result<()> {
    let store = FileTableStore::new(&config.table_file);
    match set {
        Some(table) => {
            store.save(&table).context("saving table number")?;
            println!("Table set to {table}");
        }
        None => match store.load().context("reading table number")? {
            Some(table) => println!("{table}"),
            None => println!("No table set"),
        },
    }
    Ok(())
}

/// Turns a non-success outcome into an error for the exit code.
fn check<T>(outcome: AdminOutcome<T>) -> Result<Option<T>> {
    match outcome {
        AdminOutcome::Listed(rows) => Ok(Some(rows)),
        AdminOutcome::Saved { created: true } => {
            println!("Created");
            Ok(None)
        }
        AdminOutcome::Saved { created: false } => {
            println!("Updated");
            Ok(None)
        }
        AdminOutcome::Deleted => {
            println!("Deleted");
            Ok(None)
        }
        AdminOutcome::RedirectToLogin(path) => bail!("Authentication required, log in at {path}"),
        AdminOutcome::Invalid(message) | AdminOutcome::Failed(message) => bail!(message),
    }
}

async fn admin(config: &ClientConfig, command: AdminCommands) -> Result<()> {
    let api = HttpApi::new(config).context("building HTTP client")?;
    let mut console = AdminConsole::new(Arc::new(api), config.login_path.clone());

    match command {
        AdminCommands::Categories { command } => match command {
            CategoryCommands::List => {
                for category in check(console.load_categories().await)?.unwrap_or_default() {
                    println!("[{:>3}] {} (order {})", category.id.0, category.name, category.order);
                }
            }
            CategoryCommands::Add { name, description, order, id } => {
                let mut form = CategoryForm {
                    edit_id: id.map(CategoryId),
                    name,
                    description,
                    order,
                };
                check(console.submit_category(&mut form).await)?;
            }
            CategoryCommands::Delete { id } => {
                check(console.delete_category(CategoryId(id)).await)?;
            }
        },
        AdminCommands::Items { command } => match command {
            ItemCommands::List => {
                for item in check(console.load_items().await)?.unwrap_or_default() {
                    let marker = if item.available { "" } else { " (unavailable)" };
                    println!(
                        "[{:>3}] {} {} in {}{marker}",
                        item.id.0,
                        item.name,
                        format_price(to_decimal(item.price)),
                        item.category_id
                    );
                }
            }
            ItemCommands::Add { name, price, category, description, unavailable, order, id } => {
                let mut form = ItemForm::new(name, price, category);
                form.edit_id = id.map(ItemId);
                form.description = description;
                form.available = !unavailable;
                form.order = order;
                check(console.submit_item(&mut form).await)?;
            }
            ItemCommands::Delete { id } => {
                check(console.delete_item(ItemId(id)).await)?;
            }
        },
    }
    Ok(())
}
