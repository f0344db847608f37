//! SmartBill interactive console.
//!
//! Owns the operator-facing concerns the core deliberately excludes:
//! command parsing, confirmation prompts for destructive operations, and
//! stdout rendering. All business logic flows through `BillingSession`.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pos_runtime::invoice::render_invoice;
use pos_runtime::{BillingSession, ConsoleRenderer, PosConfig};
use sb_01_catalog::ProductDraft;
use sb_04_storage::JsonFileStore;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = PosConfig::from_env();

    info!("===========================================");
    info!("  SmartBill POS Runtime v0.1.0");
    info!("===========================================");
    info!("Data file: {:?}", config.data_path);

    let store = JsonFileStore::open(&config.data_path)
        .with_context(|| format!("opening storage at {:?}", config.data_path))?;
    let renderer = ConsoleRenderer::new(config.currency.clone());
    let mut session = BillingSession::start(Arc::new(store), Box::new(renderer));

    println!("Type `help` for commands.");
    let stdin = std::io::stdin();
    let mut buffer = String::new();
    loop {
        buffer.clear();
        // Transient lock per line: `confirm` reads stdin mid-command.
        if stdin.read_line(&mut buffer).context("reading command")? == 0 {
            break;
        }
        let input = buffer.trim().to_string();
        let mut parts = input.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let rest = input[command.len()..].trim().to_string();

        match command {
            "help" => print_help(),
            "catalog" => session.set_catalog_query(rest),
            "cart" => session.set_cart_query(rest),
            "add" => {
                let (Some(id), Some(qty)) = (parts.next(), parts.next()) else {
                    println!("usage: add <product-id> <quantity>");
                    continue;
                };
                match qty.parse::<i64>() {
                    Ok(qty) => match session.add_to_cart(id, qty) {
                        Ok(committed) => {
                            report_warnings(&committed.storage_warnings);
                            println!(
                                "Added {} x {} (stock left: {})",
                                committed.value.line.quantity,
                                committed.value.line.name,
                                committed.value.remaining_stock
                            );
                        }
                        Err(err) => println!("error: {err}"),
                    },
                    Err(_) => println!("error: quantity must be an integer"),
                }
            }
            "edit" => {
                let (Some(index), Some(qty)) = (parts.next(), parts.next()) else {
                    println!("usage: edit <line#> <quantity>");
                    continue;
                };
                match (index.parse::<usize>(), qty.parse::<i64>()) {
                    (Ok(index), Ok(qty)) => match session.edit_cart_line(index, qty) {
                        Ok(committed) => {
                            report_warnings(&committed.storage_warnings);
                            if let Some(clamp) = committed.value.clamped {
                                println!(
                                    "Only {} items available in stock; quantity set to {}",
                                    clamp.available, committed.value.line.quantity
                                );
                            }
                        }
                        Err(err) => println!("error: {err}"),
                    },
                    _ => println!("error: line and quantity must be integers"),
                }
            }
            "remove" => {
                let Some(Ok(index)) = parts.next().map(str::parse::<usize>) else {
                    println!("usage: remove <line#>");
                    continue;
                };
                if !confirm("Delete this product from the bill?")? {
                    continue;
                }
                match session.remove_cart_line(index) {
                    Ok(committed) => {
                        report_warnings(&committed.storage_warnings);
                        println!("Removed {}", committed.value.name);
                    }
                    Err(err) => println!("error: {err}"),
                }
            }
            "clear" => {
                if !confirm("Clear the entire bill? All items return to catalog stock.")? {
                    continue;
                }
                let committed = session.clear_bill();
                report_warnings(&committed.storage_warnings);
                println!("Bill cleared ({} lines restored)", committed.value.restored);
                for line in &committed.value.dropped {
                    println!(
                        "note: {} x {} had no catalog item; stock not restored",
                        line.quantity, line.name
                    );
                }
            }
            "discount" => match rest.parse::<f64>() {
                Ok(rate) => {
                    report_warnings(&session.set_discount_rate(rate).storage_warnings);
                }
                Err(_) => println!("usage: discount <percent>"),
            },
            "tax" => match rest.parse::<f64>() {
                Ok(rate) => {
                    report_warnings(&session.set_tax_rate(rate).storage_warnings);
                }
                Err(_) => println!("usage: tax <percent>"),
            },
            "new" => {
                let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
                let [id, name, price, stock] = fields.as_slice() else {
                    println!("usage: new <id>;<name>;<price>;<stock>");
                    continue;
                };
                let (Ok(price), Ok(stock)) = (price.parse::<f64>(), stock.parse::<i64>()) else {
                    println!("error: price and stock must be numbers");
                    continue;
                };
                let draft = ProductDraft {
                    id: id.to_string(),
                    name: name.to_string(),
                    price,
                    stock,
                };
                match session.add_catalog_item(draft) {
                    Ok(committed) => {
                        report_warnings(&committed.storage_warnings);
                        println!("Added {} to catalog", committed.value.name);
                    }
                    Err(err) => println!("error: {err}"),
                }
            }
            "drop" => {
                let Some(id) = parts.next() else {
                    println!("usage: drop <product-id>");
                    continue;
                };
                if !confirm("Remove this product from the catalog?")? {
                    continue;
                }
                match session.remove_catalog_item(id) {
                    Ok(committed) => {
                        report_warnings(&committed.storage_warnings);
                        println!("Removed {} from catalog", committed.value.name);
                    }
                    Err(err) => println!("error: {err}"),
                }
            }
            "invoice" => {
                print!("{}", render_invoice(&config, &session.invoice_view()));
            }
            "quit" | "exit" => break,
            other => println!("unknown command `{other}` (try `help`)"),
        }
    }

    info!("Session ended");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  catalog [query]          filter the catalog view");
    println!("  cart [query]             filter the bill view");
    println!("  add <id> <qty>           add catalog units to the bill");
    println!("  edit <line#> <qty>       change a bill line's quantity");
    println!("  remove <line#>           delete a bill line (asks first)");
    println!("  clear                    clear the bill (asks first)");
    println!("  discount <percent>       set the discount rate");
    println!("  tax <percent>            set the tax rate");
    println!("  new <id>;<name>;<price>;<stock>   add a catalog product");
    println!("  drop <id>                remove a catalog product (asks first)");
    println!("  invoice                  print the current invoice");
    println!("  quit");
}

fn confirm(message: &str) -> Result<bool> {
    print!("{message} [y/N] ");
    std::io::stdout().flush().context("flushing prompt")?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("reading confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("warning: {warning}");
    }
}
