//! # kiosk: Terminal Demo for the souk Cart Widget
//!
//! A line-oriented front end over one cart session.
//!
//! ## Session Walkthrough
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  $ kiosk                                                            │
//! │                                                                     │
//! │  [img Farine] Farine [+] 0 [-] [Delete] DT 0.00                     │
//! │  [img Semoule] Semoule [+] 0 [-] [Delete] DT 0.00                   │
//! │  …                                                                  │
//! │  Total: DT 0.00                                                     │
//! │                                                                     │
//! │  > inc item1            ◄── press the "+" control of Farine         │
//! │  > add item3 2          ◄── add 2 Lait via the catalog              │
//! │  > del item2            ◄── press Delete on Semoule                 │
//! │  > quit                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//! - `add <id> [qty]` — add a catalog product (default qty 1)
//! - `inc <id>` / `dec <id>` / `del <id>` — activate a line control
//! - `show` — reprint the current projection
//! - `quit` — teardown and exit

use std::io::{self, BufRead, Write};

use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use souk_core::Catalog;
use souk_widget::{Command, MemorySurface, Session, MOUNT_POINT};

/// The sample catalog the demo ships with.
const SAMPLE_CATALOG: &str = r#"[
    {"id":"item1","name":"Farine","priceCents":90,"image":"http://lepidor.com.tn/wp-content/uploads/farine-patissiere-1.png"},
    {"id":"item2","name":"Semoule","priceCents":80,"image":"http://www.warda.tn/sites/default/files/2023-03/semoule-fine-list.png"},
    {"id":"item3","name":"Lait","priceCents":150,"image":"http://www.delice.tn/wp-content/uploads/2023/04/lait-demi-ecreme.png"},
    {"id":"item4","name":"Sucre","priceCents":120,"image":"http://www.espacemanager.com/sites/default/files/sucre-blanc_1607.jpg"},
    {"id":"item5","name":"Yaourt à boire","priceCents":115,"image":"http://courses.monoprix.tn/lac/131081-large_default/yaourt-a-boire.jpg"}
]"#;

fn main() {
    init_tracing();
    info!("starting souk kiosk");

    let catalog = match Catalog::from_json(SAMPLE_CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("invalid sample catalog: {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::open(catalog, MemorySurface::new());
    print_cart(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "failed to read stdin");
                break;
            }
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("add"), Some(id), qty) => {
                let qty = qty.and_then(|q| q.parse().ok()).unwrap_or(1);
                if !session.add_product(id, qty) {
                    println!("no product '{id}' in the catalog");
                }
                print_cart(&session);
            }
            (Some("inc"), Some(id), None) => {
                session.dispatch(Command::Increment(id.to_string()));
                print_cart(&session);
            }
            (Some("dec"), Some(id), None) => {
                session.dispatch(Command::Decrement(id.to_string()));
                print_cart(&session);
            }
            (Some("del"), Some(id), None) => {
                session.dispatch(Command::Delete(id.to_string()));
                print_cart(&session);
            }
            (Some("show"), None, None) => print_cart(&session),
            (Some("quit"), None, None) | (Some("exit"), None, None) => break,
            (None, _, _) => {}
            _ => println!("commands: add <id> [qty] | inc <id> | dec <id> | del <id> | show | quit"),
        }
    }

    session.teardown();
    info!("kiosk session ended");
}

/// Prints the surface's current projection of the cart.
fn print_cart(session: &Session<MemorySurface>) {
    let surface = session.surface();
    if let Some(root) = surface.mount(MOUNT_POINT) {
        println!("{}", surface.render_text(root));
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=souk=trace` - Show trace for souk crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,souk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
