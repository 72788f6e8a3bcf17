//! # Seed Data Generator
//!
//! Fills an empty database with the starter menu.
//!
//! ## Usage
//! ```bash
//! cargo run -p pfc-db --bin seed
//!
//! # Specify database path
//! cargo run -p pfc-db --bin seed -- --db ./data/pfc.db
//! ```
//!
//! Does nothing when the products table already has rows.

use clap::Parser;
use pfc_core::Product;
use pfc_db::{Database, DbConfig};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "PFC Wings starter menu")]
struct Args {
    /// Database file path
    #[arg(short, long, env = "PFC_DB_PATH", default_value = "./pfc.db")]
    db: String,
}

/// (title, description, detailed description, veg, half, full, special items)
type MenuItem = (&'static str, &'static str, &'static str, bool, f64, f64, &'static [&'static str]);

const MENU: &[MenuItem] = &[
    (
        "Peri Peri Wings",
        "Fiery wings tossed in peri peri",
        "Crisp fried wings, marinated overnight and tossed in house peri peri.",
        false,
        149.0,
        279.0,
        &["Extra Dip", "Cheese Drizzle"],
    ),
    (
        "Chicken Lollipop",
        "Frenched wings, Indo-Chinese style",
        "Drumettes shaped into lollipops, fried and glazed with schezwan sauce.",
        false,
        129.0,
        239.0,
        &["Schezwan Dip", "Mayo"],
    ),
    (
        "BBQ Wings",
        "Smoky, sticky, sweet",
        "Wings basted with a smoky barbecue glaze and finished on the grill.",
        false,
        159.0,
        299.0,
        &["Extra Glaze"],
    ),
    (
        "Paneer Tikka",
        "Char-grilled cottage cheese",
        "Cubes of paneer in a yogurt-spice marinade, grilled with peppers and onion.",
        true,
        119.0,
        219.0,
        &["Mint Chutney", "Extra Onion"],
    ),
    (
        "Masala Fries",
        "Fries with house masala",
        "Skin-on fries dusted with a tangy masala blend.",
        true,
        59.5,
        99.5,
        &["Cheese Dip", "Peri Peri Sprinkle"],
    ),
    (
        "Veg Spring Rolls",
        "Crunchy rolls, veggie filling",
        "Thin wrappers stuffed with stir-fried cabbage, carrot and glass noodles.",
        true,
        89.0,
        159.0,
        &[],
    ),
];

fn menu_item(item: &MenuItem) -> Product {
    let (title, description, detailed, is_veg, half, full, specials) = *item;

    let mut product = Product::new(Uuid::new_v4().simple().to_string(), title, half, full);
    product.description = description.to_string();
    product.detailed_description = detailed.to_string();
    product.is_veg = is_veg;
    product.image = format!(
        "https://img.pfcwings.example/{}.jpg",
        title.to_lowercase().replace(' ', "-")
    );
    product.special_items = specials.iter().map(|s| s.to_string()).collect();
    product
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 PFC Wings Seed Data Generator");
    println!("================================");
    println!("Database: {}", args.db);
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut generated = 0;
    for item in MENU {
        let product = menu_item(item);
        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.title, e);
            continue;
        }
        generated += 1;
    }

    println!();
    println!("✓ Inserted {} of {} menu items", generated, MENU.len());

    db.close().await;
    Ok(())
}
