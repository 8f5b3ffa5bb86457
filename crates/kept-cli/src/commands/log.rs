//! Didn't-buy log commands.

use clap::Subcommand;
use kept_core::calendar::date_key;
use kept_core::ops;
use kept_core::stats::{didnt_buy_total, format_currency};
use kept_core::Category;

use super::{open_store, parse_id, today};

#[derive(Subcommand)]
pub enum LogAction {
    /// Log something you resisted buying
    Add {
        /// What it was
        name: String,
        /// Its would-have-been price
        #[arg(long)]
        price: f64,
        /// Category: Food & Drink, Shopping, Entertainment, Clothing,
        /// Tech, Subscriptions, Other (default: Other)
        #[arg(long)]
        category: Option<String>,
        /// Day it happened, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List logged items
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete an item by id
    Remove { id: String },
    /// Total money kept
    Total,
}

pub async fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        LogAction::Add {
            name,
            price,
            category,
            date,
        } => {
            let category = match category {
                Some(ref s) => Category::parse(s).ok_or_else(|| {
                    let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
                    format!("unknown category '{s}', expected one of: {}", labels.join(", "))
                })?,
                None => Category::Other,
            };
            let date = date.unwrap_or_else(|| date_key(today()));
            let id = ops::add_item(&mut store, &name, price, category, &date)?;
            println!("logged: {id}");
        }
        LogAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.didnt_buy_items())?);
            } else if store.didnt_buy_items().is_empty() {
                println!("nothing logged yet");
            } else {
                for item in store.didnt_buy_items() {
                    println!(
                        "{}  {:<24} {:>10}  {} ({})",
                        item.date,
                        item.name,
                        format_currency(item.price),
                        item.category,
                        item.id,
                    );
                }
                println!(
                    "total: {}",
                    format_currency(didnt_buy_total(store.didnt_buy_items()))
                );
            }
        }
        LogAction::Remove { id } => {
            let id = parse_id(&id)?;
            ops::remove_item(&mut store, id)?;
            println!("removed: {id}");
        }
        LogAction::Total => {
            println!(
                "{}",
                format_currency(didnt_buy_total(store.didnt_buy_items()))
            );
        }
    }

    store.flush().await;
    Ok(())
}
