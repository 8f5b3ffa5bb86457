//! No-buy rule commands.

use clap::Subcommand;
use kept_core::ops;

use super::{open_store, parse_id};

#[derive(Subcommand)]
pub enum RulesAction {
    /// Add a rule (starts active)
    Add {
        /// The commitment, e.g. "no delivery apps"
        text: String,
    },
    /// List rules in order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Flip a rule between active and inactive
    Toggle { id: String },
    /// Delete a rule by id
    Remove { id: String },
    /// Move a rule to a new position (0-based)
    Move { id: String, position: usize },
}

pub async fn run(action: RulesAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        RulesAction::Add { text } => {
            let id = ops::add_rule(&mut store, &text)?;
            println!("added: {id}");
        }
        RulesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.rules())?);
            } else if store.rules().is_empty() {
                println!("no rules yet");
            } else {
                for (i, rule) in store.rules().iter().enumerate() {
                    let state = if rule.active { "[active]  " } else { "[inactive]" };
                    println!("{i}. {state} {} ({})", rule.text, rule.id);
                }
            }
        }
        RulesAction::Toggle { id } => {
            let id = parse_id(&id)?;
            let active = ops::toggle_rule(&mut store, id)?;
            println!("{id}: {}", if active { "active" } else { "inactive" });
        }
        RulesAction::Remove { id } => {
            let id = parse_id(&id)?;
            ops::remove_rule(&mut store, id)?;
            println!("removed: {id}");
        }
        RulesAction::Move { id, position } => {
            let id = parse_id(&id)?;
            ops::move_rule(&mut store, id, position)?;
            println!("moved: {id} -> {position}");
        }
    }

    store.flush().await;
    Ok(())
}
