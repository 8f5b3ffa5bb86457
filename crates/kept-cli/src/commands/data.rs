//! Whole-store data management.

use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum DataAction {
    /// Permanently wipe all five collections
    Reset {
        /// Required confirmation flag
        #[arg(long)]
        yes: bool,
    },
    /// Dump every collection as one JSON document
    Export,
}

pub async fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        DataAction::Reset { yes } => {
            if !yes {
                return Err("this deletes everything; pass --yes to confirm".into());
            }
            store.reset_all();
            store.flush().await;
            println!("all data reset");
        }
        DataAction::Export => {
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        }
    }
    Ok(())
}
