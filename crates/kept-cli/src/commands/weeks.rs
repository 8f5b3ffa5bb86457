//! 52-week challenge commands.

use clap::Subcommand;
use kept_core::ops;
use kept_core::stats::{format_currency, weeks_progress};
use kept_core::Weeks;

use super::open_store;

#[derive(Subcommand)]
pub enum WeeksAction {
    /// Show completed weeks and progress
    List,
    /// Mark week N done (1-52)
    Complete { n: u32 },
    /// Un-mark week N
    Uncomplete { n: u32 },
    /// Clear the whole challenge
    Reset,
}

pub async fn run(action: WeeksAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        WeeksAction::List => {
            let progress = weeks_progress(store.weeks());
            println!(
                "{} of {} ({}/{} weeks)",
                format_currency(progress.saved),
                format_currency(progress.goal),
                progress.done,
                progress.total,
            );
            if !store.weeks().is_empty() {
                let done: Vec<String> = store.weeks().iter().map(|n| n.to_string()).collect();
                println!("completed: {}", done.join(", "));
            }
            if progress.complete() {
                println!("Challenge complete!");
            }
        }
        WeeksAction::Complete { n } => {
            ops::complete_week(&mut store, n)?;
            println!(
                "week {n} done ({})",
                format_currency(weeks_progress(store.weeks()).saved)
            );
        }
        WeeksAction::Uncomplete { n } => {
            ops::uncomplete_week(&mut store, n)?;
            println!(
                "week {n} cleared ({})",
                format_currency(weeks_progress(store.weeks()).saved)
            );
        }
        WeeksAction::Reset => {
            store.update_weeks(Weeks::default());
            println!("52-week challenge reset");
        }
    }

    store.flush().await;
    Ok(())
}
