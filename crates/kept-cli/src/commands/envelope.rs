//! 100-envelope challenge commands.

use clap::Subcommand;
use kept_core::ops;
use kept_core::stats::{envelope_progress, format_currency};
use kept_core::Envelopes;

use super::open_store;

#[derive(Subcommand)]
pub enum EnvelopeAction {
    /// Show stuffed envelopes and progress
    List,
    /// Stuff envelope N (1-100)
    Stuff { n: u32 },
    /// Un-stuff envelope N
    Unstuff { n: u32 },
    /// Clear the whole challenge
    Reset,
}

pub async fn run(action: EnvelopeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        EnvelopeAction::List => {
            let progress = envelope_progress(store.envelopes());
            println!(
                "{} of {} ({}/{} envelopes)",
                format_currency(progress.saved),
                format_currency(progress.goal),
                progress.done,
                progress.total,
            );
            if !store.envelopes().is_empty() {
                let stuffed: Vec<String> =
                    store.envelopes().iter().map(|n| n.to_string()).collect();
                println!("stuffed: {}", stuffed.join(", "));
            }
            if progress.complete() {
                println!("Challenge complete!");
            }
        }
        EnvelopeAction::Stuff { n } => {
            ops::stuff_envelope(&mut store, n)?;
            println!(
                "envelope {n} stuffed ({})",
                format_currency(envelope_progress(store.envelopes()).saved)
            );
        }
        EnvelopeAction::Unstuff { n } => {
            ops::unstuff_envelope(&mut store, n)?;
            println!(
                "envelope {n} cleared ({})",
                format_currency(envelope_progress(store.envelopes()).saved)
            );
        }
        EnvelopeAction::Reset => {
            store.update_envelopes(Envelopes::default());
            println!("envelope challenge reset");
        }
    }

    store.flush().await;
    Ok(())
}
