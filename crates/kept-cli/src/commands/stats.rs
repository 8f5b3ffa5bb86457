//! Dashboard summary across all five collections.

use serde::Serialize;

use kept_core::stats::{
    category_totals, current_streak, didnt_buy_total, envelope_progress, format_currency,
    longest_streak, weeks_progress,
};
use kept_core::DataStore;

use super::{open_store, today};

#[derive(Serialize)]
struct ChallengeReport {
    done: u32,
    total: u32,
    saved: f64,
    goal: f64,
}

#[derive(Serialize)]
struct StatsReport {
    current_streak: u32,
    longest_streak: u32,
    envelopes: ChallengeReport,
    weeks: ChallengeReport,
    didnt_buy_total: f64,
    didnt_buy_count: usize,
    by_category: Vec<(String, f64)>,
    active_rules: usize,
    total_rules: usize,
}

fn report(store: &DataStore, today: chrono::NaiveDate) -> StatsReport {
    let envelopes = envelope_progress(store.envelopes());
    let weeks = weeks_progress(store.weeks());
    StatsReport {
        current_streak: current_streak(store.no_spend_days(), today),
        longest_streak: longest_streak(store.no_spend_days()),
        envelopes: ChallengeReport {
            done: envelopes.done,
            total: envelopes.total,
            saved: envelopes.saved,
            goal: envelopes.goal,
        },
        weeks: ChallengeReport {
            done: weeks.done,
            total: weeks.total,
            saved: weeks.saved,
            goal: weeks.goal,
        },
        didnt_buy_total: didnt_buy_total(store.didnt_buy_items()),
        didnt_buy_count: store.didnt_buy_items().len(),
        by_category: category_totals(store.didnt_buy_items())
            .into_iter()
            .map(|(category, total)| (category.label().to_string(), total))
            .collect(),
        active_rules: store.rules().iter().filter(|r| r.active).count(),
        total_rules: store.rules().len(),
    }
}

pub async fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let report = report(&store, today());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "streak: {} current, {} best",
        report.current_streak, report.longest_streak
    );
    println!(
        "envelopes: {} of {} ({}/{})",
        format_currency(report.envelopes.saved),
        format_currency(report.envelopes.goal),
        report.envelopes.done,
        report.envelopes.total,
    );
    println!(
        "52-week: {} of {} ({}/{})",
        format_currency(report.weeks.saved),
        format_currency(report.weeks.goal),
        report.weeks.done,
        report.weeks.total,
    );
    println!(
        "didn't buy: {} across {} items",
        format_currency(report.didnt_buy_total),
        report.didnt_buy_count,
    );
    for (label, total) in &report.by_category {
        println!("  {label}: {}", format_currency(*total));
    }
    println!(
        "rules: {} active of {}",
        report.active_rules, report.total_rules
    );
    Ok(())
}
