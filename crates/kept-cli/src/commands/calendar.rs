//! No-spend calendar commands.

use clap::Subcommand;
use kept_core::calendar::{date_key, days_in_month, first_weekday, parse_date_key};
use kept_core::model::DayStatus;
use kept_core::ops::{self, MarkAction};
use kept_core::stats::{current_streak, longest_streak, month_no_spend_count};

use super::{open_store, today};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Print a month grid with streak numbers
    Show {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Mark a day: cycles no-spend -> spend -> clear unless a status is given
    Mark {
        /// Day to mark as YYYY-MM-DD (default: today)
        date: Option<String>,
        /// Explicit status: no-spend, spend, or clear
        status: Option<String>,
    },
    /// Current and longest streak
    Streak,
}

pub async fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    let today = today();

    match action {
        CalendarAction::Show { month } => {
            let (year, month) = match month {
                Some(ref s) => parse_month(s)?,
                None => (
                    chrono::Datelike::year(&today),
                    chrono::Datelike::month(&today),
                ),
            };
            let days = store.no_spend_days();

            println!("{year}-{month:02}");
            println!(" Su  Mo  Tu  We  Th  Fr  Sa");
            let mut line = "    ".repeat(first_weekday(year, month) as usize);
            for day in 1..=days_in_month(year, month) {
                let key = format!("{year}-{month:02}-{day:02}");
                let marker = match days.get(&key) {
                    Some(DayStatus::NoSpend) => '*',
                    Some(DayStatus::Spend) => 'x',
                    None => ' ',
                };
                line.push_str(&format!("{day:>3}{marker}"));
                if line.len() >= 28 {
                    println!("{}", line.trim_end());
                    line.clear();
                }
            }
            if !line.is_empty() {
                println!("{}", line.trim_end());
            }
            println!();
            println!("* no-spend   x spent");
            println!(
                "streak {}   best {}   this month {}",
                current_streak(days, today),
                longest_streak(days),
                month_no_spend_count(days, year, month),
            );
        }
        CalendarAction::Mark { date, status } => {
            let date = match date {
                Some(ref s) => {
                    parse_date_key(s).ok_or_else(|| format!("invalid date: {s}"))?
                }
                None => today,
            };
            let action = match status.as_deref() {
                None => MarkAction::Cycle,
                Some("no-spend") => MarkAction::Set(DayStatus::NoSpend),
                Some("spend") => MarkAction::Set(DayStatus::Spend),
                Some("clear") => MarkAction::Clear,
                Some(other) => {
                    return Err(format!(
                        "unknown status '{other}', expected no-spend, spend, or clear"
                    )
                    .into())
                }
            };
            let result = ops::mark_day(&mut store, date, today, action)?;
            let shown = match result {
                Some(DayStatus::NoSpend) => "no-spend",
                Some(DayStatus::Spend) => "spend",
                None => "unlogged",
            };
            println!("{}: {shown}", date_key(date));
        }
        CalendarAction::Streak => {
            let days = store.no_spend_days();
            println!("current: {}", current_streak(days, today));
            println!("longest: {}", longest_streak(days));
        }
    }

    store.flush().await;
    Ok(())
}

fn parse_month(s: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let parsed = s
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|(_, m)| (1..=12).contains(m));
    parsed.ok_or_else(|| format!("invalid month '{s}', expected YYYY-MM").into())
}
