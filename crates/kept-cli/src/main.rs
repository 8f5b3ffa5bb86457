use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kept", version, about = "Kept CLI -- no-spend days, savings challenges, didn't-buy log")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// No-spend calendar
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// 100-envelope challenge
    Envelope {
        #[command(subcommand)]
        action: commands::envelope::EnvelopeAction,
    },
    /// 52-week challenge
    Weeks {
        #[command(subcommand)]
        action: commands::weeks::WeeksAction,
    },
    /// Didn't-buy log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// No-buy rules
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },
    /// Dashboard summary
    Stats {
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Data management
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calendar { action } => commands::calendar::run(action).await,
        Commands::Envelope { action } => commands::envelope::run(action).await,
        Commands::Weeks { action } => commands::weeks::run(action).await,
        Commands::Log { action } => commands::log::run(action).await,
        Commands::Rules { action } => commands::rules::run(action).await,
        Commands::Stats { json } => commands::stats::run(json).await,
        Commands::Data { action } => commands::data::run(action).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
