use chatstore::console::commands::{
    AcceptCommand, CallableTrait, DeleteCommand, GetCommand, MigrateCommand, PingCommand,
};
use chatstore::telemetry::{get_subscriber, init_subscriber};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Check that the master and every replica answer
    Ping,
    /// Inspect or change users' terms of service acceptance
    Terms {
        #[command(subcommand)]
        command: TermsCommands,
    },
}

#[derive(Debug, Subcommand)]
enum TermsCommands {
    Get {
        #[arg(long)]
        user_id: String,
    },
    Accept {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        terms_of_service_id: String,
    },
    Delete {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        terms_of_service_id: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("chatstore".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    get_command(cli).call()
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::Migrate => Box::new(MigrateCommand::new()),
        Commands::Ping => Box::new(PingCommand::new()),
        Commands::Terms { command } => match command {
            TermsCommands::Get { user_id } => Box::new(GetCommand::new(user_id)),
            TermsCommands::Accept {
                user_id,
                terms_of_service_id,
            } => Box::new(AcceptCommand::new(user_id, terms_of_service_id)),
            TermsCommands::Delete {
                user_id,
                terms_of_service_id,
            } => Box::new(DeleteCommand::new(user_id, terms_of_service_id)),
        },
    }
}
