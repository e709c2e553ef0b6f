pub mod init;
pub mod session;
pub mod task;
pub mod watch;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(task::AddArgs),
    #[command(about = "Update an existing task")]
    Update(task::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "View tasks in scheduled order")]
    List,
    #[command(about = "Run the reminder scanner in the foreground")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        // Route msg_* output through tracing when debug mode is on.
        if crate::libs::messages::macros::is_debug_mode() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => task::add(args),
            Some(Commands::Update(args)) => task::update(args),
            Some(Commands::Delete(args)) => task::delete(args),
            Some(Commands::List) => task::list(),
            Some(Commands::Watch) => watch::cmd().await,
            // No subcommand starts the interactive session with the
            // background reminder scanner.
            None => session::cmd().await,
        }
    }
}
