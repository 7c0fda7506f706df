use crate::demo::{run_demo, run_review, DemoArgs, ReviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lumethis::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lumethis",
    about = "Run the Lumethis training dashboard or walk its review workflow from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Log in as a roster user and list, select, or review submissions
    Review(ReviewArgs),
    /// Walk the manager and admin review scenarios end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Review(args) => run_review(args),
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn review_flags_are_mutually_exclusive() {
        let parsed = Cli::try_parse_from(["lumethis", "review", "--user", "u1", "--approve"]);
        assert!(parsed.is_ok());

        let conflicting = Cli::try_parse_from([
            "lumethis",
            "review",
            "--user",
            "u1",
            "--approve",
            "--request-changes",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn review_status_uses_label_parser() {
        let parsed =
            Cli::try_parse_from(["lumethis", "review", "--user", "u1", "--status", "active"])
                .expect("status parses");
        match parsed.command {
            Some(Command::Review(args)) => {
                assert_eq!(
                    args.status,
                    Some(lumethis::workflows::training::SubmissionStatus::Active)
                );
            }
            other => panic!("expected review command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let parsed = Cli::try_parse_from(["lumethis"]).expect("parses");
        assert!(parsed.command.is_none());
    }
}
