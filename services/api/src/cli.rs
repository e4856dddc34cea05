use crate::demo::{run_assignments, run_grade, GradeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use grader_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Coursework Grading Service",
    about = "Run the automated coursework grading service or grade a submission from the command line",
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
    /// Grade a single extracted submission and print the feedback report
    Grade(GradeArgs),
    /// List the assignments registered in the rubric catalog
    Assignments,
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
        Command::Grade(args) => run_grade(args),
        Command::Assignments => run_assignments(),
    }
}
