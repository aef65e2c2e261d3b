use crate::demo::{
    run_demo, run_questions, run_report, run_score, DemoArgs, ReportArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prakriti::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Prakriti Assessment",
    about = "Serve and run the Prakriti constitution assessment from the command line",
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
    /// Work with the questionnaire and answer files directly
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Walk a sample respondent through the full questionnaire
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Print the question bank and response scale
    Questions,
    /// Score an answer CSV and print the dosha distribution
    Score(ScoreArgs),
    /// Score an answer CSV for a profile and export the report document
    Report(ReportArgs),
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
        Command::Assessment { command } => match command {
            AssessmentCommand::Questions => {
                run_questions();
                Ok(())
            }
            AssessmentCommand::Score(args) => run_score(args),
            AssessmentCommand::Report(args) => run_report(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
