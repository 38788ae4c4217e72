mod cli;
mod output;

use clap::Parser;
use cli::Cli;
use deepseek_app::AppContext;
use output::Outcome;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let app_context = match cli.client_config().and_then(AppContext::from_config) {
        Ok(ctx) => ctx,
        Err(e) => return Outcome::failed(&e).emit(),
    };

    let result = app_context.ask_question.execute(&cli.prompt).await;
    output::render(result, cli.content_only).emit()
}
