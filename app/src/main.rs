//! Terminal front-end for the todo-tabs application.
//!
//! Reads one command per line from stdin and prints the visible view after
//! each change. Logs go to stderr.

use anyhow::Context;
use todo_tabs::render::render;
use todo_tabs::shell::HELP;
use todo_tabs::{create_store, AppEnvironment, AppState, Config, Outcome, Shell};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(&config);
    todo_tabs_runtime::metrics::register_metrics();

    tracing::info!(initial_tab = %config.initial_tab, "Starting todo-tabs");

    let store = create_store(AppState::with_tab(config.initial_tab), AppEnvironment::system());
    let shell = Shell::new(store.clone());

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_view(&mut stdout, &shell).await?;

    loop {
        if config.show_prompt {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };

        match shell.execute(&line).await {
            Ok(Outcome::Render) => print_view(&mut stdout, &shell).await?,
            Ok(Outcome::Help) => {
                stdout.write_all(HELP.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            },
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Shell command failed");
                eprintln!("Fehler: {e}");
            },
        }
    }

    store.shutdown();
    stdout.flush().await?;
    Ok(())
}

async fn print_view(stdout: &mut tokio::io::Stdout, shell: &Shell) -> anyhow::Result<()> {
    let view = shell.store().state(render).await;
    stdout.write_all(view.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
