use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use webgtt_core::{ConfigError, Parser, ParserError, TaskTable, WireFormat};

/// Host stand-in: one message per stdin line, one response per stdout line.
#[derive(Debug, clap::Parser)]
#[command(name = "webgtt", version, about = "Decode graph task messages from stdin")]
struct Args {
    /// JSON file with `sentinel` / `row_delimiter` overrides.
    #[arg(long)]
    format: Option<PathBuf>,

    /// Print the task table and exit.
    #[arg(long)]
    list_tasks: bool,
}

/// What the host channel does with one message.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Response(String),
    /// decode 失敗：何も返さない
    Suppressed,
    TaskFailed(String),
}

fn handle_message(
    message: &str,
    table: &Arc<TaskTable>,
    format: &WireFormat,
) -> Result<Reply, ConfigError> {
    let mut parser = Parser::with_table(message, Arc::clone(table)).with_format(format.clone())?;
    if let Err(err) = parser.decode() {
        tracing::info!(%err, "suppressing response for invalid message");
        return Ok(Reply::Suppressed);
    }
    let reply = match parser.get_response() {
        Ok(response) => Reply::Response(response),
        Err(err @ ParserError::Task { .. }) => Reply::TaskFailed(err.to_string()),
        Err(err) => {
            tracing::warn!(%err, "decoded message produced no response");
            Reply::Suppressed
        }
    };
    Ok(reply)
}

async fn load_format(path: Option<&PathBuf>) -> anyhow::Result<WireFormat> {
    let Some(path) = path else {
        return Ok(WireFormat::default_v1());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading wire format from {}", path.display()))?;
    WireFormat::from_json_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("webgtt_cli=info,webgtt_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let table = Arc::new(TaskTable::builtin());

    if args.list_tasks {
        for (id, entry) in table.iter() {
            println!("{id}\t{}\t{} arg(s)", entry.name, entry.arity);
        }
        return Ok(());
    }

    let format = load_format(args.format.as_ref()).await?;
    tracing::info!(sentinel = %format.sentinel, row_delimiter = %format.row_delimiter, "reading messages from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut handled = 0usize;
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let message = line.trim_end_matches('\r');
        if message.is_empty() {
            continue;
        }
        handled += 1;
        match handle_message(message, &table, &format)? {
            Reply::Response(response) => println!("{response}"),
            Reply::TaskFailed(err) => eprintln!("{err}"),
            Reply::Suppressed => {}
        }
    }
    tracing::info!(handled, "stdin closed");
    Ok(())
}
