//! Command-line client for diffing diagram sources locally or via the API.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use plantdiff_core::render::columns;
use plantdiff_core::{
    compare, DiffRequest, DiffResponse, SplitRow, DEFAULT_CLI_SERVER_URL, DEFAULT_MAX_DIFF_LINES,
};
use serde_json::Value;
use std::io::{self, Read};
use std::time::{Duration, Instant};

/// Marker for reading one side from standard input.
const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(name = "pdiff", about = "PlantDiff CLI", version)]
struct Cli {
    /// Diff server URL; diffs locally when unset (can also be set via PD_SERVER env var)
    #[arg(
        short,
        long,
        env = "PD_SERVER",
        global = true,
        num_args = 0..=1,
        default_missing_value = DEFAULT_CLI_SERVER_URL
    )]
    server: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Print elapsed time for the diff
    #[arg(long, global = true)]
    timing: bool,

    /// Request timeout in seconds when using a server
    #[arg(short = 't', long, global = true, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Compare two diagram sources side by side
    Diff {
        /// Original source file (`-` for stdin)
        old: String,
        /// Changed source file (`-` for stdin)
        new: String,
        /// Print only the reduced text (new side of every row)
        #[arg(short, long)]
        reduced: bool,
        /// Maximum lines per side for local diffs, 0 for no limit
        #[arg(long, env = "MAX_DIFF_LINES", default_value_t = DEFAULT_MAX_DIFF_LINES)]
        max_lines: usize,
        /// Total output width for the side-by-side view
        #[arg(short, long, default_value = "120")]
        width: usize,
    },
}

fn log_timing(timing: bool, label: &str, duration: Duration) {
    if timing {
        eprintln!(
            "[timing] {}: {:.1} ms",
            label,
            duration.as_secs_f64() * 1000.0
        );
    }
}

fn validate_sources(old: &str, new: &str) -> Result<(), String> {
    if old == STDIN_MARKER && new == STDIN_MARKER {
        return Err("only one side can be read from stdin".to_string());
    }
    Ok(())
}

fn read_source(path: &str) -> Result<String, String> {
    if path == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| format!("failed to read stdin: {}", err))?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(|err| format!("failed to read '{}': {}", path, err))
}

fn local_diff(request: &DiffRequest, max_lines: usize) -> Result<DiffResponse, String> {
    compare(request, max_lines).map_err(|err| err.to_string())
}

fn error_message_for_response(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return value
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or(body)
            .to_string();
    }

    body.to_string()
}

fn api_url(server: &str, segments: &[&str]) -> Result<reqwest::Url, String> {
    let mut url = reqwest::Url::parse(server)
        .map_err(|err| format!("Invalid server URL '{}': {}", server, err))?;
    let mut path = url
        .path_segments_mut()
        .map_err(|_| "Server URL cannot be used as an API base".to_string())?;
    path.pop_if_empty();
    for segment in segments {
        path.push(segment);
    }
    drop(path);
    Ok(url)
}

fn normalize_server(server: &str) -> Option<String> {
    let trimmed = server.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(mut url) = reqwest::Url::parse(trimmed) else {
        return Some(trimmed.to_string());
    };
    let is_http_localhost =
        url.scheme().eq_ignore_ascii_case("http") && url.host_str() == Some("localhost");
    if is_http_localhost && url.set_host(Some("127.0.0.1")).is_err() {
        return Some(trimmed.to_string());
    }
    let mut normalized = url.to_string();
    while normalized.ends_with('/') {
        normalized.pop();
    }
    Some(normalized)
}

async fn remote_diff(
    server: &str,
    timeout: u64,
    request: &DiffRequest,
) -> Result<DiffResponse, String> {
    let endpoint = api_url(server, &["api", "diff"])?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .map_err(|err| format!("client setup failed: {}", err))?;
    let res = client
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|err| format!("request failed: {}", err))?;

    let status = res.status();
    if !status.is_success() {
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => format!("failed to read error response body: {}", err),
        };
        return Err(format!(
            "{} ({})",
            error_message_for_response(status, &body),
            status
        ));
    }

    res.json::<DiffResponse>()
        .await
        .map_err(|err| format!("response decoding error: {}", err))
}

fn fit_cell(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{}{}", text, " ".repeat(width - count));
    }
    if width == 0 {
        return String::new();
    }
    let mut cell: String = text.chars().take(width - 1).collect();
    cell.push('~');
    cell
}

fn format_side_by_side(rows: &[SplitRow], width: usize) -> String {
    let cell_width = width.saturating_sub(3) / 2;
    let columns = columns(rows);
    columns
        .before
        .iter()
        .zip(columns.after.iter())
        .map(|(before, after)| {
            let line = format!(
                "{} | {}",
                fit_cell(before, cell_width),
                fit_cell(after, cell_width)
            );
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_summary(response: &DiffResponse) -> String {
    let stats = &response.stats;
    format!(
        "distance {}: {} deleted, {} inserted, {} unchanged",
        response.distance, stats.deleted, stats.inserted, stats.matched
    )
}

fn format_diff_output(
    response: &DiffResponse,
    json: bool,
    reduced: bool,
    width: usize,
) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(response)
            .map_err(|err| format!("response encoding error: {}", err));
    }
    if reduced {
        return Ok(response.reduced.clone());
    }
    Ok(format!(
        "{}\n{}",
        format_side_by_side(&response.rows, width),
        format_summary(response)
    ))
}

fn exit_with(action: &str, message: &str) -> ! {
    eprintln!("{} failed: {}", action, message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let Cli {
        server,
        json,
        timing,
        timeout,
        command,
    } = Cli::parse();

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        Commands::Diff {
            old,
            new,
            reduced,
            max_lines,
            width,
        } => {
            if let Err(message) = validate_sources(&old, &new) {
                exit_with("Diff", &message);
            }
            let request = match (read_source(&old), read_source(&new)) {
                (Ok(old), Ok(new)) => DiffRequest { old, new },
                (Err(message), _) | (_, Err(message)) => exit_with("Diff", &message),
            };

            let start = Instant::now();
            let result = match server.as_deref().and_then(normalize_server) {
                Some(server) => remote_diff(&server, timeout, &request).await,
                None => local_diff(&request, max_lines),
            };
            log_timing(timing, "diff", start.elapsed());

            let response = result.unwrap_or_else(|message| exit_with("Diff", &message));
            let output = format_diff_output(&response, json, reduced, width)
                .unwrap_or_else(|message| exit_with("Diff", &message));
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
