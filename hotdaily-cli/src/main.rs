//! hotdaily CLI - build or serve the AI hot-topic daily report site

use anyhow::Context;
use clap::{Parser, Subcommand};
use hotdaily_core::config::{self, ResolvedConfig};
use hotdaily_core::translate::{is_english, smart_summary, translate_text};
use hotdaily_core::{build_index, build_site, create_router, AppState};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "hotdaily=info,tower_http=info,warn";

#[derive(Parser)]
#[command(name = "hotdaily")]
#[command(about = "Static site generator and server for daily AI hot-topic reports")]
#[command(version = env!("HOTDAILY_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that read the archive
#[derive(clap::Args)]
struct SiteArgs {
    /// Path to config file (default: auto-discover)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Archive root with one directory per date (overrides config file)
    #[arg(long, env = "HOTDAILY_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole site into static files
    Build {
        #[command(flatten)]
        site: SiteArgs,

        /// Output directory (overrides config file)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the site over HTTP, reading the archive on every request
    Serve {
        #[command(flatten)]
        site: SiteArgs,

        /// Bind host (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List archived dates with their item counts
    Index {
        #[command(flatten)]
        site: SiteArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Run the term translator on text (reads stdin when TEXT is omitted)
    Translate {
        text: Option<String>,

        /// Truncate the translation to this many characters
        #[arg(long)]
        max_len: Option<usize>,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config from the current directory and apply the shared flags
fn load_site_config(site: &SiteArgs) -> anyhow::Result<ResolvedConfig> {
    let project_root = std::env::current_dir()?;
    let mut resolved = config::load_and_resolve(&project_root, site.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(ref data_dir) = site.data_dir {
        resolved.data_dir = data_dir.clone();
    }
    resolved.anchor_paths(&project_root);
    Ok(resolved)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Build { site, out } => {
            let mut resolved = load_site_config(&site)?;
            if let Some(out) = out {
                resolved.output_dir = out;
                resolved.anchor_paths(&std::env::current_dir()?);
            }

            let summary = build_site(&resolved)?;
            println!(
                "Built {} pages and {} data files into {}",
                summary.pages,
                summary.data_files,
                resolved.output_dir.display()
            );
        }
        Commands::Serve { site, host, port } => {
            let mut resolved = load_site_config(&site)?;
            if let Some(host) = host {
                resolved.host = host;
            }
            if let Some(port) = port {
                if port == 0 {
                    anyhow::bail!("--port must be non-zero");
                }
                resolved.port = port;
            }

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?
                .block_on(serve(resolved))?;
        }
        Commands::Index { site, format } => {
            let resolved = load_site_config(&site)?;
            let index = build_index(&resolved.data_dir, &resolved.report_file)?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&index)?);
                }
                OutputFormat::Text => {
                    if index.is_empty() {
                        println!("No archived reports in {}", resolved.data_dir.display());
                    } else {
                        for entry in &index.entries {
                            println!("{}  {:>5}", entry.date, entry.count);
                        }
                        println!();
                        println!(
                            "{} days, {} items",
                            index.days(),
                            index.total_items()
                        );
                    }
                }
            }
        }
        Commands::Translate { text, max_len } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let text = text.trim_end_matches(['\n', '\r']);
            if !text.is_empty() && !is_english(text) {
                tracing::info!("input is mostly non-English; only embedded terms are replaced");
            }

            let output = match max_len {
                Some(n) => smart_summary(text, n),
                None => translate_text(text),
            };
            println!("{}", output);
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                print_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Printable `host:port`, with IPv6 hosts in brackets
fn display_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

async fn serve(config: ResolvedConfig) -> anyhow::Result<()> {
    let addr = display_addr(&config.host, config.port);
    tracing::info!("serving {} on http://{}{}", config.data_dir.display(), addr, config.base_path);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let app = create_router(AppState::new(config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Paths:");
    println!("  data_dir: {}", resolved.data_dir.display());
    println!("  report_file: {}", resolved.report_file);
    println!("  output_dir: {}", resolved.output_dir.display());
    println!("  base_path: {}", resolved.base_path);
    println!();
    println!("Text:");
    println!("  title: {}", resolved.title);
    println!("  description: {}", resolved.description);
    println!("  update_note: {}", resolved.update_note);
    println!("  footer: {}", resolved.footer);
    println!();
    println!("Layout:");
    println!("  home_count: {}", resolved.home_count);
    println!("  today_count: {}", resolved.today_count);
    println!("  page_size: {}", resolved.page_size);
    println!("  home_summary_length: {}", resolved.home_summary_length);
    println!("  all_summary_length: {}", resolved.all_summary_length);
    println!();
    println!("Server:");
    println!("  host: {}", resolved.host);
    println!("  port: {}", resolved.port);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{SocketAddr, ToSocketAddrs};

    #[test]
    fn test_display_addr_brackets_ipv6() {
        assert_eq!(display_addr("127.0.0.1", 3000), "127.0.0.1:3000");
        assert_eq!(display_addr("localhost", 80), "localhost:80");
        assert_eq!(display_addr("::1", 3000), "[::1]:3000");
        assert_eq!(display_addr("[::1]", 3000), "[::1]:3000");
    }

    #[test]
    fn test_host_port_pair_resolves_ipv6() {
        let addrs: Vec<SocketAddr> = ("::1", 3000).to_socket_addrs().unwrap().collect();
        assert_eq!(addrs, vec!["[::1]:3000".parse::<SocketAddr>().unwrap()]);

        // A joined host:port string does not parse for IPv6 hosts
        assert!("::1:3000".parse::<SocketAddr>().is_err());
    }
}
