use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show standings sorted by resolved score (default if no subcommand)
    Standings {
        /// Output tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Open a team's page on the league site by its standings index
    Open {
        /// Index of the team to open (1-based, as shown in standings)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "papan-skor")]
#[command(about = "Baris-berbaris competition standings CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/papan-skor/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Standings { tsv: false });
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match papan_skor::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = papan_skor::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Check if any events are configured
    if config.events.is_empty() {
        eprintln!("No events configured in config file.");
        eprintln!("Add events to ~/.config/papan-skor/config.yaml:");
        eprintln!("  events:");
        eprintln!("    - name: LKBB Piala Raya");
        eprintln!("      slug: lkbb-piala-raya-2026");
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Loaded {} events from config", config.events.len());
        for (i, event) in config.events.iter().enumerate() {
            eprintln!(
                "  Event {}: {} ({})",
                i + 1,
                event.name.as_deref().unwrap_or("(unnamed)"),
                event.slug
            );
        }
    }

    // Create league API client
    let client = match papan_skor::api::create_client(&config.api) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create API client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    // Fetch, resolve, and rank all score records
    let ranked = match papan_skor::fetch::fetch_and_rank(&client, &config, cli.verbose).await {
        Ok(ranked) => ranked,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let display = config.display();

    match command {
        Commands::Standings { tsv } => {
            if tsv {
                let output =
                    papan_skor::output::format_tsv(&ranked, display.fallback(), display.decimals());
                if !output.is_empty() {
                    println!("{}", output);
                }
            } else if cli.verbose && !ranked.is_empty() {
                // Verbose mode: detailed per-record output with warnings
                let use_colors = papan_skor::output::should_use_colors();
                for item in &ranked {
                    let warnings = papan_skor::score::lint_score(&item.entry.score);
                    println!(
                        "{}",
                        papan_skor::output::format_entry_detail(
                            item,
                            &warnings,
                            display.fallback(),
                            display.decimals(),
                            use_colors,
                        )
                    );
                    println!();
                }
            } else {
                // Normal mode: standings table
                let use_colors = papan_skor::output::should_use_colors();
                let output = papan_skor::output::format_standings_table(
                    &ranked,
                    display.fallback(),
                    display.decimals(),
                    use_colors,
                );
                println!("{}", output);
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Total: {} teams in {:?}", ranked.len(), start_time.elapsed());
            }
        }
        Commands::Open { index } => {
            // Validate index bounds (1-based)
            if index < 1 || index > ranked.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    ranked.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            let Some(site_url) = config.api.site_url.as_deref() else {
                eprintln!("api.site_url is not configured; cannot open team pages.");
                std::process::exit(EXIT_CONFIG);
            };

            // Get record at index (convert to 0-based)
            let item = &ranked[index - 1];
            let url = item.entry.page_url(site_url);

            if let Err(e) = papan_skor::browser::open_url(&url) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_NETWORK);
            }

            println!("Opening {} in browser: {}", item.entry.tim, url);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
