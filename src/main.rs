//! Command-line driver for the portfolio page behaviour.
//!
//! Runs the same services the page uses against a terminal surface.
//!
//! # Usage
//!
//! ```bash
//! # Send a message through the contact form (prompts for missing fields)
//! cargo run -- contact --name "Ada" --email ada@example.com
//!
//! # Load the GitHub statistics
//! cargo run -- stats --username octocat
//!
//! # Show which nav link scroll-spy highlights
//! cargo run -- spy --scroll 900 --section home:0:800 --section about:800:700 --section contact:1500:600
//! ```
//!
//! # Environment Variables
//!
//! See [`portfolio_site::config`]. `EMAILJS_PUBLIC_KEY` is required by `contact`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use portfolio_site::application::services::{
    ContactService, EmailSettings, NotificationPresenter, StatsService, SubmissionOutcome,
};
use portfolio_site::application::{PageController, PageParts};
use portfolio_site::config::{self, Config};
use portfolio_site::domain::entities::{HeaderState, PageLayout, Section};
use portfolio_site::domain::ports::PageSurface;
use portfolio_site::error::AppError;
use portfolio_site::infrastructure::email::EmailJsSender;
use portfolio_site::infrastructure::github::HttpGithubStats;
use portfolio_site::infrastructure::terminal::TerminalSurface;

/// Portfolio page behaviour from the terminal.
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message through the contact form
    Contact {
        /// Sender name
        #[arg(short, long)]
        name: Option<String>,

        /// Sender email address
        #[arg(short, long)]
        email: Option<String>,

        /// Message body
        #[arg(short, long)]
        message: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Load GitHub contribution and repository counts
    Stats {
        /// GitHub account (defaults to GITHUB_USERNAME)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Show the section highlighted at a scroll offset
    Spy {
        /// Scroll offset in pixels
        #[arg(long)]
        scroll: f64,

        /// Previous scroll offset, for the header state
        #[arg(long, default_value_t = 0.0)]
        previous: f64,

        /// Section as `id:top:height`; repeat in page order
        #[arg(long = "section", required = true)]
        sections: Vec<Section>,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        viewport: f64,

        /// Fixed header height in pixels
        #[arg(long, default_value_t = 70.0)]
        header: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Contact {
            name,
            email,
            message,
            yes,
        } => handle_contact(&config, name, email, message, yes).await?,
        Commands::Stats { username } => handle_stats(&config, username).await?,
        Commands::Spy {
            scroll,
            previous,
            sections,
            viewport,
            header,
        } => handle_spy(scroll, previous, sections, viewport, header),
    }

    Ok(())
}

/// Installs the global subscriber; logs go to stderr so stdout stays readable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Builds the page controller around a terminal surface.
fn build_controller(
    config: &Config,
    surface: Arc<TerminalSurface>,
    settings: EmailSettings,
) -> Result<Arc<PageController<EmailJsSender, HttpGithubStats>>> {
    let presenter = Arc::new(NotificationPresenter::with_timing(
        surface.clone(),
        config.notification_timing(),
    ));

    let sender = Arc::new(
        EmailJsSender::new(&config.emailjs_api_url).context("Failed to create email sender")?,
    );
    let contact = Arc::new(ContactService::new(sender, presenter.clone(), settings));

    let stats = Arc::new(StatsService::new(
        Arc::new(github_client(config)?),
        surface.clone(),
    ));

    Ok(PageController::new(PageParts {
        layout: PageLayout::default(),
        page: surface.clone(),
        form: surface,
        presenter,
        contact,
        stats,
        github_username: config.github_username.clone(),
    }))
}

fn github_client(config: &Config) -> Result<HttpGithubStats> {
    HttpGithubStats::new(
        config.contributions_api_url.clone(),
        config.github_api_url.clone(),
    )
    .context("Failed to create GitHub client")
}

/// Asks for `label` unless it was given on the command line.
fn field_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Runs the contact form flow: validate, send, report.
async fn handle_contact(
    config: &Config,
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let settings = config.email_settings()?;

    println!("{}", "Contact".bright_blue().bold());
    println!();

    let name = field_or_prompt(name, "Your name")?;
    let email = field_or_prompt(email, "Your email")?;
    let message = field_or_prompt(message, "Message")?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Send this message?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let surface = Arc::new(TerminalSurface::with_form(&name, &email, &message));
    let controller = build_controller(config, surface, settings)?;

    match controller.submit_contact_form().await? {
        SubmissionOutcome::Sent => Ok(()),
        SubmissionOutcome::Invalid(err) => Err(AppError::from(err).into()),
        SubmissionOutcome::Failed(err) => Err(AppError::from(err).into()),
    }
}

/// Loads both statistics concurrently and prints them.
async fn handle_stats(config: &Config, username: Option<String>) -> Result<()> {
    let username = username.unwrap_or_else(|| config.github_username.clone());

    println!(
        "{} {}",
        "GitHub statistics for".bright_blue().bold(),
        username.cyan()
    );
    println!();

    let surface = Arc::new(TerminalSurface::new());
    let stats = Arc::new(StatsService::new(
        Arc::new(github_client(config)?),
        surface,
    ));

    for handle in stats.spawn_all(&username) {
        handle.await?;
    }

    Ok(())
}

/// Prints the header state and the highlighted section at `scroll`.
fn handle_spy(scroll: f64, previous: f64, sections: Vec<Section>, viewport: f64, header: f64) {
    let layout = PageLayout::new(header, viewport, sections);
    let surface = TerminalSurface::new();

    let state = HeaderState::from_scroll(scroll, previous);
    println!(
        "{} condensed={} hidden={}",
        "Header:".bold(),
        state.condensed,
        state.hidden
    );

    surface.set_active_link(layout.active_section(scroll));
}
