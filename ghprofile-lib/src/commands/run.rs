//! Argument parsing and the top-level profile flow

use super::Host;
use crate::Result;
use crate::cache::CacheStore;
use crate::error::Error;
use crate::fallback::{DataSource, ErrorChain, FallbackPolicy, NoData, Notice, Resolution, resolve};
use crate::github::{Client, DEFAULT_API_URL};
use crate::reports::{ReportOptions, generate_console};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};
use core::time::Duration;
use ohno::IntoAppError;
use std::io::Write;
use std::path::PathBuf;

const LOG_TARGET: &str = "   command";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "ghprofile", version, author, long_about = None)]
#[command(about = "Show a GitHub user's profile as a card in the terminal")]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// GitHub username to show
    #[arg(long, short = 'u', value_name = "LOGIN", default_value = "dayvster")]
    user: String,

    /// Number of top-starred repositories to list
    #[arg(long, short = 'n', value_name = "N", default_value_t = 5)]
    top: usize,

    /// Don't show icons (for terminals without a Nerd Font)
    #[arg(long, help_heading = "Presentation")]
    no_icons: bool,

    /// Don't draw a border around the card
    #[arg(long, help_heading = "Presentation")]
    no_border: bool,

    /// Plain output: no colors and no border
    #[arg(long, help_heading = "Presentation")]
    no_style: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", help_heading = "Presentation")]
    color: ColorMode,

    /// Fail instead of showing demo data when nothing else is available
    #[arg(long, conflicts_with = "demo", help_heading = "Data Source")]
    no_demo: bool,

    /// Show demo data without touching the network or the cache
    #[arg(long, help_heading = "Data Source")]
    demo: bool,

    /// Directory under which cached profiles are kept
    #[arg(long, value_name = "PATH", help_heading = "Data Source")]
    cache_dir: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", env = "GHPROFILE_API_URL", default_value = DEFAULT_API_URL, help_heading = "Data Source")]
    api_url: String,

    /// Give up on the live fetch after this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..), help_heading = "Data Source")]
    timeout_secs: u64,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    log_level: LogLevel,
}

impl Args {
    fn policy(&self) -> FallbackPolicy {
        FallbackPolicy {
            force_demo: self.demo,
            no_demo: self.no_demo,
            deadline: Duration::from_secs(self.timeout_secs),
        }
    }

    fn report_options(&self) -> ReportOptions {
        let colors = !self.no_style
            && match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };

        ReportOptions {
            top_n: self.top,
            icons: !self.no_icons,
            border: !self.no_border && !self.no_style,
            colors,
            width: None,
        }
    }

    fn cache_store(&self) -> Result<CacheStore> {
        match &self.cache_dir {
            Some(dir) => Ok(CacheStore::new(dir)),
            None => CacheStore::from_env(),
        }
    }
}

/// Parse `args` and show the requested profile on `host`.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the setup fails (bad API URL, no cache directory) or the
/// report can't be written. When no data at all is available, a diagnostic is
/// written to the host's error stream and the host is asked to exit with status 1.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);

    let username = args.user.trim();
    if username.is_empty() && !args.demo {
        ohno::bail!("the username must not be empty");
    }

    let cache = args.cache_store()?;
    let client = Client::new(&args.api_url)?;
    let policy = args.policy();

    log::debug!(target: LOG_TARGET, "Resolving '{username}' via {} (cache at '{}')", client.base_url(), cache.dir().display());

    match resolve(&client, &cache, username, policy).await {
        Ok(resolution) => {
            report_warnings(host, &resolution, username, policy);
            show(host, &resolution, &args.report_options())
        }
        Err(no_data) => {
            report_no_data(host, &no_data);
            host.exit(1);
            Ok(())
        }
    }
}

fn show<H: Host>(host: &mut H, resolution: &Resolution, options: &ReportOptions) -> Result<()> {
    let mut report = String::new();
    generate_console(&resolution.bundle, options, &mut report)?;

    let mut output = host.output();
    output.write_all(report.as_bytes()).into_app_err("unable to write the profile report")?;
    output.flush().into_app_err("unable to flush the profile report")
}

fn report_warnings<H: Host>(host: &mut H, resolution: &Resolution, username: &str, policy: FallbackPolicy) {
    let mut err = host.error();

    for notice in &resolution.notices {
        let _ = writeln!(err, "warning: {notice}");
        if let Notice::FetchFailed(e) = notice
            && let Some(hint) = fetch_hint(e)
        {
            let _ = writeln!(err, "hint: {hint}");
        }
    }

    if !resolution.is_degraded() || policy.force_demo {
        return;
    }

    let _ = match resolution.source {
        DataSource::Cache => writeln!(err, "warning: showing cached data for '{username}'"),
        _ => writeln!(err, "warning: showing demo data for '{username}'; none of it is real"),
    };
}

fn report_no_data<H: Host>(host: &mut H, no_data: &NoData) {
    log::error!(target: LOG_TARGET, "{no_data}");

    let mut err = host.error();
    let _ = writeln!(err, "error: {no_data}");
    let _ = writeln!(err, "  live fetch: {}", ErrorChain(&no_data.fetch_error));
    let _ = writeln!(err, "  cache: {}", ErrorChain(&no_data.cache_error));
    if let Some(hint) = fetch_hint(&no_data.fetch_error) {
        let _ = writeln!(err, "hint: {hint}");
    }
    let _ = writeln!(err, "hint: drop --no-demo to fall back to demo data");
}

/// Likely cause of a failed live fetch, for the user. Only the wording depends
/// on the kind of failure; every failure takes the same fallback path.
fn fetch_hint(error: &Error) -> Option<&'static str> {
    match error.status() {
        Some(404) => Some("GitHub reports no such user; check the spelling of --user"),
        Some(403 | 429) => Some("the anonymous GitHub API rate limit is probably exhausted; try again later"),
        _ if error.is_transport() => Some("the GitHub API could not be reached in time; check the network or raise --timeout-secs"),
        _ => None,
    }
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a second run in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
