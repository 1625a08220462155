//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studyflow_core` linkage.
//! - Print a one-screen summary of a seeded dashboard.

use chrono::{Datelike, Local};
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use studyflow_core::logging::init_from_config;
use studyflow_core::{Dashboard, DashboardTab, StudyConfig, UserProfile};

#[derive(Parser, Debug)]
#[command(name = "studyflow", about = "StudyFlow core smoke check")]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    println!("studyflow_core ping={}", studyflow_core::ping());
    println!("studyflow_core version={}", studyflow_core::core_version());

    let mut config = match &cli.config {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    if let Some(dir) = &cli.log_dir {
        config.logging.dir = Some(dir.clone());
        config.validate()?;
    }
    init_from_config(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(print_summary(&config))
}

async fn print_summary(config: &StudyConfig) -> Result<(), Box<dyn Error>> {
    let user = UserProfile {
        name: "Study User".to_string(),
        email: "smoke@studyflow.local".to_string(),
    };
    let dashboard = Dashboard::seeded(user, config)?;
    let today = Local::now().date_naive();

    let counts = dashboard.tasks().counts()?;
    let notes = dashboard.notes().search_notes("")?;
    let events = dashboard.schedule().events_for_day(today.weekday())?;
    let timer = dashboard.timer().snapshot().await;
    let progress = dashboard.progress_summary(today).await?;

    let tabs: Vec<&str> = DashboardTab::ALL.iter().map(|tab| tab.as_str()).collect();
    println!("user={} tabs={}", dashboard.user().name, tabs.join("|"));
    println!(
        "tasks all={} pending={} completed={}",
        counts.all, counts.pending, counts.completed
    );
    println!("notes count={}", notes.len());
    println!("schedule day={} events={}", today.weekday(), events.len());
    for event in &events {
        println!("  {} {} ({})", event.time, event.title, event.duration);
    }
    println!("timer mode={} clock={}", timer.mode, timer.clock);
    println!(
        "progress weekly={:.0}% tasks={:.0}% focus_sessions={}",
        progress.weekly_percent, progress.task_percent, progress.focus_sessions
    );

    info!("event=cli_summary module=cli status=ok events={}", events.len());
    Ok(())
}
