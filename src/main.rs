// course-tasks - Curriculum to Todo-List Import Converter
// Copyright (c) 2025 Course Tasks Contributors
// Licensed under the MIT License

use clap::Parser;
use course_tasks::cli::{Cli, Commands};
use course_tasks::config::{load_config_or_default, CourseTasksConfig};
use course_tasks::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());
    let guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        course_id = %cli.course_id,
        "course-tasks"
    );

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush the file log first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &CourseTasksConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Link(args) => args.execute(&cli.course_id, config),
        Commands::Todoist(args) => args.execute(&cli.course_id, config),
    }
}
