//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for course-tasks using clap.

pub mod commands;

use crate::domain::CourseId;
use clap::{Parser, Subcommand};

/// Turn a course curriculum into todo-list import files.
///
/// 1. run the `link` command and open the printed link
/// 2. save the downloaded JSON page(s)
/// 3. run the `todoist` command on the saved pages
/// 4. import the generated CSV files into the todo application
#[derive(Parser, Debug)]
#[command(name = "course-tasks")]
#[command(version, about, long_about = None)]
#[command(author = "Course Tasks Contributors")]
pub struct Cli {
    /// Path to an optional configuration file
    #[arg(long, env = "COURSE_TASKS_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COURSE_TASKS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Course identifier
    #[arg(short = 'c', long = "course-id", visible_alias = "course_id")]
    pub course_id: CourseId,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the link for downloading the course curriculum
    Link(commands::link::LinkArgs),

    /// Convert downloaded curriculum pages into task import CSV files
    Todoist(commands::todoist::TodoistArgs),
}
