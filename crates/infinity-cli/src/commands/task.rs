//! Task management commands for CLI.

use chrono::Local;
use clap::Subcommand;
use infinity_core::{Quadrant, Task, TaskEdit, Toggle};

use crate::app;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Subject (default: General)
        #[arg(long, default_value = "")]
        subject: String,
        /// High leverage: long-term value
        #[arg(long)]
        important: bool,
        /// High consequence: short-term pressure
        #[arg(long)]
        urgent: bool,
    },
    /// List tasks
    List {
        /// Show completed tasks instead, newest first
        #[arg(long)]
        completed: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show open tasks in the priority matrix
    Matrix {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Subjects available to the timer
    Subjects,
    /// Edit a task
    Edit {
        /// Task ID
        id: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        important: Option<bool>,
        #[arg(long)]
        urgent: Option<bool>,
    },
    /// Toggle a task between done and open
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

fn line(task: &Task) -> String {
    let check = if task.completed { "x" } else { " " };
    format!("[{check}] {}  {} ({})", task.id, task.text, task.subject)
}

pub fn run(user: Option<&str>, action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;
    let now = Local::now();

    match action {
        TaskAction::Add {
            text,
            subject,
            important,
            urgent,
        } => {
            let id = app.add_task(&text, &subject, important, urgent)?;
            println!("Task created: {id}");
        }
        TaskAction::List { completed, json } => {
            let tasks: Vec<&Task> = if completed {
                app.tasks().completed()
            } else {
                app.tasks().incomplete().collect()
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in tasks {
                    println!("{}", line(task));
                }
            }
        }
        TaskAction::Matrix { json } => {
            let matrix = app.tasks().matrix();
            if json {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            } else {
                for quadrant in Quadrant::ALL {
                    println!("== {} ==", quadrant.title());
                    println!("   {}", quadrant.advice());
                    for task in matrix.cell(quadrant) {
                        println!("   {}", line(task));
                    }
                }
            }
        }
        TaskAction::Subjects => {
            for subject in app.tasks().subjects() {
                println!("{subject}");
            }
        }
        TaskAction::Edit {
            id,
            text,
            subject,
            important,
            urgent,
        } => {
            let edit = TaskEdit {
                text,
                subject,
                is_important: important,
                is_urgent: urgent,
            };
            if !app.update_task(&id, edit)? {
                return Err(format!("task not found: {id}").into());
            }
            println!("Task updated: {id}");
        }
        TaskAction::Done { id } => match app.toggle_task(&id, &now)? {
            Some(Toggle::Completed) => println!("Task completed: {id}"),
            Some(Toggle::Reopened) => println!("Task reopened: {id}"),
            None => return Err(format!("task not found: {id}").into()),
        },
        TaskAction::Delete { id } => {
            if !app.delete_task(&id, &now)? {
                return Err(format!("task not found: {id}").into());
            }
            println!("Task deleted: {id}");
        }
    }

    app::close(app)
}
