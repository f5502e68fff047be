//! Foreground focus timer.
//!
//! The core timer has no clock of its own; this loop ticks it once per
//! wall-clock second and records finished sessions as they come out.

use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;

use chrono::Local;
use clap::Subcommand;
use infinity_core::timer::{BreakRatio, DEEP_WORK_CHECKLIST};
use infinity_core::{FocusTimer, TimerEvent, TimerMode};

use crate::app::{self, App};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Fixed focus/break cycles
    Pomodoro {
        /// Focus minutes (5-180, multiple of 5)
        #[arg(long, default_value = "25")]
        focus: u64,
        /// Break minutes (1-60)
        #[arg(long = "break", default_value = "5")]
        break_minutes: u64,
        /// Number of focus/break cycles to run
        #[arg(long, default_value = "1")]
        cycles: u32,
        /// Subject (default: General)
        #[arg(long, default_value = "")]
        subject: String,
    },
    /// Count up until you press Enter
    Adaptive {
        /// Break is 1/N of the time worked
        #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(3..=4))]
        ratio: u8,
        /// Subject (default: General)
        #[arg(long, default_value = "")]
        subject: String,
    },
}

fn redraw(timer: &FocusTimer, label: &str) {
    print!("\r{label} {}  ", timer.display());
    let _ = std::io::stdout().flush();
}

fn record(app: &mut App, event: TimerEvent) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        TimerEvent::FocusCompleted(session) => {
            println!("\nFocus complete. Time for a break.");
            app.record_session(session, &Local::now())?;
        }
        TimerEvent::BreakCompleted => {
            println!("\nBreak over.");
        }
        TimerEvent::AdaptiveStopped {
            session,
            suggested_break_secs,
        } => {
            println!(
                "\nSession complete: {} min. Suggested break: {} min.",
                session.duration_secs / 60,
                suggested_break_secs.div_ceil(60)
            );
            app.record_session(session, &Local::now())?;
        }
    }
    Ok(())
}

fn run_pomodoro(
    app: &mut App,
    mut timer: FocusTimer,
    cycles: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut done = 0;
    timer.start();
    while done < cycles {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(event) = timer.tick() {
            if event == TimerEvent::BreakCompleted {
                done += 1;
            }
            record(app, event)?;
        }
        let label = match timer.phase() {
            infinity_core::timer::Phase::Focus => "focus",
            infinity_core::timer::Phase::Break => "break",
        };
        redraw(&timer, label);
    }
    timer.stop();
    println!();
    Ok(())
}

fn run_adaptive(app: &mut App, mut timer: FocusTimer) -> Result<(), Box<dyn std::error::Error>> {
    println!("Before you start:");
    for item in DEEP_WORK_CHECKLIST {
        println!("  - {item}");
    }
    println!("Press Enter to stop.");

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });

    timer.start();
    loop {
        std::thread::sleep(Duration::from_secs(1));
        timer.tick();
        redraw(&timer, "elapsed");
        if rx.try_recv().is_ok() {
            break;
        }
    }
    match timer.stop() {
        Some(event) => record(app, event),
        None => {
            println!("\nNothing to record.");
            Ok(())
        }
    }
}

pub fn run(user: Option<&str>, action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::open(user)?;

    match action {
        TimerAction::Pomodoro {
            focus,
            break_minutes,
            cycles,
            subject,
        } => {
            let mut timer = FocusTimer::new(TimerMode::Pomodoro);
            timer.set_focus_minutes(focus)?;
            timer.set_break_minutes(break_minutes)?;
            timer.set_subject(&subject);
            run_pomodoro(&mut app, timer, cycles)?;
        }
        TimerAction::Adaptive { ratio, subject } => {
            let mut timer = FocusTimer::new(TimerMode::Adaptive);
            timer.set_break_ratio(if ratio == 3 {
                BreakRatio::OneToThree
            } else {
                BreakRatio::OneToFour
            });
            timer.set_subject(&subject);
            run_adaptive(&mut app, timer)?;
        }
    }

    app::close(app)
}
