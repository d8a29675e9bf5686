// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera-to-take splitter, headless entry point.
//!
//! Loads a scene document, runs one splitting session with console
//! prompts, and saves the document back:
//! - One take per camera, named after it
//! - One render-settings record per take with the inferred frame range
//! - A split log under the user's documents folder
//!
//! Inside a host application the session runs off a registered command;
//! this binary is the direct-invocation path against a document on disk.

mod console;

use console::ConsoleDialogs;
use shotsplit_core::{SessionError, SessionOrchestrator, SessionSummary};
use shotsplit_scene::{DocumentError, SceneDocument};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("shotsplit_app=info".parse().unwrap())
        .add_directive("shotsplit_core=info".parse().unwrap())
        .add_directive("shotsplit_scene=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(path) = env::args().nth(1) else {
        print_usage();
        return ExitCode::from(2);
    };

    match run(Path::new(&path)) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<SessionSummary, AppError> {
    let mut doc = SceneDocument::load(path)?;
    let mut dialogs = ConsoleDialogs;

    let summary = SessionOrchestrator::new().run(&mut doc, &mut dialogs)?;
    doc.save(path)?;
    Ok(summary)
}

fn print_usage() {
    eprintln!("Usage: shotsplit <scene.ron>");
    eprintln!();
    eprintln!("Converts every camera in the scene document into a take with");
    eprintln!("its own render settings, then writes a split log.");
}
