// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end session orchestration.
//!
//! One invocation: confirm scope, discover cameras, resolve a frame range
//! per camera, generate render settings and takes inside one undo step,
//! write the split log, report a summary.

use crate::build::{self, BuildError, CameraRecord};
use crate::dialog::Dialogs;
use crate::discovery::{discover, DiscoveryScope};
use crate::logfile::{default_log_dir, write_split_log};
use crate::resolve::resolve;
use shotsplit_scene::{DocumentError, SceneDocument};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const SCOPE_QUESTION: &str =
    "Convert all cameras in the scene?\nClicking \"No\" will convert any selected cameras";
const NO_CAMERAS_MESSAGE: &str = "ERROR: No valid cameras found!";
const CLEAR_QUESTION: &str = "Delete All Takes and Render Settings?";

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// No node in scope matched the camera type filter
    #[error("No valid cameras found")]
    NoCamerasFound,

    /// Take/render-settings construction failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Document-layer failure (undo bracket, snapshots)
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Split-log write failed
    #[error("Log write failed: {0}")]
    Log(#[from] std::io::Error),
}

/// Outcome of a completed session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Number of takes generated
    pub takes_created: usize,
    /// Where the split log was written
    pub log_path: PathBuf,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.takes_created == 1 { "" } else { "s" };
        write!(
            f,
            "Successfully Generated {} Take{}",
            self.takes_created, plural
        )
    }
}

/// Drives one camera-to-take conversion over a document.
#[derive(Debug, Default)]
pub struct SessionOrchestrator {
    log_dir: Option<PathBuf>,
}

impl SessionOrchestrator {
    /// Create an orchestrator writing logs to the default folder
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the log folder
    pub fn with_log_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: Some(log_dir.into()),
        }
    }

    /// Run one session against the document.
    ///
    /// Aborts before any mutation when no camera is in scope. All document
    /// mutation happens inside a single undo bracket; a failure partway
    /// through leaves the bracket for the document to close.
    pub fn run(
        &self,
        doc: &mut SceneDocument,
        dialogs: &mut dyn Dialogs,
    ) -> Result<SessionSummary, SessionError> {
        let scope = if dialogs.confirm(SCOPE_QUESTION) {
            DiscoveryScope::WholeScene
        } else {
            DiscoveryScope::Selection
        };

        let cameras = discover(doc, scope);
        if cameras.is_empty() {
            dialogs.notify(NO_CAMERAS_MESSAGE);
            return Err(SessionError::NoCamerasFound);
        }

        let mut records: Vec<CameraRecord> = cameras
            .into_iter()
            .map(|camera| {
                let mut record = CameraRecord::new(doc, camera);
                record.range = resolve(doc, camera);
                record
            })
            .collect();

        doc.begin_undo("Generate Camera Takes")?;

        if build::has_generated_state(doc) && dialogs.confirm(CLEAR_QUESTION) {
            build::clear_generated_state(doc);
        }

        build::build(doc, &mut records)?;
        doc.end_undo()?;

        let log_dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| default_log_dir(doc));
        let log_path = write_split_log(doc, &records, &log_dir)?;

        let summary = SessionSummary {
            takes_created: records.len(),
            log_path,
        };
        tracing::info!(takes = summary.takes_created, "session finished");
        dialogs.notify(&summary.to_string());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ScriptedDialogs;
    use shotsplit_scene::{NodeKind, SceneNode};

    fn orchestrator(dir: &tempfile::TempDir) -> SessionOrchestrator {
        SessionOrchestrator::with_log_dir(dir.path())
    }

    fn add_cameras(doc: &mut SceneDocument, names: &[&str]) {
        for name in names {
            doc.add_node(SceneNode::new(*name, NodeKind::Camera));
        }
    }

    #[test]
    fn test_empty_scene_aborts_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        let mut dialogs = ScriptedDialogs::new(&[true]);

        let result = orchestrator(&dir).run(&mut doc, &mut dialogs);

        assert!(matches!(result, Err(SessionError::NoCamerasFound)));
        assert_eq!(dialogs.messages, vec![NO_CAMERAS_MESSAGE.to_string()]);
        assert_eq!(doc.change_events(), 0);
        assert_eq!(doc.render_settings.len(), 1);
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_full_session_generates_ordered_takes() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam2", "Cam10", "Cam1"]);
        let mut dialogs = ScriptedDialogs::new(&[true]);

        let summary = orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();

        assert_eq!(summary.takes_created, 3);
        assert_eq!(summary.to_string(), "Successfully Generated 3 Takes");
        assert!(summary.log_path.exists());

        let names: Vec<String> = doc
            .takes
            .children_of(doc.takes.main())
            .iter()
            .map(|&id| doc.takes.take(id).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["Cam1", "Cam2", "Cam10"]);
    }

    #[test]
    fn test_single_take_summary_is_singular() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam1"]);
        let mut dialogs = ScriptedDialogs::new(&[true]);

        let summary = orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();
        assert_eq!(summary.to_string(), "Successfully Generated 1 Take");
    }

    #[test]
    fn test_declined_scope_uses_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        let picked = doc.add_node(SceneNode::new("CamA", NodeKind::Camera));
        doc.add_node(SceneNode::new("CamB", NodeKind::Camera));
        doc.select(vec![picked]);
        let mut dialogs = ScriptedDialogs::new(&[false]);

        let summary = orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();
        assert_eq!(summary.takes_created, 1);
    }

    #[test]
    fn test_clear_prompt_only_with_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam1"]);
        let mut dialogs = ScriptedDialogs::new(&[true]);

        orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();
        // Pristine document: only the scope question was asked
        assert_eq!(dialogs.questions.len(), 1);
    }

    #[test]
    fn test_confirmed_clear_removes_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam1"]);
        let main = doc.takes.main();
        doc.takes.add_take("Old", main, None);
        let mut dialogs = ScriptedDialogs::new(&[true, true]);

        orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();

        let names: Vec<String> = doc
            .takes
            .children_of(main)
            .iter()
            .map(|&id| doc.takes.take(id).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["Cam1"]);
        assert_eq!(dialogs.questions[1], CLEAR_QUESTION);
    }

    #[test]
    fn test_declined_clear_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam1"]);
        let main = doc.takes.main();
        doc.takes.add_take("Old", main, None);
        let mut dialogs = ScriptedDialogs::new(&[true, false]);

        orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();

        let names: Vec<String> = doc
            .takes
            .children_of(main)
            .iter()
            .map(|&id| doc.takes.take(id).unwrap().name.clone())
            .collect();
        // New take is added alongside the old one
        assert_eq!(names, ["Cam1", "Old"]);
    }

    #[test]
    fn test_session_is_one_undo_step() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = SceneDocument::new("scene.ron");
        add_cameras(&mut doc, &["Cam1", "Cam2"]);
        let mut dialogs = ScriptedDialogs::new(&[true]);

        orchestrator(&dir).run(&mut doc, &mut dialogs).unwrap();
        assert_eq!(doc.render_settings.len(), 3);

        doc.undo().unwrap();
        assert_eq!(doc.render_settings.len(), 1);
        assert!(doc.takes.is_empty());
    }
}
