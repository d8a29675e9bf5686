// SPDX-License-Identifier: MIT OR Apache-2.0
//! Take and render-settings construction.
//!
//! One render-settings record and one take per camera record, with the take
//! order matching the sorted camera order. The caller holds the undo
//! bracket around these mutations.

use crate::resolve::TimeInterval;
use shotsplit_scene::{
    FrameSequenceMode, NodeId, RenderSettingsId, SceneDocument, TakeId,
};
use thiserror::Error;

/// Build errors
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document has no render-settings record to clone from
    #[error("Document has no render settings to use as a template")]
    MissingTemplate,
}

/// Per-camera working state for one session.
///
/// Created per discovered camera, enriched by range resolution and then by
/// the build step, and discarded when the session ends; only its side
/// effects in the document persist.
#[derive(Debug, Clone)]
pub struct CameraRecord {
    /// The camera node
    pub camera: NodeId,
    /// Name for the generated take and render-settings record
    pub take_name: String,
    /// Resolved frame range
    pub range: TimeInterval,
    /// Generated render-settings record, assigned during build
    pub render_settings: Option<RenderSettingsId>,
    /// Generated take, assigned during build
    pub take: Option<TakeId>,
}

impl CameraRecord {
    /// Create a record for a camera, named after the camera node
    pub fn new(doc: &SceneDocument, camera: NodeId) -> Self {
        let take_name = doc
            .node(camera)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        Self {
            camera,
            take_name,
            range: TimeInterval::new(),
            render_settings: None,
            take: None,
        }
    }
}

/// Whether the document already holds generated-looking state: any
/// non-default render-settings record or any take besides the main take.
pub fn has_generated_state(doc: &SceneDocument) -> bool {
    !doc.non_default_render_settings().is_empty() || doc.takes.has_non_main_takes()
}

/// Remove all non-default render-settings records and all non-main takes.
pub fn clear_generated_state(doc: &mut SceneDocument) {
    let settings_removed = doc.remove_non_default_render_settings();
    doc.notify_changed();

    let takes_removed = doc.takes.clear_non_main();
    doc.notify_changed();

    tracing::info!(settings_removed, takes_removed, "cleared previous takes");
}

/// Create one render-settings record and one take per camera record and
/// bind them together.
pub fn build(doc: &mut SceneDocument, records: &mut [CameraRecord]) -> Result<(), BuildError> {
    create_render_settings(doc, records)?;
    create_takes(doc, records);
    Ok(())
}

/// Clone the document's default record per camera, switch it to a manual
/// range and fill in the resolved interval. Time values go in directly;
/// frame numbers only exist in the log output.
fn create_render_settings(
    doc: &mut SceneDocument,
    records: &mut [CameraRecord],
) -> Result<(), BuildError> {
    let template = doc
        .default_render_settings()
        .cloned()
        .ok_or(BuildError::MissingTemplate)?;

    for record in records.iter_mut() {
        let mut settings = template.duplicate();
        settings.name = record.take_name.clone();
        settings.frame_sequence = FrameSequenceMode::ManualRange;
        settings.frame_start = record.range.start;
        settings.frame_end = record.range.end;
        record.render_settings = Some(settings.id);
        doc.push_render_settings(settings);
    }

    doc.notify_changed();
    Ok(())
}

/// Insert takes in reverse record order, each before the main take's
/// current first child. Front insertion plus reverse iteration leaves the
/// children in the records' ascending order.
fn create_takes(doc: &mut SceneDocument, records: &mut [CameraRecord]) {
    let main = doc.takes.main();

    for record in records.iter_mut().rev() {
        let first_child = doc.takes.children_of(main).first().copied();
        let take_id = doc.takes.add_take(&record.take_name, main, first_child);
        if let Some(take) = doc.takes.take_mut(take_id) {
            take.camera = Some(record.camera);
            take.render_settings = record.render_settings;
        }
        record.take = Some(take_id);
    }

    doc.notify_changed();
}
