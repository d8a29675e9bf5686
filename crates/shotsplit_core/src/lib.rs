// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera-to-take splitting for scene documents.
//!
//! Converts every camera in a document (or in the selection) into an
//! independent take bound to its own render-settings record, with the
//! active frame range inferred from the camera's animation and every motion
//! source that influences it.
//!
//! ## Pipeline
//!
//! - [`discovery`] - camera filtering and natural name ordering
//! - [`resolve`] - frame-range inference over tracks, ancestors and tags
//! - [`build`] - render-settings cloning and take-tree construction
//! - [`session`] - the end-to-end flow, one undo step per invocation
//!
//! Dialog prompts go through the [`dialog::Dialogs`] trait; the split log
//! is written by [`logfile`].

pub mod build;
pub mod dialog;
pub mod discovery;
pub mod logfile;
pub mod natural;
pub mod resolve;
pub mod session;

pub use build::{BuildError, CameraRecord};
pub use dialog::{Dialogs, ScriptedDialogs};
pub use discovery::{discover, DiscoveryScope, CAMERA_KINDS};
pub use logfile::{default_log_dir, write_split_log};
pub use natural::natural_cmp;
pub use resolve::{resolve, TimeInterval};
pub use session::{SessionError, SessionOrchestrator, SessionSummary};
