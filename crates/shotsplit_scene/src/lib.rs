// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene document model for shotsplit.
//!
//! This crate provides the host-side entities the splitter operates on:
//! - Scene nodes with parent/child hierarchy, tags and animation tracks
//! - Render-settings records
//! - The take hierarchy under a fixed main take
//! - The document itself, with snapshot-based undo and RON persistence
//!
//! ## Architecture
//!
//! Entities are owned by [`SceneDocument`] and addressed through opaque
//! uuid handles ([`NodeId`], [`TakeId`], [`RenderSettingsId`]). Mutations
//! meant to be undoable happen inside a `begin_undo`/`end_undo` bracket.

pub mod document;
pub mod history;
pub mod node;
pub mod render;
pub mod tag;
pub mod take;
pub mod time;
pub mod track;

pub use document::{DocumentError, SceneDocument};
pub use history::{History, HistoryError, StateSnapshot, Transaction};
pub use node::{NodeId, NodeKind, SceneNode};
pub use render::{FrameSequenceMode, RenderSettings, RenderSettingsId};
pub use tag::{Tag, TagKind};
pub use take::{Take, TakeId, TakeTree};
pub use time::Time;
pub use track::{AnimationTrack, Keyframe, TrackParameter};
