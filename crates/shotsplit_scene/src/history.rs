// SPDX-License-Identifier: MIT OR Apache-2.0
//! Undo/redo history built on whole-state snapshots.
//!
//! The document captures a snapshot when a transaction opens and another
//! when it closes; the pair becomes one undo step.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Maximum undo history depth
const MAX_HISTORY: usize = 100;

/// History errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Nothing to undo
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Nothing to redo
    #[error("Nothing to redo")]
    NothingToRedo,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Result type for history operations
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Serialized document state at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Serialized state
    pub data: Vec<u8>,
    /// Size in bytes
    pub size: usize,
}

impl StateSnapshot {
    /// Create a snapshot from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        let size = data.len();
        Self { data, size }
    }

    /// Create from a serializable value
    pub fn from_value<T: Serialize>(value: &T) -> Result<Self> {
        let data = bincode::serialize(value)?;
        Ok(Self::new(data))
    }

    /// Deserialize back to a value
    pub fn to_value<T: for<'de> Deserialize<'de>>(&self) -> Result<T> {
        Ok(bincode::deserialize(&self.data)?)
    }
}

/// A committed transaction: the state on both sides of one undo step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Human-readable description
    pub description: String,
    /// State before the transaction (for undo)
    pub before: StateSnapshot,
    /// State after the transaction (for redo)
    pub after: StateSnapshot,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(description: impl Into<String>, before: StateSnapshot, after: StateSnapshot) -> Self {
        Self {
            description: description.into(),
            before,
            after,
        }
    }

    /// Get memory size of this transaction
    pub fn memory_size(&self) -> usize {
        self.before.size + self.after.size
    }
}

/// Undo/redo history manager
#[derive(Debug)]
pub struct History {
    /// Undo stack
    undo_stack: VecDeque<Transaction>,
    /// Redo stack
    redo_stack: VecDeque<Transaction>,
    /// Maximum history depth
    max_depth: usize,
    /// Total memory used
    memory_used: usize,
}

impl History {
    /// Create a new history manager
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY)
    }

    /// Create with custom maximum depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth,
            memory_used: 0,
        }
    }

    /// Commit a transaction, clearing the redo stack
    pub fn commit(&mut self, transaction: Transaction) {
        self.redo_stack.clear();

        self.memory_used += transaction.memory_size();
        self.undo_stack.push_back(transaction);

        // Enforce history limit
        while self.undo_stack.len() > self.max_depth {
            if let Some(old) = self.undo_stack.pop_front() {
                self.memory_used = self.memory_used.saturating_sub(old.memory_size());
            }
        }
    }

    /// Undo the last transaction
    pub fn undo(&mut self) -> Result<Transaction> {
        let transaction = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;

        self.memory_used = self.memory_used.saturating_sub(transaction.memory_size());
        self.redo_stack.push_back(transaction.clone());

        Ok(transaction)
    }

    /// Redo the last undone transaction
    pub fn redo(&mut self) -> Result<Transaction> {
        let transaction = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;

        self.memory_used += transaction.memory_size();
        self.undo_stack.push_back(transaction.clone());

        Ok(transaction)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.memory_used = 0;
    }

    /// Get description of the next undo step
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|t| t.description.as_str())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
