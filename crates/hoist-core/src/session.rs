//! The upload session: pending-file accumulation and finalize gating.
//!
//! A session is created when an upload begins, collects one [`PendingFile`]
//! per accepted file, and produces a single [`FinalizeRequest`] once the
//! coordinate is complete. Sending the staged bytes and committing the
//! request are the transport's job; the session itself never performs I/O.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::coordinate::ArtifactCoordinate;

/// A file accepted into the upload queue, recorded before any transfer
/// completes. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Optional tag distinguishing this file from others of the same
    /// artifact (e.g. "sources", "javadoc").
    pub classifier: Option<String>,
    /// Whether this file is the artifact's project descriptor rather than
    /// a generic payload.
    pub is_descriptor: bool,
}

/// Why a finalize request could not be built.
///
/// Always recoverable: the session stays usable, the caller prompts the
/// user and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("no files selected for upload")]
    #[diagnostic(help("add at least one file before saving"))]
    NoFilesSelected,

    #[error("missing required coordinate field: {0}")]
    #[diagnostic(help(
        "repositoryId, groupId, artifactId, version and packaging must all be set"
    ))]
    MissingCoordinateField(&'static str),
}

/// The payload that commits previously staged files under a coordinate.
///
/// Serializes field-for-field to the wire shape expected by the upload
/// API; nothing else is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest {
    pub repository_id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub generate_descriptor: bool,
}

/// Accumulates pending files against a single target coordinate and gates
/// the finalize request.
///
/// Single-threaded by design: all operations are synchronous and callers
/// needing concurrent access must serialize externally.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    /// User-editable until the session is finalized.
    pub coordinate: ArtifactCoordinate,
    pending: Vec<PendingFile>,
}

impl UploadSession {
    pub fn new(coordinate: ArtifactCoordinate) -> Self {
        Self {
            coordinate,
            pending: Vec::new(),
        }
    }

    /// Append a pending file. Duplicate classifiers are allowed; the
    /// server is the final arbiter of conflicts.
    pub fn add_pending_file(&mut self, classifier: Option<String>, is_descriptor: bool) {
        debug!(?classifier, is_descriptor, "queueing file for upload");
        self.pending.push(PendingFile {
            classifier,
            is_descriptor,
        });
    }

    /// Pending files in the order they were added, which is also the order
    /// they are staged in.
    pub fn pending_files(&self) -> &[PendingFile] {
        &self.pending
    }

    /// True iff at least one file is pending and every required coordinate
    /// field is non-empty.
    pub fn can_finalize(&self) -> bool {
        !self.pending.is_empty() && self.coordinate.is_complete()
    }

    /// Build the finalize request, or report precisely why it cannot be
    /// built yet. The pending list is checked before the coordinate:
    /// field-level syntax belongs to the form validator, so the file count
    /// is this session's own first gate.
    pub fn build_finalize_request(&self) -> Result<FinalizeRequest, ValidationError> {
        if self.pending.is_empty() {
            return Err(ValidationError::NoFilesSelected);
        }
        if let Some(field) = self.coordinate.missing_field() {
            return Err(ValidationError::MissingCoordinateField(field));
        }

        Ok(FinalizeRequest {
            repository_id: self.coordinate.repository_id.clone(),
            group_id: self.coordinate.group_id.clone(),
            artifact_id: self.coordinate.artifact_id.clone(),
            version: self.coordinate.version.clone(),
            packaging: self.coordinate.packaging.clone(),
            generate_descriptor: self.coordinate.generate_descriptor,
        })
    }

    /// Clear the pending-file list, leaving the coordinate untouched.
    /// Idempotent; called after a confirmed successful finalize or when
    /// the user abandons the selection.
    pub fn reset(&mut self) {
        debug!(dropped = self.pending.len(), "resetting upload session");
        self.pending.clear();
    }
}
