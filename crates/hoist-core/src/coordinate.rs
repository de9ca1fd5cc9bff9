//! Artifact coordinates: the identity under which uploaded files are stored.

/// The target coordinate for an upload: where the files go and under what
/// identity the repository manager stores them.
///
/// The five string fields are required and must be non-empty before a
/// finalize request can be built. `generate_descriptor` asks the server to
/// synthesize a standard project descriptor instead of requiring one to be
/// uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub repository_id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub generate_descriptor: bool,
}

impl ArtifactCoordinate {
    /// First required field that is empty (whitespace-only counts as
    /// empty), in declaration order, or `None` when all are present.
    ///
    /// Field names match the wire names used in the finalize request.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("repositoryId", &self.repository_id),
            ("groupId", &self.group_id),
            ("artifactId", &self.artifact_id),
            ("version", &self.version),
            ("packaging", &self.packaging),
        ]
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
    }

    /// Whether every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Standard repository layout path for this coordinate.
    ///
    /// `com.example:my-lib:1.0` becomes `com/example/my-lib/1.0`
    pub fn storage_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version
        )
    }

    /// Filename a staged file will be stored under, with the classifier
    /// inserted between version and extension when present.
    pub fn file_name(&self, classifier: Option<&str>) -> String {
        match classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact_id, self.version, c, self.packaging),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.packaging),
        }
    }
}
