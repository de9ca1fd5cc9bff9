//! Handler for `hoist upload`.
//!
//! Builds an upload session from the command line, validates it, then
//! drives the transport: clear the staging area, stage each file in
//! selection order, and finalize under the coordinate.

use std::path::PathBuf;

use miette::Result;

use hoist_client::transport;
use hoist_core::coordinate::ArtifactCoordinate;
use hoist_core::session::UploadSession;
use hoist_util::errors::HoistError;
use hoist_util::progress::{spinner, status};

use super::ServerOpts;

pub struct UploadArgs {
    pub files: Vec<String>,
    pub repository: Option<String>,
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
    pub packaging: String,
    pub descriptor: Option<String>,
    pub generate_descriptor: bool,
}

pub async fn exec(args: UploadArgs, opts: &ServerOpts) -> Result<()> {
    let coordinate = ArtifactCoordinate {
        repository_id: args.repository.unwrap_or_default(),
        group_id: args.group.unwrap_or_default(),
        artifact_id: args.artifact.unwrap_or_default(),
        version: args.version.unwrap_or_default(),
        packaging: args.packaging,
        generate_descriptor: args.generate_descriptor,
    };
    let mut session = UploadSession::new(coordinate);

    let mut paths: Vec<PathBuf> = Vec::new();
    for spec in &args.files {
        let (path, classifier) = split_file_spec(spec);
        session.add_pending_file(classifier, false);
        paths.push(path);
    }
    if let Some(descriptor) = &args.descriptor {
        session.add_pending_file(None, true);
        paths.push(PathBuf::from(descriptor));
    }

    // The session decides whether there is anything worth sending before
    // any server is resolved or contacted.
    let request = session.build_finalize_request()?;

    check_field_syntax(&session.coordinate)?;
    for path in &paths {
        if !path.is_file() {
            return Err(HoistError::Generic {
                message: format!("File not found: {}", path.display()),
            }
            .into());
        }
    }

    let server = opts.connect()?;
    let client = transport::build_client()?;

    transport::clear_staged(&client, &server).await?;

    for (path, pending) in paths.iter().zip(session.pending_files()) {
        let local_name = path.display().to_string();
        let sp = spinner(&format!("Staging {local_name}"));
        let result = transport::stage_file(&client, &server, path, pending).await;
        sp.finish_and_clear();
        result?;
        status("Staged", &local_name);
    }

    let sp = spinner("Saving upload");
    let result = transport::finalize(&client, &server, &request).await;
    sp.finish_and_clear();
    result?;

    let staged = session.pending_files().len();
    session.reset();

    status(
        "Uploaded",
        &format!(
            "{staged} file(s) to {} as {}",
            server.name,
            session.coordinate.storage_path()
        ),
    );
    Ok(())
}

/// Split a `PATH[:CLASSIFIER]` file spec. The classifier follows the last
/// colon; an empty classifier is treated as absent.
fn split_file_spec(spec: &str) -> (PathBuf, Option<String>) {
    match spec.rsplit_once(':') {
        Some((path, "")) => (PathBuf::from(path), None),
        Some((path, classifier)) if !classifier.contains('/') => {
            (PathBuf::from(path), Some(classifier.to_string()))
        }
        _ => (PathBuf::from(spec), None),
    }
}

/// Field-level syntactic checks, beyond the session's presence checks.
/// Coordinate fields travel as URL path segments, so they are restricted
/// to letters, digits, '.', '_' and '-'.
fn check_field_syntax(coordinate: &ArtifactCoordinate) -> Result<()> {
    let fields = [
        ("repositoryId", &coordinate.repository_id),
        ("groupId", &coordinate.group_id),
        ("artifactId", &coordinate.artifact_id),
        ("version", &coordinate.version),
        ("packaging", &coordinate.packaging),
    ];
    for (name, value) in fields {
        let ok = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !ok {
            return Err(HoistError::Generic {
                message: format!(
                    "Invalid {name} '{value}': only letters, digits, '.', '_' and '-' are allowed"
                ),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_spec_without_classifier() {
        let (path, classifier) = split_file_spec("target/app.jar");
        assert_eq!(path, PathBuf::from("target/app.jar"));
        assert_eq!(classifier, None);
    }

    #[test]
    fn file_spec_with_classifier() {
        let (path, classifier) = split_file_spec("target/app.jar:sources");
        assert_eq!(path, PathBuf::from("target/app.jar"));
        assert_eq!(classifier.as_deref(), Some("sources"));
    }

    #[test]
    fn trailing_colon_means_no_classifier() {
        let (path, classifier) = split_file_spec("app.jar:");
        assert_eq!(path, PathBuf::from("app.jar"));
        assert_eq!(classifier, None);
    }

    #[test]
    fn field_syntax_rejects_path_separators() {
        let coordinate = ArtifactCoordinate {
            repository_id: "internal".to_string(),
            group_id: "com/x".to_string(),
            artifact_id: "lib".to_string(),
            version: "2.0".to_string(),
            packaging: "jar".to_string(),
            generate_descriptor: false,
        };
        assert!(check_field_syntax(&coordinate).is_err());
    }
}
