//! Repository-manager server abstraction: upload API URL layout and
//! credentials.

use hoist_core::config::ServerEntry;
use hoist_core::session::FinalizeRequest;
use reqwest::RequestBuilder;

/// A configured repository-manager server with optional credentials.
#[derive(Debug, Clone)]
pub struct UploadServer {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UploadServer {
    /// Build an `UploadServer` from a name and a config `ServerEntry`.
    pub fn from_entry(name: &str, entry: &ServerEntry) -> Self {
        match entry {
            ServerEntry::Url(url) => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: None,
                password: None,
            },
            ServerEntry::Detailed {
                url,
                username,
                password,
            } => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: username.clone(),
                password: password.clone(),
            },
        }
    }

    /// Build an ad-hoc server from a bare URL (the `--url` flag), with no
    /// stored credentials.
    pub fn from_url(url: &str) -> Self {
        Self {
            name: url.trim_end_matches('/').to_string(),
            url: url.trim_end_matches('/').to_string(),
            username: None,
            password: None,
        }
    }

    /// Whether this server has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }

    /// Apply this server's credentials to a request: basic auth when a
    /// username is set, bearer token when only a password is.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
            (Some(user), None) => request.basic_auth(user, None::<&str>),
            (None, Some(token)) => request.bearer_auth(token),
            (None, None) => request,
        }
    }

    /// URL listing the repositories the caller may upload into.
    pub fn repositories_url(&self) -> String {
        format!("{}/api/repositories", self.url)
    }

    /// URL that drops the server-side staging area.
    pub fn clear_url(&self) -> String {
        format!("{}/api/upload/clear", self.url)
    }

    /// URL a single file is staged to (multipart POST).
    pub fn stage_url(&self) -> String {
        format!("{}/api/upload/file", self.url)
    }

    /// URL that commits the staged files under the request's coordinate.
    ///
    /// The coordinate is addressed by path segment, with descriptor
    /// generation as a query flag:
    /// `api/upload/save/internal/com.x/lib/2.0/jar?generateDescriptor=true`
    pub fn finalize_url(&self, request: &FinalizeRequest) -> String {
        let mut url = format!(
            "{}/api/upload/save/{}/{}/{}/{}/{}",
            self.url,
            request.repository_id,
            request.group_id,
            request.artifact_id,
            request.version,
            request.packaging
        );
        if request.generate_descriptor {
            url.push_str("?generateDescriptor=true");
        }
        url
    }
}
