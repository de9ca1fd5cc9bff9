//! Command dispatch and handler modules.

mod clear;
mod repos;
mod upload;

use miette::Result;

use hoist_client::repository::UploadServer;
use hoist_core::config::GlobalConfig;

use crate::cli::{Cli, Command};

/// Server selection gathered from the global CLI flags. Resolution against
/// the config file is deferred until a command actually needs a server, so
/// purely local failures (validation, missing files) never touch it.
pub struct ServerOpts {
    pub server: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ServerOpts {
    /// Resolve the server to talk to: `--url` wins, then the named or
    /// default entry from `~/.hoist/config.toml`. Credential flags
    /// override whatever the config carries.
    pub fn connect(&self) -> Result<UploadServer> {
        let mut server = match &self.url {
            Some(url) => UploadServer::from_url(url),
            None => {
                let config = GlobalConfig::load()?;
                let (name, entry) = config.resolve_server(self.server.as_deref())?;
                UploadServer::from_entry(&name, entry)
            }
        };

        if self.username.is_some() {
            server.username = self.username.clone();
        }
        if self.password.is_some() {
            server.password = self.password.clone();
        }
        Ok(server)
    }
}

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let opts = ServerOpts {
        server: cli.server,
        url: cli.url,
        username: cli.username,
        password: cli.password,
    };

    match cli.command {
        Command::Upload {
            files,
            repository,
            group,
            artifact,
            version,
            packaging,
            descriptor,
            generate_descriptor,
        } => {
            upload::exec(
                upload::UploadArgs {
                    files,
                    repository,
                    group,
                    artifact,
                    version,
                    packaging,
                    descriptor,
                    generate_descriptor,
                },
                &opts,
            )
            .await
        }
        Command::Repos => repos::exec(&opts).await,
        Command::Clear => clear::exec(&opts).await,
    }
}
