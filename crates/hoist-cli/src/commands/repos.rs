//! Handler for `hoist repos`.

use miette::Result;

use hoist_client::transport;
use hoist_util::progress::{spinner, status_warn};

use super::ServerOpts;

pub async fn exec(opts: &ServerOpts) -> Result<()> {
    let server = opts.connect()?;
    let client = transport::build_client()?;

    let sp = spinner("Fetching repositories...");
    let result = transport::list_repositories(&client, &server).await;
    sp.finish_and_clear();
    let repos = result?;

    if repos.is_empty() {
        status_warn("Empty", &format!("no repositories visible on {}", server.name));
        return Ok(());
    }

    for repo in &repos {
        match &repo.name {
            Some(name) => println!("{:<24} {name}", repo.id),
            None => println!("{}", repo.id),
        }
    }
    Ok(())
}
