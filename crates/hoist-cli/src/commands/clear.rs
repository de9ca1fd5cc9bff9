//! Handler for `hoist clear`.

use miette::Result;

use hoist_client::transport;
use hoist_util::progress::status;

use super::ServerOpts;

pub async fn exec(opts: &ServerOpts) -> Result<()> {
    let server = opts.connect()?;
    let client = transport::build_client()?;

    transport::clear_staged(&client, &server).await?;
    status("Cleared", &format!("staging area on {}", server.name));
    Ok(())
}
