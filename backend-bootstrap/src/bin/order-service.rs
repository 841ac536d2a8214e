use anyhow::Result;
use clap::Parser;

use backend_bootstrap::{init_logging, launch, Args};
use backend_infrastructure::ServiceKind;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.apply();
    let _log_guard = init_logging(ServiceKind::Orders.name())?;
    launch(ServiceKind::Orders).await
}
