use clap::Parser;

use backend_infrastructure::CONFIG_PATH_ENV;

#[derive(Parser, Debug)]
#[command(about = "Gamestore backend service", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Points config loading at `--config` when it was given.
    pub fn apply(&self) {
        if let Some(config) = &self.config {
            std::env::set_var(CONFIG_PATH_ENV, config);
        }
    }
}
