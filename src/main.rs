use anyhow::Result;
use mycli::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    let config = Config::from_args(&args)?;

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    cli::execute_command(&config, &args.command)
}
