use postcheck::{logging, scenarios, Runner};
use postcheck_client::PostsClient;
use postcheck_shared_config::SuiteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let config = SuiteConfig::load()?;

    // Initialize tracing
    logging::init(&config.log_level);

    let client = PostsClient::new(config.api.clone())?;
    let report = Runner::new(client).run(&scenarios::all()).await;

    for outcome in report.failures() {
        if let Some(error) = &outcome.error {
            eprintln!("FAILED {}: {}", outcome.name, error);
        }
    }
    println!("{}", report.summary());

    if !report.success() {
        std::process::exit(1);
    }

    Ok(())
}
