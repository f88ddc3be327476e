use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tweethub_actions::{run_for_accounts, Executor};
use tweethub_common::observability::{init_logging, LogConfig};
use tweethub_config::TweethubConfigLoader;
use tweethub_driver::browser::WebDriverFactory;
use url::Url;

mod cli;
use cli::{build_request, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration problems are the only fatal (non-zero exit) errors;
    // individual action failures are logged and swallowed below.
    let cfg = TweethubConfigLoader::new()
        .with_file(&cli.config)
        .load()
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    init_logging(LogConfig::default())?;

    let (request, all_accounts) = build_request(cli.command, &cfg.messages)?;

    let base_url = Url::parse(&cfg.site.base_url)
        .with_context(|| format!("invalid site.base_url: {}", cfg.site.base_url))?;

    let factory = WebDriverFactory::new(
        &cfg.browser.webdriver_url,
        cli.headless || cfg.browser.headless,
        Duration::from_secs(cfg.browser.session_deadline_secs),
    );
    let executor = Executor::new(&factory, &base_url, &cfg.selectors);

    if all_accounts {
        run_for_accounts(&executor, &cfg.accounts, &request).await;
    } else {
        // The first configured account is the default identity; the loader
        // guarantees the list is non-empty.
        executor.run(&cfg.accounts[0], &request).await;
    }

    Ok(())
}
