use actionbar::config::Config;
use actionbar::logger::Logger;
use actionbar::menu::ActionSet;
use actionbar::ui;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        if arg == "--generate-config" {
            return Config::generate_default_config(Config::get_default_config_path()?);
        }

        let config = Config::load()?;
        let set = ActionSet::load_from_file(&arg)?;
        return start(config, set).await;
    }

    let config = Config::load()?;
    start(config, ActionSet::demo()).await
}

async fn start(config: Config, set: ActionSet) -> Result<()> {
    let logger = Logger::from_config(config.logging.enabled);
    logger.install(log::LevelFilter::Debug)?;

    // Run the TUI application
    ui::run_app(config, set, logger).await?;

    Ok(())
}
