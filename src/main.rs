use clap::Parser;
use tf_inventory::utils::logger;
use tf_inventory::{
    CliConfig, InventoryEngine, InventoryError, InventoryPipeline, InventorySettings,
    ResolvedEnvironment, TofuCommand,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            // Usage errors exit 1 like every other failure.
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logger::init_cli_logger(config.verbose);

    if let Some(host) = &config.host {
        tracing::debug!("Host vars for '{}' are served through _meta", host);
        println!("{{}}");
        return;
    }

    match list(&config).await {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            tracing::error!("Inventory generation failed: {}", e);
            tracing::debug!("Error detail: {:?}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

async fn list(config: &CliConfig) -> Result<String, InventoryError> {
    let file_config = config.load_file_config()?;
    let settings = InventorySettings::from_sources(config, file_config)?;
    tracing::debug!("Settings: {:?}", settings);

    let environment = ResolvedEnvironment::resolve(&settings)?;
    let pipeline = InventoryPipeline::new(TofuCommand::new(settings.tool.clone()), environment);

    InventoryEngine::new(pipeline).run().await
}
