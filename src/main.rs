use clap::Parser;
use contact_roster::domain::ports::Renderer;
use contact_roster::utils::{logger, validation::Validate};
use contact_roster::{
    CliConfig, NullRenderer, RecordListForm, SessionConfig, SessionRunner, TextRenderer,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting contact-roster");
    tracing::debug!("CLI config: {:?}", config);

    let session = match SessionConfig::from_file(&config.script) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to load session '{}': {}", config.script, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = session.validate() {
        tracing::error!("Session validation failed: {} ({:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let renderer: Box<dyn Renderer> = if config.quiet_render {
        Box::new(NullRenderer)
    } else {
        Box::new(TextRenderer::new(std::io::stdout()))
    };

    let mut form = RecordListForm::new();
    let mut runner = SessionRunner::new(renderer);

    match runner.run(&session, &mut form) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if config.require_valid && !report.valid {
                tracing::warn!("Session finished with an invalid form");
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Session '{}' failed: {} ({:?})", session.name(), e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
