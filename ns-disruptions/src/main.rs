use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use ns_disruptions::app::{run, write_diagnostic};
use ns_disruptions::config::Config;
use ns_disruptions::ns::{DisruptionSource, MockNsClient, NsClient};
use ns_disruptions::report::ReportRenderer;
use ns_disruptions::translate::{
    FieldTranslator, GoogleTranslateConfig, GoogleTranslator, IdentityTranslator, Translator,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    // Pick the disruption source
    let source: Box<dyn DisruptionSource> = match &config.mock_data {
        Some(dir) => Box::new(MockNsClient::new(dir)),
        None => {
            let ns_config = match config.ns_config() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            };
            match NsClient::new(ns_config) {
                Ok(client) => Box::new(client),
                Err(e) => {
                    eprintln!("Error: failed to create NS client: {e}");
                    return ExitCode::from(2);
                }
            }
        }
    };

    // Pick the translation backend
    let translator: Arc<dyn Translator> = if config.no_translate {
        Arc::new(IdentityTranslator)
    } else {
        match GoogleTranslator::new(GoogleTranslateConfig::new()) {
            Ok(t) => Arc::new(t),
            Err(e) => {
                eprintln!("Warning: translation unavailable ({e}); printing Dutch text.");
                Arc::new(IdentityTranslator)
            }
        }
    };

    let renderer = ReportRenderer::new(FieldTranslator::new(translator, &config.target_lang));

    let mut stdout = std::io::stdout();
    match run(source.as_ref(), &renderer, &config.station, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing useful to do if stderr itself is gone.
            let _ = write_diagnostic(&e, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
