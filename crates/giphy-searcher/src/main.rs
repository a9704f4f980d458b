use anyhow::Context;
use clap::Parser;
use giphy_searcher::{
    FormEvent, Renderer, SearchBackend, SearchController, Settings, logging, text_summary,
};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let settings = Settings::parse();
    logging::init()?;

    if settings.api_key.is_empty() {
        tracing::warn!("GIPHY_API_KEY is not set; the API will reject searches");
    }

    let renderer = Renderer::new().context("failed to register templates")?;
    let mut controller = SearchController::new(settings.client(), settings.controller_options());

    controller.activate().await;
    present(&renderer, &controller, settings.output.as_deref())?;

    if settings.once {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        for event in FormEvent::from_line(&line) {
            event.dispatch(&mut controller).await;
        }
        present(&renderer, &controller, settings.output.as_deref())?;
    }

    Ok(())
}

fn present<B: SearchBackend>(
    renderer: &Renderer,
    controller: &SearchController<B>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    print!("{}", text_summary(controller.state()));

    if let Some(path) = output {
        let html = renderer.render_page(controller.state())?;
        std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "page written");
    }

    Ok(())
}
