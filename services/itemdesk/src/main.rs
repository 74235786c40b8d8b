//! itemdesk binary entry: parse the CLI, load config, start the app.

mod api;
mod app;
mod auth;
mod cli;
mod config;
mod logging;
mod resources;
mod state;
mod store;
#[cfg(test)]
mod testing;

#[tokio::main]
/// Start the itemdesk service.
async fn main() -> anyhow::Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    match cli::dispatch(&args)? {
        cli::CliDispatch::Run => {}
        cli::CliDispatch::Exit => return Ok(()),
    }

    let config = config::AppConfig::from_env()?;
    let _log_runtime = logging::init("itemdesk")?;
    tracing::debug!(?config, "configuration loaded");
    app::run(config).await
}
