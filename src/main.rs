use anyhow::Context;
use std::net::TcpListener;
use surveyguy::configuration::get_configuration;
use surveyguy::startup::run;
use surveyguy::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().context("Failed to read configuration")?;

    let subscriber = get_subscriber("surveyguy".into(), settings.log_level.clone());
    init_subscriber(subscriber).map_err(|err| anyhow::anyhow!(err))?;

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {address}"))?;

    run(listener)?.await?;
    Ok(())
}
