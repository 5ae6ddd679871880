use orderdesk_app::{AppConfig, Settings, demo};

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let settings = Settings::from_env()?;
    tracing::info!(
        policy = settings.discount_policy().name(),
        "loaded settings"
    );

    print!("{}", demo::member_flow(&AppConfig::from_settings(&settings)));
    println!();
    print!("{}", demo::order_flow(&AppConfig::from_settings(&settings))?);

    Ok(())
}
