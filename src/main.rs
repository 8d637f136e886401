use anyhow::{Context, Result};
use log::info;
use truckbook::config::Config;
use truckbook::logger::Logger;
use truckbook::BookingStore;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    Logger::from_config(&config.logging)?.init()?;

    let store = BookingStore::from_config(&config)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    info!("Database ready at {}", config.database.url);

    let summary = store.summary().await?;
    println!("📦 {}", config.database.url);
    println!("   users:                     {}", summary.users);
    println!("   registrations:             {}", summary.registrations);
    println!("   user profiles:             {}", summary.user_profiles);
    println!("   house shifting bookings:   {}", summary.house_shifting_details);
    println!("   vehicle shifting bookings: {}", summary.vehicle_shifting_details);
    println!("   warehouse bookings:        {}", summary.warehouse_storage_details);
    println!("   orders:                    {}", summary.order_bookings);

    Ok(())
}
