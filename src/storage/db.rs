use std::time::Duration;

use log::{debug, info, warn};
use sea_orm::sea_query::{Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Schema,
};
use serde::Serialize;

use crate::config::{Config, DatabaseConfig, RegistrationConfig};
use crate::constants::{IN_MEMORY_DATABASE_URL, LOG_SCHEMA_READY};
use crate::entities::{
    chosen_shifting_vehicle, house_shifting_details, house_shifting_product_item, house_shifting_products,
    house_shifting_selected_vehicle, order_booking, registration, user, user_profile, vehicle_shifting_details,
    warehouse_selected_vehicle, warehouse_storage_details, warehouse_storing_product_item, warehouse_storing_products,
};
use crate::error::Result;

/// Pool lifetimes for `sqlite::memory:`, long enough to never recycle in practice
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Handle on the booking database
pub struct BookingStore {
    pub(crate) conn: DatabaseConnection,
    pub(crate) registration: RegistrationConfig,
}

/// Row counts per table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub users: u64,
    pub registrations: u64,
    pub user_profiles: u64,
    pub house_shifting_details: u64,
    pub vehicle_shifting_details: u64,
    pub warehouse_storage_details: u64,
    pub order_bookings: u64,
}

/// Pool options for `config`.
///
/// Each in-memory connection is a separate database, so such a pool holds
/// exactly one connection that is never recycled.
fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let in_memory = config.file_path().is_none();
    let mut opt = ConnectOptions::new(config.url.clone());
    let max_connections = if in_memory { 1 } else { config.max_connections };
    opt.max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(config.sql_logging)
        .sqlx_logging_level(log::LevelFilter::Debug);
    if in_memory {
        opt.max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    }
    opt
}

impl BookingStore {
    /// Open the database described by `config`, creating missing tables.
    ///
    /// # Errors
    /// `Validation` when the OTP settings are out of range.
    pub async fn connect(config: &DatabaseConfig, registration: RegistrationConfig) -> Result<Self> {
        registration.check()?;

        if let Some(path) = config.file_path() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("Could not create database directory {}: {}", parent.display(), e);
                }
            }
        }

        let opt = connect_options(config);

        info!(
            "Connecting to {} with max_connections={}",
            config.url,
            opt.get_max_connections().unwrap_or_default()
        );
        let conn = Database::connect(opt).await?;
        conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        let store = Self { conn, registration };
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::connect(&config.database, config.registration).await
    }

    /// Fresh private in-memory database with default settings
    pub async fn in_memory() -> Result<Self> {
        let config = DatabaseConfig {
            url: IN_MEMORY_DATABASE_URL.to_string(),
            max_connections: 1,
            sql_logging: false,
        };
        Self::connect(&config, RegistrationConfig::default()).await
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn registration_config(&self) -> RegistrationConfig {
        self.registration
    }

    /// Create every table (parents first) and the inventory unique indexes.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let tables: Vec<TableCreateStatement> = vec![
            schema.create_table_from_entity(user::Entity),
            schema.create_table_from_entity(registration::Entity),
            schema.create_table_from_entity(user_profile::Entity),
            schema.create_table_from_entity(house_shifting_details::Entity),
            schema.create_table_from_entity(house_shifting_selected_vehicle::Entity),
            schema.create_table_from_entity(house_shifting_products::Entity),
            schema.create_table_from_entity(house_shifting_product_item::Entity),
            schema.create_table_from_entity(vehicle_shifting_details::Entity),
            schema.create_table_from_entity(chosen_shifting_vehicle::Entity),
            schema.create_table_from_entity(warehouse_storage_details::Entity),
            schema.create_table_from_entity(warehouse_selected_vehicle::Entity),
            schema.create_table_from_entity(warehouse_storing_products::Entity),
            schema.create_table_from_entity(warehouse_storing_product_item::Entity),
            schema.create_table_from_entity(order_booking::Entity),
        ];

        for mut table in tables {
            table.if_not_exists();
            self.conn.execute(backend.build(&table)).await?;
        }

        for index in Self::inventory_indexes() {
            self.conn.execute(backend.build(&index)).await?;
        }

        debug!("{}", LOG_SCHEMA_READY);
        Ok(())
    }

    fn inventory_indexes() -> [IndexCreateStatement; 2] {
        [
            Index::create()
                .if_not_exists()
                .name("idx_house_shifting_product_items_products_item")
                .table(house_shifting_product_item::Entity)
                .col(house_shifting_product_item::Column::HouseShiftingProductsId)
                .col(house_shifting_product_item::Column::Item)
                .unique()
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_warehouse_storing_product_items_products_item")
                .table(warehouse_storing_product_item::Entity)
                .col(warehouse_storing_product_item::Column::WarehouseStoringProductsId)
                .col(warehouse_storing_product_item::Column::Item)
                .unique()
                .to_owned(),
        ]
    }

    /// Count the rows of the main tables
    pub async fn summary(&self) -> Result<StoreSummary> {
        Ok(StoreSummary {
            users: user::Entity::find().count(&self.conn).await?,
            registrations: registration::Entity::find().count(&self.conn).await?,
            user_profiles: user_profile::Entity::find().count(&self.conn).await?,
            house_shifting_details: house_shifting_details::Entity::find().count(&self.conn).await?,
            vehicle_shifting_details: vehicle_shifting_details::Entity::find().count(&self.conn).await?,
            warehouse_storage_details: warehouse_storage_details::Entity::find().count(&self.conn).await?,
            order_bookings: order_booking::Entity::find().count(&self.conn).await?,
        })
    }

    /// Check if the database has any users
    pub async fn has_data(&self) -> Result<bool> {
        Ok(user::Entity::find().count(&self.conn).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_pool_keeps_its_connection() {
        let config = DatabaseConfig {
            url: IN_MEMORY_DATABASE_URL.to_string(),
            max_connections: 8,
            sql_logging: false,
        };
        let opt = connect_options(&config);
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIFETIME));
        assert_eq!(opt.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIFETIME));
    }

    #[test]
    fn test_file_pool_uses_configured_size() {
        let config = DatabaseConfig {
            url: "sqlite://truckbook.db?mode=rwc".to_string(),
            max_connections: 3,
            sql_logging: false,
        };
        let opt = connect_options(&config);
        assert_eq!(opt.get_max_connections(), Some(3));
        assert_eq!(opt.get_max_lifetime(), None);
    }
}
