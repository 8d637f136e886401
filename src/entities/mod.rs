//! SeaORM entity models for the booking tables.
//!
//! Every entity carries `created` / `updated` timestamps which are stamped by
//! its `ActiveModelBehavior` on insert and on every save.

/// Implements `ActiveModelBehavior` for an entity whose model has
/// `created` and `updated` timestamp columns.
macro_rules! timestamped_active_model {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert && self.created.is_not_set() {
                    self.created = sea_orm::ActiveValue::Set(now);
                }
                self.updated = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub mod chosen_shifting_vehicle;
pub mod house_shifting_details;
pub mod house_shifting_product_item;
pub mod house_shifting_products;
pub mod house_shifting_selected_vehicle;
pub mod inventory_item;
pub mod order_booking;
pub mod registration;
pub mod user;
pub mod user_profile;
pub mod vehicle_shifting_details;
pub mod warehouse_selected_vehicle;
pub mod warehouse_storage_details;
pub mod warehouse_storing_product_item;
pub mod warehouse_storing_products;

pub use chosen_shifting_vehicle::Entity as ChosenShiftingVehicle;
pub use house_shifting_details::Entity as HouseShiftingDetails;
pub use house_shifting_product_item::Entity as HouseShiftingProductItem;
pub use house_shifting_products::Entity as HouseShiftingProducts;
pub use house_shifting_selected_vehicle::Entity as HouseShiftingSelectedVehicle;
pub use inventory_item::{InventoryItem, ItemCategory};
pub use order_booking::Entity as OrderBooking;
pub use registration::Entity as Registration;
pub use user::Entity as User;
pub use user_profile::Entity as UserProfile;
pub use vehicle_shifting_details::Entity as VehicleShiftingDetails;
pub use warehouse_selected_vehicle::Entity as WareHouseSelectedVehicle;
pub use warehouse_storage_details::Entity as WareHouseStorageDetails;
pub use warehouse_storing_product_item::Entity as WareHouseStoringProductItem;
pub use warehouse_storing_products::Entity as WareHouseStoringProducts;
