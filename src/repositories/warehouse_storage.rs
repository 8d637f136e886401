//! Warehouse storage repository: storage bookings, pickup vehicles and the
//! stored inventory.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use super::house_shifting::check_quantity;
use crate::entities::{
    warehouse_selected_vehicle, warehouse_storage_details, warehouse_storing_product_item, warehouse_storing_products,
    InventoryItem,
};
use crate::error::{Result, StoreError};
use crate::utils::identity::{booking_id_or_generate, check_booking_id};

#[derive(Debug, Clone, Default)]
pub struct WarehouseStorageInput {
    /// Generated when not supplied
    pub booking_id: Option<String>,
    pub shifting_type: Option<String>,
    pub pickup_location: Option<String>,
    pub moving_datetime: Option<String>,
    pub pickup_address: Option<String>,
    pub pickup_floor: Option<String>,
    pub pickup_lift: Option<String>,
    pub storing_days: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct WarehouseVehicleInput {
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_image: Option<String>,
}

fn check_storing_days(storing_days: Option<i32>) -> Result<()> {
    match storing_days {
        Some(days) if days < 0 => Err(StoreError::Validation(format!(
            "storing_days must not be negative, got {}",
            days
        ))),
        _ => Ok(()),
    }
}

/// Repository for warehouse storage database operations.
pub struct WarehouseStorageRepository;

impl WarehouseStorageRepository {
    pub async fn create_details<C>(
        conn: &C,
        user_id: i32,
        input: WarehouseStorageInput,
    ) -> Result<warehouse_storage_details::Model>
    where
        C: ConnectionTrait,
    {
        check_storing_days(input.storing_days)?;
        let booking_id = booking_id_or_generate(input.booking_id)?;

        let details = warehouse_storage_details::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            booking_id: ActiveValue::Set(booking_id),
            shifting_type: ActiveValue::Set(input.shifting_type),
            pickup_location: ActiveValue::Set(input.pickup_location),
            moving_datetime: ActiveValue::Set(input.moving_datetime),
            pickup_address: ActiveValue::Set(input.pickup_address),
            pickup_floor: ActiveValue::Set(input.pickup_floor),
            pickup_lift: ActiveValue::Set(input.pickup_lift),
            storing_days: ActiveValue::Set(input.storing_days),
            order_placed_datetime: ActiveValue::Set(None),
            completed: ActiveValue::Set(None),
            completed_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        info!("Created warehouse storage {} for user {}", details.booking_id, user_id);
        Ok(details)
    }

    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<warehouse_storage_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_storage_details::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn require<C>(conn: &C, id: i32) -> Result<warehouse_storage_details::Model>
    where
        C: ConnectionTrait,
    {
        Self::get_by_id(conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("warehouse storage details {}", id)))
    }

    pub async fn get_by_booking_id<C>(conn: &C, booking_id: &str) -> Result<Option<warehouse_storage_details::Model>>
    where
        C: ConnectionTrait,
    {
        debug!("Looking up warehouse storage {}", booking_id);
        Ok(warehouse_storage_details::Entity::find()
            .filter(warehouse_storage_details::Column::BookingId.eq(booking_id))
            .one(conn)
            .await?)
    }

    pub async fn get_for_user<C>(conn: &C, user_id: i32) -> Result<Vec<warehouse_storage_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_storage_details::Entity::find()
            .filter(warehouse_storage_details::Column::UserId.eq(user_id))
            .order_by_asc(warehouse_storage_details::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn update_details<C>(
        conn: &C,
        mut details: warehouse_storage_details::ActiveModel,
    ) -> Result<warehouse_storage_details::Model>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(booking_id) = &details.booking_id {
            details.booking_id = ActiveValue::Set(check_booking_id(booking_id)?);
        }
        if let ActiveValue::Set(days) = &details.storing_days {
            check_storing_days(*days)?;
        }
        Ok(details.update(conn).await?)
    }

    pub async fn delete_details<C>(conn: &C, id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let result = warehouse_storage_details::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("warehouse storage details {}", id)));
        }
        info!("Deleted warehouse storage details {}", id);
        Ok(())
    }

    pub async fn mark_order_placed<C>(
        conn: &C,
        id: i32,
        placed_at: DateTime<Utc>,
    ) -> Result<warehouse_storage_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: warehouse_storage_details::ActiveModel = details.into();
        active_model.order_placed_datetime = ActiveValue::Set(Some(placed_at));
        Ok(active_model.update(conn).await?)
    }

    pub async fn mark_completed<C>(conn: &C, id: i32) -> Result<warehouse_storage_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: warehouse_storage_details::ActiveModel = details.into();
        active_model.completed = ActiveValue::Set(Some(true));
        active_model.completed_date = ActiveValue::Set(Some(Utc::now()));
        let details = active_model.update(conn).await?;
        info!("Completed warehouse storage {}", details.booking_id);
        Ok(details)
    }

    pub async fn add_selected_vehicle<C>(
        conn: &C,
        details_id: i32,
        input: WarehouseVehicleInput,
    ) -> Result<warehouse_selected_vehicle::Model>
    where
        C: ConnectionTrait,
    {
        Self::require(conn, details_id).await?;

        Ok(warehouse_selected_vehicle::ActiveModel {
            warehouse_storage_details_id: ActiveValue::Set(details_id),
            vehicle_name: ActiveValue::Set(input.vehicle_name),
            vehicle_type: ActiveValue::Set(input.vehicle_type),
            vehicle_image: ActiveValue::Set(input.vehicle_image),
            ..Default::default()
        }
        .insert(conn)
        .await?)
    }

    pub async fn get_selected_vehicles<C>(conn: &C, details_id: i32) -> Result<Vec<warehouse_selected_vehicle::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_selected_vehicle::Entity::find()
            .filter(warehouse_selected_vehicle::Column::WarehouseStorageDetailsId.eq(details_id))
            .order_by_asc(warehouse_selected_vehicle::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn get_with_vehicles<C>(
        conn: &C,
        booking_id: &str,
    ) -> Result<Option<(warehouse_storage_details::Model, Vec<warehouse_selected_vehicle::Model>)>>
    where
        C: ConnectionTrait,
    {
        let Some(details) = Self::get_by_booking_id(conn, booking_id).await? else {
            return Ok(None);
        };
        let vehicles = Self::get_selected_vehicles(conn, details.id).await?;
        Ok(Some((details, vehicles)))
    }

    /// Create the list of goods to store, with initial item counts.
    pub async fn create_products<C>(
        conn: &C,
        details_id: i32,
        product_amount: Option<String>,
        items: &[(InventoryItem, i32)],
    ) -> Result<warehouse_storing_products::Model>
    where
        C: ConnectionTrait,
    {
        Self::require(conn, details_id).await?;
        for (_, quantity) in items {
            check_quantity(*quantity)?;
        }

        let products = warehouse_storing_products::ActiveModel {
            warehouse_storage_details_id: ActiveValue::Set(details_id),
            product_amount: ActiveValue::Set(product_amount),
            selected: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        for (item, quantity) in items {
            Self::set_item(conn, products.id, *item, *quantity).await?;
        }

        debug!("Created storage list {} for warehouse storage {}", products.id, details_id);
        Ok(products)
    }

    pub async fn get_products<C>(conn: &C, details_id: i32) -> Result<Vec<warehouse_storing_products::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_storing_products::Entity::find()
            .filter(warehouse_storing_products::Column::WarehouseStorageDetailsId.eq(details_id))
            .order_by_asc(warehouse_storing_products::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn get_products_by_id<C>(conn: &C, products_id: i32) -> Result<Option<warehouse_storing_products::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_storing_products::Entity::find_by_id(products_id).one(conn).await?)
    }

    /// Record that the customer confirmed the inventory list.
    pub async fn mark_products_selected<C>(conn: &C, products_id: i32) -> Result<warehouse_storing_products::Model>
    where
        C: ConnectionTrait,
    {
        let products = Self::get_products_by_id(conn, products_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("warehouse storing products {}", products_id)))?;
        let mut active_model: warehouse_storing_products::ActiveModel = products.into();
        active_model.selected = ActiveValue::Set(Some(Utc::now()));
        Ok(active_model.update(conn).await?)
    }

    /// Set the count of one stored item. Zero removes the row.
    pub async fn set_item<C>(
        conn: &C,
        products_id: i32,
        item: InventoryItem,
        quantity: i32,
    ) -> Result<Option<warehouse_storing_product_item::Model>>
    where
        C: ConnectionTrait,
    {
        check_quantity(quantity)?;
        if Self::get_products_by_id(conn, products_id).await?.is_none() {
            return Err(StoreError::NotFound(format!("warehouse storing products {}", products_id)));
        }

        if quantity == 0 {
            warehouse_storing_product_item::Entity::delete_many()
                .filter(warehouse_storing_product_item::Column::WarehouseStoringProductsId.eq(products_id))
                .filter(warehouse_storing_product_item::Column::Item.eq(item))
                .exec(conn)
                .await?;
            return Ok(None);
        }

        let now = Utc::now();
        let row = warehouse_storing_product_item::ActiveModel {
            warehouse_storing_products_id: ActiveValue::Set(products_id),
            item: ActiveValue::Set(item),
            quantity: ActiveValue::Set(quantity),
            created: ActiveValue::Set(now),
            updated: ActiveValue::Set(now),
            ..Default::default()
        };
        warehouse_storing_product_item::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    warehouse_storing_product_item::Column::WarehouseStoringProductsId,
                    warehouse_storing_product_item::Column::Item,
                ])
                .update_columns([
                    warehouse_storing_product_item::Column::Quantity,
                    warehouse_storing_product_item::Column::Updated,
                ])
                .to_owned(),
            )
            .exec(conn)
            .await?;

        Ok(warehouse_storing_product_item::Entity::find()
            .filter(warehouse_storing_product_item::Column::WarehouseStoringProductsId.eq(products_id))
            .filter(warehouse_storing_product_item::Column::Item.eq(item))
            .one(conn)
            .await?)
    }

    pub async fn get_items<C>(conn: &C, products_id: i32) -> Result<Vec<warehouse_storing_product_item::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(warehouse_storing_product_item::Entity::find()
            .filter(warehouse_storing_product_item::Column::WarehouseStoringProductsId.eq(products_id))
            .order_by_asc(warehouse_storing_product_item::Column::Item)
            .all(conn)
            .await?)
    }

    pub async fn inventory<C>(conn: &C, products_id: i32) -> Result<BTreeMap<InventoryItem, i32>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::get_items(conn, products_id)
            .await?
            .into_iter()
            .map(|row| (row.item, row.quantity))
            .collect())
    }
}
