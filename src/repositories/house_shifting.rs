//! House shifting repository: booking details, selected vehicles and
//! inventory lists.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{
    house_shifting_details, house_shifting_product_item, house_shifting_products, house_shifting_selected_vehicle,
    InventoryItem,
};
use crate::error::{Result, StoreError};
use crate::utils::identity::{booking_id_or_generate, check_booking_id};

/// Customer-entered details of a house move.
#[derive(Debug, Clone, Default)]
pub struct HouseShiftingInput {
    /// Generated when not supplied
    pub booking_id: Option<String>,
    pub house_shifting_type: Option<String>,
    pub shifting_type: Option<String>,
    pub pickup_location: Option<String>,
    pub moving_datetime: Option<String>,
    pub pickup_address: Option<String>,
    pub pickup_floor: Option<String>,
    pub pickup_lift: Option<String>,
    pub drop_location: Option<String>,
    pub drop_address: Option<String>,
    pub drop_floor: Option<String>,
    pub drop_lift: Option<String>,
}

/// A truck picked for a house move.
#[derive(Debug, Clone, Default)]
pub struct SelectedVehicleInput {
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_image: Option<String>,
    pub vehicle_amount: Option<String>,
    pub total_shifting_kms: Option<String>,
}

pub(crate) fn check_quantity(quantity: i32) -> Result<()> {
    if quantity < 0 {
        return Err(StoreError::Validation(format!("quantity must not be negative, got {}", quantity)));
    }
    Ok(())
}

/// Repository for house shifting database operations.
pub struct HouseShiftingRepository;

impl HouseShiftingRepository {
    /// Create booking details for a user.
    pub async fn create_details<C>(
        conn: &C,
        user_id: i32,
        input: HouseShiftingInput,
    ) -> Result<house_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let booking_id = booking_id_or_generate(input.booking_id)?;

        let details = house_shifting_details::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            booking_id: ActiveValue::Set(booking_id),
            house_shifting_type: ActiveValue::Set(input.house_shifting_type),
            shifting_type: ActiveValue::Set(input.shifting_type),
            pickup_location: ActiveValue::Set(input.pickup_location),
            moving_datetime: ActiveValue::Set(input.moving_datetime),
            pickup_address: ActiveValue::Set(input.pickup_address),
            pickup_floor: ActiveValue::Set(input.pickup_floor),
            pickup_lift: ActiveValue::Set(input.pickup_lift),
            drop_location: ActiveValue::Set(input.drop_location),
            drop_address: ActiveValue::Set(input.drop_address),
            drop_floor: ActiveValue::Set(input.drop_floor),
            drop_lift: ActiveValue::Set(input.drop_lift),
            order_placed_datetime: ActiveValue::Set(None),
            completed: ActiveValue::Set(None),
            completed_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        info!("Created house shifting {} for user {}", details.booking_id, user_id);
        Ok(details)
    }

    /// Get booking details by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<house_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_details::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get booking details by id, failing with `NotFound` on a miss.
    pub async fn require<C>(conn: &C, id: i32) -> Result<house_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        Self::get_by_id(conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("house shifting details {}", id)))
    }

    /// Get booking details by booking reference.
    pub async fn get_by_booking_id<C>(conn: &C, booking_id: &str) -> Result<Option<house_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        debug!("Looking up house shifting {}", booking_id);
        Ok(house_shifting_details::Entity::find()
            .filter(house_shifting_details::Column::BookingId.eq(booking_id))
            .one(conn)
            .await?)
    }

    /// Get all of a user's house shifting bookings, oldest first.
    pub async fn get_for_user<C>(conn: &C, user_id: i32) -> Result<Vec<house_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_details::Entity::find()
            .filter(house_shifting_details::Column::UserId.eq(user_id))
            .order_by_asc(house_shifting_details::Column::Id)
            .all(conn)
            .await?)
    }

    /// Update booking details.
    pub async fn update_details<C>(
        conn: &C,
        mut details: house_shifting_details::ActiveModel,
    ) -> Result<house_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(booking_id) = &details.booking_id {
            details.booking_id = ActiveValue::Set(check_booking_id(booking_id)?);
        }
        Ok(details.update(conn).await?)
    }

    /// Delete booking details together with their vehicles and inventory.
    pub async fn delete_details<C>(conn: &C, id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let result = house_shifting_details::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("house shifting details {}", id)));
        }
        info!("Deleted house shifting details {}", id);
        Ok(())
    }

    /// Record when the order for this booking was placed.
    pub async fn mark_order_placed<C>(
        conn: &C,
        id: i32,
        placed_at: DateTime<Utc>,
    ) -> Result<house_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: house_shifting_details::ActiveModel = details.into();
        active_model.order_placed_datetime = ActiveValue::Set(Some(placed_at));
        Ok(active_model.update(conn).await?)
    }

    /// Mark the move as fulfilled.
    pub async fn mark_completed<C>(conn: &C, id: i32) -> Result<house_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: house_shifting_details::ActiveModel = details.into();
        active_model.completed = ActiveValue::Set(Some(true));
        active_model.completed_date = ActiveValue::Set(Some(Utc::now()));
        let details = active_model.update(conn).await?;
        info!("Completed house shifting {}", details.booking_id);
        Ok(details)
    }

    pub async fn add_selected_vehicle<C>(
        conn: &C,
        details_id: i32,
        input: SelectedVehicleInput,
    ) -> Result<house_shifting_selected_vehicle::Model>
    where
        C: ConnectionTrait,
    {
        Self::require(conn, details_id).await?;

        Ok(house_shifting_selected_vehicle::ActiveModel {
            house_shifting_details_id: ActiveValue::Set(details_id),
            vehicle_name: ActiveValue::Set(input.vehicle_name),
            vehicle_type: ActiveValue::Set(input.vehicle_type),
            vehicle_image: ActiveValue::Set(input.vehicle_image),
            vehicle_amount: ActiveValue::Set(input.vehicle_amount),
            total_shifting_kms: ActiveValue::Set(input.total_shifting_kms),
            ..Default::default()
        }
        .insert(conn)
        .await?)
    }

    pub async fn get_selected_vehicles<C>(
        conn: &C,
        details_id: i32,
    ) -> Result<Vec<house_shifting_selected_vehicle::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_selected_vehicle::Entity::find()
            .filter(house_shifting_selected_vehicle::Column::HouseShiftingDetailsId.eq(details_id))
            .order_by_asc(house_shifting_selected_vehicle::Column::Id)
            .all(conn)
            .await?)
    }

    /// Fetch a booking by reference along with its selected vehicles.
    pub async fn get_with_vehicles<C>(
        conn: &C,
        booking_id: &str,
    ) -> Result<Option<(house_shifting_details::Model, Vec<house_shifting_selected_vehicle::Model>)>>
    where
        C: ConnectionTrait,
    {
        let Some(details) = Self::get_by_booking_id(conn, booking_id).await? else {
            return Ok(None);
        };
        let vehicles = Self::get_selected_vehicles(conn, details.id).await?;
        Ok(Some((details, vehicles)))
    }

    /// Create an inventory list for a booking, with its initial item counts.
    ///
    /// Zero quantities are skipped.
    pub async fn create_products<C>(
        conn: &C,
        details_id: i32,
        product_amount: Option<String>,
        items: &[(InventoryItem, i32)],
    ) -> Result<house_shifting_products::Model>
    where
        C: ConnectionTrait,
    {
        Self::require(conn, details_id).await?;
        for (_, quantity) in items {
            check_quantity(*quantity)?;
        }

        let products = house_shifting_products::ActiveModel {
            house_shifting_details_id: ActiveValue::Set(details_id),
            product_amount: ActiveValue::Set(product_amount),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        for (item, quantity) in items {
            Self::set_item(conn, products.id, *item, *quantity).await?;
        }

        debug!("Created inventory list {} for house shifting {}", products.id, details_id);
        Ok(products)
    }

    pub async fn get_products<C>(conn: &C, details_id: i32) -> Result<Vec<house_shifting_products::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_products::Entity::find()
            .filter(house_shifting_products::Column::HouseShiftingDetailsId.eq(details_id))
            .order_by_asc(house_shifting_products::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn get_products_by_id<C>(conn: &C, products_id: i32) -> Result<Option<house_shifting_products::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_products::Entity::find_by_id(products_id).one(conn).await?)
    }

    /// Set the count of one item on an inventory list.
    ///
    /// Returns the stored row, or `None` when a zero quantity removed it.
    pub async fn set_item<C>(
        conn: &C,
        products_id: i32,
        item: InventoryItem,
        quantity: i32,
    ) -> Result<Option<house_shifting_product_item::Model>>
    where
        C: ConnectionTrait,
    {
        check_quantity(quantity)?;
        if Self::get_products_by_id(conn, products_id).await?.is_none() {
            return Err(StoreError::NotFound(format!("house shifting products {}", products_id)));
        }

        if quantity == 0 {
            house_shifting_product_item::Entity::delete_many()
                .filter(house_shifting_product_item::Column::HouseShiftingProductsId.eq(products_id))
                .filter(house_shifting_product_item::Column::Item.eq(item))
                .exec(conn)
                .await?;
            return Ok(None);
        }

        // Bulk insert skips ActiveModelBehavior, so both stamps are set here
        let now = Utc::now();
        let row = house_shifting_product_item::ActiveModel {
            house_shifting_products_id: ActiveValue::Set(products_id),
            item: ActiveValue::Set(item),
            quantity: ActiveValue::Set(quantity),
            created: ActiveValue::Set(now),
            updated: ActiveValue::Set(now),
            ..Default::default()
        };
        house_shifting_product_item::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    house_shifting_product_item::Column::HouseShiftingProductsId,
                    house_shifting_product_item::Column::Item,
                ])
                .update_columns([
                    house_shifting_product_item::Column::Quantity,
                    house_shifting_product_item::Column::Updated,
                ])
                .to_owned(),
            )
            .exec(conn)
            .await?;

        Ok(house_shifting_product_item::Entity::find()
            .filter(house_shifting_product_item::Column::HouseShiftingProductsId.eq(products_id))
            .filter(house_shifting_product_item::Column::Item.eq(item))
            .one(conn)
            .await?)
    }

    pub async fn get_items<C>(conn: &C, products_id: i32) -> Result<Vec<house_shifting_product_item::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(house_shifting_product_item::Entity::find()
            .filter(house_shifting_product_item::Column::HouseShiftingProductsId.eq(products_id))
            .order_by_asc(house_shifting_product_item::Column::Item)
            .all(conn)
            .await?)
    }

    /// The sparse item-to-quantity mapping of an inventory list.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{UserFields, UserRepository};
    use crate::storage::BookingStore;

    async fn setup() -> (BookingStore, i32) {
        let store = BookingStore::in_memory().await.unwrap();
        let user = UserRepository::create_user(store.conn(), "9999999999", None, None, UserFields::default())
            .await
            .unwrap();
        (store, user.id)
    }

    #[tokio::test]
    async fn test_booking_id_generated_when_missing() {
        let (store, user_id) = setup().await;
        let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
            .await
            .unwrap();

        assert!(details.booking_id.starts_with("BK"));
        assert!(!details.is_completed());
        assert!(details.order_placed_datetime.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_booking_id_is_rejected() {
        let (store, user_id) = setup().await;
        let input = HouseShiftingInput {
            booking_id: Some("BK1".to_string()),
            ..Default::default()
        };
        HouseShiftingRepository::create_details(store.conn(), user_id, input.clone())
            .await
            .unwrap();

        let result = HouseShiftingRepository::create_details(store.conn(), user_id, input).await;
        assert!(matches!(result, Err(StoreError::Integrity(_))));
    }

    #[tokio::test]
    async fn test_set_item_upserts_and_removes() {
        let (store, user_id) = setup().await;
        let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
            .await
            .unwrap();
        let products = HouseShiftingRepository::create_products(
            store.conn(),
            details.id,
            Some("4500".to_string()),
            &[(InventoryItem::SingleSofa, 2), (InventoryItem::Tv29To43, 0)],
        )
        .await
        .unwrap();

        let inventory = HouseShiftingRepository::inventory(store.conn(), products.id).await.unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(&InventoryItem::SingleSofa), Some(&2));

        let row = HouseShiftingRepository::set_item(store.conn(), products.id, InventoryItem::SingleSofa, 5)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.quantity, 5);
        assert_eq!(HouseShiftingRepository::get_items(store.conn(), products.id).await.unwrap().len(), 1);

        let removed = HouseShiftingRepository::set_item(store.conn(), products.id, InventoryItem::SingleSofa, 0)
            .await
            .unwrap();
        assert!(removed.is_none());
        assert!(HouseShiftingRepository::inventory(store.conn(), products.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_negative_quantity_is_rejected() {
        let (store, user_id) = setup().await;
        let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
            .await
            .unwrap();
        let products = HouseShiftingRepository::create_products(store.conn(), details.id, None, &[])
            .await
            .unwrap();

        let result = HouseShiftingRepository::set_item(store.conn(), products.id, InventoryItem::GunnyBags, -1).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_set_item_on_missing_products() {
        let (store, _) = setup().await;

        let result = HouseShiftingRepository::set_item(store.conn(), 404, InventoryItem::Lamp, 0).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        let result = HouseShiftingRepository::set_item(store.conn(), 404, InventoryItem::Lamp, 3).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_booking_id_rules() {
        let (store, user_id) = setup().await;
        let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
            .await
            .unwrap();

        let mut blank: house_shifting_details::ActiveModel = details.clone().into();
        blank.booking_id = ActiveValue::Set("   ".to_string());
        let result = HouseShiftingRepository::update_details(store.conn(), blank).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));

        let mut renamed: house_shifting_details::ActiveModel = details.clone().into();
        renamed.booking_id = ActiveValue::Set(" BK77 ".to_string());
        renamed.drop_location = ActiveValue::Set(Some("Thane".to_string()));
        let updated = HouseShiftingRepository::update_details(store.conn(), renamed).await.unwrap();
        assert_eq!(updated.booking_id, "BK77");
        assert!(HouseShiftingRepository::get_by_booking_id(store.conn(), "BK77")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_mark_completed() {
        let (store, user_id) = setup().await;
        let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
            .await
            .unwrap();

        let done = HouseShiftingRepository::mark_completed(store.conn(), details.id).await.unwrap();
        assert!(done.is_completed());
        assert!(done.completed_date.is_some());

        let result = HouseShiftingRepository::mark_completed(store.conn(), 999).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
