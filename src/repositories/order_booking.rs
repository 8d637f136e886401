//! Order booking repository.
//!
//! An order points at exactly one service line. Creation checks that the
//! referenced booking belongs to the ordering user and that any product list
//! or vehicle reference hangs off that booking.

use log::{debug, info};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use super::{HouseShiftingRepository, VehicleShiftingRepository, WarehouseStorageRepository};
use crate::entities::order_booking::{self, BookedService};
use crate::error::{Result, StoreError};

/// Input for a new order.
#[derive(Debug, Clone)]
pub struct NewOrderBooking {
    /// Must match the referenced booking's reference; defaults to it
    pub booking_id: Option<String>,
    pub service: BookedService,
    pub booking_datetime: Option<String>,
    pub shifting_type: Option<String>,
    pub payment_method: Option<String>,
    pub total_amount: Option<String>,
}

impl NewOrderBooking {
    pub fn new(service: BookedService) -> Self {
        Self {
            booking_id: None,
            service,
            booking_datetime: None,
            shifting_type: None,
            payment_method: None,
            total_amount: None,
        }
    }
}

fn not_owned(kind: &str, id: i32) -> StoreError {
    StoreError::NotFound(format!("{} {} for this user", kind, id))
}

fn not_attached(kind: &str, id: i32, details_id: i32) -> StoreError {
    StoreError::Validation(format!("{} {} does not belong to booking {}", kind, id, details_id))
}

/// Repository for order booking database operations.
pub struct OrderBookingRepository;

impl OrderBookingRepository {
    /// Resolve the booking reference of the service line after checking
    /// ownership and parentage of every referenced row.
    async fn resolve_service<C>(conn: &C, user_id: i32, service: &BookedService) -> Result<String>
    where
        C: ConnectionTrait,
    {
        match *service {
            BookedService::HouseShifting { details_id, products_id } => {
                let details = HouseShiftingRepository::get_by_id(conn, details_id)
                    .await?
                    .filter(|d| d.user_id == user_id)
                    .ok_or_else(|| not_owned("house shifting details", details_id))?;
                if let Some(products_id) = products_id {
                    let products = HouseShiftingRepository::get_products_by_id(conn, products_id)
                        .await?
                        .ok_or_else(|| StoreError::NotFound(format!("house shifting products {}", products_id)))?;
                    if products.house_shifting_details_id != details_id {
                        return Err(not_attached("house shifting products", products_id, details_id));
                    }
                }
                Ok(details.booking_id)
            }
            BookedService::VehicleShifting {
                details_id,
                chosen_vehicle_id,
            } => {
                let details = VehicleShiftingRepository::get_by_id(conn, details_id)
                    .await?
                    .filter(|d| d.user_id == user_id)
                    .ok_or_else(|| not_owned("vehicle shifting details", details_id))?;
                if let Some(vehicle_id) = chosen_vehicle_id {
                    let vehicle = VehicleShiftingRepository::get_chosen_vehicle(conn, vehicle_id)
                        .await?
                        .ok_or_else(|| StoreError::NotFound(format!("chosen shifting vehicle {}", vehicle_id)))?;
                    if vehicle.vehicle_shifting_details_id != details_id {
                        return Err(not_attached("chosen shifting vehicle", vehicle_id, details_id));
                    }
                }
                Ok(details.booking_id)
            }
            BookedService::WarehouseStorage { details_id, products_id } => {
                let details = WarehouseStorageRepository::get_by_id(conn, details_id)
                    .await?
                    .filter(|d| d.user_id == user_id)
                    .ok_or_else(|| not_owned("warehouse storage details", details_id))?;
                if let Some(products_id) = products_id {
                    let products = WarehouseStorageRepository::get_products_by_id(conn, products_id)
                        .await?
                        .ok_or_else(|| StoreError::NotFound(format!("warehouse storing products {}", products_id)))?;
                    if products.warehouse_storage_details_id != details_id {
                        return Err(not_attached("warehouse storing products", products_id, details_id));
                    }
                }
                Ok(details.booking_id)
            }
        }
    }

    /// Create an order for one service line.
    ///
    /// # Errors
    /// `NotFound` when the referenced booking does not exist or belongs to
    /// another user, `Validation` when a product or vehicle reference belongs
    /// to a different booking or the booking reference does not match.
    pub async fn create<C>(conn: &C, user_id: i32, input: NewOrderBooking) -> Result<order_booking::Model>
    where
        C: ConnectionTrait,
    {
        let booking_id = Self::resolve_service(conn, user_id, &input.service).await?;
        if let Some(supplied) = input.booking_id.as_deref().map(str::trim) {
            if supplied != booking_id {
                return Err(StoreError::Validation(format!(
                    "booking id {} does not match booking {}",
                    supplied, booking_id
                )));
            }
        }

        let mut order = order_booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            booking_id: ActiveValue::Set(booking_id),
            house_shifting_details_id: ActiveValue::Set(None),
            house_shifting_products_id: ActiveValue::Set(None),
            vehicle_shifting_details_id: ActiveValue::Set(None),
            chosen_shifting_vehicle_id: ActiveValue::Set(None),
            warehouse_storage_details_id: ActiveValue::Set(None),
            warehouse_storing_products_id: ActiveValue::Set(None),
            booking_datetime: ActiveValue::Set(input.booking_datetime),
            shifting_type: ActiveValue::Set(input.shifting_type),
            payment_method: ActiveValue::Set(input.payment_method),
            total_amount: ActiveValue::Set(input.total_amount),
            ..Default::default()
        };
        match input.service {
            BookedService::HouseShifting { details_id, products_id } => {
                order.house_shifting_details_id = ActiveValue::Set(Some(details_id));
                order.house_shifting_products_id = ActiveValue::Set(products_id);
            }
            BookedService::VehicleShifting {
                details_id,
                chosen_vehicle_id,
            } => {
                order.vehicle_shifting_details_id = ActiveValue::Set(Some(details_id));
                order.chosen_shifting_vehicle_id = ActiveValue::Set(chosen_vehicle_id);
            }
            BookedService::WarehouseStorage { details_id, products_id } => {
                order.warehouse_storage_details_id = ActiveValue::Set(Some(details_id));
                order.warehouse_storing_products_id = ActiveValue::Set(products_id);
            }
        }

        let order = order.insert(conn).await?;
        info!("Created order {} for booking {}", order.id, order.booking_id);
        Ok(order)
    }

    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<order_booking::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(order_booking::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get a user's orders, oldest first.
    pub async fn get_for_user<C>(conn: &C, user_id: i32) -> Result<Vec<order_booking::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(order_booking::Entity::find()
            .filter(order_booking::Column::UserId.eq(user_id))
            .order_by_asc(order_booking::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get every order placed against a booking reference.
    pub async fn get_by_booking_id<C>(conn: &C, booking_id: &str) -> Result<Vec<order_booking::Model>>
    where
        C: ConnectionTrait,
    {
        debug!("Looking up orders for booking {}", booking_id);
        Ok(order_booking::Entity::find()
            .filter(order_booking::Column::BookingId.eq(booking_id))
            .order_by_asc(order_booking::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn delete<C>(conn: &C, id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let result = order_booking::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("order booking {}", id)));
        }
        info!("Deleted order booking {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{HouseShiftingInput, UserFields, UserRepository};
    use crate::storage::BookingStore;

    #[tokio::test]
    async fn test_order_defaults_booking_id_and_survives_details_delete() {
        let store = BookingStore::in_memory().await.unwrap();
        let user = UserRepository::create_user(store.conn(), "9000000040", None, None, UserFields::default())
            .await
            .unwrap();
        let details = HouseShiftingRepository::create_details(
            store.conn(),
            user.id,
            HouseShiftingInput {
                booking_id: Some("BK40".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let order = OrderBookingRepository::create(
            store.conn(),
            user.id,
            NewOrderBooking::new(BookedService::HouseShifting {
                details_id: details.id,
                products_id: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(order.booking_id, "BK40");
        assert_eq!(order.service().map(|s| s.details_id()), Some(details.id));

        HouseShiftingRepository::delete_details(store.conn(), details.id).await.unwrap();
        let order = OrderBookingRepository::get_by_id(store.conn(), order.id).await.unwrap().unwrap();
        assert!(order.service().is_none());
        assert_eq!(order.booking_id, "BK40");
    }

    #[tokio::test]
    async fn test_mismatched_booking_id_rejected() {
        let store = BookingStore::in_memory().await.unwrap();
        let user = UserRepository::create_user(store.conn(), "9000000041", None, None, UserFields::default())
            .await
            .unwrap();
        let details = HouseShiftingRepository::create_details(store.conn(), user.id, HouseShiftingInput::default())
            .await
            .unwrap();

        let mut input = NewOrderBooking::new(BookedService::HouseShifting {
            details_id: details.id,
            products_id: None,
        });
        input.booking_id = Some("BKOTHER".to_string());
        let result = OrderBookingRepository::create(store.conn(), user.id, input).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
