//! Order placement and fulfilment across the three service lines.

use chrono::Utc;
use log::info;
use sea_orm::TransactionTrait;

use super::BookingStore;
use crate::entities::order_booking::{self, BookedService};
use crate::error::{Result, StoreError};
use crate::repositories::{
    HouseShiftingRepository, NewOrderBooking, OrderBookingRepository, VehicleShiftingRepository,
    WarehouseStorageRepository,
};

impl BookingStore {
    /// Create an order and stamp the booking's order time in one transaction.
    ///
    /// For vehicle shifting the chosen vehicle is stamped too.
    pub async fn place_order(&self, user_id: i32, input: NewOrderBooking) -> Result<order_booking::Model> {
        let txn = self.conn.begin().await?;

        let order = OrderBookingRepository::create(&txn, user_id, input).await?;
        let placed_at = Utc::now();
        match order.service() {
            Some(BookedService::HouseShifting { details_id, .. }) => {
                HouseShiftingRepository::mark_order_placed(&txn, details_id, placed_at).await?;
            }
            Some(BookedService::VehicleShifting {
                details_id,
                chosen_vehicle_id,
            }) => {
                VehicleShiftingRepository::mark_order_placed(&txn, details_id, placed_at).await?;
                if let Some(vehicle_id) = chosen_vehicle_id {
                    VehicleShiftingRepository::mark_vehicle_ordered(&txn, vehicle_id, placed_at).await?;
                }
            }
            Some(BookedService::WarehouseStorage { details_id, .. }) => {
                WarehouseStorageRepository::mark_order_placed(&txn, details_id, placed_at).await?;
            }
            None => {}
        }

        txn.commit().await?;
        info!("Placed order {} for booking {}", order.id, order.booking_id);
        Ok(order)
    }

    /// Mark the booking behind an order as fulfilled.
    ///
    /// # Errors
    /// `NotFound` when the order does not exist, `Validation` when its
    /// booking has since been deleted.
    pub async fn complete_order(&self, order_id: i32) -> Result<BookedService> {
        let order = OrderBookingRepository::get_by_id(&self.conn, order_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("order booking {}", order_id)))?;
        let service = order
            .service()
            .ok_or_else(|| StoreError::Validation(format!("booking {} no longer exists", order.booking_id)))?;

        match service {
            BookedService::HouseShifting { details_id, .. } => {
                HouseShiftingRepository::mark_completed(&self.conn, details_id).await?;
            }
            BookedService::VehicleShifting { details_id, .. } => {
                VehicleShiftingRepository::mark_completed(&self.conn, details_id).await?;
            }
            BookedService::WarehouseStorage { details_id, .. } => {
                WarehouseStorageRepository::mark_completed(&self.conn, details_id).await?;
            }
        }

        Ok(service)
    }
}
