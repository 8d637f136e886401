//! Vehicle shifting repository: relocating a customer's own vehicle.

use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{chosen_shifting_vehicle, vehicle_shifting_details};
use crate::error::{Result, StoreError};
use crate::utils::identity::{booking_id_or_generate, check_booking_id};

#[derive(Debug, Clone, Default)]
pub struct VehicleShiftingInput {
    /// Generated when not supplied
    pub booking_id: Option<String>,
    pub shifting_type: Option<String>,
    pub moving_datetime: Option<String>,
    pub pickup_location: Option<String>,
    pub pickup_address: Option<String>,
    pub pickup_floor: Option<String>,
    pub pickup_lift: Option<String>,
    pub drop_location: Option<String>,
    pub drop_address: Option<String>,
    pub drop_floor: Option<String>,
    pub drop_lift: Option<String>,
}

/// The vehicle the customer wants moved.
#[derive(Debug, Clone, Default)]
pub struct ChosenVehicleInput {
    pub vehicle_amount: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_image: Option<String>,
}

/// Repository for vehicle shifting database operations.
pub struct VehicleShiftingRepository;

impl VehicleShiftingRepository {
    pub async fn create_details<C>(
        conn: &C,
        user_id: i32,
        input: VehicleShiftingInput,
    ) -> Result<vehicle_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let booking_id = booking_id_or_generate(input.booking_id)?;

        let details = vehicle_shifting_details::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            booking_id: ActiveValue::Set(booking_id),
            shifting_type: ActiveValue::Set(input.shifting_type),
            moving_datetime: ActiveValue::Set(input.moving_datetime),
            pickup_location: ActiveValue::Set(input.pickup_location),
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

        info!("Created vehicle shifting {} for user {}", details.booking_id, user_id);
        Ok(details)
    }

    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<vehicle_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(vehicle_shifting_details::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn require<C>(conn: &C, id: i32) -> Result<vehicle_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        Self::get_by_id(conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("vehicle shifting details {}", id)))
    }

    pub async fn get_by_booking_id<C>(conn: &C, booking_id: &str) -> Result<Option<vehicle_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        debug!("Looking up vehicle shifting {}", booking_id);
        Ok(vehicle_shifting_details::Entity::find()
            .filter(vehicle_shifting_details::Column::BookingId.eq(booking_id))
            .one(conn)
            .await?)
    }

    pub async fn get_for_user<C>(conn: &C, user_id: i32) -> Result<Vec<vehicle_shifting_details::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(vehicle_shifting_details::Entity::find()
            .filter(vehicle_shifting_details::Column::UserId.eq(user_id))
            .order_by_asc(vehicle_shifting_details::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn update_details<C>(
        conn: &C,
        mut details: vehicle_shifting_details::ActiveModel,
    ) -> Result<vehicle_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(booking_id) = &details.booking_id {
            details.booking_id = ActiveValue::Set(check_booking_id(booking_id)?);
        }
        Ok(details.update(conn).await?)
    }

    /// Delete booking details together with their chosen vehicles.
    pub async fn delete_details<C>(conn: &C, id: i32) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let result = vehicle_shifting_details::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("vehicle shifting details {}", id)));
        }
        info!("Deleted vehicle shifting details {}", id);
        Ok(())
    }

    pub async fn mark_order_placed<C>(
        conn: &C,
        id: i32,
        placed_at: DateTime<Utc>,
    ) -> Result<vehicle_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: vehicle_shifting_details::ActiveModel = details.into();
        active_model.order_placed_datetime = ActiveValue::Set(Some(placed_at));
        Ok(active_model.update(conn).await?)
    }

    pub async fn mark_completed<C>(conn: &C, id: i32) -> Result<vehicle_shifting_details::Model>
    where
        C: ConnectionTrait,
    {
        let details = Self::require(conn, id).await?;
        let mut active_model: vehicle_shifting_details::ActiveModel = details.into();
        active_model.completed = ActiveValue::Set(Some(true));
        active_model.completed_date = ActiveValue::Set(Some(Utc::now()));
        let details = active_model.update(conn).await?;
        info!("Completed vehicle shifting {}", details.booking_id);
        Ok(details)
    }

    pub async fn add_chosen_vehicle<C>(
        conn: &C,
        details_id: i32,
        input: ChosenVehicleInput,
    ) -> Result<chosen_shifting_vehicle::Model>
    where
        C: ConnectionTrait,
    {
        Self::require(conn, details_id).await?;

        Ok(chosen_shifting_vehicle::ActiveModel {
            vehicle_shifting_details_id: ActiveValue::Set(details_id),
            vehicle_amount: ActiveValue::Set(input.vehicle_amount),
            vehicle_name: ActiveValue::Set(input.vehicle_name),
            vehicle_model: ActiveValue::Set(input.vehicle_model),
            vehicle_image: ActiveValue::Set(input.vehicle_image),
            order_placed_datetime: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?)
    }

    pub async fn get_chosen_vehicle<C>(conn: &C, id: i32) -> Result<Option<chosen_shifting_vehicle::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(chosen_shifting_vehicle::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn get_chosen_vehicles<C>(conn: &C, details_id: i32) -> Result<Vec<chosen_shifting_vehicle::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(chosen_shifting_vehicle::Entity::find()
            .filter(chosen_shifting_vehicle::Column::VehicleShiftingDetailsId.eq(details_id))
            .order_by_asc(chosen_shifting_vehicle::Column::Id)
            .all(conn)
            .await?)
    }

    /// Fetch a booking by reference along with its chosen vehicles.
    pub async fn get_with_vehicles<C>(
        conn: &C,
        booking_id: &str,
    ) -> Result<Option<(vehicle_shifting_details::Model, Vec<chosen_shifting_vehicle::Model>)>>
    where
        C: ConnectionTrait,
    {
        let Some(details) = Self::get_by_booking_id(conn, booking_id).await? else {
            return Ok(None);
        };
        let vehicles = Self::get_chosen_vehicles(conn, details.id).await?;
        Ok(Some((details, vehicles)))
    }

    /// Stamp the order time on a chosen vehicle.
    pub async fn mark_vehicle_ordered<C>(
        conn: &C,
        vehicle_id: i32,
        placed_at: DateTime<Utc>,
    ) -> Result<chosen_shifting_vehicle::Model>
    where
        C: ConnectionTrait,
    {
        let vehicle = Self::get_chosen_vehicle(conn, vehicle_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("chosen shifting vehicle {}", vehicle_id)))?;
        let mut active_model: chosen_shifting_vehicle::ActiveModel = vehicle.into();
        active_model.order_placed_datetime = ActiveValue::Set(Some(placed_at));
        Ok(active_model.update(conn).await?)
    }
}
