use truckbook::entities::{house_shifting_product_item, HouseShiftingProductItem};
use truckbook::repositories::{
    ChosenVehicleInput, HouseShiftingInput, HouseShiftingRepository, NewOrderBooking, OrderBookingRepository,
    SelectedVehicleInput, UserFields, UserRepository, VehicleShiftingInput, VehicleShiftingRepository,
    WarehouseStorageInput, WarehouseStorageRepository,
};
use truckbook::{BookedService, BookingStore, InventoryItem, StoreError};

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

async fn store_with_user(phone: &str) -> (BookingStore, i32) {
    let store = BookingStore::in_memory().await.unwrap();
    let user = UserRepository::create_user(store.conn(), phone, None, Some("pw"), UserFields::default())
        .await
        .unwrap();
    (store, user.id)
}

#[tokio::test]
async fn test_lookup_by_booking_id_with_vehicle() {
    let (store, user_id) = store_with_user("9999999999").await;
    let details = HouseShiftingRepository::create_details(
        store.conn(),
        user_id,
        HouseShiftingInput {
            booking_id: Some("BK1".to_string()),
            pickup_location: Some("Andheri".to_string()),
            drop_location: Some("Powai".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    HouseShiftingRepository::add_selected_vehicle(
        store.conn(),
        details.id,
        SelectedVehicleInput {
            vehicle_name: Some("Tata Ace".to_string()),
            vehicle_type: Some("mini truck".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let (found, vehicles) = HouseShiftingRepository::get_with_vehicles(store.conn(), "BK1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, details.id);
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].vehicle_name.as_deref(), Some("Tata Ace"));

    assert!(HouseShiftingRepository::get_with_vehicles(store.conn(), "BK2")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_deleting_details_cascades() {
    let (store, user_id) = store_with_user("9999999998").await;
    let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
        .await
        .unwrap();
    HouseShiftingRepository::add_selected_vehicle(store.conn(), details.id, SelectedVehicleInput::default())
        .await
        .unwrap();
    let products = HouseShiftingRepository::create_products(
        store.conn(),
        details.id,
        Some("3200".to_string()),
        &[(InventoryItem::DoubleBedStorage, 1), (InventoryItem::WashingMachine, 1)],
    )
    .await
    .unwrap();

    HouseShiftingRepository::delete_details(store.conn(), details.id).await.unwrap();

    assert!(HouseShiftingRepository::get_selected_vehicles(store.conn(), details.id)
        .await
        .unwrap()
        .is_empty());
    assert!(HouseShiftingRepository::get_products(store.conn(), details.id)
        .await
        .unwrap()
        .is_empty());
    let orphan_items = HouseShiftingProductItem::find()
        .filter(house_shifting_product_item::Column::HouseShiftingProductsId.eq(products.id))
        .count(store.conn())
        .await
        .unwrap();
    assert_eq!(orphan_items, 0);

    let result = HouseShiftingRepository::delete_details(store.conn(), details.id).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_deleting_user_cascades_to_bookings() {
    let (store, user_id) = store_with_user("9999999997").await;
    HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
        .await
        .unwrap();
    WarehouseStorageRepository::create_details(store.conn(), user_id, WarehouseStorageInput::default())
        .await
        .unwrap();

    UserRepository::delete(store.conn(), user_id).await.unwrap();

    let summary = store.summary().await.unwrap();
    assert_eq!(summary.house_shifting_details, 0);
    assert_eq!(summary.warehouse_storage_details, 0);
}

#[tokio::test]
async fn test_place_and_complete_house_order() {
    let (store, user_id) = store_with_user("9999999996").await;
    let details = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
        .await
        .unwrap();
    let products = HouseShiftingRepository::create_products(
        store.conn(),
        details.id,
        None,
        &[(InventoryItem::SingleSofa, 1)],
    )
    .await
    .unwrap();

    let mut input = NewOrderBooking::new(BookedService::HouseShifting {
        details_id: details.id,
        products_id: Some(products.id),
    });
    input.payment_method = Some("upi".to_string());
    input.total_amount = Some("5400".to_string());
    let order = store.place_order(user_id, input).await.unwrap();
    assert_eq!(order.booking_id, details.booking_id);

    let details = HouseShiftingRepository::require(store.conn(), details.id).await.unwrap();
    assert!(details.order_placed_datetime.is_some());
    assert!(!details.is_completed());

    let service = store.complete_order(order.id).await.unwrap();
    assert_eq!(service.details_id(), details.id);
    let details = HouseShiftingRepository::require(store.conn(), details.id).await.unwrap();
    assert!(details.is_completed());
    assert!(details.completed_date.is_some());

    let orders = OrderBookingRepository::get_for_user(store.conn(), user_id).await.unwrap();
    assert_eq!(orders.len(), 1);
    let by_ref = OrderBookingRepository::get_by_booking_id(store.conn(), &details.booking_id)
        .await
        .unwrap();
    assert_eq!(by_ref.len(), 1);
}

#[tokio::test]
async fn test_vehicle_order_stamps_chosen_vehicle() {
    let (store, user_id) = store_with_user("9999999995").await;
    let details = VehicleShiftingRepository::create_details(store.conn(), user_id, VehicleShiftingInput::default())
        .await
        .unwrap();
    let vehicle = VehicleShiftingRepository::add_chosen_vehicle(
        store.conn(),
        details.id,
        ChosenVehicleInput {
            vehicle_name: Some("Activa".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    store
        .place_order(
            user_id,
            NewOrderBooking::new(BookedService::VehicleShifting {
                details_id: details.id,
                chosen_vehicle_id: Some(vehicle.id),
            }),
        )
        .await
        .unwrap();

    let vehicle = VehicleShiftingRepository::get_chosen_vehicle(store.conn(), vehicle.id)
        .await
        .unwrap()
        .unwrap();
    assert!(vehicle.order_placed_datetime.is_some());
}

#[tokio::test]
async fn test_order_for_another_users_booking_fails() {
    let (store, owner_id) = store_with_user("9999999994").await;
    let intruder = UserRepository::create_user(store.conn(), "9999999993", None, None, UserFields::default())
        .await
        .unwrap();
    let details = WarehouseStorageRepository::create_details(store.conn(), owner_id, WarehouseStorageInput::default())
        .await
        .unwrap();

    let result = store
        .place_order(
            intruder.id,
            NewOrderBooking::new(BookedService::WarehouseStorage {
                details_id: details.id,
                products_id: None,
            }),
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    // Nothing was stamped or stored
    let details = WarehouseStorageRepository::require(store.conn(), details.id).await.unwrap();
    assert!(details.order_placed_datetime.is_none());
    assert_eq!(store.summary().await.unwrap().order_bookings, 0);
}

#[tokio::test]
async fn test_order_with_foreign_product_list_fails() {
    let (store, user_id) = store_with_user("9999999992").await;
    let first = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
        .await
        .unwrap();
    let second = HouseShiftingRepository::create_details(store.conn(), user_id, HouseShiftingInput::default())
        .await
        .unwrap();
    let products = HouseShiftingRepository::create_products(store.conn(), second.id, None, &[])
        .await
        .unwrap();

    let result = store
        .place_order(
            user_id,
            NewOrderBooking::new(BookedService::HouseShifting {
                details_id: first.id,
                products_id: Some(products.id),
            }),
        )
        .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn test_completing_order_with_deleted_booking() {
    let (store, user_id) = store_with_user("9999999991").await;
    let details = VehicleShiftingRepository::create_details(store.conn(), user_id, VehicleShiftingInput::default())
        .await
        .unwrap();
    let order = store
        .place_order(
            user_id,
            NewOrderBooking::new(BookedService::VehicleShifting {
                details_id: details.id,
                chosen_vehicle_id: None,
            }),
        )
        .await
        .unwrap();

    VehicleShiftingRepository::delete_details(store.conn(), details.id).await.unwrap();

    let result = store.complete_order(order.id).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert!(matches!(store.complete_order(9999).await, Err(StoreError::NotFound(_))));
}
