//! Tests for the order lifecycle manager.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::order::{AdminId, CustomerId, Order, OrderDraft, OrderId};
use crate::domain::ports::{
    MockNotificationDispatcher, MockOrderRepository, NotificationDispatchError,
};

fn stored_order(id: i64, status: OrderStatus) -> Order {
    Order::new(OrderDraft {
        id: OrderId::new(id),
        customer_id: Some(CustomerId::random()),
        status,
        total: Decimal::new(1250, 2),
        order_date: Utc::now(),
        pickup_location: None,
        special_instructions: None,
        items: Vec::new(),
    })
    .expect("valid order")
}

fn request(id: i64, new_status: &str, notify: bool) -> UpdateOrderStatusRequest {
    UpdateOrderStatusRequest {
        order_id: OrderId::new(id),
        new_status: new_status.to_owned(),
        acting_admin: AdminId::random(),
        notify_customer: notify,
    }
}

fn service(
    orders: MockOrderRepository,
    dispatcher: MockNotificationDispatcher,
    policy: TransitionPolicy,
) -> OrderLifecycleService<MockOrderRepository, MockNotificationDispatcher> {
    OrderLifecycleService::new(Arc::new(orders), Arc::new(dispatcher), policy)
}

#[tokio::test]
async fn update_persists_status_and_audits_with_notified_suffix() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(42, OrderStatus::Pending))));
    orders
        .expect_apply_status_change()
        .times(1)
        .withf(|order_id, status, audit| {
            *order_id == OrderId::new(42)
                && *status == OrderStatus::Preparing
                && audit.note == "Status changed to preparing - Customer notified"
        })
        .return_once(|_, _, _| Ok(true));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher
        .expect_send()
        .times(1)
        .withf(|order_id, status| {
            *order_id == OrderId::new(42) && *status == OrderStatus::Preparing
        })
        .return_once(|_, _| Ok(true));

    let response = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(42, "preparing", true))
        .await
        .expect("update succeeds");

    assert_eq!(response.status, OrderStatus::Preparing);
    assert!(response.customer_notified);
}

#[tokio::test]
async fn missing_order_yields_not_found_with_no_side_effects() {
    let mut orders = MockOrderRepository::new();
    orders.expect_find_by_id().times(1).return_once(|_| Ok(None));
    orders.expect_apply_status_change().times(0);

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let error = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(99, "ready", false))
        .await
        .expect_err("order missing");

    assert_eq!(error.code(), ErrorCode::OrderNotFound);
}

#[tokio::test]
async fn unknown_status_string_is_rejected_before_any_lookup() {
    let mut orders = MockOrderRepository::new();
    orders.expect_find_by_id().times(0);
    orders.expect_apply_status_change().times(0);

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let error = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(42, "shipped", true))
        .await
        .expect_err("unknown status");

    assert_eq!(error.code(), ErrorCode::InvalidStatus);
}

#[tokio::test]
async fn reapplying_the_same_status_audits_again() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(2)
        .returning(|_| Ok(Some(stored_order(42, OrderStatus::Preparing))));
    orders
        .expect_apply_status_change()
        .times(2)
        .withf(|_, status, audit| {
            *status == OrderStatus::Preparing && audit.note == "Status changed to preparing"
        })
        .returning(|_, _, _| Ok(true));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let svc = service(orders, dispatcher, TransitionPolicy::ForwardOnly);
    for _ in 0..2 {
        let response = svc
            .update_status(request(42, "preparing", false))
            .await
            .expect("idempotent reapply succeeds");
        assert_eq!(response.status, OrderStatus::Preparing);
    }
}

#[tokio::test]
async fn dispatcher_failure_does_not_fail_the_update() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(42, OrderStatus::Preparing))));
    orders
        .expect_apply_status_change()
        .times(1)
        .return_once(|_, _, _| Ok(true));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher
        .expect_send()
        .times(1)
        .return_once(|_, _| Err(NotificationDispatchError::store("insert rejected")));

    let response = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(42, "ready", true))
        .await
        .expect("update still succeeds");

    assert_eq!(response.status, OrderStatus::Ready);
    assert!(!response.customer_notified);
}

#[tokio::test]
async fn notify_false_skips_dispatch_and_suffix() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(5, OrderStatus::Ready))));
    orders
        .expect_apply_status_change()
        .times(1)
        .withf(|order_id, status, audit| {
            *order_id == OrderId::new(5)
                && *status == OrderStatus::Completed
                && audit.note == "Status changed to completed"
        })
        .return_once(|_, _, _| Ok(true));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let response = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(5, "completed", false))
        .await
        .expect("update succeeds");

    assert_eq!(response.status, OrderStatus::Completed);
    assert!(!response.customer_notified);
}

#[tokio::test]
async fn forward_only_policy_rejects_backward_jumps() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(7, OrderStatus::Completed))));
    orders.expect_apply_status_change().times(0);

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let error = service(orders, dispatcher, TransitionPolicy::ForwardOnly)
        .update_status(request(7, "pending", false))
        .await
        .expect_err("backward jump rejected");

    assert_eq!(error.code(), ErrorCode::InvalidTransition);
}

#[tokio::test]
async fn permissive_policy_accepts_backward_jumps() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(7, OrderStatus::Completed))));
    orders
        .expect_apply_status_change()
        .times(1)
        .return_once(|_, _, _| Ok(true));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let response = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(7, "pending", false))
        .await
        .expect("permissive policy accepts the jump");

    assert_eq!(response.status, OrderStatus::Pending);
}

#[tokio::test]
async fn write_failure_maps_to_persistence_error() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(8, OrderStatus::Pending))));
    orders
        .expect_apply_status_change()
        .times(1)
        .return_once(|_, _, _| Err(OrderRepositoryError::query("deadlock detected")));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let error = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(8, "preparing", true))
        .await
        .expect_err("write failed");

    assert_eq!(error.code(), ErrorCode::PersistenceError);
}

#[tokio::test]
async fn order_deleted_between_lookup_and_write_maps_to_not_found() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_order(8, OrderStatus::Pending))));
    orders
        .expect_apply_status_change()
        .times(1)
        .return_once(|_, _, _| Ok(false));

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let error = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(request(8, "preparing", false))
        .await
        .expect_err("row vanished");

    assert_eq!(error.code(), ErrorCode::OrderNotFound);
}

#[tokio::test]
async fn nil_admin_id_is_rejected() {
    let mut orders = MockOrderRepository::new();
    orders.expect_find_by_id().times(0);

    let mut dispatcher = MockNotificationDispatcher::new();
    dispatcher.expect_send().times(0);

    let mut req = request(42, "ready", false);
    req.acting_admin = AdminId::from_uuid(uuid::Uuid::nil());

    let error = service(orders, dispatcher, TransitionPolicy::Permissive)
        .update_status(req)
        .await
        .expect_err("nil admin rejected");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
