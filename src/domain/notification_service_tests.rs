//! Tests for the notification dispatcher.

use std::sync::Arc;

use super::*;
use crate::domain::notification::NotificationId;
use crate::domain::order::CustomerId;
use crate::domain::ports::{
    MockNotificationRepository, MockOrderRepository, NotificationRepositoryError,
    OrderRepositoryError,
};

fn service(
    orders: MockOrderRepository,
    notifications: MockNotificationRepository,
) -> NotificationService<MockOrderRepository, MockNotificationRepository> {
    NotificationService::new(Arc::new(orders), Arc::new(notifications))
}

#[tokio::test]
async fn sends_bespoke_copy_to_the_resolved_owner() {
    let customer = CustomerId::random();

    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_owner()
        .times(1)
        .return_once(move |_| Ok(Some(customer)));

    let mut notifications = MockNotificationRepository::new();
    notifications
        .expect_create()
        .times(1)
        .withf(move |new| {
            new.customer_id == customer
                && new.order_id == OrderId::new(42)
                && new.title == "Order #42 is Being Prepared"
        })
        .return_once(|_| Ok(NotificationId::new(17)));

    let sent = service(orders, notifications)
        .send(OrderId::new(42), OrderStatus::Preparing)
        .await
        .expect("dispatch succeeds");

    assert!(sent);
}

#[tokio::test]
async fn unresolvable_owner_is_a_quiet_no() {
    let mut orders = MockOrderRepository::new();
    orders.expect_find_owner().times(1).return_once(|_| Ok(None));

    let mut notifications = MockNotificationRepository::new();
    notifications.expect_create().times(0);

    let sent = service(orders, notifications)
        .send(OrderId::new(9), OrderStatus::Ready)
        .await
        .expect("missing owner is not an error");

    assert!(!sent);
}

#[tokio::test]
async fn owner_lookup_failure_is_absorbed() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_owner()
        .times(1)
        .return_once(|_| Err(OrderRepositoryError::connection("pool exhausted")));

    let mut notifications = MockNotificationRepository::new();
    notifications.expect_create().times(0);

    let sent = service(orders, notifications)
        .send(OrderId::new(9), OrderStatus::Ready)
        .await
        .expect("lookup failure is absorbed");

    assert!(!sent);
}

#[tokio::test]
async fn write_failure_is_reported_as_not_sent() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_owner()
        .times(1)
        .return_once(|_| Ok(Some(CustomerId::random())));

    let mut notifications = MockNotificationRepository::new();
    notifications
        .expect_create()
        .times(1)
        .return_once(|_| Err(NotificationRepositoryError::query("insert failed")));

    let sent = service(orders, notifications)
        .send(OrderId::new(9), OrderStatus::Completed)
        .await
        .expect("write failure is absorbed");

    assert!(!sent);
}

#[tokio::test]
async fn cancelled_status_uses_the_generic_template() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_owner()
        .times(1)
        .return_once(|_| Ok(Some(CustomerId::random())));

    let mut notifications = MockNotificationRepository::new();
    notifications
        .expect_create()
        .times(1)
        .withf(|new| {
            new.title == "Order #3 Update" && new.message.contains("status updated to cancelled")
        })
        .return_once(|_| Ok(NotificationId::new(1)));

    let sent = service(orders, notifications)
        .send(OrderId::new(3), OrderStatus::Cancelled)
        .await
        .expect("dispatch succeeds");

    assert!(sent);
}
