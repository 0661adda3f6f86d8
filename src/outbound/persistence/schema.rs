//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database.

diesel::table! {
    /// Customer accounts. Orders keep a nullable reference so deleting an
    /// account never orphans its order history.
    users (id) {
        id -> Uuid,
        display_name -> Varchar,
        is_active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Menu groupings such as "Mains" or "Drinks".
    categories (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    /// Dishes and drinks offered by the canteen.
    menu_items (id) {
        id -> Int8,
        name -> Varchar,
        description -> Nullable<Text>,
        price -> Numeric,
        category_id -> Int8,
        image_path -> Nullable<Varchar>,
        is_available -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Customer orders. `status` holds one of the five lifecycle strings;
    /// `total` is fixed at creation.
    orders (id) {
        id -> Int8,
        customer_id -> Nullable<Uuid>,
        status -> Varchar,
        total -> Numeric,
        order_date -> Timestamptz,
        pickup_location -> Nullable<Varchar>,
        special_instructions -> Nullable<Text>,
    }
}

diesel::table! {
    /// Menu snapshots attached to an order at purchase time.
    order_items (id) {
        id -> Int8,
        order_id -> Int8,
        item_name -> Varchar,
        unit_price -> Numeric,
        category_name -> Varchar,
        image_path -> Nullable<Varchar>,
        quantity -> Int4,
    }
}

diesel::table! {
    /// Append-only status audit trail.
    order_status_history (id) {
        id -> Int8,
        order_id -> Int8,
        status -> Varchar,
        admin_id -> Uuid,
        note -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Customer-visible notifications; the read flag is flipped by the
    /// customer-facing app only.
    notifications (id) {
        id -> Int8,
        user_id -> Uuid,
        order_id -> Int8,
        title -> Varchar,
        message -> Text,
        is_read -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Back-office key/value settings.
    settings (key) {
        key -> Varchar,
        value -> Text,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(orders -> users (customer_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(order_status_history -> orders (order_id));
diesel::joinable!(notifications -> orders (order_id));
diesel::joinable!(menu_items -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    categories,
    menu_items,
    orders,
    order_items,
    order_status_history,
    notifications,
    settings,
);
