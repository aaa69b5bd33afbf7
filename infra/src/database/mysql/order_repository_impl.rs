//! MySQL implementation of the OrderRepository trait.
//!
//! Orders are never hard-deleted: cancellation stamps `deleted_at` and every
//! read filters on `deleted_at IS NULL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use order_core::domain::entities::order::{DeliveryType, FeeBreakdown, ItemType, Order, OrderStatus};
use order_core::domain::value_objects::OrderFilter;
use order_core::errors::DomainError;
use order_core::repositories::OrderRepository;

use super::{column_error, persistence_error};

const ORDER_COLUMNS: &str = r#"
    id, store_id, merchant_order_id, recipient_name, recipient_phone, recipient_address,
    recipient_city, recipient_zone, recipient_area, delivery_type, item_type,
    special_instruction, item_description, item_quantity, item_weight, amount_to_collect,
    order_consignment_id, cod_fee, delivery_fee, total_fee, promo_discount, discount,
    order_status, archived, user_id, created_at, updated_at, deleted_at
"#;

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new MySQL order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Order entity
    fn row_to_order(row: &MySqlRow) -> Result<Order, DomainError> {
        let delivery_code: i8 = row
            .try_get("delivery_type")
            .map_err(|e| column_error("delivery_type", e))?;
        let item_code: i8 = row
            .try_get("item_type")
            .map_err(|e| column_error("item_type", e))?;
        let status: String = row
            .try_get("order_status")
            .map_err(|e| column_error("order_status", e))?;

        Ok(Order {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            store_id: row.try_get("store_id").map_err(|e| column_error("store_id", e))?,
            merchant_order_id: row
                .try_get("merchant_order_id")
                .map_err(|e| column_error("merchant_order_id", e))?,
            recipient_name: row
                .try_get("recipient_name")
                .map_err(|e| column_error("recipient_name", e))?,
            recipient_phone: row
                .try_get("recipient_phone")
                .map_err(|e| column_error("recipient_phone", e))?,
            recipient_address: row
                .try_get("recipient_address")
                .map_err(|e| column_error("recipient_address", e))?,
            recipient_city: row
                .try_get("recipient_city")
                .map_err(|e| column_error("recipient_city", e))?,
            recipient_zone: row
                .try_get("recipient_zone")
                .map_err(|e| column_error("recipient_zone", e))?,
            recipient_area: row
                .try_get("recipient_area")
                .map_err(|e| column_error("recipient_area", e))?,
            delivery_type: DeliveryType::from_code(i64::from(delivery_code)).unwrap_or(DeliveryType::Unknown),
            item_type: ItemType::from_code(i64::from(item_code)).unwrap_or(ItemType::Unknown),
            special_instruction: row
                .try_get("special_instruction")
                .map_err(|e| column_error("special_instruction", e))?,
            item_description: row
                .try_get("item_description")
                .map_err(|e| column_error("item_description", e))?,
            item_quantity: row
                .try_get("item_quantity")
                .map_err(|e| column_error("item_quantity", e))?,
            item_weight: row
                .try_get("item_weight")
                .map_err(|e| column_error("item_weight", e))?,
            amount_to_collect: row
                .try_get("amount_to_collect")
                .map_err(|e| column_error("amount_to_collect", e))?,
            consignment_id: row
                .try_get("order_consignment_id")
                .map_err(|e| column_error("order_consignment_id", e))?,
            fees: FeeBreakdown {
                delivery_fee: row
                    .try_get("delivery_fee")
                    .map_err(|e| column_error("delivery_fee", e))?,
                cod_fee: row.try_get("cod_fee").map_err(|e| column_error("cod_fee", e))?,
                total_fee: row
                    .try_get("total_fee")
                    .map_err(|e| column_error("total_fee", e))?,
            },
            promo_discount: row
                .try_get("promo_discount")
                .map_err(|e| column_error("promo_discount", e))?,
            discount: row.try_get("discount").map_err(|e| column_error("discount", e))?,
            order_status: status.parse().unwrap_or(OrderStatus::Pending),
            archived: row.try_get("archived").map_err(|e| column_error("archived", e))?,
            user_id: row.try_get("user_id").map_err(|e| column_error("user_id", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(|e| column_error("deleted_at", e))?,
        })
    }
}

/// Append the listing predicate shared by the page query and the count
fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &OrderFilter) {
    builder
        .push(" WHERE user_id = ")
        .push_bind(filter.user_id)
        .push(" AND deleted_at IS NULL");

    if let Some(status) = filter.transfer_status {
        builder.push(" AND order_status = ").push_bind(status.as_str());
    }
    if let Some(archived) = filter.archived {
        builder.push(" AND archived = ").push_bind(archived);
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, mut order: Order) -> Result<Order, DomainError> {
        let query = r#"
            INSERT INTO orders (
                store_id, merchant_order_id, recipient_name, recipient_phone, recipient_address,
                recipient_city, recipient_zone, recipient_area, delivery_type, item_type,
                special_instruction, item_description, item_quantity, item_weight, amount_to_collect,
                order_consignment_id, cod_fee, delivery_fee, total_fee, promo_discount, discount,
                order_status, archived, user_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(order.store_id)
            .bind(&order.merchant_order_id)
            .bind(&order.recipient_name)
            .bind(&order.recipient_phone)
            .bind(&order.recipient_address)
            .bind(order.recipient_city)
            .bind(order.recipient_zone)
            .bind(order.recipient_area)
            .bind(order.delivery_type.code())
            .bind(order.item_type.code())
            .bind(&order.special_instruction)
            .bind(&order.item_description)
            .bind(order.item_quantity)
            .bind(order.item_weight)
            .bind(order.amount_to_collect)
            .bind(&order.consignment_id)
            .bind(order.fees.cod_fee)
            .bind(order.fees.delivery_fee)
            .bind(order.fees.total_fee)
            .bind(order.promo_discount)
            .bind(order.discount)
            .bind(order.order_status.as_str())
            .bind(order.archived)
            .bind(order.user_id)
            .bind(order.created_at)
            .bind(order.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::conflict(format!("consignment id {}", order.consignment_id))
                }
                other => persistence_error("Failed to insert order", other),
            })?;

        order.id = result.last_insert_id() as i64;
        Ok(order)
    }

    async fn find_all(&self, filter: &OrderFilter) -> Result<(Vec<Order>, u64), DomainError> {
        let mut count = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM orders");
        push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to count orders", e))?;

        let mut select = QueryBuilder::<MySql>::new(format!("SELECT {} FROM orders", ORDER_COLUMNS));
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(filter.pagination.limit())
            .push(" OFFSET ")
            .push_bind(filter.pagination.offset());

        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to list orders", e))?;

        let orders = rows
            .iter()
            .map(Self::row_to_order)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total.max(0) as u64))
    }

    async fn soft_delete(&self, consignment_id: &str, user_id: i64) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE orders
            SET deleted_at = ?, updated_at = ?
            WHERE order_consignment_id = ? AND user_id = ? AND deleted_at IS NULL
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(now)
            .bind(now)
            .bind(consignment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to cancel order", e))?;

        Ok(result.rows_affected())
    }
}
