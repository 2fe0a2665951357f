use crate::api::response::{
    CartItemResponse, CartResponse, DeliveryOptionResponse, OrderItemResponse,
    OrderProductResponse, OrderResponse, PaymentSummaryResponse, ProductResponse,
};
use crate::data::models::cart::CartLine;
use crate::data::models::delivery_option::DeliveryOption;
use crate::data::models::order::{Order, OrderLine};
use crate::data::models::payment_summary::PaymentSummary;
use crate::data::models::product::Product;
use crate::services::cart_service::CartContents;
use crate::services::order_service::{OrderDetail, OrderSummary};
use chrono::NaiveDateTime;

/// Stored timestamps are UTC without zone; the API speaks epoch milliseconds.
pub fn epoch_millis(at: NaiveDateTime) -> i64 {
    at.and_utc().timestamp_millis()
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            price_cents: product.price_cents,
            image: product.image,
            category: product.category,
        }
    }
}

impl From<DeliveryOption> for DeliveryOptionResponse {
    fn from(option: DeliveryOption) -> Self {
        DeliveryOptionResponse {
            id: option.id,
            name: option.name,
            price_cents: option.price_cents,
        }
    }
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        CartItemResponse {
            id: line.id,
            product_id: line.product_id,
            quantity: line.quantity,
            name: line.name,
            price_cents: line.price_cents,
            image: line.image,
        }
    }
}

impl From<CartContents> for CartResponse {
    fn from(cart: CartContents) -> Self {
        CartResponse {
            cart_id: cart.cart_id,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

impl From<OrderLine> for OrderItemResponse {
    fn from(line: OrderLine) -> Self {
        OrderItemResponse {
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            product: OrderProductResponse {
                id: line.product_id,
                name: line.name,
                image: line.image,
            },
            estimated_delivery_time_ms: None,
        }
    }
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        OrderResponse {
            id: order.id,
            user_id: order.user_id.clone(),
            total_cents: order.total_cents,
            delivery_option_id: order.delivery_option_id,
            order_time_ms: epoch_millis(order.order_time),
            estimated_delivery_time_ms: epoch_millis(order.estimated_delivery_time),
            products: None,
        }
    }
}

impl From<OrderSummary> for OrderResponse {
    fn from(summary: OrderSummary) -> Self {
        let mut response = OrderResponse::from(&summary.order);
        let eta = response.estimated_delivery_time_ms;
        response.products = summary.items.map(|items| {
            items
                .into_iter()
                .map(|line| OrderItemResponse {
                    estimated_delivery_time_ms: Some(eta),
                    ..OrderItemResponse::from(line)
                })
                .collect()
        });
        response
    }
}

impl From<OrderDetail> for OrderResponse {
    fn from(detail: OrderDetail) -> Self {
        let mut response = OrderResponse::from(&detail.order);
        response.products = Some(
            detail
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        );
        response
    }
}

impl From<PaymentSummary> for PaymentSummaryResponse {
    fn from(summary: PaymentSummary) -> Self {
        PaymentSummaryResponse {
            order_id: summary.order_id,
            item_count: summary.item_count,
            items_cents: summary.items_cents,
            shipping_cents: summary.shipping_cents,
            total_before_tax_cents: summary.total_before_tax_cents,
            tax_cents: summary.tax_cents,
            total_cents: summary.total_cents,
        }
    }
}
