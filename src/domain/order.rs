use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one purchase transaction.
///
/// Serializes in the camelCase shape the storefront pages consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Free-form at the store level; the checkout form is what constrains
    /// it to the known payment methods.
    pub payment_method: String,
    pub delivery_type: DeliveryType,
    /// Present iff `delivery_type` is `Delivery`.
    pub address: Option<String>,
    pub date: DateTime<Utc>,
    pub items: Vec<LineItem>,
}

/// One product entry within an order's basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Decimal, qty: u32) -> Self {
        Self {
            name: name.into(),
            price,
            qty,
        }
    }
}

/// Order lifecycle label as shown on the orders page.
///
/// The creation path only ever produces `Pagado`; the other variants appear
/// on pre-existing orders. Unrecognized wire values deserialize to
/// `Desconocido` so display logic never rejects a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Pagado,
    Pendiente,
    Enviado,
    Cancelado,
    Desconocido,
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "Pagado" => OrderStatus::Pagado,
            "Pendiente" => OrderStatus::Pendiente,
            "Enviado" => OrderStatus::Enviado,
            "Cancelado" => OrderStatus::Cancelado,
            _ => OrderStatus::Desconocido,
        })
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pagado => "Pagado",
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::Enviado => "Enviado",
            OrderStatus::Cancelado => "Cancelado",
            OrderStatus::Desconocido => "Desconocido",
        };
        f.write_str(label)
    }
}

/// Payment methods the checkout form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Yape,
    Transferencia,
    Visa,
    Efectivo,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::Yape => "Yape",
            PaymentMethod::Transferencia => "Transferencia",
            PaymentMethod::Visa => "Visa",
            PaymentMethod::Efectivo => "Efectivo",
        };
        f.write_str(label)
    }
}

/// Whether an order is picked up in person or shipped to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    Recojo,
    Delivery,
}

impl DeliveryType {
    #[allow(dead_code)]
    pub fn is_delivery(self) -> bool {
        matches!(self, DeliveryType::Delivery)
    }
}

impl std::fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DeliveryType::Recojo => "Recojo",
            DeliveryType::Delivery => "Delivery",
        };
        f.write_str(label)
    }
}

/// Payload the checkout form submits.
///
/// Presence checks (non-empty customer name, address filled in for
/// Delivery) happen in the form before submission; the service trusts this
/// payload as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub customer_name: String,
    pub delivery_type: DeliveryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub payment_method: PaymentMethod,
}

impl CheckoutInput {
    /// Checkout for an order picked up in person.
    pub fn pickup(customer_name: impl Into<String>, payment_method: PaymentMethod) -> Self {
        Self {
            customer_name: customer_name.into(),
            delivery_type: DeliveryType::Recojo,
            address: None,
            payment_method,
        }
    }

    /// Checkout for an order shipped to an address.
    pub fn delivery(
        customer_name: impl Into<String>,
        address: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            delivery_type: DeliveryType::Delivery,
            address: Some(address.into()),
            payment_method,
        }
    }
}
