//! Wire payload shapes.
//!
//! Compound results cross the session boundary as camelCase keys with
//! prices as plain decimal numbers.

use grocer_commerce::cart::CartLine;
use grocer_commerce::catalog::CatalogItem;
use grocer_commerce::checkout::{Receipt, ReceiptLine};
use serde::{Deserialize, Serialize};

/// A ranked catalog item as surfaced to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub icon: String,
    pub purchase_count: u32,
    pub is_custom: bool,
}

impl From<&CatalogItem> for ItemPayload {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.raw(),
            name: item.name.clone(),
            price: item.price.to_decimal(),
            icon: item.icon.clone(),
            purchase_count: item.purchase_count,
            is_custom: item.is_custom,
        }
    }
}

/// A cart line with its running total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLinePayload {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    pub item_id: i32,
}

impl From<&CartLine> for CartLinePayload {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.price.to_decimal(),
            quantity: line.quantity,
            total: line.total().to_decimal(),
            item_id: line.item_id.raw(),
        }
    }
}

/// A minimal line view for undo-stack and queue visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePayload {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&CartLine> for LinePayload {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.price.to_decimal(),
            quantity: line.quantity,
        }
    }
}

/// One processed line on a receipt payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLinePayload {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
}

impl From<&ReceiptLine> for ReceiptLinePayload {
    fn from(line: &ReceiptLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.unit_price.to_decimal(),
            quantity: line.quantity,
            total: line.line_total.to_decimal(),
        }
    }
}

/// The full receipt payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub items: Vec<ReceiptLinePayload>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub grand_total: f64,
    pub total_items: u32,
}

impl From<&Receipt> for ReceiptPayload {
    fn from(receipt: &Receipt) -> Self {
        Self {
            items: receipt.lines.iter().map(ReceiptLinePayload::from).collect(),
            subtotal: receipt.subtotal.to_decimal(),
            tax: receipt.tax.to_decimal(),
            discount: receipt.discount.to_decimal(),
            grand_total: receipt.grand_total.to_decimal(),
            total_items: receipt.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_commerce::ids::ItemId;
    use grocer_commerce::money::{Currency, Money};

    #[test]
    fn test_item_payload_field_names() {
        let mut item = CatalogItem::new(
            ItemId::new(1000),
            "Kale",
            Money::from_decimal(40.0, Currency::INR),
            "\u{1f195}",
        );
        item.purchase_count = 4;
        item.is_custom = true;

        let json = serde_json::to_value(ItemPayload::from(&item)).unwrap();
        assert_eq!(json["id"], 1000);
        assert_eq!(json["purchaseCount"], 4);
        assert_eq!(json["isCustom"], true);
        assert_eq!(json["price"], 40.0);
    }

    #[test]
    fn test_cart_line_payload_includes_total() {
        let line = CartLine::new(
            "Milk (1 Liter)",
            3,
            ItemId::new(0),
            Money::from_decimal(80.0, Currency::INR),
        );
        let json = serde_json::to_value(CartLinePayload::from(&line)).unwrap();
        assert_eq!(json["total"], 240.0);
        assert_eq!(json["itemId"], 0);
    }

    #[test]
    fn test_receipt_payload_field_names() {
        let receipt = Receipt::from_lines(vec![CartLine::new(
            "Milk (1 Liter)",
            2,
            ItemId::new(0),
            Money::from_decimal(80.0, Currency::INR),
        )]);
        let json = serde_json::to_value(ReceiptPayload::from(&receipt)).unwrap();
        assert_eq!(json["totalItems"], 2);
        assert_eq!(json["subtotal"], 160.0);
        assert!(json["grandTotal"].is_number());
    }
}
