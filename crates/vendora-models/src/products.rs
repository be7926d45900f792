//! Vendor A product catalogue.
//!
//! Field names follow the `vendor_a_products` table and the public JSON
//! contract: `kd_produk` (product code, primary key), `nm_brg` (item name),
//! `hrg` (price, kept as text), `ket_stok` (stock status).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Stock status of a product, stored in the `stock_status` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "stock_status", rename_all = "lowercase")]
pub enum StockStatus {
    /// In stock
    Ada,
    /// Sold out
    Habis,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ada => "ada",
            StockStatus::Habis => "habis",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("ket_stok must be either 'ada' or 'habis'")]
pub struct InvalidStockStatus;

impl FromStr for StockStatus {
    type Err = InvalidStockStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ada" => Ok(StockStatus::Ada),
            "habis" => Ok(StockStatus::Habis),
            _ => Err(InvalidStockStatus),
        }
    }
}

fn validate_stock_status(value: &str) -> Result<(), ValidationError> {
    value.parse::<StockStatus>().map(|_| ()).map_err(|e| {
        ValidationError::new("stock_status").with_message(Cow::Owned(e.to_string()))
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub kd_produk: String,
    pub nm_brg: String,
    pub hrg: String,
    pub ket_stok: StockStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "kd_produk is required"))]
    pub kd_produk: String,
    #[validate(length(min = 1, message = "nm_brg is required"))]
    pub nm_brg: String,
    #[validate(length(min = 1, message = "hrg is required"))]
    pub hrg: String,
    #[validate(
        length(min = 1, message = "ket_stok is required"),
        custom(function = "validate_stock_status")
    )]
    pub ket_stok: String,
}

/// Replacement values for an existing product. The key comes from the path.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, message = "nm_brg is required"))]
    pub nm_brg: String,
    #[validate(length(min = 1, message = "hrg is required"))]
    pub hrg: String,
    #[validate(
        length(min = 1, message = "ket_stok is required"),
        custom(function = "validate_stock_status")
    )]
    pub ket_stok: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteProductResponse {
    pub message: String,
    #[serde(rename = "deletedProduct")]
    pub deleted_product: Product,
}
