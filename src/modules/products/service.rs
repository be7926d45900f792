use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use vendora_core::AppError;
use vendora_db::StoreError;
use vendora_models::{CreateProductDto, Product, StockStatus, UpdateProductDto};

pub struct ProductService;

fn not_found(kd_produk: &str) -> AppError {
    AppError::not_found(anyhow!("Product with kd_produk {} not found", kd_produk))
}

fn parse_stock_status(value: &str) -> Result<StockStatus, AppError> {
    value.parse::<StockStatus>().map_err(AppError::bad_request)
}

impl ProductService {
    #[instrument(skip(db))]
    pub async fn list_products(db: &PgPool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT kd_produk, nm_brg, hrg, ket_stok FROM vendor_a_products ORDER BY kd_produk ASC",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch products")?;

        Ok(products)
    }

    #[instrument(skip(db))]
    pub async fn get_product(db: &PgPool, kd_produk: &str) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            "SELECT kd_produk, nm_brg, hrg, ket_stok FROM vendor_a_products WHERE kd_produk = $1",
        )
        .bind(kd_produk)
        .fetch_optional(db)
        .await
        .context("Failed to fetch product")?
        .ok_or_else(|| not_found(kd_produk))
    }

    #[instrument(skip(db, dto), fields(kd_produk = %dto.kd_produk))]
    pub async fn create_product(db: &PgPool, dto: CreateProductDto) -> Result<Product, AppError> {
        let ket_stok = parse_stock_status(&dto.ket_stok)?;

        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO vendor_a_products (kd_produk, nm_brg, hrg, ket_stok)
            VALUES ($1, $2, $3, $4)
            RETURNING kd_produk, nm_brg, hrg, ket_stok
            "#,
        )
        .bind(&dto.kd_produk)
        .bind(&dto.nm_brg)
        .bind(&dto.hrg)
        .bind(ket_stok)
        .fetch_one(db)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::UniqueViolation { .. } => AppError::conflict(format!(
                "Product with kd_produk {} already exists",
                dto.kd_produk
            )),
            other => AppError::from(other),
        })
    }

    /// Replaces every non-key column of an existing product.
    #[instrument(skip(db, dto))]
    pub async fn update_product(
        db: &PgPool,
        kd_produk: &str,
        dto: UpdateProductDto,
    ) -> Result<Product, AppError> {
        let ket_stok = parse_stock_status(&dto.ket_stok)?;

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE vendor_a_products
            SET nm_brg = $1, hrg = $2, ket_stok = $3
            WHERE kd_produk = $4
            RETURNING kd_produk, nm_brg, hrg, ket_stok
            "#,
        )
        .bind(&dto.nm_brg)
        .bind(&dto.hrg)
        .bind(ket_stok)
        .bind(kd_produk)
        .fetch_optional(db)
        .await
        .context("Failed to update product")?
        .ok_or_else(|| not_found(kd_produk))
    }

    /// Deletes a product and returns the row as it was.
    #[instrument(skip(db))]
    pub async fn delete_product(db: &PgPool, kd_produk: &str) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM vendor_a_products
            WHERE kd_produk = $1
            RETURNING kd_produk, nm_brg, hrg, ket_stok
            "#,
        )
        .bind(kd_produk)
        .fetch_optional(db)
        .await
        .context("Failed to delete product")?
        .ok_or_else(|| not_found(kd_produk))
    }
}
