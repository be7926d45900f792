//! Product catalogue seeding.
//!
//! Generated products use sequential `SEED-NNNN` codes, so re-running the
//! seeder with the same count inserts nothing new.

use std::time::Instant;

use fake::faker::lorem::en::Words;
use fake::{Fake, Faker};
use sqlx::{PgPool, QueryBuilder};

use vendora_models::StockStatus;

const BATCH_SIZE: usize = 500;

/// Seed data for creating a product.
#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub kd_produk: String,
    pub nm_brg: String,
    pub hrg: String,
    pub ket_stok: StockStatus,
}

/// Generates `count` fake products with codes `SEED-0001` onwards.
pub fn generate_products(count: usize) -> Vec<ProductSeed> {
    (1..=count)
        .map(|i| {
            let words: Vec<String> = Words(1..4).fake();
            let price: u32 = (1_000..500_000).fake();
            let in_stock: bool = Faker.fake();

            ProductSeed {
                kd_produk: format!("SEED-{:04}", i),
                nm_brg: words.join(" "),
                hrg: price.to_string(),
                ket_stok: if in_stock {
                    StockStatus::Ada
                } else {
                    StockStatus::Habis
                },
            }
        })
        .collect()
}

/// Inserts `count` fake products, skipping codes that already exist.
/// Returns the number of rows actually inserted.
pub async fn seed_products(db: &PgPool, count: usize) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("📦 Seeding {} products...", count);

    let products = generate_products(count);
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for chunk in products.chunks(BATCH_SIZE) {
        let mut query =
            QueryBuilder::new("INSERT INTO vendor_a_products (kd_produk, nm_brg, hrg, ket_stok) ");
        query.push_values(chunk, |mut row, product| {
            row.push_bind(&product.kd_produk)
                .push_bind(&product.nm_brg)
                .push_bind(&product.hrg)
                .push_bind(product.ket_stok);
        });
        query.push(" ON CONFLICT (kd_produk) DO NOTHING");

        inserted += query.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} products in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Deletes every product. Users are left untouched.
pub async fn clear_products(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing products...");

    let deleted = sqlx::query("DELETE FROM vendor_a_products")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} products in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
