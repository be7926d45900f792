//! # Vendora CLI
//!
//! Administrative tasks that have no HTTP surface:
//!
//! - [`admin`]: creating administrator accounts out of band
//! - [`seeder`]: filling and clearing the product catalogue for development
//!
//! ## Usage
//!
//! ```ignore
//! use vendora_cli::seeder::seed_products;
//!
//! let inserted = seed_products(&pool, 50).await?;
//! ```

pub mod admin;
pub mod seeder;
