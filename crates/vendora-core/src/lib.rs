//! # Vendora Core
//!
//! Core types shared by every Vendora crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] type
//! - [`password`]: salted password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use vendora_core::errors::AppError;
//! use vendora_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Product not found"));
//!
//! let hash = hash_password("secret1")?;
//! assert!(verify_password("secret1", &hash)?);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
