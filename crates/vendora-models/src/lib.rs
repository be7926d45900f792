//! # Vendora Models
//!
//! Domain models and request/response DTOs:
//!
//! - [`auth`]: registration and login payloads
//! - [`products`]: the Vendor A product catalogue
//! - [`common`]: response envelopes shared across modules
//!
//! Request DTOs derive `validator::Validate`; the HTTP layer validates them
//! before any business logic runs.

pub mod auth;
pub mod common;
pub mod products;

pub use auth::{LoginRequest, LoginResponse, RegisterAdminRequest, RegisterRequest, RegisteredUser};
pub use common::{ErrorResponse, StatusResponse};
pub use products::{CreateProductDto, DeleteProductResponse, Product, StockStatus, UpdateProductDto};
pub use vendora_auth::UserRole;
