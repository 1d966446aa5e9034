//! HTTP 接口（axum）

pub mod error;
pub mod routes;

pub use error::{ApiError, ValidJson};
pub use routes::{router, AppContext};
