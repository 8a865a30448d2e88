pub mod auth;

pub use auth::{ErrorDetail, LoginRequest, LoginResponse, Role, UnknownRole};
