//! Application service and ports for user management.

#![forbid(unsafe_code)]

mod user_service;

pub use user_service::{StoreBackedUserService, UserService, UserStore};
