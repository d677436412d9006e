pub mod auth;
pub mod rbac;
pub mod secure_cookies;
