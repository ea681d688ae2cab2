pub mod auth;
pub mod dispatch;
pub mod profile;
pub mod push;
pub mod resource;
