pub mod auth;

pub mod interface;
