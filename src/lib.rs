pub mod application;

pub mod client;

pub mod config;

mod constants;

pub mod error;

pub mod scrape;

pub mod session;

pub mod transport;

pub mod utils;
