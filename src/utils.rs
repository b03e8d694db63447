pub mod logger;

pub mod refresh;
