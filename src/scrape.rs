pub mod fields;

pub mod scraper;
