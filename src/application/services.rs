pub mod listings;

pub mod publisher;

pub mod uploader;
