pub mod model;
pub mod fetch;
pub mod feed;
