pub mod address;
pub mod fetch;
pub mod logging;
