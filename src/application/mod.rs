pub mod forecast_service;
pub mod ml;
pub mod session;
