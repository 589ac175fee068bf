pub mod insight;
pub mod types;

pub use insight::{BusinessInsight, InsightParameters, format_thousands};
pub use types::{PredictionRequest, Season, Weekday};
