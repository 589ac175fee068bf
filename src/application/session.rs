use crate::application::forecast_service::{ForecastOutcome, ForecastService, ModelStatus};
use crate::config::PriceBounds;
use crate::domain::forecast::{PredictionRequest, Season, Weekday};

/// Current widget selections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    pub price_per_kg: u32,
    pub weekday: Weekday,
    pub season: Season,
}

impl FormState {
    pub fn new(bounds: &PriceBounds) -> Self {
        Self {
            price_per_kg: bounds.default,
            weekday: Weekday::Monday,
            season: Season::Normal,
        }
    }
}

/// State behind the forecast window: the form, the service and the last result.
///
/// Every `submit` evaluates the current form from scratch; nothing but the
/// last outcome is carried between presses.
pub struct ForecastSession {
    service: ForecastService,
    bounds: PriceBounds,
    pub form: FormState,
    last_outcome: Option<ForecastOutcome>,
}

impl ForecastSession {
    pub fn new(service: ForecastService, bounds: PriceBounds) -> Self {
        Self {
            form: FormState::new(&bounds),
            service,
            bounds,
            last_outcome: None,
        }
    }

    pub fn bounds(&self) -> &PriceBounds {
        &self.bounds
    }

    /// Snapshot of the form, with the price clamped to the widget bounds
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            price_per_kg: self.bounds.clamp(self.form.price_per_kg),
            day_of_week: self.form.weekday,
            season: self.form.season,
        }
    }

    pub fn submit(&mut self) -> &ForecastOutcome {
        self.form.price_per_kg = self.bounds.clamp(self.form.price_per_kg);
        let outcome = self.service.forecast(&self.request());
        self.last_outcome.insert(outcome)
    }

    /// `None` until the forecast button has been pressed once
    pub fn last_outcome(&self) -> Option<&ForecastOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn model_status(&self) -> ModelStatus {
        self.service.model_status()
    }

    pub fn service(&self) -> &ForecastService {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::model_handle::ModelHandle;
    use crate::domain::forecast::InsightParameters;
    use crate::infrastructure::mock::MockDemandPredictor;

    fn session(mock: MockDemandPredictor) -> ForecastSession {
        let service = ForecastService::new(
            ModelHandle::preloaded(Box::new(mock)),
            InsightParameters::default(),
        );
        ForecastSession::new(service, PriceBounds::default())
    }

    #[test]
    fn test_initial_state_shows_no_outcome() {
        let session = session(MockDemandPredictor::constant(50.0));
        assert!(session.last_outcome().is_none());
        assert_eq!(session.form.price_per_kg, 45_000);
        assert_eq!(session.form.weekday, Weekday::Monday);
        assert_eq!(session.form.season, Season::Normal);
    }

    #[test]
    fn test_submit_uses_current_widget_values() {
        let mut session = session(MockDemandPredictor::constant(50.0));
        session.form.weekday = Weekday::Saturday;
        session.form.season = Season::Lebaran;
        session.form.price_per_kg = 60_000;

        let outcome = session.submit().clone();
        match outcome {
            ForecastOutcome::Success { request, features, .. } => {
                assert_eq!(request.day_of_week, Weekday::Saturday);
                assert_eq!(features.get("DayOfWeek"), Some(5.0));
                assert_eq!(features.get("Nama_Season_Lebaran"), Some(1.0));
                assert_eq!(features.get("Harga_Per_Kg"), Some(60_000.0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.last_outcome().is_some());
    }

    #[test]
    fn test_out_of_range_price_is_clamped() {
        let mut session = session(MockDemandPredictor::constant(50.0));
        session.form.price_per_kg = 500_000;

        assert_eq!(session.request().price_per_kg, 150_000);
        session.submit();
        assert_eq!(session.form.price_per_kg, 150_000);
    }

    #[test]
    fn test_each_failed_submit_is_reported() {
        let mut session = session(MockDemandPredictor::constant(f64::INFINITY));
        assert!(!session.submit().is_success());

        session.form.season = Season::Nataru;
        match session.submit() {
            ForecastOutcome::Failed { features, .. } => {
                assert_eq!(features.get("Nama_Season_Nataru"), Some(1.0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
