use crate::domain::errors::EncodingError;
use crate::domain::forecast::{PredictionRequest, Season, Weekday};
use std::fmt;

/// Ordered list of feature names.
/// This order MUST match exactly with the order used when the model was trained.
/// Any change here is a breaking change for persisted models.
///
/// Idul Adha has no indicator column: it is the reference category and is
/// encoded as all three season indicators set to 0.
pub const FEATURE_NAMES: [&str; 6] = [
    "Harga_Per_Kg",
    "Is_Holiday_Season",
    "DayOfWeek",
    "Nama_Season_Lebaran",
    "Nama_Season_Nataru",
    "Nama_Season_Normal",
];

/// One model input row, values stored in `FEATURE_NAMES` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; 6],
}

impl FeatureVector {
    pub fn names(&self) -> &'static [&'static str] {
        &FEATURE_NAMES
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a single feature by column name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// (name, value) pairs in model order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names().iter().copied().zip(self.values.iter().copied())
    }

    /// Row vector for smartcore inference
    pub fn to_row(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Checks a column list (e.g. from a model artifact) against `FEATURE_NAMES`.
pub fn ensure_schema<S: AsRef<str>>(columns: &[S]) -> Result<(), EncodingError> {
    let matches = columns.len() == FEATURE_NAMES.len()
        && columns
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(c, n)| c.as_ref() == *n);

    if matches {
        Ok(())
    } else {
        Err(EncodingError::SchemaMismatch {
            expected: FEATURE_NAMES.join(", "),
            actual: columns
                .iter()
                .map(|c| c.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Encodes form selections into the fixed feature row.
pub fn encode(price_per_kg: u32, day_of_week: Weekday, season: Season) -> FeatureVector {
    debug_assert!(price_per_kg > 0, "price must be positive");

    let mut lebaran = 0.0;
    let mut nataru = 0.0;
    let mut normal = 0.0;
    match season {
        Season::Lebaran => lebaran = 1.0,
        Season::Nataru => nataru = 1.0,
        Season::Normal => normal = 1.0,
        // reference category
        Season::IdulAdha => {}
    }

    FeatureVector {
        values: [
            price_per_kg as f64,
            if season.is_holiday() { 1.0 } else { 0.0 },
            day_of_week.index() as f64,
            lebaran,
            nataru,
            normal,
        ],
    }
}

pub fn encode_request(request: &PredictionRequest) -> FeatureVector {
    encode(request.price_per_kg, request.day_of_week, request.season)
}
