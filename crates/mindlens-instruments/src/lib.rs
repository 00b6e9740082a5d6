//! mindlens-instruments
//!
//! Clinical screener definitions and the per-attempt session engine.
//! Pure state, no I/O. Defines the question bank, the shared answer
//! scale, and the severity bands for each supported screener, plus the
//! session state machine that walks a visitor through one attempt.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use scoring::{ScalePoint, ScreenerItem, SeverityBand};

/// Trait implemented by each self-report screener.
pub trait ScreenerInstrument: Send + Sync {
    /// Unique identifier for this screener (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The ordered question bank.
    fn items(&self) -> &[ScreenerItem];

    /// The answer scale items are rated on. Both registered screeners
    /// use the shared frequency scale.
    fn scale(&self) -> &[ScalePoint] {
        scoring::frequency_scale()
    }

    /// The severity bands, in ascending order, partitioning
    /// `[0, max_total]` without gaps or overlap.
    fn bands(&self) -> &[SeverityBand];

    /// Highest total this screener can produce.
    fn max_total(&self) -> u8 {
        let top = self.scale().iter().map(|p| p.value).max().unwrap_or(0);
        top * self.items().len() as u8
    }

    /// Classify a total into its severity band.
    fn band_for(&self, total: u8) -> Option<&SeverityBand> {
        self.bands().iter().find(|b| b.contains(total))
    }
}

/// Return all registered screeners.
pub fn all_instruments() -> Vec<Box<dyn ScreenerInstrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up a screener by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn ScreenerInstrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
