use crate::market::comps::CompResult;

pub const DEFAULT_DURATIONS: [i64; 4] = [7, 14, 30, 100];

/// Suggested rent for one rental length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub duration: i64,
    pub per_day_price: i64,
    pub total_price: i64,
}

impl PriceTier {
    /// Zero prices mean there were no comps to price from.
    pub fn is_available(&self) -> bool {
        self.per_day_price > 0
    }
}

/// Blend weights and the discount curve used to turn comps into prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Weight of the median in the base rate, in tenths. The p25 gets the rest.
    pub median_weight_tenths: i64,
    pub start_duration: i64,
    pub end_duration: i64,
    pub start_discount: f64,
    pub end_discount: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            median_weight_tenths: 7,
            start_duration: 7,
            end_duration: 100,
            start_discount: 0.03,
            end_discount: 0.05,
        }
    }
}

impl PricingConfig {
    /// 70% median, 30% p25, rounded half up. Falls back to whichever is non-zero.
    pub fn base_rate(&self, comps: &CompResult) -> i64 {
        match (comps.median, comps.p25) {
            (0, 0) => 0,
            (m, 0) => m,
            (0, p) => p,
            (m, p) => {
                let w = self.median_weight_tenths;
                // integer maths keeps x.5 from drifting under float error
                (w * m + (10 - w) * p + 5).div_euclid(10)
            }
        }
    }

    /// Discount fraction for `duration`, linear between the two endpoints and flat outside.
    pub fn discount(&self, duration: i64) -> f64 {
        let span = (self.end_duration - self.start_duration) as f64;
        let t = ((duration - self.start_duration) as f64 / span).clamp(0.0, 1.0);
        self.start_discount + (self.end_discount - self.start_discount) * t
    }

    pub fn tier(&self, base_rate: i64, duration: i64) -> PriceTier {
        if base_rate <= 0 {
            return PriceTier {
                duration,
                per_day_price: 0,
                total_price: 0,
            };
        }
        let per_day_price = (base_rate as f64 * (1.0 - self.discount(duration))).round() as i64;
        PriceTier {
            duration,
            per_day_price,
            total_price: per_day_price * duration,
        }
    }

    pub fn price_table(&self, comps: &CompResult, durations: &[i64]) -> Vec<PriceTier> {
        let base_rate = self.base_rate(comps);
        durations.iter().map(|d| self.tier(base_rate, *d)).collect()
    }
}

/// Price table for `comps` with the default pricing curve.
pub fn build_price_table(comps: &CompResult, durations: &[i64]) -> Vec<PriceTier> {
    PricingConfig::default().price_table(comps, durations)
}
