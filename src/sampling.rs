// src/sampling.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal, Poisson};

/// Lead times below this are invalid; every draw is floored here.
const MIN_LEAD_TIME_DAYS: u32 = 1;

/// Random draws for a single simulation run.
///
/// Owns the run's seeded generator, so demand and lead-time draws
/// interleave in one fixed, replayable sequence: one demand draw per
/// day, one lead-time draw per placed order. Two samplers built from
/// the same parameters and seed produce identical sequences, which is
/// what makes whole runs reproducible and safe to evaluate in parallel.
pub struct Sampler {
    rng: StdRng,
    demand: Poisson<f64>,
    lead_time: LogNormal<f64>,
}

impl Sampler {
    /// Builds a sampler for the given demand and lead-time parameters.
    ///
    /// The lead-time distribution is parameterized so that its *own*
    /// mean equals `leadtime_mean` and its coefficient of variation
    /// equals `leadtime_cv`:
    ///
    /// ```text
    /// scale^2  = ln(1 + cv^2)
    /// location = ln(mean) - scale^2 / 2
    /// ```
    ///
    /// A CV of zero is valid and degenerates to a constant lead time.
    /// Callers are expected to have validated the parameters already
    /// (positive means, non-negative CV).
    pub fn new(demand_mean_per_day: f64, leadtime_mean: f64, leadtime_cv: f64, seed: u64) -> Self {
        let scale_sq = (1.0 + leadtime_cv * leadtime_cv).ln();
        let scale = scale_sq.sqrt();
        let location = leadtime_mean.ln() - 0.5 * scale_sq;

        let demand =
            Poisson::new(demand_mean_per_day).expect("invalid demand distribution parameters");
        let lead_time =
            LogNormal::new(location, scale).expect("invalid lead-time distribution parameters");

        Self {
            rng: StdRng::seed_from_u64(seed),
            demand,
            lead_time,
        }
    }

    /// One day's demand: a Poisson draw with the configured mean.
    pub fn sample_demand(&mut self) -> u32 {
        let draw: f64 = self.demand.sample(&mut self.rng);
        draw as u32
    }

    /// One replenishment delay in whole days: a log-normal draw rounded
    /// to the nearest integer and floored at one day.
    pub fn sample_lead_time(&mut self) -> u32 {
        let draw: f64 = self.lead_time.sample(&mut self.rng);
        let days = draw.round();
        if days < MIN_LEAD_TIME_DAYS as f64 {
            MIN_LEAD_TIME_DAYS
        } else {
            days as u32
        }
    }
}
