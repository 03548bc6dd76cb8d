use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::bounded::BoundedParameter;
use crate::config::SpaceConfig;
use crate::error::{ParamError, Result};
use crate::estimator::OnlineVariance;
use crate::parameters::{PARAM_COUNT, PARAMETER_DOMAINS, ParamId};
use crate::utils::time_seed;
use crate::vector::ParameterVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Exploring,
    // learning rate has decayed to its floor
    Converged,
}

/// Adaptive sampler over every parameter slot.
///
/// Candidates come from [`generate`](Self::generate) (truncated gaussians around
/// the current means) or [`random_sp`](Self::random_sp) (uniform over each
/// domain). Accepted or rejected candidates are fed back through
/// [`move_means`](Self::move_means), which updates the running variance and
/// pulls the means toward (or pushes them away from) the observation.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    config: SpaceConfig,
    seed: u64,
    parameters: Vec<BoundedParameter>, // one per PARAMETER_DOMAINS entry
    means: ParameterVector,
    variances: ParameterVector,
    estimator: OnlineVariance<PARAM_COUNT>,
    learning_rate: f32,
    rng: StdRng, // uniform source, independent of the per-slot gaussian streams
    fallback_draws: u64,
}

impl ParameterSpace {
    pub fn new(seed: u64) -> Result<Self> {
        Self::build(seed, SpaceConfig::default())
    }

    // seeds from config.rng_seed, or the clock when unset
    pub fn from_config(config: SpaceConfig) -> Result<Self> {
        config.validate()?;
        let seed = match config.rng_seed {
            Some(seed) => seed,
            None => {
                let seed = time_seed();
                info!(seed, "seeding parameter space from the clock");
                seed
            }
        };
        Self::build(seed, config)
    }

    /*
     * one master stream per space; every slot gets a child seed drawn from it
     * and the uniform source is the next child
     */
    fn build(seed: u64, config: SpaceConfig) -> Result<Self> {
        let mut master = StdRng::seed_from_u64(seed);
        let parameters = PARAMETER_DOMAINS
            .iter()
            .map(|&domain| BoundedParameter::new(domain, master.random()))
            .collect::<Result<Vec<_>>>()?;
        let mut rng = StdRng::from_rng(&mut master);

        // variances stay zero until reset_variability is called
        let mut means = ParameterVector::zeros();
        for (i, parameter) in parameters.iter().enumerate() {
            means[i] = parameter.generate_uniform(rng.random::<f32>());
        }

        Ok(Self {
            config,
            seed,
            parameters,
            means,
            variances: ParameterVector::zeros(),
            estimator: OnlineVariance::new(),
            learning_rate: config.learning_maximum,
            rng,
            fallback_draws: 0,
        })
    }

    // deviance scales every variance for this call only
    pub fn generate(&mut self, deviance: f32) -> ParameterVector {
        let mut candidate = ParameterVector::zeros();
        for (i, parameter) in self.parameters.iter_mut().enumerate() {
            let draw = parameter.generate_gaussian(
                self.means[i],
                self.variances[i] * deviance,
                self.config.max_rejection_attempts,
            );
            if draw.fell_back {
                self.fallback_draws += 1;
                warn!(
                    parameter = ParamId::ALL[i].name(),
                    mean = self.means[i],
                    variance = self.variances[i],
                    attempts = draw.attempts,
                    "no in-domain sample, clamped mean to nearest bound"
                );
            }
            candidate[i] = draw.value;
        }
        candidate
    }

    // uniform over every domain, ignores means and variances
    pub fn random_sp(&mut self) -> ParameterVector {
        let mut candidate = ParameterVector::zeros();
        for (i, parameter) in self.parameters.iter().enumerate() {
            candidate[i] = parameter.generate_uniform(self.rng.random::<f32>());
        }
        candidate
    }

    /*
     * Registers feedback for `observed`. The variance estimate is always
     * updated; the means then move by learning_rate * (observed - means),
     * toward the observation when `towards` is set and away otherwise.
     *
     * Returns the z-scores of the observation mapped through
     * max(1, |z|). They are diagnostic only and do not scale the step.
     * Zero variances propagate inf/NaN into them.
     */
    pub fn move_means(&mut self, observed: &ParameterVector, towards: bool) -> ParameterVector {
        self.update_variance(observed);

        let diffs = *observed - self.means;
        let z_scores = diffs
            .divide_element(&self.variances)
            .map(|z| if (-1.0..1.0).contains(&z) { 1.0 } else { z.abs() });

        let step = diffs * self.learning_rate;
        self.means = if towards { self.means + step } else { self.means - step };

        self.learning_rate = (self.learning_rate * self.config.learning_decay).max(self.config.learning_minimum);

        debug!(
            towards,
            learning_rate = self.learning_rate,
            samples = self.estimator.sample_count,
            "moved means"
        );
        z_scores
    }

    pub fn update_variance(&mut self, observed: &ParameterVector) {
        self.estimator.push(observed);

        // too few samples for an unbiased estimate
        if let Some(variances) = self.estimator.sample_variance() {
            self.variances = variances;
        }
    }

    pub fn change_variability(&mut self, modifier: f32) -> Result<()> {
        if !(modifier.is_finite() && modifier >= 0.0) {
            return Err(ParamError::InvalidModifier(modifier));
        }
        self.variances = self.variances * modifier;
        self.learning_rate = (self.learning_rate * modifier)
            .min(self.config.learning_maximum)
            .max(self.config.learning_minimum);
        debug!(modifier, learning_rate = self.learning_rate, "changed variability");
        Ok(())
    }

    /*
     * Back to full exploration. The online estimator keeps its history, so
     * the next observation recomputes variances from everything seen so far.
     */
    pub fn reset_variability(&mut self) {
        self.variances = ParameterVector::from_element(self.config.maximum_variance);
        self.learning_rate = self.config.learning_maximum;
        debug!(variance = self.config.maximum_variance, "reset variability");
    }

    pub fn means(&self) -> &ParameterVector {
        &self.means
    }

    pub fn variances(&self) -> &ParameterVector {
        &self.variances
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn sample_count(&self) -> u32 {
        self.estimator.sample_count
    }

    pub fn estimator(&self) -> &OnlineVariance<PARAM_COUNT> {
        &self.estimator
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    pub fn parameter(&self, id: ParamId) -> &BoundedParameter {
        &self.parameters[id.index()]
    }

    // gaussian draws that exhausted their retries since construction
    pub fn fallback_draws(&self) -> u64 {
        self.fallback_draws
    }

    pub fn regime(&self) -> Regime {
        if self.learning_rate <= self.config.learning_minimum {
            Regime::Converged
        } else {
            Regime::Exploring
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_means_lie_in_their_domains() {
        let space = ParameterSpace::new(0).expect("default domains are valid");
        for id in ParamId::ALL {
            let domain = id.domain();
            let mean = space.means()[id];
            assert!(domain.contains(mean), "{} mean {} out of domain", id.name(), mean);
        }
        assert_eq!(space.means()[ParamId::Depth], space.means()[ParamId::Depth].round());
    }

    #[test]
    fn fresh_space_state() {
        let space = ParameterSpace::new(5).expect("default domains are valid");
        assert_eq!(*space.variances(), ParameterVector::zeros());
        assert_eq!(space.learning_rate(), 0.75);
        assert_eq!(space.sample_count(), 0);
        assert_eq!(space.regime(), Regime::Exploring);
    }

    #[test]
    fn change_variability_clamps_learning_rate() {
        let mut space = ParameterSpace::new(1).expect("default domains are valid");
        space.reset_variability();

        space.change_variability(2.0).expect("valid modifier");
        assert_eq!(space.learning_rate(), 0.75);
        assert!(space.variances().iter().all(|&v| v == 2.0));

        space.change_variability(0.01).expect("valid modifier");
        assert_eq!(space.learning_rate(), 0.05);
        assert!(space.variances().iter().all(|&v| (v - 0.02).abs() < 1e-6));
        assert_eq!(space.regime(), Regime::Converged);
    }

    #[test]
    fn change_variability_rejects_negative_modifier() {
        let mut space = ParameterSpace::new(1).expect("default domains are valid");
        assert!(matches!(space.change_variability(-1.0), Err(ParamError::InvalidModifier(_))));
        assert!(space.change_variability(f32::NAN).is_err());
    }

    #[test]
    fn z_scores_are_at_least_one() {
        let mut space = ParameterSpace::new(3).expect("default domains are valid");
        space.reset_variability();
        let observed = space.random_sp();
        let z = space.move_means(&observed, true);
        assert!(z.iter().all(|&v| v >= 1.0));
    }

    #[test]
    fn zero_variance_z_scores_propagate_nan() {
        let mut space = ParameterSpace::new(3).expect("default domains are valid");
        let means = *space.means();
        let z = space.move_means(&means, true);
        assert!(z.iter().all(|v| v.is_nan()));
        assert_eq!(*space.means(), means);
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = SpaceConfig {
            learning_decay: 1.5,
            ..SpaceConfig::default()
        };
        assert!(ParameterSpace::from_config(config).is_err());

        let config = SpaceConfig {
            rng_seed: Some(77),
            ..SpaceConfig::default()
        };
        let space = ParameterSpace::from_config(config).expect("valid config");
        assert_eq!(space.seed(), 77);
    }
}
