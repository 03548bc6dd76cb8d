use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{ParamError, Result};

/// Inclusive domain of one scalar parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub is_integral: bool,
    pub min: f32,
    pub max: f32,
}

impl Domain {
    pub fn new(is_integral: bool, min: f32, max: f32) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(ParamError::InvalidDomain { min, max });
        }
        Ok(Self { is_integral, min, max })
    }

    pub const fn continuous(min: f32, max: f32) -> Self {
        Self { is_integral: false, min, max }
    }

    pub const fn integral(min: f32, max: f32) -> Self {
        Self { is_integral: true, min, max }
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /*
     * rounds integral values; the clamp keeps rounding of a value near a
     * non-integer bound from leaving the domain
     */
    fn finish(&self, value: f32) -> f32 {
        if self.is_integral {
            value.round().clamp(self.min, self.max)
        } else {
            value
        }
    }

    // nearest in-domain value, midpoint for NaN
    fn nearest(&self, value: f32) -> f32 {
        if value.is_nan() {
            (self.min + self.max) / 2.0
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianDraw {
    pub value: f32,
    pub attempts: u32, // normal samples consumed
    // no draw landed in the domain, the mean was clamped instead
    pub fell_back: bool,
}

// one parameter slot: a domain plus its own private random stream
#[derive(Debug, Clone)]
pub struct BoundedParameter {
    domain: Domain,
    rng: StdRng,
}

impl BoundedParameter {
    // const table entries skip Domain::new, so the bounds are checked again here
    pub fn new(domain: Domain, seed: u64) -> Result<Self> {
        let domain = Domain::new(domain.is_integral, domain.min, domain.max)?;
        Ok(Self {
            domain,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    // maps u in [0, 1] linearly onto the domain
    pub fn generate_uniform(&self, u: f32) -> f32 {
        let value = u * self.domain.width() + self.domain.min;
        self.domain.finish(value)
    }

    /*
     * Draws N(mean, ((max - min) / 2 * variance_scale)^2) and redraws until the
     * value lands inside [min, max]. After `max_attempts` misses the mean is
     * clamped to the nearest bound and the draw is flagged as a fallback.
     */
    pub fn generate_gaussian(&mut self, mean: f32, variance_scale: f32, max_attempts: u32) -> GaussianDraw {
        let spread = self.domain.width() / 2.0 * variance_scale;

        // a degenerate spread would redraw the same value forever
        if spread == 0.0 || !spread.is_finite() {
            let fell_back = !self.domain.contains(mean);
            return GaussianDraw {
                value: self.domain.finish(self.domain.nearest(mean)),
                attempts: 0,
                fell_back,
            };
        }

        for attempt in 1..=max_attempts {
            let z: f32 = self.rng.sample(StandardNormal);
            let value = z * spread + mean;
            if self.domain.contains(value) {
                return GaussianDraw {
                    value: self.domain.finish(value),
                    attempts: attempt,
                    fell_back: false,
                };
            }
        }

        GaussianDraw {
            value: self.domain.finish(self.domain.nearest(mean)),
            attempts: max_attempts,
            fell_back: true,
        }
    }
}
