//! Random-process models behind the synthetic telemetry.
//!
//! Pressures and brake temperatures follow a mean-reverting
//! Ornstein-Uhlenbeck walk; the slow-moving fields (engine
//! temperature, wear, slip) ride a sine wave with uniform jitter.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Mean-reverting random walk:
/// `next = prev + theta * (mu - prev) + sigma * N(0, 1)`.
#[derive(Debug, Clone)]
pub struct OrnsteinUhlenbeck {
    value: f64,
    mu: f64,
    theta: f64,
    sigma: f64,
    noise: Normal<f64>,
}

impl OrnsteinUhlenbeck {
    pub fn new(initial: f64, mu: f64, theta: f64, sigma: f64) -> Self {
        Self {
            value: initial,
            mu,
            theta,
            sigma,
            noise: Normal::new(0.0, 1.0).expect("valid distribution"),
        }
    }

    /// Advance one step and return the new value.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let gauss = self.noise.sample(rng);
        self.value += self.theta * (self.mu - self.value) + self.sigma * gauss;
        self.value
    }
}

/// `base + amplitude * sin(rate * t) + U(-jitter, jitter)`.
#[derive(Debug, Clone, Copy)]
pub struct SineWave {
    pub base: f64,
    pub amplitude: f64,
    pub rate: f64,
    pub jitter: f64,
}

impl SineWave {
    /// Sample the wave at tick `t`.
    pub fn sample<R: Rng>(&self, t: u64, rng: &mut R) -> f64 {
        let noise = rng.random_range(-self.jitter..=self.jitter);
        self.base + self.amplitude * (self.rate * t as f64).sin() + noise
    }
}
