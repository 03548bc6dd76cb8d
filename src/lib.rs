//! Adaptive parameter sampling for procedural world generation.
//!
//! A [`ParameterSpace`] proposes scene parameter vectors (tree shape, colour,
//! size) from truncated gaussians around running means, and adapts those means
//! and variances from accept/reject feedback.

pub mod bounded;
pub mod config;
pub mod error;
pub mod estimator;
pub mod parameters;
pub mod space;
pub mod style;
pub mod utils;
pub mod vector;

pub use bounded::{BoundedParameter, Domain, GaussianDraw};
pub use config::SpaceConfig;
pub use error::{ParamError, Result};
pub use estimator::OnlineVariance;
pub use parameters::{PARAM_COUNT, PARAMETER_DOMAINS, ParamId};
pub use space::{ParameterSpace, Regime};
pub use style::TreeStyle;
pub use vector::{ParamArray, ParameterVector};
