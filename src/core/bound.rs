use crate::{core::utils::SampleFloat, error::ConfigError, DVector, Float};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::Deref};

/// A closed interval `[lower, upper]` which limits one dimension of the search space.
///
/// A [`Bound`] is serialized as a `(lower, upper)` pair. Both ends must be finite. The degenerate
/// case `lower == upper` is allowed and pins the dimension to a single value.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(into = "(Float, Float)", try_from = "(Float, Float)")]
pub struct Bound {
    lower: Float,
    upper: Float,
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
impl TryFrom<(Float, Float)> for Bound {
    type Error = ConfigError;

    fn try_from(value: (Float, Float)) -> Result<Self, Self::Error> {
        Self::new(0, value.0, value.1)
    }
}
impl From<Bound> for (Float, Float) {
    fn from(value: Bound) -> Self {
        (value.lower, value.upper)
    }
}
impl Bound {
    /// Create the bound `[lower, upper]`, where `index` is only used to report errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteBound`] if either end is infinite or NaN, or
    /// [`ConfigError::InvertedBound`] if `lower > upper`.
    pub fn new(index: usize, lower: Float, upper: Float) -> Result<Self, ConfigError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ConfigError::NonFiniteBound {
                index,
                lower,
                upper,
            });
        }
        if lower > upper {
            return Err(ConfigError::InvertedBound {
                index,
                lower,
                upper,
            });
        }
        Ok(Self { lower, upper })
    }
    /// Create a bound from a slice which must hold exactly `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedBound`] if the slice does not have two elements, or
    /// [`ConfigError::InvertedBound`] if they are out of order.
    pub fn from_slice(index: usize, values: &[Float]) -> Result<Self, ConfigError> {
        match values {
            [lower, upper] => Self::new(index, *lower, *upper),
            _ => Err(ConfigError::MalformedBound {
                index,
                len: values.len(),
            }),
        }
    }
    /// Returns the lower end of the interval.
    pub const fn lower(&self) -> Float {
        self.lower
    }
    /// Returns the upper end of the interval.
    pub const fn upper(&self) -> Float {
        self.upper
    }
    /// Checks whether the given `value` lies inside the (closed) interval.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Clamp `value` into the interval.
    pub fn clip(&self, value: Float) -> Float {
        value.max(self.lower).min(self.upper)
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        rng.range(self.lower, self.upper)
    }
}

/// An ordered list of [`Bound`]s, one per dimension of the search space.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Validate a list of `[lower, upper]` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] produced by [`Bound::from_slice`].
    pub fn try_from_pairs<I, B>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[Float]>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, pair)| Bound::from_slice(i, pair.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
    /// Returns the inner Vector of bounds.
    pub fn into_inner(self) -> Vec<Bound> {
        self.0
    }
    /// The lower end of every bound, in order.
    pub fn lower_bounds(&self) -> DVector<Float> {
        DVector::from_iterator(self.0.len(), self.0.iter().map(Bound::lower))
    }
    /// The upper end of every bound, in order.
    pub fn upper_bounds(&self) -> DVector<Float> {
        DVector::from_iterator(self.0.len(), self.0.iter().map(Bound::upper))
    }
    /// Checks whether every coordinate of `x` lies within its bound.
    pub fn contains(&self, x: &DVector<Float>) -> bool {
        x.len() == self.0.len() && x.iter().zip(self.0.iter()).all(|(v, b)| b.contains(*v))
    }
    /// Clamp every coordinate of `x` into its bound.
    pub fn clip(&self, x: &DVector<Float>) -> DVector<Float> {
        DVector::from_iterator(
            x.len(),
            x.iter().zip(self.0.iter()).map(|(v, b)| b.clip(*v)),
        )
    }
    /// Draw a point uniformly from the box described by the bounds.
    pub fn sample(&self, rng: &mut Rng) -> DVector<Float> {
        DVector::from_iterator(self.0.len(), self.0.iter().map(|b| b.get_uniform(rng)))
    }
}

impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    fn sample_bounds() -> Bounds {
        Bounds::try_from_pairs([[-1.0, 1.0], [0.0, 5.0], [10.0, 20.0]]).unwrap()
    }

    #[test]
    fn test_bound_contains_and_clip() {
        let b = Bound::new(0, -1.0, 1.0).unwrap();
        assert!(b.contains(0.0));
        assert!(b.contains(1.0));
        assert!(!b.contains(2.0));
        assert_eq!(b.clip(2.0), 1.0);
        assert_eq!(b.clip(-3.0), -1.0);
        assert_eq!(b.clip(0.25), 0.25);
    }

    #[test]
    fn test_bound_rejects_bad_input() {
        assert_eq!(
            Bound::from_slice(2, &[1.0, 2.0, 3.0]),
            Err(ConfigError::MalformedBound { index: 2, len: 3 })
        );
        assert_eq!(
            Bound::from_slice(1, &[5.0, -5.0]),
            Err(ConfigError::InvertedBound {
                index: 1,
                lower: 5.0,
                upper: -5.0
            })
        );
        assert!(Bound::new(0, Float::NAN, 1.0).is_err());
    }

    #[test]
    fn test_bound_rejects_non_finite_ends() {
        assert_eq!(
            Bound::new(3, Float::NEG_INFINITY, Float::INFINITY),
            Err(ConfigError::NonFiniteBound {
                index: 3,
                lower: Float::NEG_INFINITY,
                upper: Float::INFINITY
            })
        );
        assert!(matches!(
            Bound::new(0, 0.0, Float::INFINITY),
            Err(ConfigError::NonFiniteBound { index: 0, .. })
        ));
        assert!(matches!(
            Bound::new(1, Float::NAN, Float::NAN),
            Err(ConfigError::NonFiniteBound { index: 1, .. })
        ));
        assert!(Bounds::try_from_pairs([[-1.0, 1.0], [Float::NEG_INFINITY, 0.0]]).is_err());
    }

    #[test]
    fn test_extreme_finite_bounds_sample_inside() {
        let mut rng = Rng::with_seed(1);
        let bounds = Bounds::try_from_pairs([[-1e308, 1e308], [-Float::MAX, Float::MAX]]).unwrap();
        for _ in 0..100 {
            let x = bounds.sample(&mut rng);
            assert!(x.iter().all(|xi| xi.is_finite()));
            assert!(bounds.contains(&x));
        }
    }

    #[test]
    fn test_degenerate_bound_samples_its_only_value() {
        let mut rng = Rng::with_seed(0);
        let b = Bound::new(0, 3.0, 3.0).unwrap();
        assert_eq!(b.get_uniform(&mut rng), 3.0);
    }

    #[test]
    fn test_bounds_lower_upper_and_sample() {
        let mut rng = Rng::with_seed(0);
        let bounds = sample_bounds();
        assert_eq!(bounds.lower_bounds(), dvector![-1.0, 0.0, 10.0]);
        assert_eq!(bounds.upper_bounds(), dvector![1.0, 5.0, 20.0]);
        for _ in 0..100 {
            assert!(bounds.contains(&bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_bounds_clip() {
        let bounds = sample_bounds();
        let clipped = bounds.clip(&dvector![-4.0, 2.5, 25.0]);
        assert_eq!(clipped, dvector![-1.0, 2.5, 20.0]);
        assert!(bounds.contains(&clipped));
    }

    #[test]
    fn test_bounds_serialize_as_pairs() {
        let bounds = sample_bounds();
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, "[[-1.0,1.0],[0.0,5.0],[10.0,20.0]]");
        let parsed: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bounds);
        assert!(serde_json::from_str::<Bounds>("[[1.0,-1.0]]").is_err());
    }
}
