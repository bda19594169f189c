//! Complex number algebra for qubit amplitudes
//!
//! Provides the immutable [`Complex`] value type with the field operations
//! the gate algebra is built from, plus named constants for the unit values
//! that appear in gate matrices. Division by a zero-magnitude value follows
//! IEEE-754 and yields NaN components; arithmetic never raises an error.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A complex number with `f64` components
///
/// Every operation returns a new value. Equality is component-wise; tests
/// should compare with an epsilon tolerance because trigonometric
/// constructions introduce rounding.
///
/// # Example
/// ```
/// use qpair_core::Complex;
///
/// let a = Complex::new(1.0, 2.0);
/// let b = Complex::new(3.0, -1.0);
/// assert_eq!(a * b, Complex::new(5.0, 5.0));
/// assert_eq!(a.conj(), Complex::new(1.0, -2.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real component
    pub re: f64,
    /// Imaginary component
    pub im: f64,
}

impl Complex {
    /// 0 + 0i
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// 1 + 0i
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// -1 + 0i
    pub const NEG_ONE: Complex = Complex::new(-1.0, 0.0);
    /// 0 + 1i
    pub const I: Complex = Complex::new(0.0, 1.0);
    /// 0 - 1i
    pub const NEG_I: Complex = Complex::new(0.0, -1.0);

    /// Create a complex number from its components
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit complex number at `angle` radians on the unit circle: e^(i·angle)
    ///
    /// Used to build pure phase factors.
    ///
    /// # Example
    /// ```
    /// use qpair_core::Complex;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let z = Complex::cis(FRAC_PI_2);
    /// assert!((z.norm() - 1.0).abs() < 1e-10);
    /// assert!((z.im - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn cis(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Complex conjugate: negates the imaginary component
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Multiplicative inverse: conjugate over squared magnitude
    ///
    /// Inverting a zero-magnitude value yields NaN components, the same
    /// policy as division.
    #[inline]
    pub fn inv(&self) -> Self {
        let d = self.norm_sqr();
        Self::new(self.re / d, -self.im / d)
    }

    /// Euclidean magnitude sqrt(re² + im²)
    #[inline]
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude re² + im²
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Scale both components by a real factor
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.re * s, self.im * s)
    }

    /// True when both components are finite (no NaN or infinity)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        *self = *self + rhs;
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        self.scale(rhs)
    }
}

impl Div for Complex {
    type Output = Complex;

    // Conjugate multiplication; a zero-magnitude divisor yields NaN
    // components rather than raising.
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        let d = rhs.norm_sqr();
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / d,
            (self.im * rhs.re - self.re * rhs.im) / d,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<Complex64> for Complex {
    #[inline]
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for Complex64 {
    #[inline]
    fn from(z: Complex) -> Self {
        Complex64::new(z.re, z.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}
