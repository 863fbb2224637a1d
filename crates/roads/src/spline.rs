use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Cubic `a + b*ds + c*ds^2 + d*ds^3` with `ds = s - s0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Poly3 {
    pub s0: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Poly3 {
    pub fn new(s0: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { s0, a, b, c, d }
    }

    pub fn get(&self, s: f64) -> f64 {
        let ds = s - self.s0;
        self.a + ds * (self.b + ds * (self.c + ds * self.d))
    }

    pub fn get_grad(&self, s: f64) -> f64 {
        let ds = s - self.s0;
        self.b + ds * (2.0 * self.c + ds * 3.0 * self.d)
    }
}

/// Piecewise cubic keyed by start station.
///
/// Each piece covers `[s0, next s0)`; stations before the first piece use the
/// first piece, and an empty spline evaluates to zero everywhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CubicSpline {
    s0_to_poly: BTreeMap<OrderedFloat<f64>, Poly3>,
}

impl CubicSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spline that evaluates to `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self::from_polys([Poly3::new(0.0, value, 0.0, 0.0, 0.0)])
    }

    pub fn from_polys(polys: impl IntoIterator<Item = Poly3>) -> Self {
        Self {
            s0_to_poly: polys.into_iter().map(|p| (OrderedFloat(p.s0), p)).collect(),
        }
    }

    /// Insert a piece, replacing any piece with the same start station.
    pub fn add_poly(&mut self, poly: Poly3) {
        self.s0_to_poly.insert(OrderedFloat(poly.s0), poly);
    }

    pub fn is_empty(&self) -> bool {
        self.s0_to_poly.is_empty()
    }

    pub fn len(&self) -> usize {
        self.s0_to_poly.len()
    }

    pub fn polys(&self) -> impl Iterator<Item = &Poly3> {
        self.s0_to_poly.values()
    }

    fn poly_at(&self, s: f64) -> Option<&Poly3> {
        self.s0_to_poly
            .range(..=OrderedFloat(s))
            .next_back()
            .or_else(|| self.s0_to_poly.iter().next())
            .map(|(_, poly)| poly)
    }

    pub fn get(&self, s: f64) -> f64 {
        self.poly_at(s).map_or(0.0, |p| p.get(s))
    }

    pub fn get_grad(&self, s: f64) -> f64 {
        self.poly_at(s).map_or(0.0, |p| p.get_grad(s))
    }
}
