/// 1 / phi
const INV_PHI: f64 = 0.618_033_988_749_894_9;
/// 1 / phi^2
const INV_PHI2: f64 = 0.381_966_011_250_105_1;

/// Minimize a unimodal `f` over `[a, b]` to within `tol` of the minimizer.
///
/// The bracket shrinks by `1/phi` per step and one probe is reused each
/// iteration, so `f` is called `n + 1` times where
/// `n = ceil(ln(tol / (b - a)) / ln(1/phi))`. A bracket already no wider than
/// `tol` returns its midpoint without evaluating `f`.
pub fn golden_section_search<F>(mut f: F, mut a: f64, mut b: f64, tol: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut h = b - a;
    if h <= tol {
        return 0.5 * (a + b);
    }

    // A zero or NaN tolerance would make the step count infinite
    let tol = if tol > 0.0 { tol } else { f64::EPSILON * h };

    let n = ((tol / h).ln() / INV_PHI.ln()).ceil() as usize;

    let mut c = a + INV_PHI2 * h;
    let mut d = a + INV_PHI * h;
    let mut yc = f(c);
    let mut yd = f(d);

    for _ in 0..n.saturating_sub(1) {
        h *= INV_PHI;
        if yc < yd {
            b = d;
            d = c;
            yd = yc;
            c = a + INV_PHI2 * h;
            yc = f(c);
        } else {
            a = c;
            c = d;
            yc = yd;
            d = a + INV_PHI * h;
            yd = f(d);
        }
    }

    if yc < yd {
        0.5 * (a + d)
    } else {
        0.5 * (c + b)
    }
}
