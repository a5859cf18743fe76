/// Real roots of a cubic, in the order the closed-form solution yields them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    values: [f64; 3],
    count: usize,
}

impl Roots {
    fn one(t: f64) -> Roots {
        Roots {
            values: [t, f64::NAN, f64::NAN],
            count: 1,
        }
    }

    fn three(t0: f64, t1: f64, t2: f64) -> Roots {
        Roots {
            values: [t0, t1, t2],
            count: 3,
        }
    }

    /// One or three values; a cubic always has at least one real root.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.count]
    }
}

/// Cubic Bézier curve between (x1, y1) and (x2, y2) with two control points.
///
/// Used as a monotone-in-x shaping function: [`CubicCurve2D::get_first_solution_for_x`]
/// finds the parameter for a given x, and [`CubicCurve2D::get_y_on_curve`] turns it into a height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve2D {
    pub x1: f64,
    pub y1: f64,
    pub ctrlx1: f64,
    pub ctrly1: f64,
    pub ctrlx2: f64,
    pub ctrly2: f64,
    pub x2: f64,
    pub y2: f64,
}

// Roots this close outside [0, 1] are float noise and get clamped back in.
const ROOT_TOLERANCE: f64 = 0.00000001;

impl CubicCurve2D {
    #[allow(clippy::too_many_arguments)]
    pub fn new(x1: f64, y1: f64, ctrlx1: f64, ctrly1: f64, ctrlx2: f64, ctrly2: f64, x2: f64, y2: f64) -> CubicCurve2D {
        CubicCurve2D {
            x1,
            y1,
            ctrlx1,
            ctrly1,
            ctrlx2,
            ctrly2,
            x2,
            y2,
        }
    }

    fn get_cubic_ax(&self) -> f64 {
        self.x2 - self.x1 - self.get_cubic_bx() - self.get_cubic_cx()
    }
    fn get_cubic_ay(&self) -> f64 {
        self.y2 - self.y1 - self.get_cubic_by() - self.get_cubic_cy()
    }
    fn get_cubic_bx(&self) -> f64 {
        3.0 * (self.ctrlx2 - self.ctrlx1) - self.get_cubic_cx()
    }
    fn get_cubic_by(&self) -> f64 {
        3.0 * (self.ctrly2 - self.ctrly1) - self.get_cubic_cy()
    }
    fn get_cubic_cx(&self) -> f64 {
        3.0 * (self.ctrlx1 - self.x1)
    }
    fn get_cubic_cy(&self) -> f64 {
        3.0 * (self.ctrly1 - self.y1)
    }

    /// Solves x(t) = x for t through the depressed cubic.
    /// Roots may stray slightly outside [0, 1] due to rounding.
    pub fn solve_for_x(&self, x: f64) -> Roots {
        let a = self.get_cubic_ax();
        let b = self.get_cubic_bx();
        let c = self.get_cubic_cx();
        let d = self.x1 - x;
        let f = ((3.0 * c / a) - (b * b / (a * a))) / 3.0;
        let g = ((2.0 * b * b * b / (a * a * a)) - (9.0 * b * c / (a * a)) + (27.0 * d / a)) / 27.0;
        let h = (g * g / 4.0) + (f * f * f / 27.0);
        // Only one real root
        if h > 0.0 {
            let u = -g;
            let s = ((u / 2.0) + h.sqrt()).cbrt();
            let v = -((u / 2.0) - h.sqrt()).cbrt();
            Roots::one((s - v) - (b / (3.0 * a)))
        }
        // All 3 roots are real and equal
        else if f == 0.0 && g == 0.0 && h == 0.0 {
            Roots::one(-(d / a).cbrt())
        }
        // All three roots are real (h <= 0)
        else {
            let i = ((g * g / 4.0) - h).sqrt();
            let j = i.cbrt();
            let k = (-g / (2.0 * i)).acos();
            let l = -j;
            let m = (k / 3.0).cos();
            let n = 3f64.sqrt() * (k / 3.0).sin();
            let p = -(b / (3.0 * a));
            Roots::three(2.0 * j * m + p, l * (m + n) + p, l * (m - n) + p)
        }
    }

    /// First root within tolerance of [0, 1], clamped into [0, 1].
    pub fn get_first_solution_for_x(&self, x: f64) -> Option<f64> {
        self.solve_for_x(x)
            .as_slice()
            .iter()
            .copied()
            .find(|t| *t >= -ROOT_TOLERANCE && *t <= 1.0 + ROOT_TOLERANCE)
            .map(|t| t.clamp(0.0, 1.0))
    }

    pub fn get_y_on_curve(&self, t: f64) -> f64 {
        let ay = self.get_cubic_ay();
        let by = self.get_cubic_by();
        let cy = self.get_cubic_cy();
        let t_squared = t * t;
        let t_cubed = t * t_squared;
        (ay * t_cubed) + (by * t_squared) + (cy * t) + self.y1
    }

    /// Height of the curve at x, if x maps to a parameter in [0, 1].
    pub fn get_y_for_x(&self, x: f64) -> Option<f64> {
        self.get_first_solution_for_x(x).map(|t| self.get_y_on_curve(t))
    }

    /// Samples `num_samples` evenly spaced x values from x1 (inclusive) towards x2.
    /// An x with no solution yields NaN at its slot.
    pub fn build_score_table(&self, num_samples: usize) -> Vec<f64> {
        let x_inc = (self.x2 - self.x1) / num_samples as f64;
        (0..num_samples)
            .map(|i| {
                let x = f64::min(self.x1 + x_inc * i as f64, self.x2);
                self.get_y_for_x(x).unwrap_or(f64::NAN)
            })
            .collect()
    }
}
