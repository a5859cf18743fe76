use super::cubic_curve_2d::CubicCurve2D;

const DIR_TABLE_SIZE: usize = 256;
const LEN_TABLE_SIZE: usize = 129;
// Largest squared distance on the 16x16 center grid is 15² + 15²
const POS_TABLE_SIZE: usize = 451;

/// Precomputed substroke similarity lookups. Build once, share by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTables {
    // By absolute quantized direction difference, 0..256
    pub direction: Vec<f64>,
    // By length ratio scaled to 0..=128
    pub length: Vec<f64>,
    // By squared center distance on the grid
    pub position: Vec<f64>,
}

impl ScoreTables {
    pub fn new() -> ScoreTables {
        let dir_curve = CubicCurve2D::new(0.0, 1.0, 0.5, 1.0, 0.25, -2.0, 1.0, 1.0);
        let len_curve = CubicCurve2D::new(0.0, 0.0, 0.25, 1.0, 0.75, 1.0, 1.0, 1.0);
        ScoreTables {
            direction: dir_curve.build_score_table(DIR_TABLE_SIZE),
            length: len_curve.build_score_table(LEN_TABLE_SIZE),
            position: (0..POS_TABLE_SIZE).map(|i| 1.0 - (i as f64).sqrt() / 22.0).collect(),
        }
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        ScoreTables::new()
    }
}
