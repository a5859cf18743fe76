use super::Point;

// One analyzed stroke
#[derive(Debug, Clone)]
pub struct AnalyzedStroke {
    // The stroke's points, historical ones already filtered out if so configured
    pub points: Vec<Point>,
    // Indexes of pivot points delimiting substrokes
    pub pivot_indexes: Vec<usize>,
    // The substrokes delineated by the identified pivot points
    pub sub_strokes: Vec<SubStroke>,
}

// A single analyzed substroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubStroke {
    // The substroke's direction; quantized into 0..256 from 0..2*PI
    pub direction: u8,
    // The substroke's length, quantized into 0..256 from 0..1
    pub length: u8,
    // The substroke centerpoint's X cell, in 0..16
    pub center_x: u8,
    // The substroke centerpoint's Y cell, in 0..16
    pub center_y: u8,
}
