//! Offline handwritten character lookup.
//!
//! Strokes are decomposed into short directional substrokes, then aligned
//! against every plausible character in a [`ReferenceDatabase`] with a
//! dynamic-programming scorer. Everything here is pure computation: the
//! database and [`ScoreTables`] are built once and shared read-only, and each
//! lookup allocates its own working state.
//!
//! ```no_run
//! use hwr_lookup::{Matcher, MatcherConfig, ReferenceDatabase, ScoreTables, Stroke};
//!
//! let db = ReferenceDatabase::from_json_reader(std::fs::File::open("mmah.json")?)?;
//! let tables = ScoreTables::new();
//! let matcher = Matcher::new(&db, &tables, MatcherConfig::default())?;
//! let strokes = vec![Stroke::from_points(vec![(20.0, 120.0), (120.0, 121.0), (220.0, 120.0)])];
//! for m in matcher.recognize(&strokes) {
//!     println!("{} {:.3}", m.hanzi, m.score);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod analyzed_character;
mod array_2d;
mod config;
mod cubic_curve_2d;
mod database;
mod entities;
mod error;
mod match_collector;
mod matcher;
mod score_tables;

use serde_derive::{Deserialize, Serialize};

pub use analyzed_character::{AnalyzedCharacter, Rect};
pub use array_2d::Array2D;
pub use config::MatcherConfig;
pub use cubic_curve_2d::{CubicCurve2D, Roots};
pub use database::{
    decode_substrokes, encode_substrokes, pack_center, CharacterEntry, ReferenceDatabase, SubStrokeRef,
    SUBSTROKE_BYTES,
};
pub use entities::{AnalyzedStroke, SubStroke};
pub use error::{LookupError, Result};
pub use match_collector::MatchCollector;
pub use matcher::{
    stroke_count_window, sub_stroke_count_window, Matcher, SizeWindow, MAX_CHARACTER_STROKE_COUNT,
    MAX_CHARACTER_SUB_STROKE_COUNT,
};
pub use score_tables::ScoreTables;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// One sample of a stroke as captured by the input surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Point,
    pub timestamp_ms: u64,
    // Interpolated by the input device rather than directly sampled
    pub historical: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
    // Pen lifted; only finished strokes are recognized
    pub finished: bool,
}

impl Stroke {
    /// A finished stroke of directly sampled points.
    pub fn from_points<I>(points: I) -> Stroke
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        Stroke {
            points: points
                .into_iter()
                .map(|(x, y)| StrokePoint {
                    point: Point::new(x, y),
                    timestamp_ms: 0,
                    historical: false,
                })
                .collect(),
            finished: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub hanzi: String,
    pub score: f64,
}
