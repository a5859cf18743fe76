use tracing::trace;

use super::analyzed_character::{AnalyzedCharacter, Rect};
use super::array_2d::Array2D;
use super::config::MatcherConfig;
use super::cubic_curve_2d::CubicCurve2D;
use super::database::{CharacterEntry, ReferenceDatabase, SubStrokeRef};
use super::entities::SubStroke;
use super::error::Result;
use super::match_collector::MatchCollector;
use super::score_tables::ScoreTables;
use super::{Match, Stroke};

pub const MAX_CHARACTER_STROKE_COUNT: usize = 48;
pub const MAX_CHARACTER_SUB_STROKE_COUNT: usize = 64;

// An average substroke length, out of 1
const AVG_SUBSTROKE_LENGTH: f64 = 0.33;
// Penalty multiplier for skipping a substroke on either side
const SKIP_PENALTY_MULTIPLIER: f64 = 1.75;
// Max bonus if the character has the correct number of strokes
const CORRECT_NUM_STROKES_BONUS: f64 = 0.1;
// Characters with this many strokes or more get no bonus
const CORRECT_NUM_STROKES_CAP: usize = 10;

/// Inclusive range of admitted stroke or substroke counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeWindow {
    pub min: usize,
    pub max: usize,
}

impl SizeWindow {
    fn around(count: usize, half_width: usize, upper: usize) -> SizeWindow {
        SizeWindow {
            min: usize::max(count.saturating_sub(half_width), 1),
            max: usize::min(count + half_width, upper),
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }

    pub fn width(&self) -> usize {
        self.max.saturating_sub(self.min)
    }

    /// Half the clamped width; bounds how far the alignment may drift off the diagonal.
    pub fn half_width(&self) -> usize {
        self.width() / 2
    }
}

fn curve_half_width(curve: &CubicCurve2D, looseness: f64, upper: usize) -> usize {
    match curve.get_y_for_x(looseness) {
        Some(y) if y > 0.0 => usize::min(y.round() as usize, upper),
        _ => 0,
    }
}

/// Stroke counts admitted around `count` at the given looseness.
pub fn stroke_count_window(count: usize, looseness: f64) -> SizeWindow {
    let half_width = if looseness <= 0.0 {
        0
    } else if looseness >= 1.0 {
        MAX_CHARACTER_STROKE_COUNT
    } else {
        let ctrl1_y = count as f64 * 0.4;
        let ctrl2_y = count as f64;
        let curve = CubicCurve2D::new(0.0, 0.0, 0.35, ctrl1_y, 0.6, ctrl2_y, 1.0, MAX_CHARACTER_STROKE_COUNT as f64);
        curve_half_width(&curve, looseness, MAX_CHARACTER_STROKE_COUNT)
    };
    SizeWindow::around(count, half_width, MAX_CHARACTER_STROKE_COUNT)
}

/// Substroke counts admitted around `count`; the curve scales with the count itself.
pub fn sub_stroke_count_window(count: usize, looseness: f64) -> SizeWindow {
    let half_width = if looseness <= 0.0 {
        0
    } else if looseness >= 1.0 {
        MAX_CHARACTER_SUB_STROKE_COUNT
    } else {
        let y0 = count as f64 * 0.25;
        let ctrl1_y = 1.5 * y0;
        let ctrl2_y = 1.5 * ctrl1_y;
        let curve = CubicCurve2D::new(0.0, y0, 0.4, ctrl1_y, 0.75, ctrl2_y, 1.0, MAX_CHARACTER_SUB_STROKE_COUNT as f64);
        curve_half_width(&curve, looseness, MAX_CHARACTER_SUB_STROKE_COUNT)
    };
    SizeWindow::around(count, half_width, MAX_CHARACTER_SUB_STROKE_COUNT)
}

/// Ranks database characters against input strokes.
///
/// Borrows the database and score tables; any number of matchers, on any
/// number of threads, can share them.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    db: &'a ReferenceDatabase,
    tables: &'a ScoreTables,
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    pub fn new(db: &'a ReferenceDatabase, tables: &'a ScoreTables, config: MatcherConfig) -> Result<Matcher<'a>> {
        config.validate()?;
        Ok(Matcher { db, tables, config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        let config = MatcherConfig {
            limit,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Looks up strokes, normalizing against the box around all their points.
    pub fn recognize(&self, strokes: &[Stroke]) -> Vec<Match> {
        let analyzed = AnalyzedCharacter::from_strokes(strokes, self.config.use_historical_points);
        self.match_analyzed(&analyzed)
    }

    /// Looks up strokes, normalizing against the given bounding box.
    pub fn lookup(&self, strokes: &[Stroke], bounding_rect: &Rect) -> Vec<Match> {
        let analyzed = AnalyzedCharacter::with_bounding_rect(strokes, bounding_rect, self.config.use_historical_points);
        self.match_analyzed(&analyzed)
    }

    pub fn match_analyzed(&self, analyzed: &AnalyzedCharacter) -> Vec<Match> {
        if self.db.is_empty() || analyzed.stroke_count() == 0 {
            return Vec::new();
        }
        let input = analyzed.get_analyzed_strokes();
        let stroke_count = analyzed.stroke_count();
        let stroke_window = stroke_count_window(stroke_count, self.config.looseness);
        let sub_stroke_window = sub_stroke_count_window(input.len(), self.config.looseness);
        trace!(
            strokes = stroke_count,
            sub_strokes = input.len(),
            ?stroke_window,
            ?sub_stroke_window,
            "matching input"
        );

        let mut res: Vec<Match> = Vec::with_capacity(self.config.limit);
        let mut collector = MatchCollector::new(&mut res, self.config.limit);
        let mut candidates = 0usize;
        for entry in self.db.entries() {
            if !stroke_window.contains(entry.stroke_count) || !sub_stroke_window.contains(entry.sub_stroke_count) {
                continue;
            }
            candidates += 1;
            let mut score = self.compute_score(&input, entry, sub_stroke_window.half_width());
            if stroke_count == entry.stroke_count && stroke_count < CORRECT_NUM_STROKES_CAP {
                let missing = CORRECT_NUM_STROKES_CAP.saturating_sub(stroke_count) as f64;
                score += CORRECT_NUM_STROKES_BONUS * missing / CORRECT_NUM_STROKES_CAP as f64;
            }
            collector.file_match(Match {
                hanzi: entry.hanzi.clone(),
                score,
            });
        }
        trace!(candidates, returned = res.len(), "lookup done");
        res
    }

    /// Best alignment of the input substrokes against the entry's, allowing
    /// skips on either side at a cost proportional to the skipped length.
    fn compute_score(&self, input: &[SubStroke], entry: &CharacterEntry, half_width: usize) -> f64 {
        let char_subs: Vec<SubStrokeRef> = self.db.substrokes(entry).collect();
        let skip_unit = AVG_SUBSTROKE_LENGTH * SKIP_PENALTY_MULTIPLIER;
        let mut score_matrix = Array2D::new(input.len() + 1, char_subs.len() + 1, |x, y| {
            if x == 0 {
                -skip_unit * y as f64
            } else if y == 0 {
                -skip_unit * x as f64
            } else {
                f64::NEG_INFINITY
            }
        });
        for (x, sub) in input.iter().enumerate() {
            for (y, char_sub) in char_subs.iter().enumerate() {
                let mut score = f64::NEG_INFINITY;
                if x.abs_diff(y) <= half_width {
                    let skip_score = f64::max(
                        score_matrix[(x, y + 1)] - (sub.length as f64 / 256.0 * SKIP_PENALTY_MULTIPLIER),
                        score_matrix[(x + 1, y)] - (char_sub.length() as f64 / 256.0 * SKIP_PENALTY_MULTIPLIER),
                    );
                    let match_score = self.compute_sub_stroke_score(sub, char_sub);
                    score = f64::max(skip_score, score_matrix[(x, y)] + match_score);
                }
                score_matrix[(x + 1, y + 1)] = score;
            }
        }
        score_matrix[(input.len(), char_subs.len())]
    }

    fn compute_sub_stroke_score(&self, sub: &SubStroke, char_sub: &SubStrokeRef) -> f64 {
        let dir_score = self.get_dir_score(sub.direction, char_sub.direction(), sub.length);
        let len_score = self.get_len_score(sub.length, char_sub.length());
        let mut score = dir_score * len_score;

        let (char_x, char_y) = char_sub.center();
        let dx = sub.center_x as i32 - char_x as i32;
        let dy = sub.center_y as i32 - char_y as i32;
        let closeness = self.tables.position[(dx * dx + dy * dy) as usize];
        // Distance must hurt a good match and never soften a bad one
        if score > 0.0 {
            score *= closeness;
        } else {
            score /= closeness;
        }
        score
    }

    fn get_dir_score(&self, direction: u8, char_direction: u8, length: u8) -> f64 {
        let diff = (direction as i16 - char_direction as i16).unsigned_abs() as usize;
        let mut score = self.tables.direction[diff];
        // Direction of a short substroke is unreliable: pull it towards 1
        if length < 64 {
            let bonus_max = f64::min(1.0, 1.0 - score);
            score += bonus_max * (1.0 - length as f64 / 64.0);
        }
        score
    }

    fn get_len_score(&self, length: u8, char_length: u8) -> f64 {
        let ratio = if length > char_length {
            (((char_length as u32) << 7) as f32 / length as f32).round() as usize
        } else if char_length == 0 {
            // Both zero-length
            0
        } else {
            (((length as u32) << 7) as f64 / char_length as f64).round() as usize
        };
        self.tables.length[ratio]
    }
}
