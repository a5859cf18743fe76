use super::entities::*;
use super::*;

const MIN_SEGMENT_LENGTH: f32 = 12.5;
const MAX_LOCAL_LENGTH_RATIO: f32 = 1.1;
const MAX_RUNNING_LENGTH_RATIO: f32 = 1.09;

/// Axis-aligned bounding box of an input gesture, in input coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect { top, bottom, left, right }
    }

    /// Smallest rectangle holding every point; `None` if there are no points.
    pub fn from_points<'p, I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'p Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut res = Rect::new(first.x, first.y, first.x, first.y);
        for pt in points {
            res.left = res.left.min(pt.x);
            res.right = res.right.max(pt.x);
            res.top = res.top.min(pt.y);
            res.bottom = res.bottom.max(pt.y);
        }
        Some(res)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Input gesture decomposed into substrokes, stroke by stroke.
#[derive(Debug, Clone)]
pub struct AnalyzedCharacter {
    pub analyzed_strokes: Vec<AnalyzedStroke>,
    pub sub_stroke_count: usize,
}

impl AnalyzedCharacter {
    /// Analyzes finished strokes against the bounding box of all their kept points.
    pub fn from_strokes(strokes: &[Stroke], use_historical_points: bool) -> AnalyzedCharacter {
        let kept = kept_points(strokes, use_historical_points);
        let bounding_rect = Rect::from_points(kept.iter().flatten()).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        Self::from_points(kept, &bounding_rect)
    }

    /// Analyzes finished strokes against a caller-supplied bounding box.
    pub fn with_bounding_rect(strokes: &[Stroke], bounding_rect: &Rect, use_historical_points: bool) -> AnalyzedCharacter {
        Self::from_points(kept_points(strokes, use_historical_points), bounding_rect)
    }

    fn from_points(strokes: Vec<Vec<Point>>, bounding_rect: &Rect) -> AnalyzedCharacter {
        let analyzed_strokes = build_analyzed_strokes(strokes, bounding_rect);
        let sub_stroke_count = analyzed_strokes.iter().map(|s| s.sub_strokes.len()).sum();
        AnalyzedCharacter {
            analyzed_strokes,
            sub_stroke_count,
        }
    }

    pub fn stroke_count(&self) -> usize {
        self.analyzed_strokes.len()
    }

    /// All substrokes in input order.
    pub fn get_analyzed_strokes(&self) -> Vec<SubStroke> {
        let mut res: Vec<SubStroke> = Vec::with_capacity(self.sub_stroke_count);
        for stroke in &self.analyzed_strokes {
            res.extend_from_slice(&stroke.sub_strokes);
        }
        res
    }
}

// Points of every finished stroke, optionally without historical samples
fn kept_points(strokes: &[Stroke], use_historical_points: bool) -> Vec<Vec<Point>> {
    strokes
        .iter()
        .filter(|s| s.finished)
        .map(|s| {
            s.points
                .iter()
                .filter(|p| use_historical_points || !p.historical)
                .map(|p| p.point)
                .collect()
        })
        .collect()
}

// Gets distance between two points
fn dist(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// Gets normalized distance between two points
// Normalized based on bounding rectangle
fn norm_dist(a: Point, b: Point, bounding_rect: &Rect) -> f32 {
    let width = bounding_rect.width();
    let height = bounding_rect.height();
    // normalizer is a diagonal along a square with sides of size the larger dimension of the bounding box
    let dim_squared = if width > height { width * width } else { height * height };
    let normalizer = (dim_squared + dim_squared).sqrt();
    if normalizer <= 0.0 {
        return 0.0;
    }
    f32::min(dist(a, b) / normalizer, 1f32)
}

// Gets direction, in radians, from point a to b
// 0 is to the right, PI / 2 is up, etc.
fn dir(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dir = dy.atan2(dx);
    std::f32::consts::PI - dir
}

fn get_norm_center(a: Point, b: Point, bounding_rect: &Rect) -> (f32, f32) {
    let mut x = (a.x + b.x) / 2f32;
    let mut y = (a.y + b.y) / 2f32;
    let width = bounding_rect.width();
    let height = bounding_rect.height();
    let side;
    // Bounding rect is landscape
    if width > height {
        side = width;
        x -= bounding_rect.left;
        y = y - bounding_rect.top + (side - height) / 2f32;
    }
    // Portrait
    else {
        side = height;
        x = x - bounding_rect.left + (side - width) / 2f32;
        y -= bounding_rect.top;
    }
    if side <= 0.0 {
        return (0.5, 0.5);
    }
    (x / side, y / side)
}

// Calculates array with indexes of pivot points in raw stroke
pub(crate) fn get_pivot_indexes(points: &[Point]) -> Vec<usize> {
    match points.len() {
        0 => return Vec::new(),
        1 => return vec![0],
        _ => {}
    }

    // One item for each point: true if it's a pivot
    let mut markers: Vec<bool> = vec![false; points.len()];

    // Cycle variables
    let mut prev_pt_ix = 0;
    let mut first_pt_ix = 0;
    let mut pivot_pt_ix = 1;

    // The first point of a Stroke is always a pivot point.
    markers[0] = true;

    // local_length tracks the distance covered by the latest three points.
    // If it gets noticeably longer than the chord between the first and last
    // of those points, there was an abrupt turn, such as a corner.
    let mut local_length = dist(points[first_pt_ix], points[pivot_pt_ix]);

    // running_length tracks the distance covered since the start of the current
    // substroke. If it gets noticeably longer than the straight distance from
    // that start, the stroke has gradually bent into a new substroke.
    let mut running_length = local_length;

    for (i, &next_point) in points.iter().enumerate().skip(2) {
        // pivot_pt_ix is the point we're checking; add the step after it.
        let pivot_length = dist(points[pivot_pt_ix], next_point);
        local_length += pivot_length;
        running_length += pivot_length;

        let dist_from_previous = dist(points[prev_pt_ix], next_point);
        let dist_from_first = dist(points[first_pt_ix], next_point);
        if local_length > MAX_LOCAL_LENGTH_RATIO * dist_from_previous
            || running_length > MAX_RUNNING_LENGTH_RATIO * dist_from_first
        {
            // A pivot right before this one, and very close to it, is dropped.
            if markers[prev_pt_ix] && dist(points[prev_pt_ix], points[pivot_pt_ix]) < MIN_SEGMENT_LENGTH {
                markers[prev_pt_ix] = false;
            }
            markers[pivot_pt_ix] = true;
            running_length = pivot_length;
            first_pt_ix = pivot_pt_ix;
        }
        local_length = pivot_length;
        prev_pt_ix = pivot_pt_ix;
        pivot_pt_ix = i;
    }

    // Last point has to be a pivot
    markers[pivot_pt_ix] = true;
    // Pens and mice often leave a tiny hook at the end of a stroke; drop the
    // pivot before the final point if it's very close. Never drop the first
    // point though, or we'd be left with a single pivot.
    if markers[prev_pt_ix] && dist(points[prev_pt_ix], points[pivot_pt_ix]) < MIN_SEGMENT_LENGTH && prev_pt_ix != 0 {
        markers[prev_pt_ix] = false;
    }

    markers
        .iter()
        .enumerate()
        .filter(|(_, is_pivot)| **is_pivot)
        .map(|(ix, _)| ix)
        .collect()
}

// Builds array of substrokes from stroke's points, pivots, and character's bounding rectangle
fn build_sub_strokes(points: &[Point], pivot_indexes: &[usize], bounding_rect: &Rect) -> Vec<SubStroke> {
    let mut res: Vec<SubStroke> = Vec::with_capacity(pivot_indexes.len());
    let mut prev_ix: usize = 0;
    for &ix in pivot_indexes {
        if ix == prev_ix {
            continue;
        }
        let mut direction = dir(points[prev_ix], points[ix]);
        direction = (direction * 256f32 / std::f32::consts::PI / 2f32).round();
        if direction >= 256f32 {
            direction = 0f32;
        }
        let norm_length = (norm_dist(points[prev_ix], points[ix], bounding_rect) * 255f32).round();
        let center = get_norm_center(points[prev_ix], points[ix], bounding_rect);
        res.push(SubStroke {
            direction: direction as u8,
            length: norm_length as u8,
            center_x: (center.0 * 15f32).round().clamp(0.0, 15.0) as u8,
            center_y: (center.1 * 15f32).round().clamp(0.0, 15.0) as u8,
        });
        prev_ix = ix;
    }
    res
}

fn build_analyzed_strokes(strokes: Vec<Vec<Point>>, bounding_rect: &Rect) -> Vec<AnalyzedStroke> {
    strokes
        .into_iter()
        .map(|points| {
            let pivot_indexes = get_pivot_indexes(&points);
            let sub_strokes = build_sub_strokes(&points, &pivot_indexes, bounding_rect);
            AnalyzedStroke {
                points,
                pivot_indexes,
                sub_strokes,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use serde_derive::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct SampleAnSubStroke {
        direction: u8,
        length: u8,
        centerX: u8,
        centerY: u8,
    }

    #[derive(Serialize, Deserialize)]
    struct SampleAnStroke {
        points: Vec<Vec<u8>>,
        pivotIndexes: Vec<usize>,
        subStrokes: Vec<SampleAnSubStroke>,
    }

    #[derive(Serialize, Deserialize)]
    struct SampleAnChar {
        top: u8,
        bottom: u8,
        left: u8,
        right: u8,
        analyzedStrokes: Vec<SampleAnStroke>,
        subStrokeCount: usize,
    }

    // Hand-drawn samples captured with their reference analysis

    // 一
    static STROKES_1: &str = "[[[70,124],[71,124],[79,124],[104,124],[119,124],[132,125],[151,126],[168,126],[169,126],[189,125],[191,124],[191,124]]]";
    static AN_CHAR_1: &str = "{\"top\":124,\"bottom\":126,\"left\":70,\"right\":191,\"analyzedStrokes\":[{\"points\":[[70,124],[71,124],[79,124],[104,124],[119,124],[132,125],[151,126],[168,126],[169,126],[189,125],[191,124],[191,124]],\"pivotIndexes\":[0,11],\"subStrokes\":[{\"direction\":0,\"length\":180,\"centerX\":8,\"centerY\":7}]}],\"subStrokeCount\":1}";

    // 十
    static STROKES_2: &str = "[[[76,127],[77,127],[84,127],[97,128],[119,128],[125,129],[138,130],[147,130],[153,131],[154,131],[158,131],[162,131],[167,131],[168,131],[169,131],[169,131]],[[129,60],[129,62],[128,74],[128,102],[128,118],[129,143],[130,162],[130,170],[130,178],[131,184],[131,188],[131,193],[131,196],[131,198],[131,203],[131,203]]]";
    static AN_CHAR_2: &str = "{\"top\":60,\"bottom\":203,\"left\":76,\"right\":169,\"analyzedStrokes\":[{\"points\":[[76,127],[77,127],[84,127],[97,128],[119,128],[125,129],[138,130],[147,130],[153,131],[154,131],[158,131],[162,131],[167,131],[168,131],[169,131],[169,131]],\"pivotIndexes\":[0,15],\"subStrokes\":[{\"direction\":254,\"length\":117,\"centerX\":8,\"centerY\":7}]},{\"points\":[[129,60],[129,62],[128,74],[128,102],[128,118],[129,143],[130,162],[130,170],[130,178],[131,184],[131,188],[131,193],[131,196],[131,198],[131,203],[131,203]],\"pivotIndexes\":[0,15],\"subStrokes\":[{\"direction\":193,\"length\":180,\"centerX\":8,\"centerY\":8}]}],\"subStrokeCount\":2}";

    // 元
    static STROKES_3: &str = "[[[86,65],[98,66],[146,69],[152,69],[161,69],[166,69],[170,68],[170,68]],[[47,97],[48,97],[54,97],[89,103],[117,104],[146,101],[169,100],[176,98],[180,98],[184,98],[189,98],[193,98],[195,98],[195,98]],[[103,109],[103,110],[99,132],[91,156],[70,180],[56,190],[53,192]],[[143,105],[143,106],[142,114],[140,134],[138,149],[138,160],[138,167],[140,174],[144,182],[150,186],[155,190],[161,193],[166,194],[172,196],[188,197],[193,197],[197,197],[206,197],[206,196],[207,196],[208,196],[208,194],[204,182],[203,174],[202,174],[202,175],[202,176]]]";
    static AN_CHAR_3: &str = "{\"top\":65,\"bottom\":197,\"left\":47,\"right\":208,\"analyzedStrokes\":[{\"points\":[[86,65],[98,66],[146,69],[152,69],[161,69],[166,69],[170,68],[170,68]],\"pivotIndexes\":[0,7],\"subStrokes\":[{\"direction\":255,\"length\":94,\"centerX\":8,\"centerY\":1}]},{\"points\":[[47,97],[48,97],[54,97],[89,103],[117,104],[146,101],[169,100],[176,98],[180,98],[184,98],[189,98],[193,98],[195,98],[195,98]],\"pivotIndexes\":[0,13],\"subStrokes\":[{\"direction\":0,\"length\":166,\"centerX\":7,\"centerY\":4}]},{\"points\":[[103,109],[103,110],[99,132],[91,156],[70,180],[56,190],[53,192]],\"pivotIndexes\":[0,6],\"subStrokes\":[{\"direction\":170,\"length\":109,\"centerX\":3,\"centerY\":9}]},{\"points\":[[143,105],[143,106],[142,114],[140,134],[138,149],[138,160],[138,167],[140,174],[144,182],[150,186],[155,190],[161,193],[166,194],[172,196],[188,197],[193,197],[197,197],[206,197],[206,196],[207,196],[208,196],[208,194],[204,182],[203,174],[202,174],[202,175],[202,176]],\"pivotIndexes\":[0,10,18,20,24,26],\"subStrokes\":[{\"direction\":198,\"length\":96,\"centerX\":10,\"centerY\":9},{\"direction\":251,\"length\":58,\"centerX\":12,\"centerY\":13},{\"direction\":0,\"length\":2,\"centerX\":15,\"centerY\":14},{\"direction\":75,\"length\":26,\"centerX\":15,\"centerY\":13},{\"direction\":192,\"length\":2,\"centerX\":14,\"centerY\":12}]}],\"subStrokeCount\":8}";

    // 氣
    static STROKES_4: &str = "[[[76,32],[76,33],[75,37],[73,43],[70,51],[67,58],[64,66],[61,72],[57,77],[52,82],[50,85],[50,85]],[[68,58],[69,58],[76,58],[90,59],[100,60],[110,62],[118,62],[132,62],[136,62],[141,62],[145,62],[146,62],[148,62],[148,62]],[[68,95],[69,95],[77,96],[96,96],[105,96],[110,96],[126,97],[144,98],[146,98],[154,98],[156,98],[156,98]],[[59,126],[60,126],[67,126],[90,130],[107,131],[120,132],[134,132],[149,132],[151,132],[156,132],[158,133],[158,134],[156,142],[154,147],[153,155],[152,160],[151,166],[150,172],[150,179],[150,183],[150,186],[150,190],[151,194],[152,199],[156,204],[158,206],[162,209],[167,213],[171,215],[175,216],[184,220],[192,222],[196,223],[200,224],[204,225],[208,225],[210,225],[214,225],[218,223],[218,222],[216,214],[214,208],[214,207],[214,207]],[[79,147],[82,148],[87,155],[91,161],[91,161]],[[124,148],[123,148],[116,155],[110,162],[108,164],[108,164]],[[73,175],[75,175],[88,178],[98,180],[104,180],[111,182],[117,182],[122,182],[125,182]],[[100,148],[100,151],[102,172],[102,195],[103,204],[103,211],[104,216],[104,220],[104,224]],[[94,189],[93,189],[81,204],[72,210],[71,210]],[[109,192],[112,194],[120,199],[132,208],[133,210],[133,210]]]";
    static AN_CHAR_4: &str = "{\"top\":32,\"bottom\":225,\"left\":50,\"right\":218,\"analyzedStrokes\":[{\"points\":[[76,32],[76,33],[75,37],[73,43],[70,51],[67,58],[64,66],[61,72],[57,77],[52,82],[50,85],[50,85]],\"pivotIndexes\":[0,11],\"subStrokes\":[{\"direction\":173,\"length\":55,\"centerX\":2,\"centerY\":2}]},{\"points\":[[68,58],[69,58],[76,58],[90,59],[100,60],[110,62],[118,62],[132,62],[136,62],[141,62],[145,62],[146,62],[148,62],[148,62]],\"pivotIndexes\":[0,13],\"subStrokes\":[{\"direction\":254,\"length\":75,\"centerX\":5,\"centerY\":2}]},{\"points\":[[68,95],[69,95],[77,96],[96,96],[105,96],[110,96],[126,97],[144,98],[146,98],[154,98],[156,98],[156,98]],\"pivotIndexes\":[0,11],\"subStrokes\":[{\"direction\":255,\"length\":82,\"centerX\":6,\"centerY\":5}]},{\"points\":[[59,126],[60,126],[67,126],[90,130],[107,131],[120,132],[134,132],[149,132],[151,132],[156,132],[158,133],[158,134],[156,142],[154,147],[153,155],[152,160],[151,166],[150,172],[150,179],[150,183],[150,186],[150,190],[151,194],[152,199],[156,204],[158,206],[162,209],[167,213],[171,215],[175,216],[184,220],[192,222],[196,223],[200,224],[204,225],[208,225],[210,225],[214,225],[218,223],[218,222],[216,214],[214,208],[214,207],[214,207]],\"pivotIndexes\":[0,10,26,39,43],\"subStrokes\":[{\"direction\":253,\"length\":93,\"centerX\":6,\"centerY\":8},{\"direction\":194,\"length\":71,\"centerX\":10,\"centerY\":11},{\"direction\":247,\"length\":54,\"centerX\":12,\"centerY\":14},{\"direction\":75,\"length\":15,\"centerX\":14,\"centerY\":14}]},{\"points\":[[79,147],[82,148],[87,155],[91,161],[91,161]],\"pivotIndexes\":[0,4],\"subStrokes\":[{\"direction\":221,\"length\":17,\"centerX\":4,\"centerY\":9}]},{\"points\":[[124,148],[123,148],[116,155],[110,162],[108,164],[108,164]],\"pivotIndexes\":[0,5],\"subStrokes\":[{\"direction\":160,\"length\":21,\"centerX\":6,\"centerY\":10}]},{\"points\":[[73,175],[75,175],[88,178],[98,180],[104,180],[111,182],[117,182],[122,182],[125,182]],\"pivotIndexes\":[0,8],\"subStrokes\":[{\"direction\":251,\"length\":49,\"centerX\":5,\"centerY\":11}]},{\"points\":[[100,148],[100,151],[102,172],[102,195],[103,204],[103,211],[104,216],[104,220],[104,224]],\"pivotIndexes\":[0,8],\"subStrokes\":[{\"direction\":194,\"length\":71,\"centerX\":5,\"centerY\":12}]},{\"points\":[[94,189],[93,189],[81,204],[72,210],[71,210]],\"pivotIndexes\":[0,4],\"subStrokes\":[{\"direction\":158,\"length\":29,\"centerX\":3,\"centerY\":13}]},{\"points\":[[109,192],[112,194],[120,199],[132,208],[133,210],[133,210]],\"pivotIndexes\":[0,5],\"subStrokes\":[{\"direction\":230,\"length\":28,\"centerX\":6,\"centerY\":13}]}],\"subStrokeCount\":13}";

    fn parse_sample(str_strokes: &str, str_an_char: &str) -> (Vec<Stroke>, SampleAnChar) {
        let vec_strokes: Vec<Vec<Vec<u8>>> = serde_json::from_str(str_strokes).unwrap();
        let strokes: Vec<Stroke> = vec_strokes
            .iter()
            .map(|vec_stroke| Stroke::from_points(vec_stroke.iter().map(|pt| (pt[0] as f32, pt[1] as f32))))
            .collect();
        let an_char: SampleAnChar = serde_json::from_str(str_an_char).unwrap();
        (strokes, an_char)
    }

    fn assert_same(sample_anc: &SampleAnChar, anc: &AnalyzedCharacter) {
        assert_eq!(sample_anc.analyzedStrokes.len(), anc.analyzed_strokes.len(), "Expected same number of analyzed strokes.");
        assert_eq!(sample_anc.subStrokeCount, anc.sub_stroke_count);
        for (sample_ans, ans) in sample_anc.analyzedStrokes.iter().zip(&anc.analyzed_strokes) {
            assert_eq!(sample_ans.points.len(), ans.points.len(), "Analyzed stroke expected to have same number of points.");
            for (sample_pt, pt) in sample_ans.points.iter().zip(&ans.points) {
                assert_eq!(sample_pt[0] as f32, pt.x);
                assert_eq!(sample_pt[1] as f32, pt.y);
            }
            assert_eq!(sample_ans.pivotIndexes, ans.pivot_indexes, "Analyzed stroke expected to have the exact same pivot indexes.");
            assert_eq!(sample_ans.subStrokes.len(), ans.sub_strokes.len(), "Analyzed stroke expected to have same number of substrokes.");
            for (sample_ss, ss) in sample_ans.subStrokes.iter().zip(&ans.sub_strokes) {
                assert_eq!(sample_ss.direction, ss.direction);
                assert_eq!(sample_ss.length, ss.length);
                assert_eq!(sample_ss.centerX, ss.center_x);
                assert_eq!(sample_ss.centerY, ss.center_y);
            }
        }
    }

    #[test]
    fn test_samples() {
        for (strokes, an_char) in [
            (STROKES_1, AN_CHAR_1),
            (STROKES_2, AN_CHAR_2),
            (STROKES_3, AN_CHAR_3),
            (STROKES_4, AN_CHAR_4),
        ] {
            let sample = parse_sample(strokes, an_char);
            let rect = Rect::from_points(sample.0.iter().flat_map(|s| s.points.iter().map(|p| &p.point))).unwrap();
            assert_eq!(rect.top, sample.1.top as f32);
            assert_eq!(rect.bottom, sample.1.bottom as f32);
            assert_eq!(rect.left, sample.1.left as f32);
            assert_eq!(rect.right, sample.1.right as f32);
            let ac = AnalyzedCharacter::from_strokes(&sample.0, false);
            assert_same(&sample.1, &ac);
        }
    }

    #[test]
    fn test_straight_stroke_has_two_pivots() {
        for n in [3usize, 10, 57, 400] {
            let step = 200.0 / (n - 1) as f32;
            let points: Vec<Point> = (0..n).map(|i| Point::new(10.0 + step * i as f32, 40.0)).collect();
            assert_eq!(get_pivot_indexes(&points), vec![0, n - 1]);
            let diagonal: Vec<Point> = (0..n).map(|i| Point::new(3.0 * i as f32, 4.0 * i as f32)).collect();
            assert_eq!(get_pivot_indexes(&diagonal), vec![0, n - 1]);
        }
    }

    #[test]
    fn test_corner_is_pivot() {
        let mut points: Vec<Point> = (0..=10).map(|i| Point::new(10.0 * i as f32, 0.0)).collect();
        points.extend((1..=10).map(|i| Point::new(100.0, 10.0 * i as f32)));
        assert_eq!(get_pivot_indexes(&points), vec![0, 10, 20]);
    }

    #[test]
    fn test_short_strokes() {
        assert!(get_pivot_indexes(&[]).is_empty());
        assert_eq!(get_pivot_indexes(&[Point::new(1.0, 1.0)]), vec![0]);
        assert_eq!(get_pivot_indexes(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), vec![0, 1]);
    }

    #[test]
    fn test_historical_points_filtered() {
        let mut stroke = Stroke::from_points(vec![(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        stroke.points[1].historical = true;
        let ac = AnalyzedCharacter::from_strokes(std::slice::from_ref(&stroke), false);
        assert_eq!(ac.analyzed_strokes[0].points.len(), 2);
        let ac = AnalyzedCharacter::from_strokes(std::slice::from_ref(&stroke), true);
        assert_eq!(ac.analyzed_strokes[0].points.len(), 3);
    }

    #[test]
    fn test_unfinished_strokes_ignored() {
        let done = Stroke::from_points(vec![(0.0, 0.0), (100.0, 0.0)]);
        let mut pending = Stroke::from_points(vec![(0.0, 0.0), (0.0, 100.0)]);
        pending.finished = false;
        let ac = AnalyzedCharacter::from_strokes(&[done, pending], false);
        assert_eq!(ac.stroke_count(), 1);
        assert_eq!(ac.sub_stroke_count, 1);
    }

    #[test]
    fn test_degenerate_box() {
        let stroke = Stroke::from_points(vec![(5.0, 5.0), (5.0, 5.0)]);
        let ac = AnalyzedCharacter::from_strokes(&[stroke], false);
        let subs = ac.get_analyzed_strokes();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].length, 0);
        assert_eq!((subs[0].center_x, subs[0].center_y), (8, 8));
    }
}
