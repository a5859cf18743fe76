use super::Match;

/// Keeps the best `max` matches, sorted by descending score.
/// Matches with equal scores stay in the order they were filed.
pub struct MatchCollector<'a> {
    max: usize,
    matches: &'a mut Vec<Match>,
}

impl<'a> MatchCollector<'a> {
    pub fn new(matches: &'a mut Vec<Match>, max: usize) -> MatchCollector<'a> {
        assert!(max > 0, "Expected a positive number for the maximum number of matches.");
        assert!(matches.is_empty(), "The pre-existing matches vector must be empty.");
        MatchCollector { max, matches }
    }

    pub fn file_match(&mut self, mc: Match) {
        // Already at limit: don't bother if new match's score is not above current minimum
        if self.matches.len() == self.max {
            if let Some(last) = self.matches.last() {
                if mc.score <= last.score {
                    return;
                }
            }
        }
        // Largest score is always at start of vector; ties go after existing ones
        match self.matches.iter().position(|x| x.score < mc.score) {
            Some(ix) => self.matches.insert(ix, mc),
            None => self.matches.push(mc),
        }
        // Beyond limit? Drop last item.
        if self.matches.len() > self.max {
            self.matches.pop();
        }
    }
}
