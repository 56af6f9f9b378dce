//! Gap-tolerant run-length voting along a walked line.
//!
//! Consecutive on-line pixels form a run. When a run ends (off-line pixel or
//! end of walk) it contributes its full length if it is strictly longer than
//! the local threshold, and nothing otherwise. Depending on [`RunPolicy`] the
//! vote is either the sum over all qualifying runs or the length of the first
//! one.
use super::neighborhood::PixelClassifier;
use super::params::RunPolicy;
use super::walker::PixelCoord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteAccumulator {
    run_threshold: usize,
    policy: RunPolicy,
}

impl VoteAccumulator {
    pub fn new(run_threshold: usize, policy: RunPolicy) -> Self {
        Self {
            run_threshold,
            policy,
        }
    }

    pub fn run_threshold(&self) -> usize {
        self.run_threshold
    }

    /// Score a walk, classifying each pixel as it is produced.
    ///
    /// Walks no longer than the run threshold cannot hold a qualifying run and
    /// are not classified at all.
    pub fn score<I, C>(&self, walk: I, classifier: &C) -> u32
    where
        I: IntoIterator<Item = PixelCoord>,
        I::IntoIter: ExactSizeIterator,
        C: PixelClassifier + ?Sized,
    {
        let walk = walk.into_iter();
        if walk.len() <= self.run_threshold {
            return 0;
        }
        self.score_flags(walk.map(|pixel| classifier.is_on_line(pixel)))
    }

    /// Score an already classified sequence of on/off flags.
    pub fn score_flags<I>(&self, flags: I) -> u32
    where
        I: IntoIterator<Item = bool>,
    {
        let mut votes = 0u32;
        let mut run = 0usize;
        for on in flags {
            if on {
                run += 1;
                continue;
            }
            if let Some(length) = self.qualifying(run) {
                votes = votes.saturating_add(length);
                if self.policy == RunPolicy::FirstQualifying {
                    return votes;
                }
            }
            run = 0;
        }
        if let Some(length) = self.qualifying(run) {
            votes = votes.saturating_add(length);
        }
        votes
    }

    #[inline]
    fn qualifying(&self, run: usize) -> Option<u32> {
        (run > self.run_threshold).then(|| u32::try_from(run).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '#').collect()
    }

    #[test]
    fn sums_every_run_longer_than_threshold() {
        let acc = VoteAccumulator::new(2, RunPolicy::SumAll);
        // runs: 4, 1, 3, 2
        let votes = acc.score_flags(flags("####.#..###.##"));
        assert_eq!(votes, 7);
    }

    #[test]
    fn run_of_exactly_threshold_is_noise() {
        let acc = VoteAccumulator::new(3, RunPolicy::SumAll);
        assert_eq!(acc.score_flags(flags("..###..")), 0);
        assert_eq!(acc.score_flags(flags("..####..")), 4);
    }

    #[test]
    fn trailing_run_is_flushed() {
        let acc = VoteAccumulator::new(1, RunPolicy::SumAll);
        assert_eq!(acc.score_flags(flags("..#####")), 5);
        assert_eq!(acc.score_flags(flags("")), 0);
    }

    #[test]
    fn first_qualifying_stops_early() {
        let acc = VoteAccumulator::new(2, RunPolicy::FirstQualifying);
        assert_eq!(acc.score_flags(flags("##.####.#####")), 4);
        assert_eq!(acc.score_flags(flags("##.#.##")), 0);
    }

    #[test]
    fn single_gap_splits_runs() {
        let (k, m) = (12usize, 9usize);
        let pattern: Vec<bool> = std::iter::repeat(true)
            .take(k)
            .chain(std::iter::once(false))
            .chain(std::iter::repeat(true).take(m))
            .collect();
        let low = VoteAccumulator::new(5, RunPolicy::SumAll);
        assert_eq!(low.score_flags(pattern.iter().copied()), (k + m) as u32);
        let between = VoteAccumulator::new(10, RunPolicy::SumAll);
        assert_eq!(between.score_flags(pattern.iter().copied()), k as u32);
        let high = VoteAccumulator::new(k, RunPolicy::SumAll);
        assert_eq!(high.score_flags(pattern.iter().copied()), 0);
    }

    #[test]
    fn short_walks_skip_classification() {
        let acc = VoteAccumulator::new(4, RunPolicy::SumAll);
        let walk: Vec<PixelCoord> = (0..4).map(|x| PixelCoord::new(x, 0)).collect();
        let classifier = |_: PixelCoord| -> bool { panic!("short walk must not be classified") };
        assert_eq!(acc.score(walk, &classifier), 0);

        let walk: Vec<PixelCoord> = (0..5).map(|x| PixelCoord::new(x, 0)).collect();
        assert_eq!(acc.score(walk, &|_: PixelCoord| true), 5);
    }
}
