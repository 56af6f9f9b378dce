use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// How qualifying runs along a walked line are turned into votes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Sum the length of every run longer than the local threshold.
    #[default]
    SumAll,
    /// Stop at the first run longer than the local threshold and vote with its
    /// length alone.
    FirstQualifying,
}

/// Parameters of a single line search.
///
/// - `theta_resolution`: number of angle buckets spanning [0, π). Multiples of
///   four enable the symmetric trig table.
/// - `rho_resolution`: spacing of the rho buckets in pixels.
/// - `vote_threshold`: a line is confirmed when its votes exceed this value.
/// - `local_vote_threshold`: a run of on-line pixels must be longer than this
///   to contribute votes.
/// - `worksheet_length`: target short-side length of the working image; the
///   preprocessing stage derives the diagonal from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    pub worksheet_length: usize,
    pub theta_resolution: usize,
    pub rho_resolution: f32,
    pub vote_threshold: u32,
    pub local_vote_threshold: usize,
    pub run_policy: RunPolicy,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self::for_worksheet(300)
    }
}

impl SearchParameters {
    /// Defaults for a worksheet of the given length; the vote threshold is a
    /// third of the worksheet length.
    pub fn for_worksheet(worksheet_length: usize) -> Self {
        Self {
            worksheet_length,
            theta_resolution: 360,
            rho_resolution: 1.0,
            vote_threshold: (worksheet_length / 3) as u32,
            local_vote_threshold: 10,
            run_policy: RunPolicy::SumAll,
        }
    }

    pub fn with_vote_threshold(mut self, vote_threshold: u32) -> Self {
        self.vote_threshold = vote_threshold;
        self
    }

    pub fn with_local_vote_threshold(mut self, local_vote_threshold: usize) -> Self {
        self.local_vote_threshold = local_vote_threshold;
        self
    }

    pub fn with_theta_resolution(mut self, theta_resolution: usize) -> Self {
        self.theta_resolution = theta_resolution;
        self
    }

    pub fn with_rho_resolution(mut self, rho_resolution: f32) -> Self {
        self.rho_resolution = rho_resolution;
        self
    }

    pub fn with_run_policy(mut self, run_policy: RunPolicy) -> Self {
        self.run_policy = run_policy;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.theta_resolution == 0 {
            return Err(SearchError::InvalidThetaResolution(self.theta_resolution));
        }
        if !self.rho_resolution.is_finite() || self.rho_resolution <= 0.0 {
            return Err(SearchError::InvalidRhoResolution(self.rho_resolution));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_worksheet_length() {
        let params = SearchParameters::default();
        assert_eq!(params.worksheet_length, 300);
        assert_eq!(params.vote_threshold, 100);
        assert_eq!(params.theta_resolution, 360);
        assert_eq!(params.run_policy, RunPolicy::SumAll);
        assert_eq!(SearchParameters::for_worksheet(90).vote_threshold, 30);
    }

    #[test]
    fn validate_rejects_degenerate_resolutions() {
        let params = SearchParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(
            params.with_theta_resolution(0).validate(),
            Err(SearchError::InvalidThetaResolution(0))
        );
        assert!(matches!(
            params.with_rho_resolution(0.0).validate(),
            Err(SearchError::InvalidRhoResolution(_))
        ));
        assert!(params.with_rho_resolution(f32::NAN).validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: SearchParameters =
            serde_json::from_str(r#"{"vote_threshold": 12, "run_policy": "first_qualifying"}"#)
                .expect("valid parameters");
        assert_eq!(params.vote_threshold, 12);
        assert_eq!(params.run_policy, RunPolicy::FirstQualifying);
        assert_eq!(params.theta_resolution, 360);
        assert_eq!(params.local_vote_threshold, 10);
    }
}
