// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration and its validation.

use crate::errors::EngineError;

/// Tunable parameters of a counting run.
///
/// `max_knockouts` is an upper bound on the number of simultaneous
/// knockouts considered; `None` means "up to the number of reactions".
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_knockouts: Option<usize>,
    pub lambda: f64,
    pub worker_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_knockouts: None,
            lambda: 0.5,
            worker_count: 1,
        }
    }
}

impl RunConfig {
    /// Validate against a concrete reaction count and return the effective
    /// knockout bound.
    ///
    /// An explicit bound below 1 is rejected; a bound above `reaction_count`
    /// is clamped down to it.
    pub fn resolve(&self, reaction_count: usize) -> Result<usize, EngineError> {
        if self.lambda <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "lambda must be greater than zero, got {}",
                self.lambda
            )));
        }
        if self.worker_count < 1 {
            return Err(EngineError::InvalidConfig(
                "worker count must be at least 1".into(),
            ));
        }
        let max = match self.max_knockouts {
            Some(m) if m < 1 => {
                return Err(EngineError::InvalidConfig(
                    "maximum number of knockouts must be at least 1".into(),
                ));
            }
            Some(m) => m.min(reaction_count),
            None => reaction_count,
        };
        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_to_reaction_count() {
        let config = RunConfig::default();
        assert_eq!(config.resolve(17).unwrap(), 17);
    }

    #[test]
    fn test_explicit_bound_clamped() {
        let config = RunConfig {
            max_knockouts: Some(100),
            ..RunConfig::default()
        };
        assert_eq!(config.resolve(17).unwrap(), 17);

        let config = RunConfig {
            max_knockouts: Some(3),
            ..RunConfig::default()
        };
        assert_eq!(config.resolve(17).unwrap(), 3);
    }

    #[test]
    fn test_zero_bound_rejected() {
        let config = RunConfig {
            max_knockouts: Some(0),
            ..RunConfig::default()
        };
        assert!(matches!(
            config.resolve(17),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_lambda_rejected() {
        for lambda in [0.0, -1.5] {
            let config = RunConfig {
                lambda,
                ..RunConfig::default()
            };
            assert!(matches!(
                config.resolve(17),
                Err(EngineError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = RunConfig {
            worker_count: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.resolve(17),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
