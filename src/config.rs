//! Construction parameters for both engines.

use crate::automaton::grid::{check_probability, check_shape};
use crate::automaton::line::Row;
use crate::automaton::rules::{ElementaryRule, LifeRule, RULE_30};
use crate::engine::{GridEngine, LineEngine};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
    pub rule: LifeRule,
    /// Probability that each cell starts alive. 0 leaves the grid empty.
    pub p_alive: f64,
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: 128,
            width: 128,
            rule: LifeRule::GameOfLife,
            p_alive: 0.2,
            seed: 7,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        check_shape(self.height, self.width)?;
        check_probability(self.p_alive)
    }

    pub fn build(&self) -> Result<GridEngine> {
        self.validate()?;
        GridEngine::new(self.height, self.width, self.rule, self.p_alive, self.seed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineConfig {
    pub length: usize,
    pub rule: ElementaryRule,
    /// Index of the single live cell; `None` puts it at `length / 2`.
    pub seed_position: Option<usize>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            length: 400,
            rule: RULE_30,
            seed_position: None,
        }
    }
}

impl LineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::config("row length must be positive"));
        }
        match self.seed_position {
            Some(position) if position >= self.length => Err(Error::config(format!(
                "seed position {position} is outside a row of length {}",
                self.length
            ))),
            _ => Ok(()),
        }
    }

    pub fn build(&self) -> Result<LineEngine> {
        self.validate()?;
        let position = self.seed_position.unwrap_or(self.length / 2);
        let row = Row::single_seed(self.length, position)?;
        Ok(LineEngine::new(row, self.rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rules::RULE_110;

    #[test]
    fn test_grid_config_default_builds() {
        let engine = GridConfig::default().build().unwrap();
        assert_eq!((engine.height(), engine.width()), (128, 128));
        assert_eq!(engine.rule(), LifeRule::GameOfLife);
        assert!(engine.grid().population() > 0);
    }

    #[test]
    fn test_grid_config_validation() {
        let config = GridConfig {
            p_alive: 2.0,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_line_config_seed_position() {
        let engine = LineConfig {
            length: 10,
            rule: RULE_110,
            seed_position: Some(9),
        }
        .build()
        .unwrap();
        assert_eq!(engine.row().get(9), 1);
        assert_eq!(engine.row().population(), 1);

        let centered = LineConfig {
            length: 10,
            ..LineConfig::default()
        }
        .build()
        .unwrap();
        assert_eq!(centered.row().get(5), 1);
        assert_eq!(centered.rule(), RULE_30);
    }

    #[test]
    fn test_line_config_validation() {
        let config = LineConfig {
            length: 4,
            seed_position: Some(4),
            ..LineConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(LineConfig {
            length: 0,
            ..LineConfig::default()
        }
        .build()
        .is_err());
    }
}
