//! Faults an algorithm can raise while carving.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CarveFault {
    /// A carve targeted a cell outside the grid.
    OutOfBounds { pos: Pos },
    /// The algorithm ran more loop iterations than the configured budget allows.
    StepBudgetExhausted { budget: u64 },
}

impl fmt::Display for CarveFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos } => {
                write!(f, "carve target ({}, {}) is outside the grid", pos.x, pos.y)
            }
            Self::StepBudgetExhausted { budget } => {
                write!(f, "carving exceeded its step budget of {budget}")
            }
        }
    }
}

impl Error for CarveFault {}

/// Loop-iteration allowance for one algorithm run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StepBudget {
    limit: Option<u64>,
    spent: u64,
}

impl StepBudget {
    pub(crate) const fn limited(limit: u64) -> Self {
        Self { limit: Some(limit), spent: 0 }
    }

    pub(crate) const fn unlimited() -> Self {
        Self { limit: None, spent: 0 }
    }

    pub(crate) fn spend(&mut self) -> Result<(), CarveFault> {
        self.spent += 1;
        match self.limit {
            Some(budget) if self.spent > budget => Err(CarveFault::StepBudgetExhausted { budget }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_budget_faults_after_limit() {
        let mut budget = StepBudget::limited(3);
        for _ in 0..3 {
            assert!(budget.spend().is_ok());
        }
        assert_eq!(budget.spend(), Err(CarveFault::StepBudgetExhausted { budget: 3 }));
    }

    #[test]
    fn unlimited_budget_never_faults() {
        let mut budget = StepBudget::unlimited();
        for _ in 0..10_000 {
            assert!(budget.spend().is_ok());
        }
    }

    #[test]
    fn display_names_the_offending_cell() {
        let fault = CarveFault::OutOfBounds { pos: Pos::new(30, -1) };
        assert_eq!(fault.to_string(), "carve target (30, -1) is outside the grid");
    }
}
