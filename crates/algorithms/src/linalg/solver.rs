//! Online GF(2) linear-system solver
//!
//! [`Gf2Solver`] ingests equations one at a time and keeps them split into
//! an independent prefix (used for solving) and a dependent suffix (kept for
//! inspection). Every insertion re-runs Gaussian elimination over the
//! independent prefix augmented with the target column, so an equation that
//! would force `0 = 1` is rejected before it can poison the system.
//!
//! Once the rank reaches the number of unknowns the prefix is a square,
//! full-rank system and [`Gf2Solver::solve`] returns its unique solution.
//!
//! ## Invariants
//!
//! - The independent prefix never contains a row that is a combination of
//!   the others, so `rank() <= width()`.
//! - The prefix is consistent: no combination of its rows reads `0 = 1`.
//! - `rank()` never decreases and stored equations are never modified.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use qfeistel_params::encoding::MAX_PACKED_WIDTH;
use qfeistel_api::error::validate;
use qfeistel_api::{Error, Result};

use super::{BitVector, Equation};

/// Outcome of offering an equation to the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The equation joined the independent prefix and rank grew by one
    Independent,
    /// The equation follows from the prefix; it was stored but rank is unchanged
    Dependent,
    /// The equation contradicts the prefix and was not stored
    Inconsistent,
}

impl Insertion {
    /// Whether the equation was stored
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Inconsistent)
    }
}

/// Incremental solver for `A x = b` over GF(2) with `width` unknowns
#[derive(Debug, Clone)]
pub struct Gf2Solver {
    width: usize,
    independent: Vec<Equation>,
    dependent: Vec<Equation>,
}

impl Gf2Solver {
    /// Create an empty solver for `width` unknowns
    pub fn new(width: usize) -> Result<Self> {
        validate::parameter(width > 0, "Gf2Solver::new", "width must be non-zero")?;
        Ok(Self {
            width,
            independent: Vec::with_capacity(width),
            dependent: Vec::new(),
        })
    }

    /// Number of unknowns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of linearly independent equations accepted so far
    pub fn rank(&self) -> usize {
        self.independent.len()
    }

    /// Whether the independent prefix determines a unique solution
    pub fn is_full_rank(&self) -> bool {
        self.rank() == self.width
    }

    /// Total number of stored equations, independent and dependent
    pub fn len(&self) -> usize {
        self.independent.len() + self.dependent.len()
    }

    /// True if no equation has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The independent prefix, in acceptance order
    pub fn independent(&self) -> &[Equation] {
        &self.independent
    }

    /// Equations accepted as dependent, in acceptance order
    pub fn dependent(&self) -> &[Equation] {
        &self.dependent
    }

    /// Offer an equation to the solver
    ///
    /// Inconsistent equations are reported through [`Insertion::Inconsistent`]
    /// and leave the solver untouched. The only error is a width mismatch.
    pub fn insert(&mut self, equation: Equation) -> Result<Insertion> {
        validate::length("Gf2Solver::insert", equation.width(), self.width)?;

        let insertion = self.classify(&equation);
        match insertion {
            Insertion::Independent => self.independent.push(equation),
            Insertion::Dependent => self.dependent.push(equation),
            Insertion::Inconsistent => {}
        }

        tracing::trace!(rank = self.rank(), outcome = ?insertion, "equation classified");
        Ok(insertion)
    }

    /// Add an equation, failing with [`Error::InconsistentEquation`] on contradiction
    pub fn add_equation(&mut self, equation: Equation) -> Result<Insertion> {
        match self.insert(equation)? {
            Insertion::Inconsistent => Err(Error::InconsistentEquation { rank: self.rank() }),
            accepted => Ok(accepted),
        }
    }

    /// [`insert`](Self::insert) for a packed measurement
    pub fn insert_packed(&mut self, raw: u64) -> Result<Insertion> {
        let equation = Equation::unpack(raw, self.width)?;
        self.insert(equation)
    }

    /// [`add_equation`](Self::add_equation) for a packed measurement
    pub fn add_packed(&mut self, raw: u64) -> Result<Insertion> {
        let equation = Equation::unpack(raw, self.width)?;
        self.add_equation(equation)
    }

    /// Solve the independent prefix
    ///
    /// Requires `rank() == width()`. Forward elimination brings a copy of the
    /// prefix into row echelon form with the pivot of column `i` in row `i`,
    /// then back-substitution resolves the unknowns from the last row up.
    pub fn solve(&self) -> Result<BitVector> {
        let n = self.width;
        if self.rank() != n {
            return Err(Error::UnsolvedSystem { rank: self.rank(), width: n });
        }

        let mut rows: Vec<BitVector> = self.independent.iter().map(Equation::augmented).collect();

        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| rows[r].get(col))
                .ok_or(Error::UnsolvedSystem { rank: col, width: n })?;
            rows.swap(col, pivot);

            let (head, tail) = rows.split_at_mut(col + 1);
            let pivot_row = &head[col];
            for row in tail.iter_mut().filter(|row| row.get(col)) {
                *row ^= pivot_row;
            }
        }

        let mut solution = BitVector::zeros(n);
        for i in (0..n).rev() {
            let row = &rows[i];
            let mut value = row.get(n);
            for k in (i + 1)..n {
                value ^= row.get(k) & solution.get(k);
            }
            solution.set(i, value);
        }

        Ok(solution)
    }

    /// Solve and pack the result as `1 | (s << 1)`
    ///
    /// Bit 0 is always set; it marks the packed value as a solution and
    /// lines the mask up with the probe function's input layout.
    pub fn solve_packed(&self) -> Result<u64> {
        validate::bit_width("Gf2Solver::solve_packed", self.width, MAX_PACKED_WIDTH)?;
        let solution = self.solve()?;
        Ok(1 | (solution.to_u64()? << 1))
    }

    /// Reduce the candidate against the independent prefix
    fn classify(&self, candidate: &Equation) -> Insertion {
        let cols = self.width + 1;
        let mut rows: Vec<BitVector> = Vec::with_capacity(self.rank() + 1);
        rows.extend(self.independent.iter().map(Equation::augmented));
        rows.push(candidate.augmented());

        let mut pivot_row = 0;
        for col in 0..cols {
            if pivot_row == rows.len() {
                break;
            }
            let Some(found) = (pivot_row..rows.len()).find(|&r| rows[r].get(col)) else {
                continue;
            };
            rows.swap(pivot_row, found);

            let (head, tail) = rows.split_at_mut(pivot_row + 1);
            let pivot = &head[pivot_row];
            for row in tail.iter_mut().filter(|row| row.get(col)) {
                *row ^= pivot;
            }
            pivot_row += 1;
        }

        // Zero rows sink to the bottom; a pivot in the target column can only
        // sit in the last row, and there it reads 0 = 1.
        let last = &rows[rows.len() - 1];
        if last.is_zero() {
            Insertion::Dependent
        } else if last.first_one() == Some(self.width) {
            Insertion::Inconsistent
        } else {
            Insertion::Independent
        }
    }
}
