//! Integer quadratic-equation mathematics.
//!
//! Solves `ax^2 + bx + c = 0` over the integers the way the interactive
//! solver presents it: integer division for roots, and a perfect-square
//! check on the discriminant to decide between exact integer roots and the
//! symbolic form.

/// The three collected coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

/// Outcome of solving for a coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roots {
    /// `a = 0, b != 0`: the equation degenerates to `bx + c = 0`.
    Linear { x: i32 },
    /// `a = 0, b = 0`: nothing to solve.
    NoEquation,
    /// Positive discriminant that is a perfect square.
    TwoIntegral { x1: i32, x2: i32 },
    /// Positive discriminant with an irrational square root; callers render
    /// the symbolic `(-b ± sqrt(d)) / 2a` form.
    TwoIrrational { discriminant: i32 },
    /// Zero discriminant.
    One { x: i32 },
    /// Negative discriminant; only complex solutions exist.
    NoReal { discriminant: i32 },
}

/// The discriminant `b^2 - 4ac`.
pub fn discriminant(co: Coefficients) -> i32 {
    co.b * co.b - 4 * co.a * co.c
}

/// Solves the equation for one coefficient set.
pub fn solve(co: Coefficients) -> Roots {
    if co.a == 0 {
        if co.b != 0 {
            return Roots::Linear { x: -co.c / co.b };
        }
        return Roots::NoEquation;
    }

    let d = discriminant(co);
    if d > 0 {
        match perfect_sqrt(d) {
            Some(s) => Roots::TwoIntegral {
                x1: (-co.b + s) / (2 * co.a),
                x2: (-co.b - s) / (2 * co.a),
            },
            None => Roots::TwoIrrational { discriminant: d },
        }
    } else if d == 0 {
        Roots::One {
            x: -co.b / (2 * co.a),
        }
    } else {
        Roots::NoReal { discriminant: d }
    }
}

/// Returns `sqrt(n)` when `n` is a positive perfect square.
fn perfect_sqrt(n: i32) -> Option<i32> {
    let mut i: i32 = 1;
    while i.saturating_mul(i) <= n {
        if i * i == n {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Gathers three submitted values into a coefficient set.
///
/// Each call to [`push`](CoefficientCollector::push) stores the next
/// coefficient in `a`, `b`, `c` order; the third returns the completed set
/// and resets the collector for another round.
pub struct CoefficientCollector {
    stage: u8,
    a: i32,
    b: i32,
}

impl CoefficientCollector {
    /// Creates an empty collector, waiting for `a`.
    pub const fn new() -> Self {
        CoefficientCollector { stage: 0, a: 0, b: 0 }
    }

    /// Accepts one submitted value; completes on every third call.
    pub fn push(&mut self, value: i32) -> Option<Coefficients> {
        match self.stage {
            0 => {
                self.a = value;
                self.stage = 1;
                None
            }
            1 => {
                self.b = value;
                self.stage = 2;
                None
            }
            _ => {
                self.stage = 0;
                Some(Coefficients {
                    a: self.a,
                    b: self.b,
                    c: value,
                })
            }
        }
    }

    /// Which coefficient the next push will fill (0 = a, 1 = b, 2 = c).
    pub fn stage(&self) -> u8 {
        self.stage
    }
}

impl Default for CoefficientCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_integral_roots() {
        let co = Coefficients { a: 1, b: 0, c: -4 };
        assert_eq!(discriminant(co), 16);
        assert_eq!(solve(co), Roots::TwoIntegral { x1: 2, x2: -2 });
    }

    #[test]
    fn one_root() {
        // (x + 1)^2
        let co = Coefficients { a: 1, b: 2, c: 1 };
        assert_eq!(solve(co), Roots::One { x: -1 });
    }

    #[test]
    fn irrational_roots_keep_discriminant() {
        let co = Coefficients { a: 1, b: 0, c: -2 };
        assert_eq!(solve(co), Roots::TwoIrrational { discriminant: 8 });
    }

    #[test]
    fn no_real_roots() {
        let co = Coefficients { a: 1, b: 0, c: 4 };
        assert_eq!(solve(co), Roots::NoReal { discriminant: -16 });
    }

    #[test]
    fn degenerate_cases() {
        assert_eq!(
            solve(Coefficients { a: 0, b: 2, c: -6 }),
            Roots::Linear { x: 3 }
        );
        assert_eq!(
            solve(Coefficients { a: 0, b: 0, c: 5 }),
            Roots::NoEquation
        );
    }

    #[test]
    fn collector_completes_every_third_push() {
        let mut collector = CoefficientCollector::new();
        assert_eq!(collector.push(1), None);
        assert_eq!(collector.push(0), None);
        assert_eq!(
            collector.push(-4),
            Some(Coefficients { a: 1, b: 0, c: -4 })
        );
        // Resets for another round.
        assert_eq!(collector.stage(), 0);
        assert_eq!(collector.push(2), None);
    }

    #[test]
    fn end_to_end_line_input_to_roots() {
        use crate::keyboard::KeyPress;
        use crate::line::{LineEditor, LineReaction};

        let mut editor = LineEditor::new();
        let mut collector = CoefficientCollector::new();
        let mut solved = None;

        for line in ["1", "0", "-4"] {
            for c in line.chars() {
                editor.handle_key(KeyPress::Char(c));
            }
            match editor.handle_key(KeyPress::Enter) {
                LineReaction::Submit(value) => {
                    if let Some(co) = collector.push(value) {
                        solved = Some((discriminant(co), solve(co)));
                    }
                }
                other => panic!("expected submit, got {:?}", other),
            }
        }

        assert_eq!(solved, Some((16, Roots::TwoIntegral { x1: 2, x2: -2 })));
    }
}
