//! The interactive quadratic-equation solver.
//!
//! Collects three submitted lines as the coefficients of
//! `ax^2 + bx + c = 0`, solves, renders the result, and starts over. The
//! mathematics lives in `juuri-common`; this module owns the prompts and
//! the rendering.

use crate::{print, println};
use juuri_common::quadratic::{self, CoefficientCollector, Coefficients, Roots};
use spin::Mutex;

/// Collector state shared with the keyboard path.
static COLLECTOR: Mutex<CoefficientCollector> = Mutex::new(CoefficientCollector::new());

/// Prints the intro text and the first prompt.
pub fn start() {
    println!("QUADRATIC EQUATION SOLVER");
    println!("ax^2 + bx + c = 0");
    println!("Press 'q' to quit");
    println!();
    print!("Enter coefficient a: ");
}

/// Accepts one submitted line value; solves after every third.
pub fn submit(value: i32) {
    let mut collector = COLLECTOR.lock();
    match collector.push(value) {
        None => {
            if collector.stage() == 1 {
                print!("Enter coefficient b: ");
            } else {
                print!("Enter coefficient c: ");
            }
        }
        Some(co) => {
            drop(collector);
            report(co);
            println!();
            print!("Enter coefficient a: ");
        }
    }
}

/// Renders one solved equation.
fn report(co: Coefficients) {
    println!();
    println!("Solving equation: {}x^2 + {}x + {} = 0", co.a, co.b, co.c);

    match quadratic::solve(co) {
        Roots::NoEquation => {
            println!("Not a quadratic equation (a = 0)");
            println!("No solution");
        }
        Roots::Linear { x } => {
            println!("Not a quadratic equation (a = 0)");
            println!("Linear solution: x = {}", x);
        }
        Roots::TwoIntegral { x1, x2 } => {
            println!("Discriminant = {}", quadratic::discriminant(co));
            println!("Two real solutions exist");
            println!("x1 = {}", x1);
            println!("x2 = {}", x2);
        }
        Roots::TwoIrrational { discriminant } => {
            println!("Discriminant = {}", discriminant);
            println!("Two real solutions exist");
            println!("Solutions involve square roots");
            println!("x1 = (-{} + sqrt({})) / {}", co.b, discriminant, 2 * co.a);
            println!("x2 = (-{} - sqrt({})) / {}", co.b, discriminant, 2 * co.a);
        }
        Roots::One { x } => {
            println!("Discriminant = 0");
            println!("One real solution exists");
            println!("x = {}", x);
        }
        Roots::NoReal { discriminant } => {
            println!("Discriminant = {}", discriminant);
            println!("No real solutions (complex solutions)");
        }
    }
}
