//! Solving linear systems with Tabula
//!
//! Run with: cargo run -p tabula --example linear_systems

use tabula::prelude::*;

fn main() -> Result<(), MatrixError> {
    example_1_square_system()?;
    example_2_least_squares_fit()?;
    example_3_singular_system()?;
    Ok(())
}

/// Example 1: A square system inverted directly
fn example_1_square_system() -> Result<(), MatrixError> {
    println!("Example 1: 2x + y = 3, x + 3y = 5");

    let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]])?;
    println!("A =\n{a}");
    println!("det(A) = {}", a.determinant()?);
    println!("A^-1 =\n{}", a.inverse()?.eliminate_rounding_errors());

    let x = solve_system_of_equations(&a.to_rows(), &[3.0, 5.0], true)?;
    println!("x = {x:?}\n");
    Ok(())
}

/// Example 2: An overdetermined system solved by least squares
fn example_2_least_squares_fit() -> Result<(), MatrixError> {
    println!("Example 2: fit y = c0 + c1*t through four noisy points");

    let t = [1.0, 2.0, 3.0, 4.0];
    let y = [6.0, 5.0, 7.0, 10.0];
    let rows: Vec<[f64; 2]> = t.iter().map(|&t| [1.0, t]).collect();

    let system = LinearSystem::with_config(Matrix::from_rows(&rows)?, SolverConfig::rounded());
    let solution = system.solve(&y)?;
    println!(
        "c0 = {}, c1 = {} (via {:?})\n",
        solution.values[0], solution.values[1], solution.method
    );
    Ok(())
}

/// Example 3: A singular system is reported, not approximated
fn example_3_singular_system() -> Result<(), MatrixError> {
    println!("Example 3: x + 2y = 1, 2x + 4y = 2");

    let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    match a.to_upper_triangular()? {
        Triangularization::Singular => println!("elimination found no pivot"),
        Triangularization::Triangular { matrix, .. } => {
            println!("upper triangular form:\n{}", matrix.render(Layout::MultiLine));
        }
    }
    match LinearSystem::new(a).solve(&[1.0, 2.0]) {
        Err(MatrixError::Singular) => println!("no unique solution"),
        other => println!("unexpected: {other:?}"),
    }
    Ok(())
}
