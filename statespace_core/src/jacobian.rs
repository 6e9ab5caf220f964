// statespace_core/src/jacobian.rs

use nalgebra::{DMatrix, DVector};

/// Default perturbation step for [`NumericJacobian::numeric`].
pub const DEFAULT_STEP: f64 = 1e-6;

/// Synthesizes the `rows x columns` Jacobian of a black-box function
/// `f: R^columns -> R^rows` at a query point via central finite differences:
///
/// ```text
/// J[:, i] = (f(x + t*e_i) - f(x - t*e_i)) / (2t)
/// ```
///
/// The step is fixed; there is no adaptive refinement. Callers differentiating
/// stiff functions must pick a suitable `step` themselves via
/// [`numeric_with_step`](Self::numeric_with_step). `f` must be side-effect-free
/// and is invoked exactly `2 * columns` times per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericJacobian {
    rows: usize,
    columns: usize,
}

impl NumericJacobian {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Evaluates the Jacobian at `x` with the default step.
    pub fn numeric<F>(&self, x: &DVector<f64>, f: F) -> DMatrix<f64>
    where
        F: Fn(&DVector<f64>) -> DVector<f64>,
    {
        self.numeric_with_step(x, DEFAULT_STEP, f)
    }

    /// Evaluates the Jacobian at `x`, perturbing each basis direction by `step`.
    ///
    /// # Panics
    /// Panics if `x.len() != self.columns()`.
    pub fn numeric_with_step<F>(&self, x: &DVector<f64>, step: f64, f: F) -> DMatrix<f64>
    where
        F: Fn(&DVector<f64>) -> DVector<f64>,
    {
        assert_eq!(
            x.len(),
            self.columns,
            "NumericJacobian: query point has {} dimensions, expected {}",
            x.len(),
            self.columns
        );

        let mut jacobian = DMatrix::zeros(self.rows, self.columns);
        let mut dx = DVector::zeros(self.columns);
        for i in 0..self.columns {
            dx[i] = step;
            let column = (f(&(x + &dx)) - f(&(x - &dx))) / (2.0 * step);
            jacobian.set_column(i, &column);
            dx[i] = 0.0;
        }
        jacobian
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quadratic_is_exact_under_central_differences() {
        let jacobian = NumericJacobian::new(3, 3);

        let state = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let function =
            |x: &DVector<f64>| DVector::from_vec(vec![x[0], x[1] * x[1], x[2]]);

        // The central-difference formula is exact for polynomials of degree <= 2,
        // even with a step of 1.0.
        let actual = jacobian.numeric_with_step(&state, 1.0, function);
        let expected =
            DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 4.0, 1.0]));

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_matches_analytic_derivative_within_step_squared() {
        let jacobian = NumericJacobian::new(2, 2);

        let state = DVector::from_vec(vec![0.3, 1.2]);
        let function = |x: &DVector<f64>| {
            DVector::from_vec(vec![x[0].sin() * x[1], x[0].cos() + x[1] * x[1]])
        };

        let actual = jacobian.numeric(&state, function);

        // Analytic Jacobian of the function above.
        let expected = DMatrix::from_row_slice(
            2,
            2,
            &[
                state[0].cos() * state[1],
                state[0].sin(),
                -state[0].sin(),
                2.0 * state[1],
            ],
        );

        assert_abs_diff_eq!(actual, expected, epsilon = 1e-8);
    }

    #[test]
    fn test_rectangular_function() {
        // f: R^2 -> R^3
        let jacobian = NumericJacobian::new(3, 2);

        let state = DVector::from_vec(vec![2.0, -1.0]);
        let function = |x: &DVector<f64>| {
            DVector::from_vec(vec![x[0] + x[1], x[0] * x[1], 3.0 * x[1]])
        };

        let actual = jacobian.numeric_with_step(&state, 0.5, function);
        let expected =
            DMatrix::from_row_slice(3, 2, &[1.0, 1.0, -1.0, 2.0, 0.0, 3.0]);

        assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "query point has 2 dimensions, expected 3")]
    fn test_rejects_query_point_of_wrong_length() {
        let jacobian = NumericJacobian::new(3, 3);
        let state = DVector::from_vec(vec![1.0, 2.0]);
        let _ = jacobian.numeric(&state, |x| x.clone());
    }
}
