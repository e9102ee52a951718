
/// This module implements the scalar building blocks of the proximal operators.
pub mod prox {
    use crate::Float;
    use ndarray::ArrayView1;

    /// The soft-thresholding operator is the proximal operator of the L1 norm.
    ///
    /// Values whose magnitude does not exceed `threshold` are mapped to an
    /// unsigned zero. NaN is propagated.
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x.is_nan() {
            x
        } else if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }

    /// Projection of a scalar onto the non-negative half-line. NaN is
    /// propagated.
    pub fn positive_part<F: Float>(x: F) -> F {
        if x > F::zero() || x.is_nan() {
            x
        } else {
            F::zero()
        }
    }

    /// Computes the L1-norm of a vector
    pub fn l1_norm<F: Float>(x: ArrayView1<F>) -> F {
        x.iter().map(|&xi| xi.abs()).sum()
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F) {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close<F: Float>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F) {
        assert_eq!(x.shape()[0], y.shape()[0]);
        assert_eq!(x.shape()[1], y.shape()[1]);
        for i in 0..x.shape()[0] {
            for j in 0..x.shape()[1] {
                if x[[i, j]].abs_diff_ne(&y[[i, j]], delta) {
                    panic!(
                        "x: {}, y: {} ; with precision level {}",
                        x[[i, j]],
                        y[[i, j]],
                        delta
                    );
                }
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Draws a standard gaussian vector, scaled by `scale`.
    pub fn generate_random_vector(size: usize, scale: f64, seed: u64) -> Array1<f64> {
        Array1::from_vec(fill_random_vector(size, seed)) * scale
    }

    /// Draws a gaussian least-squares problem `y = X w + noise`.
    ///
    /// Only the first `n_informative` coefficients of the ground truth are
    /// non-zero.
    pub fn generate_sparse_regression(
        n_samples: usize,
        n_features: usize,
        n_informative: usize,
        seed: u64,
    ) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, seed);
        let x = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let mut true_w = Array1::<f64>::zeros(n_features);
        for j in 0..n_informative.min(n_features) {
            true_w[j] = if j % 2 == 0 { 2. } else { -1.5 };
        }
        let noise = generate_random_vector(n_samples, 0.1, seed + 1);
        let y = x.dot(&true_w) + noise;
        (x, y, true_w)
    }
}
