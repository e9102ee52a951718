extern crate sparkle_prox;

use ndarray::{Array1, Array2};
use sparkle_prox::{
    helpers::test_helpers::generate_sparse_regression, Prox, ProxError, ProximalOperator,
};

/// Largest eigenvalue of `X^T X / n_samples`, by power iteration
fn lipschitz_constant(x: &Array2<f64>) -> f64 {
    let n_samples = x.nrows() as f64;
    let mut v = Array1::<f64>::ones(x.ncols());
    for _ in 0..100 {
        let w = x.t().dot(&x.dot(&v)) / n_samples;
        v = &w / w.dot(&w).sqrt();
    }
    let xv = x.dot(&v);
    xv.dot(&xv) / n_samples
}

fn main() -> Result<(), ProxError> {
    let (x, y, true_w) = generate_sparse_regression(50, 20, 4, 42);
    let n_samples = x.nrows() as f64;

    let mut prox = Prox::l1(false);
    prox.set_penalty_constant(0.05)?;
    prox.set_application_range(0, x.ncols())?;
    prox.print_info();

    let step_size = 1. / lipschitz_constant(&x);
    let mut w = Array1::<f64>::zeros(x.ncols());
    for epoch in 0..500 {
        let residuals = x.dot(&w) - &y;
        let grad = x.t().dot(&residuals) / n_samples;
        w = prox.apply((&w - &(grad * step_size)).view(), step_size)?;

        if epoch % 100 == 0 {
            let residuals = x.dot(&w) - &y;
            let objective = residuals.dot(&residuals) / (2. * n_samples) + prox.value(w.view())?;
            println!("Epoch {}, objective {:.6}", epoch, objective);
        }
    }

    println!("true coefficients:      {:.3}", true_w);
    println!("estimated coefficients: {:.3}", w);
    Ok(())
}
