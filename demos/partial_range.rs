extern crate sparkle_prox;

use ndarray::array;
use sparkle_prox::{ParamGuard, Prox, ProxError, ProximalOperator};

fn main() -> Result<(), ProxError> {
    // Non-negative weights on the first three columns, the last one is an
    // unpenalized baseline.
    let params = Prox::<f64>::params()
        .penalty_constant(0.5)
        .application_range(0, 3)
        .positive(true)
        .check()?;
    let prox = Prox::from(params);
    prox.print_info();

    let theta = array![[0.8, -0.2, 0.1, -1.0], [1.6, 0.4, -0.7, 2.5]];
    let updated = prox.apply_matrix(theta.view(), 0.5)?;
    println!("before:\n{}\nafter:\n{}", theta, updated);

    let single = prox.apply(theta.row(1), 0.5)?;
    assert_eq!(single, updated.row(1));
    Ok(())
}
