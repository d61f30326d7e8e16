use ContinuousDistributions::{distributions::*, errors::DistributionError};

fn main() -> Result<(), DistributionError> {
    println!("*****************************************************************\n\
    This script shows how to use the catalog. Every function takes the \
    parameters of the distribution followed by the point and returns a Result. \n");

    println!("P(2 <= U <= 6) for U ~ Uniform(0, 10): {}", uniform_interval(0.0, 10.0, 2.0, 6.0)?);
    println!("Pareto(2, 1) cdf at 2: \t{}", pareto_cdf(2.0, 1.0, 2.0)?);
    println!("Weibull(1.5, 2) pdf at 1: \t{:.6}", weibull_pdf(1.5, 2.0, 1.0)?);
    println!("Laplace(0, 1) pdf at 0: \t{}", laplace_pdf(0.0, 1.0, 0.0)?);
    println!("Logistic(0, 1) cdf at 0: \t{}", logistic_cdf(0.0, 1.0, 0.0)?);
    println!("Log-logistic(1, 1) cdf at 1: \t{}", log_logistic_cdf(1.0, 1.0, 1.0)?);
    println!("Beta(2, 2) pdf at 0.5: \t{:.6}", beta_pdf(2.0, 2.0, 0.5)?);
    println!("Weibull(1.5, 2) median: \t{:.6}", weibull_quantile(1.5, 2.0, 0.5)?);

    println!("\nInvalid arguments are reported as errors: ");
    match laplace_pdf(0.0, -1.0, 0.0) {
        Ok(v) => println!("unexpected value {v}"),
        Err(e) => println!("{e}"),
    }

    return Ok(());
}
