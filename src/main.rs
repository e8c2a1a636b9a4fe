//! One-shot analysis run: generate the synthetic dataset, fit the
//! hierarchical model, and print every diagnostic to the terminal.

use colored::Colorize;

use tankfit::{output, Analysis, Dataset, DEFAULT_SEED};

fn main() -> tankfit::Result<()> {
    let dataset = Dataset::synthetic(DEFAULT_SEED);
    println!(
        "{} {} observations, {} regions, seed {}\n",
        "dataset:".bold(),
        dataset.len(),
        dataset.n_regions(),
        DEFAULT_SEED
    );

    let fit = Analysis::new()
        .draws(2000)
        .burn_in(1000)
        .chains(4)
        .seed(DEFAULT_SEED)
        .run(&dataset)?;

    println!(
        "{} {} chains x {} draws, acceptance {}",
        "trace:".bold(),
        fit.trace.n_chains(),
        fit.trace.n_draws(),
        fit.trace
            .acceptance_rates()
            .iter()
            .map(|r| format!("{r:.2}"))
            .collect::<Vec<_>>()
            .join(" / ")
    );
    println!();

    println!("{}", output::format_summary(&fit.summary, 0.94));

    // Marginal posteriors, grouped the way the parameters are declared.
    println!("{}\n", "Global parameters".bold());
    for name in ["mu_c", "sigma_c"] {
        print_density(&fit, name);
    }

    println!("{}\n", "Region effects".bold());
    for region in tankfit::Region::ALL {
        print_density(&fit, &format!("region_effect[{region}]"));
    }

    println!("{}\n", "Covariate coefficients".bold());
    for name in ["tank_level_coeff", "temperature_coeff", "usage_rate_coeff"] {
        print_density(&fit, name);
    }

    println!("{}\n", "Trace".bold());
    for param in 0..fit.trace.n_params() {
        println!("{}", output::trace_plot(&fit.trace, param));
    }

    let observed = fit.model.observed();
    fit.predictive.validate_against(observed)?;
    println!(
        "{} {} observed / {} predicted",
        "posterior predictive:".bold(),
        observed.len(),
        fit.predictive.len()
    );
    println!();
    println!("{}", output::scatter_plot(observed, fit.predictive.mean()));

    Ok(())
}

fn print_density(fit: &tankfit::Fit, name: &str) {
    if let Some(param) = fit.trace.name_index(name) {
        let pooled = fit.trace.pooled_parameter(param);
        println!("{}", output::density_plot(name, &pooled));
    }
}
