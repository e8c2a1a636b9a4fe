//! Terminal renderings of posterior, trace, and predictive-fit plots.
//!
//! The analysis is console-only, so plots are Unicode: horizontal-bar
//! histograms for marginal posteriors, per-chain sparklines for trace
//! inspection, and a character grid for the observed-vs-predicted scatter.

use crate::sampler::Trace;

const SPARK_BLOCKS: [char; 8] = ['\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}'];

/// Default number of histogram bins for density plots.
const DENSITY_BINS: usize = 12;

/// Bar width (characters) of the largest histogram bin.
const DENSITY_WIDTH: usize = 40;

/// Sparkline width for trace plots.
const TRACE_WIDTH: usize = 64;

/// Render a marginal posterior density as a horizontal-bar histogram.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn density_plot(name: &str, samples: &[f64]) -> String {
    assert!(!samples.is_empty(), "cannot plot empty sample");

    let (lo, hi) = bounds(samples);
    let span = (hi - lo).max(f64::MIN_POSITIVE);
    let mut counts = vec![0usize; DENSITY_BINS];
    for &x in samples {
        let bin = (((x - lo) / span) * DENSITY_BINS as f64) as usize;
        counts[bin.min(DENSITY_BINS - 1)] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    let mut out = format!("{name}\n");
    for (bin, &count) in counts.iter().enumerate() {
        let left = lo + span * bin as f64 / DENSITY_BINS as f64;
        let bar_len = (count * DENSITY_WIDTH).div_ceil(peak);
        let bar = "\u{2588}".repeat(if count == 0 { 0 } else { bar_len });
        out.push_str(&format!("{left:>10.1} \u{2502}{bar}\n"));
    }
    out
}

/// Render the per-chain sample sequence of one parameter as sparklines.
///
/// Each chain gets one line; all lines share the parameter's global value
/// range, so diverging chains are visible as sparklines living at
/// different heights.
pub fn trace_plot(trace: &Trace, param: usize) -> String {
    let name = &trace.names()[param];
    let pooled = trace.pooled_parameter(param);
    if pooled.is_empty() {
        return format!("{name}: (no draws)\n");
    }
    let (lo, hi) = bounds(&pooled);
    let span = (hi - lo).max(f64::MIN_POSITIVE);

    let mut out = format!("{name}  [{lo:.1}, {hi:.1}]\n");
    for chain in 0..trace.n_chains() {
        let series = trace.chain_parameter(chain, param);
        let line: String = downsample(&series, TRACE_WIDTH)
            .into_iter()
            .map(|v| {
                let level = (((v - lo) / span) * (SPARK_BLOCKS.len() as f64 - 1.0)).round();
                SPARK_BLOCKS[(level as usize).min(SPARK_BLOCKS.len() - 1)]
            })
            .collect();
        out.push_str(&format!("  chain {chain} {line}\n"));
    }
    out
}

/// Render an observed-vs-predicted scatter on a shared-axis grid.
///
/// Both axes use the combined value range so the `y = x` reference
/// diagonal (drawn with `·`) means "perfect fit". Points are drawn
/// with `●` and overwrite the diagonal.
///
/// # Panics
///
/// Panics if `observed` and `predicted` have different lengths or are
/// empty; callers validate the shape invariant first.
pub fn scatter_plot(observed: &[f64], predicted: &[f64]) -> String {
    assert_eq!(
        observed.len(),
        predicted.len(),
        "scatter requires matching lengths"
    );
    assert!(!observed.is_empty(), "cannot plot empty scatter");

    const WIDTH: usize = 56;
    const HEIGHT: usize = 18;

    let mut all: Vec<f64> = observed.to_vec();
    all.extend_from_slice(predicted);
    let (lo, hi) = bounds(&all);
    let span = (hi - lo).max(f64::MIN_POSITIVE);

    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

    // y = x reference diagonal.
    for col in 0..WIDTH {
        let row = (col as f64 / (WIDTH - 1) as f64 * (HEIGHT - 1) as f64).round() as usize;
        grid[HEIGHT - 1 - row][col] = '\u{00B7}';
    }

    for (&x, &y) in observed.iter().zip(predicted) {
        let col = (((x - lo) / span) * (WIDTH - 1) as f64).round() as usize;
        let row = (((y - lo) / span) * (HEIGHT - 1) as f64).round() as usize;
        grid[HEIGHT - 1 - row.min(HEIGHT - 1)][col.min(WIDTH - 1)] = '\u{25CF}';
    }

    let mut out = String::from("predicted consumption\n");
    for (i, row) in grid.iter().enumerate() {
        let line: String = row.iter().collect();
        if i == 0 {
            out.push_str(&format!("{hi:>8.0} \u{2502}{line}\n"));
        } else if i == HEIGHT - 1 {
            out.push_str(&format!("{lo:>8.0} \u{2502}{line}\n"));
        } else {
            out.push_str(&format!("         \u{2502}{line}\n"));
        }
    }
    out.push_str(&format!(
        "         \u{2514}{}\n",
        "\u{2500}".repeat(WIDTH)
    ));
    out.push_str(&format!(
        "          {lo:<10.0}{pad}{hi:>10.0}  actual consumption\n",
        pad = " ".repeat(WIDTH.saturating_sub(20))
    ));
    out
}

/// Reduce a series to `width` bucket means.
fn downsample(series: &[f64], width: usize) -> Vec<f64> {
    if series.len() <= width {
        return series.to_vec();
    }
    (0..width)
        .map(|i| {
            let start = i * series.len() / width;
            let end = ((i + 1) * series.len() / width).max(start + 1);
            let bucket = &series[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

fn bounds(data: &[f64]) -> (f64, f64) {
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}
