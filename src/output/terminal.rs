//! Terminal summary-table formatting with colors and box drawing.

use colored::Colorize;

use crate::diagnostics::SummaryRow;

const BOX_WIDTH: usize = 86;

/// Format the posterior summary table for human-readable terminal output.
///
/// One row per parameter: mean, sd, credible interval, ESS, and split-R̂.
/// R̂ is colored by convergence quality (green below 1.01, yellow below
/// 1.05, red otherwise).
pub fn format_summary(rows: &[SummaryRow], credible_mass: f64) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(
        &"Posterior summary".bold().to_string(),
    ));
    output.push_str(&format_box_separator());

    let pct = credible_mass * 100.0;
    let header = format!(
        "{:<24} {:>9} {:>8} {:>9} {:>9} {:>8} {:>6}",
        "parameter",
        "mean",
        "sd",
        format!("{pct:.0}% low"),
        format!("{pct:.0}% high"),
        "ess",
        "r_hat",
    );
    output.push_str(&format_box_line(&header.dimmed().to_string()));

    for row in rows {
        let line = format!(
            "{:<24} {:>9.2} {:>8.2} {:>9.2} {:>9.2} {:>8.0} {}",
            row.name,
            row.mean,
            row.sd,
            row.ci_low,
            row.ci_high,
            row.ess,
            format_rhat(row.r_hat),
        );
        output.push_str(&format_box_line(&line));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Color R̂ by how far it sits from 1.
fn format_rhat(r_hat: f64) -> String {
    let text = format!("{r_hat:>6.3}");
    if r_hat < 1.01 {
        text.green().to_string()
    } else if r_hat < 1.05 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

// Box drawing helpers

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = BOX_WIDTH.saturating_sub(2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(name: &str, r_hat: f64) -> SummaryRow {
        SummaryRow {
            name: name.to_string(),
            mean: 350.0,
            sd: 42.0,
            ci_low: 270.0,
            ci_high: 430.0,
            ess: 1234.0,
            r_hat,
        }
    }

    #[test]
    fn test_summary_contains_every_parameter() {
        let rows = vec![make_row("mu_c", 1.001), make_row("sigma_c", 1.002)];
        let output = format_summary(&rows, 0.94);
        assert!(output.contains("mu_c"));
        assert!(output.contains("sigma_c"));
        assert!(output.contains("94% low"));
    }

    #[test]
    fn test_box_lines_share_width() {
        let rows = vec![make_row("mu_c", 1.2)];
        let output = format_summary(&rows, 0.94);
        let widths: Vec<usize> = output
            .lines()
            .map(|l| strip_ansi_codes(l).chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged box: {widths:?}");
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
