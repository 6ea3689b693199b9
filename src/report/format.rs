//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the numerical code stays clean and testable
//! - output changes are localized

use crate::domain::{ConvergenceRow, DerivativeMethod, Estimates, StripParams};

/// Parameter header plus the two estimates.
pub fn format_run_summary(params: &StripParams, estimates: &Estimates) -> String {
    let mut out = String::new();

    out.push_str("=== mobius - Mobius strip surface model ===\n");
    out.push_str(&format_params(params));
    out.push_str(&format!("Method: {}\n", estimates.method.display_name()));
    out.push_str("-----------------------------------------------------\n");
    out.push_str(&format!(
        "Approximate Surface Area: {:.4} units²\n",
        estimates.surface_area
    ));
    out.push_str(&format!(
        "Approximate Edge Length: {:.4} units\n",
        estimates.edge_length
    ));

    out
}

/// Table of estimates per resolution with the change from the previous rung.
pub fn format_convergence(radius: f64, width: f64, method: DerivativeMethod, rows: &[ConvergenceRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Convergence: R={radius:.3} w={width:.3} | {}\n",
        method.display_name()
    ));
    out.push_str(
        format!(
            "{:>8} {:>14} {:>12} {:>14} {:>12}",
            "n", "area", "d_area", "edge", "d_edge"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:->8} {:->14} {:->12} {:->14} {:->12}", "", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>8} {:>14.6} {:>12} {:>14.6} {:>12}",
                r.resolution,
                r.surface_area,
                fmt_delta(r.area_delta),
                r.edge_length,
                fmt_delta(r.edge_delta),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn format_params(params: &StripParams) -> String {
    format!(
        "Parameters: R={:.3} w={:.3} n={}\n",
        params.radius, params.width, params.resolution
    )
}

fn fmt_delta(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:+.6}"),
        _ => "-".to_string(),
    }
}
