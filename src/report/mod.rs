//! Reporting: text formatting and JSON summaries.

pub mod format;

pub use format::*;

use crate::domain::{ConvergenceReport, ConvergenceRow, DerivativeMethod, Estimates, RunSummary, StripParams};
use crate::error::AppError;
use crate::surface::MobiusStrip;

/// Tool name stamped into JSON output.
pub const TOOL: &str = "mobius";

/// Build the serializable summary for one strip.
pub fn run_summary(strip: &MobiusStrip, estimates: &Estimates) -> RunSummary {
    RunSummary {
        tool: TOOL.to_string(),
        params: *strip.params(),
        du: strip.du(),
        dv: strip.dv(),
        estimates: *estimates,
    }
}

pub fn convergence_report(base: &StripParams, method: DerivativeMethod, rows: &[ConvergenceRow]) -> ConvergenceReport {
    ConvergenceReport {
        tool: TOOL.to_string(),
        radius: base.radius,
        width: base.width,
        method,
        rows: rows.to_vec(),
    }
}

/// Pretty JSON for any report type.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::new(4, format!("Failed to encode JSON report: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;

    #[test]
    fn json_summary_round_trips_params_and_estimates() {
        let strip = MobiusStrip::new(StripParams::new(3.0, 1.0, 20)).unwrap();
        let est = estimate(&strip, DerivativeMethod::FiniteDifference);
        let json = to_json(&run_summary(&strip, &est)).unwrap();

        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tool, "mobius");
        assert_eq!(back.params, *strip.params());
        assert_eq!(back.estimates, est);
        assert!(json.contains("\"method\": \"finite-difference\""));
    }
}
