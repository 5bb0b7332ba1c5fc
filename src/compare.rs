//! Side-by-side comparison of the splitting variants
//!
//! Times every variant on the built-in test cases, records heap activity per
//! pass, and checks that all variants emitted the same ranges before any
//! timing is trusted.

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::corpus;
use crate::matcher::Separator;
use crate::space;
use crate::split::{collect_ranges, BiasedSplit, GeneralSplit, RangeSplit, SimpleSplit, Variant};
use crate::SplitError;

/// Settings for [`run_comparison`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompareConfig {
    /// Timed passes per (variant, case)
    pub iterations: usize,
    /// Untimed passes run first
    pub warmup: usize,
    /// Indices into [`corpus::TEST_CASES`]
    pub cases: Vec<usize>,
    /// Element to split on
    pub separator: u8,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            warmup: 1_000,
            cases: (0..corpus::TEST_CASES.len()).collect(),
            separator: corpus::SEPARATOR,
        }
    }
}

impl CompareConfig {
    /// Configuration with `iterations` timed passes over every test case.
    pub fn new(iterations: usize) -> Result<Self, SplitError> {
        if iterations == 0 {
            return Err(SplitError::InvalidConfiguration(
                "iterations must be > 0".to_string(),
            ));
        }
        Ok(Self {
            iterations,
            ..Self::default()
        })
    }

    /// Set the number of warmup passes.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Restrict the run to the given test cases.
    pub fn with_cases(mut self, cases: Vec<usize>) -> Result<Self, SplitError> {
        self.cases = cases;
        self.validate()?;
        Ok(self)
    }

    /// Split on `separator` instead of the corpus default.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Check settings that may have been assigned directly.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.iterations == 0 {
            return Err(SplitError::InvalidConfiguration(
                "iterations must be > 0".to_string(),
            ));
        }
        if self.cases.is_empty() {
            return Err(SplitError::InvalidConfiguration(
                "at least one test case is required".to_string(),
            ));
        }
        if let Some(&case) = self
            .cases
            .iter()
            .find(|&&case| corpus::test_case(case).is_none())
        {
            return Err(SplitError::InvalidConfiguration(format!(
                "unknown test case {case} (have {})",
                corpus::TEST_CASES.len()
            )));
        }
        Ok(())
    }
}

/// Result for one (variant, case) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    /// Algorithm measured
    pub variant: Variant,
    /// Test case index
    pub case: usize,
    /// Length of the input in bytes
    pub input_len: usize,
    /// Segments emitted per pass
    pub segments: usize,
    /// Mean wall-clock nanoseconds per pass
    pub mean_nanos: f64,
    /// Mean allocations per pass
    pub allocations_per_pass: f64,
    /// Mean bytes allocated per pass
    pub bytes_per_pass: f64,
}

/// Outcome of [`run_comparison`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonReport {
    /// One entry per (case, variant), cases in configured order
    pub measurements: Vec<Measurement>,
    /// All variants emitted identical ranges on every case
    pub consistent: bool,
    /// Allocation columns are real measurements rather than zeros
    pub allocations_counted: bool,
    /// Timed passes per measurement
    pub iterations: usize,
}

impl ComparisonReport {
    /// Fastest variant on `case`.
    pub fn fastest(&self, case: usize) -> Option<&Measurement> {
        self.measurements
            .iter()
            .filter(|m| m.case == case)
            .min_by(|a, b| a.mean_nanos.total_cmp(&b.mean_nanos))
    }

    /// Fixed-width table of all measurements.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>8} | {:>4} | {:>6} | {:>8} | {:>12} | {:>10} | {:>10}",
            "variant", "case", "bytes", "segments", "ns/pass", "allocs", "alloc B"
        );
        let _ = writeln!(out, "{}", "-".repeat(78));
        for m in &self.measurements {
            let _ = writeln!(
                out,
                "{:>8} | {:>4} | {:>6} | {:>8} | {:>12.1} | {:>10} | {:>10}",
                m.variant.name(),
                m.case,
                m.input_len,
                m.segments,
                m.mean_nanos,
                self.allocation_cell(m.allocations_per_pass),
                self.allocation_cell(m.bytes_per_pass),
            );
        }
        if !self.consistent {
            let _ = writeln!(out, "\nWARNING: variants disagreed on emitted ranges");
        }
        out
    }

    fn allocation_cell(&self, value: f64) -> String {
        if self.allocations_counted {
            format!("{value:.2}")
        } else {
            "n/a".to_string()
        }
    }
}

/// Time every variant on every configured test case.
pub fn run_comparison(config: &CompareConfig) -> Result<ComparisonReport, SplitError> {
    config.validate()?;
    debug!(
        iterations = config.iterations,
        warmup = config.warmup,
        cases = ?config.cases,
        separator = %char::from(config.separator),
        "starting comparison"
    );

    let mut measurements = Vec::with_capacity(config.cases.len() * Variant::ALL.len());
    let mut consistent = true;

    for &case in &config.cases {
        let input = corpus::test_case(case)
            .ok_or_else(|| SplitError::InvalidConfiguration(format!("unknown test case {case}")))?
            .as_bytes();

        let reference = collect_ranges(Variant::Simple, input, Separator::element(config.separator))?;
        for variant in Variant::ALL {
            let ranges = collect_ranges(variant, input, Separator::element(config.separator))?;
            if ranges != reference {
                warn!(%variant, case, "ranges differ from the simple split");
                consistent = false;
            }

            let measurement = measure_variant(variant, case, input, config);
            info!(
                %variant,
                case,
                ns_per_pass = measurement.mean_nanos,
                allocs_per_pass = measurement.allocations_per_pass,
                "measured"
            );
            measurements.push(measurement);
        }
    }

    Ok(ComparisonReport {
        measurements,
        consistent,
        allocations_counted: space::counting_enabled(),
        iterations: config.iterations,
    })
}

fn measure_variant(
    variant: Variant,
    case: usize,
    input: &[u8],
    config: &CompareConfig,
) -> Measurement {
    run_passes(variant, input, config.separator, config.warmup);

    let started = Instant::now();
    let (segments, stats) =
        space::measure(|| run_passes(variant, input, config.separator, config.iterations));
    let elapsed = started.elapsed();

    let (allocations_per_pass, bytes_per_pass) = stats.per_pass(config.iterations);
    Measurement {
        variant,
        case,
        input_len: input.len(),
        segments,
        mean_nanos: elapsed.as_nanos() as f64 / config.iterations as f64,
        allocations_per_pass,
        bytes_per_pass,
    }
}

/// Run `passes` full splits and return the segment count of the last one.
fn run_passes(variant: Variant, input: &[u8], separator: u8, passes: usize) -> usize {
    let mut segments = 0;
    for _ in 0..passes {
        let input = black_box(input);
        let separator = black_box(separator);
        segments = match variant {
            Variant::Simple => drain(SimpleSplit::new(input, separator)),
            Variant::General => drain(GeneralSplit::new(input, Separator::element(separator))),
            Variant::Biased => drain(BiasedSplit::new(input, Separator::element(separator))),
        };
    }
    segments
}

#[inline]
fn drain<'a, S: RangeSplit<'a, u8>>(mut split: S) -> usize {
    let mut segments = 0;
    while split.advance() {
        black_box(split.current());
        segments += 1;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_iterations() {
        assert!(matches!(
            CompareConfig::new(0),
            Err(SplitError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_rejects_unknown_case() {
        let err = CompareConfig::new(1).unwrap().with_cases(vec![0, 7]).unwrap_err();
        assert_eq!(
            err,
            SplitError::InvalidConfiguration("unknown test case 7 (have 2)".to_string())
        );
        assert!(CompareConfig::new(1).unwrap().with_cases(vec![]).is_err());
    }

    #[test]
    fn comparison_covers_every_variant_and_case() {
        let config = CompareConfig::new(3).unwrap().with_warmup(1);
        let report = run_comparison(&config).unwrap();

        assert!(report.consistent);
        assert_eq!(report.measurements.len(), 6);
        assert_eq!(report.iterations, 3);
        for m in &report.measurements {
            let expected = if m.case == 0 { 26 } else { 8 };
            assert_eq!(m.segments, expected, "{} case {}", m.variant, m.case);
        }
        assert!(report.fastest(0).is_some());
        assert!(report.fastest(5).is_none());
    }

    #[test]
    fn render_lists_each_measurement() {
        let config = CompareConfig::new(1)
            .unwrap()
            .with_warmup(0)
            .with_cases(vec![1])
            .unwrap();
        let table = run_comparison(&config).unwrap().render();
        assert_eq!(table.lines().count(), 2 + Variant::ALL.len());
        for variant in Variant::ALL {
            assert!(table.contains(variant.name()));
        }
        assert!(!table.contains("WARNING"));
    }

    #[test]
    fn custom_separator() {
        let config = CompareConfig::new(1)
            .unwrap()
            .with_separator(b'z')
            .with_cases(vec![1])
            .unwrap();
        let report = run_comparison(&config).unwrap();
        assert!(report.measurements.iter().all(|m| m.segments == 1));
    }
}
