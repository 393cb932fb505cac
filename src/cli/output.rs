//! Output formatting for CLI commands.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::cli::args::SentimentArgs;
use crate::error::Result;
use crate::eval::Evaluation;
use crate::experiment::{BalancedRun, DiagnosisRun};

/// Print the diagnosis run to stdout.
pub fn output_diagnosis(run: &DiagnosisRun, args: &SentimentArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_diagnosis(run, args.verbosity()).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print the balanced run to stdout.
pub fn output_balanced(run: &BalancedRun, args: &SentimentArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_balanced(run, args.verbosity()).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Human-readable rendering of a diagnosis run.
///
/// Split headings are only shown above the normal verbosity.
pub fn render_diagnosis(run: &DiagnosisRun, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity > 1 {
        let (train, validation, test) = run.sizes;
        let _ = writeln!(out, "Split sizes: train={train}, validation={validation}, test={test}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Validation set");
    }
    render_evaluation(&mut out, &run.validation);
    if verbosity > 1 {
        let _ = writeln!(out, "Test set");
    }
    render_evaluation(&mut out, &run.test);
    let _ = writeln!(out, "{}", run.diagnosis);
    out
}

/// Human-readable rendering of a balanced run.
pub fn render_balanced(run: &BalancedRun, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity > 1 {
        let (train, test) = run.sizes;
        let _ = writeln!(out, "Split sizes: train={train}, test={test}");
        let _ = writeln!(out);
    }
    render_evaluation(&mut out, &run.test);
    out
}

fn render_evaluation(out: &mut String, evaluation: &Evaluation) {
    let _ = writeln!(out, "Confusion Matrix: ");
    let _ = writeln!(out, "{}", evaluation.confusion_matrix);
    let _ = writeln!(out);
    let _ = writeln!(out, "Classification scores: ");
    let _ = writeln!(out, "{}", evaluation.report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Diagnosis, evaluate};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run() -> DiagnosisRun {
        let y_true = strings(&["negative", "positive", "positive", "positive"]);
        let y_pred = strings(&["negative", "negative", "positive", "positive"]);
        let evaluation = evaluate(&y_true, &y_pred).unwrap();
        DiagnosisRun {
            sizes: (32, 4, 4),
            validation: evaluation.clone(),
            test: evaluation,
            diagnosis: Diagnosis::from_counts(1, 1),
        }
    }

    #[test]
    fn test_render_diagnosis() {
        let text = render_diagnosis(&run(), 1);

        assert!(text.starts_with("Confusion Matrix: \n[[1 0]\n [1 2]]\n"));
        assert_eq!(text.matches("Classification scores: ").count(), 2);
        assert!(text.contains("Bias Level: Medium (Value: 1)\n"));
        assert!(text.contains("Variance Level: Medium (Value: 1)\n"));
        assert!(text.ends_with("Model Fit: Underfit\n"));
        assert!(!text.contains("Split sizes"));
    }

    #[test]
    fn test_render_verbose_headings() {
        let text = render_diagnosis(&run(), 2);
        assert!(text.starts_with("Split sizes: train=32, validation=4, test=4\n"));
        assert!(text.contains("Validation set\n"));
        assert!(text.contains("Test set\n"));
    }

    #[test]
    fn test_render_balanced() {
        let run = run();
        let balanced = BalancedRun {
            sizes: (4, 4),
            test: run.test,
        };
        let text = render_balanced(&balanced, 1);
        assert!(text.starts_with("Confusion Matrix: "));
        assert!(!text.contains("Model Fit"));
    }
}
