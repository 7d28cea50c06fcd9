use colored::*;
use searchsort::{Outcome, Report};

/// Format a finished run as the result text block: heading, outcome,
/// the sorted order when binary search imposed one, time, and complexity.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", report.algorithm.title().cyan().bold()));
    match &report.outcome {
        Outcome::Found(index) => {
            out.push_str(&format!("{} at index {index}\n", "Found".green().bold()));
        }
        Outcome::NotFound => out.push_str(&format!("{}\n", "Not found".yellow())),
        Outcome::Sorted(seq) => out.push_str(&format!("{seq:?}\n")),
    }
    if let Some(sorted) = &report.sorted_input {
        out.push_str(&format!("Sorted Array: {sorted:?}\n"));
    }
    out.push_str(&format!("Time: {} ns\n", report.elapsed_ns));
    out.push_str(&format!("Time Complexity: {}\n", report.complexity));
    out
}
