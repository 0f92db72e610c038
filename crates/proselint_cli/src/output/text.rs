//! Text output formatter

use std::collections::HashMap;
use std::time::Duration;

use proselint_core::Finding;

use super::FileReport;

pub fn output_text(reports: &[FileReport], details: bool) {
    for report in reports {
        for finding in &report.result.errors {
            println!("{}", format_finding(&report.path, finding));
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.result.errors.len()).sum();

    println!();
    println!("Checked {} files, found {} issues", total_files, total_issues);

    if details {
        output_timings(reports);
    }
}

/// `path:line:column severity [checkId] message (suggest: a, b)`
fn format_finding(path: &str, finding: &Finding) -> String {
    let mut line = format!(
        "{}:{}:{} {} [{}] {}",
        path,
        finding.line(),
        finding.column(),
        finding.severity,
        finding.check_id,
        finding.message
    );
    if !finding.replacements.is_empty() {
        line.push_str(&format!(" (suggest: {})", finding.replacements.join(", ")));
    }
    line
}

fn output_timings(reports: &[FileReport]) {
    let mut total_duration = Duration::new(0, 0);
    let mut check_timings: HashMap<&str, Duration> = HashMap::new();

    for check_result in reports.iter().flat_map(|r| r.check_results.iter().flatten()) {
        *check_timings
            .entry(check_result.check_id.as_str())
            .or_default() += check_result.execution_time;
        total_duration += check_result.execution_time;
    }

    if check_timings.is_empty() {
        return;
    }

    println!("\nPerformance Timings:");
    println!("{:<30} | {:<15} | {:<10}", "Check", "Duration", "%");
    println!("{:-<30}-+-{:-<15}-+-{:-<10}", "", "", "");

    let mut sorted_timings: Vec<_> = check_timings.into_iter().collect();
    sorted_timings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    for (check, duration) in sorted_timings {
        let percentage = if total_duration.as_secs_f64() > 0.0 {
            (duration.as_secs_f64() / total_duration.as_secs_f64()) * 100.0
        } else {
            0.0
        };
        println!("{:<30} | {:<15?} | {:<10.1}%", check, duration, percentage);
    }
    println!("{:-<30}-+-{:-<15}-+-{:-<10}", "", "", "");
    println!("{:<30} | {:<15?}", "Total", total_duration);
}
