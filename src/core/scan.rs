//! Bounded prefix/suffix scans over line slices.

/// Length of the run at the start of `lines` where `pred` holds.
pub fn leading_run<F>(lines: &[String], pred: F) -> usize
where
    F: Fn(&str) -> bool,
{
    let mut count = 0;
    while count < lines.len() && pred(&lines[count]) {
        count += 1;
    }
    count
}

/// Length of the run at the end of `lines` where `pred` holds.
pub fn trailing_run<F>(lines: &[String], pred: F) -> usize
where
    F: Fn(&str) -> bool,
{
    let mut count = 0;
    while count < lines.len() && pred(&lines[lines.len() - 1 - count]) {
        count += 1;
    }
    count
}
