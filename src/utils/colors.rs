/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Accomplished days render green, pending days grey.
pub fn color_for_status(accomplished: bool) -> &'static str {
    if accomplished { GREEN } else { GREY }
}

/// Completion-rate color: full month green, partial yellow, empty grey.
pub fn color_for_rate(done: usize, total: usize) -> &'static str {
    if total > 0 && done == total {
        GREEN
    } else if done > 0 {
        YELLOW
    } else {
        GREY
    }
}
