//! Formatting utilities used for CLI output and the briefing text.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Shortest decimal form of an hour amount: `7.5`, `7`, `0`.
pub fn format_hours(h: f64) -> String {
    format!("{}", h)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
