//! Panic hook that prints a short crash report to stderr.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BORDER: &str = "════════════════════════════════════════════════════════════";

/// Install the crash report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let message = extract_panic_message(info);
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));

    eprintln!();
    eprintln!("{BORDER}");
    eprintln!("renalcalc crash report");
    eprintln!("{BORDER}");
    eprintln!("Version:  {VERSION}");
    eprintln!("Platform: {}", std::env::consts::OS);
    eprintln!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("Panic:    {}", truncate(&message, 200));
    if let Some(location) = location {
        eprintln!("Location: {location}");
    }
    if let Some(span) = tracing::Span::current().metadata() {
        eprintln!("Span:     {}", span.name());
    }
    eprintln!("{BORDER}");

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for a stack trace");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

// Counts chars, not bytes, so multi-byte labels like "kg/m²" never split.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_are_kept() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn long_messages_are_cut_with_ellipsis() {
        let result = truncate("this is a long string that needs truncation", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        assert_eq!(truncate("BMI kg/m² value", 8), "BMI k...");
        assert_eq!(truncate("m²m²m²m²", 5), "m²...");
    }
}
