//! Transient user notices
//!
//! Success and error feedback lines, colored for terminal display.

/// Kind of feedback being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Format a notice line with color hints for terminal display
pub fn format_notice(kind: NoticeKind, message: &str) -> String {
    match kind {
        NoticeKind::Success => format!("\x1b[32m✓ {}\x1b[0m", message),
        NoticeKind::Error => format!("\x1b[31m✗ {}\x1b[0m", message),
    }
}

/// Print a success notice to stdout
pub fn success(message: &str) {
    println!("{}", format_notice(NoticeKind::Success, message));
}

/// Print an error notice to stderr
pub fn error(message: &str) {
    eprintln!("{}", format_notice(NoticeKind::Error, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_green_with_check() {
        let line = format_notice(NoticeKind::Success, "Tabungan berhasil disimpan!");
        assert!(line.starts_with("\x1b[32m✓"));
        assert!(line.contains("Tabungan berhasil disimpan!"));
        assert!(line.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_error_is_red_with_cross() {
        let line = format_notice(NoticeKind::Error, "Format file backup tidak valid");
        assert!(line.starts_with("\x1b[31m✗"));
        assert!(line.contains("Format file backup tidak valid"));
    }
}
