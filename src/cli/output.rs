//! Plain-text output helpers for the CLI

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n=== {title} ===");
}

/// Print a key-value line
pub fn print_kv(key: &str, value: impl std::fmt::Display) {
    println!("  {key:<16} {value}");
}

/// Group digits with thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549946), "549,946");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
