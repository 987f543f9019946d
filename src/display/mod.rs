//! Display formatting for terminal output
//!
//! Lists are rendered as `tabled` tables; single records and summaries as
//! plain aligned text.

pub mod category;
pub mod expense;
pub mod recurring;

pub use category::{format_category_details, format_category_list};
pub use expense::{format_expense_details, format_expense_list};
pub use recurring::format_recurring_list;

/// Shorten `s` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mercado", 10), "Mercado");
        assert_eq!(truncate("Servicio Doméstico", 10), "Servici...");
        assert_eq!(truncate("Lavandería", 2), "..");
    }
}
