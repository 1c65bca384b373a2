// Templated report rendering. These are deliberately non-AI placeholder
// templates: the only computed values are the entry count, the first 300
// characters of the concatenated text, and the total character count. The
// surrounding text is fixed boilerplate that clients display verbatim.

use super::Entry;

const SUMMARY_PREVIEW_CHARS: usize = 300;

pub fn render_summary(date: &str, entries: &[Entry]) -> String {
    let all_text = entries
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = all_text.chars().take(SUMMARY_PREVIEW_CHARS).collect();

    format!(
        "Daily Summary for {}:\n\n\
         Total reflections: {}\n\n\
         Key thoughts:\n{}...\n\n\
         Focus areas: Self-reflection, Daily growth, Personal insights",
        date,
        entries.len(),
        preview
    )
}

pub fn render_insights(date: &str, entries: &[Entry]) -> String {
    let total_chars: usize = entries.iter().map(|e| e.text.chars().count()).sum();

    format!(
        "Insights for {}:\n\n\
         \u{1F4CA} Entry count: {} reflections\n\
         \u{1F4DD} Total characters: {}\n\
         \u{1F4A1} Key theme: Personal growth and self-awareness\n\
         \u{1F3AF} Recommended focus: Continue daily reflection practice\n",
        date,
        entries.len(),
        total_chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(text: &str) -> Entry {
        Entry {
            timestamp: Utc::now(),
            text: text.to_string(),
        }
    }

    #[test]
    fn summary_reports_count_and_joined_text() {
        let entries = vec![entry("Felt good today"), entry("Slept well")];
        let summary = render_summary("2024-01-01", &entries);

        assert!(summary.starts_with("Daily Summary for 2024-01-01:"));
        assert!(summary.contains("Total reflections: 2"));
        assert!(summary.contains("Felt good today Slept well..."));
        assert!(summary.ends_with(
            "Focus areas: Self-reflection, Daily growth, Personal insights"
        ));
    }

    #[test]
    fn summary_truncates_to_300_characters() {
        let entries = vec![entry(&"a".repeat(450))];
        let summary = render_summary("2024-01-01", &entries);

        assert!(summary.contains(&format!("{}...", "a".repeat(300))));
        assert!(!summary.contains(&"a".repeat(301)));
    }

    #[test]
    fn summary_truncation_counts_characters_not_bytes() {
        // 400 two-byte characters; a byte-based slice would split mid-codepoint
        let entries = vec![entry(&"é".repeat(400))];
        let summary = render_summary("2024-01-01", &entries);

        assert!(summary.contains(&format!("{}...", "é".repeat(300))));
    }

    #[test]
    fn insights_reports_count_and_total_characters() {
        let entries = vec![entry("abcd"), entry("éé")];
        let insights = render_insights("2024-01-02", &entries);

        assert!(insights.starts_with("Insights for 2024-01-02:"));
        assert!(insights.contains("Entry count: 2 reflections"));
        // character count, not byte count: 4 + 2
        assert!(insights.contains("Total characters: 6"));
        assert!(insights.contains("Recommended focus: Continue daily reflection practice"));
    }
}
