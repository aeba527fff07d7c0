//! Text rendering of a [`Compliance`] report.

use crate::config::ReportConfig;
use crate::ui::UserInterface;

use super::compliance::Compliance;

/// Write the report: summary, category breakdown, other, recent additions.
pub fn render(report: &Compliance, config: &ReportConfig, ui: &mut dyn UserInterface) {
    render_summary(report, config, ui);
    render_missing(report, config, ui);
    render_verdict(report, ui);
    if let Some(recent) = &report.recent {
        ui.message("");
        ui.message("RECENT ADDITIONS WORKING:");
        let working: Vec<&str> = recent.working.iter().map(|w| w.as_str()).collect();
        ui.success(&format!(
            "{} new words implemented: {}",
            working.len(),
            working.join(", ")
        ));
    }
}

fn render_summary(report: &Compliance, config: &ReportConfig, ui: &mut dyn UserInterface) {
    ui.show_header(&config.title);
    ui.message(&format!("Current interpreter words: {}", report.current_count));
    ui.message(&format!(
        "ANSI Core words required: {}",
        report.reference_count
    ));
    ui.message(&format!(
        "Actual compliance: {}/{} = {}%",
        report.implemented.len(),
        report.reference_count,
        report.percentage
    ));
    ui.message(&format!("Missing words: {}", report.missing.len()));
}

fn render_missing(report: &Compliance, config: &ReportConfig, ui: &mut dyn UserInterface) {
    if !report.missing.is_empty() {
        ui.message("");
        ui.show_header(&format!(
            "MISSING ANSI CORE WORDS ({})",
            report.missing.len()
        ));

        for category in &report.categories {
            ui.message("");
            ui.message(&format!("{} ({}):", category.name, category.words.len()));
            for word in &category.words {
                ui.message(&format!("  {}", word));
            }
        }
    }

    if !report.other.is_empty() || config.show_empty_other {
        ui.message("");
        ui.message("OTHER MISSING:");
        for word in &report.other {
            ui.message(&format!("  {}", word));
        }
    }
}

fn render_verdict(report: &Compliance, ui: &mut dyn UserInterface) {
    ui.message("");
    if report.is_complete() {
        ui.success("100% ANSI CORE compliance achieved!");
    } else {
        ui.warning(&format!(
            "Need {} more words for full ANSI CORE compliance",
            report.missing.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::words::{
        word_set, Category, CategoryMap, Keyword, ANSI_CORE_WORDS, LITERAL_CURRENT_WORDS,
        RECENT_ADDITIONS,
    };

    fn literal_report() -> Compliance {
        Compliance::compute(
            &word_set(ANSI_CORE_WORDS),
            &word_set(LITERAL_CURRENT_WORDS),
            &CategoryMap::ansi_core(),
        )
        .unwrap()
    }

    #[test]
    fn summary_lines_come_first() {
        let mut ui = MockUI::new();
        render(&literal_report(), &ReportConfig::default(), &mut ui);

        assert_eq!(
            &ui.lines()[..5],
            &[
                "ANSI COMPLIANCE REALITY CHECK",
                "Current interpreter words: 90",
                "ANSI Core words required: 133",
                "Actual compliance: 73/133 = 54%",
                "Missing words: 60",
            ]
        );
    }

    #[test]
    fn sections_appear_in_order() {
        let candidates: Vec<Keyword> = RECENT_ADDITIONS.iter().map(Keyword::new).collect();
        let report = literal_report().with_recent_additions(&candidates);
        let mut ui = MockUI::new();
        render(&report, &ReportConfig::default(), &mut ui);

        let missing = ui.position("MISSING ANSI CORE WORDS (60)").unwrap();
        let numeric = ui.position("Numeric Output (8):").unwrap();
        let advanced = ui.position("Advanced (2):").unwrap();
        let other = ui.position("OTHER MISSING:").unwrap();
        let verdict = ui
            .position("Need 60 more words for full ANSI CORE compliance")
            .unwrap();
        let recent = ui.position("RECENT ADDITIONS WORKING:").unwrap();

        assert!(missing < numeric);
        assert!(numeric < advanced);
        assert!(advanced < other);
        assert!(other < verdict);
        assert!(verdict < recent);
    }

    #[test]
    fn category_words_are_indented_and_sorted() {
        let mut ui = MockUI::new();
        render(&literal_report(), &ReportConfig::default(), &mut ui);

        let start = ui.position("Numeric Output (8):").unwrap();
        assert_eq!(
            &ui.lines()[start + 1..start + 9],
            &["  #", "  #>", "  #S", "  <#", "  HOLD", "  S>D", "  SIGN", "  U."]
        );
    }

    #[test]
    fn fully_implemented_categories_are_omitted() {
        let reference = word_set(["DUP", "DROP"]);
        let categories = CategoryMap::new(vec![
            Category::new("Stack", ["DUP"]),
            Category::new("More", ["DROP"]),
        ]);
        let report = Compliance::compute(&reference, &word_set(["dup"]), &categories).unwrap();
        let mut ui = MockUI::new();
        render(&report, &ReportConfig::default(), &mut ui);

        assert!(!ui.has_line_containing("Stack"));
        assert!(ui.position("More (1):").is_some());
    }

    #[test]
    fn uncategorized_words_land_in_other() {
        let reference = word_set(["B", "C", "A"]);
        let report = Compliance::compute(&reference, &word_set(["a"]), &CategoryMap::default())
            .unwrap();
        let mut ui = MockUI::new();
        render(&report, &ReportConfig::default(), &mut ui);

        let other = ui.position("OTHER MISSING:").unwrap();
        assert_eq!(&ui.lines()[other + 1..other + 3], &["  B", "  C"]);
        assert!(ui.position("Actual compliance: 1/3 = 33%").is_some());
    }

    #[test]
    fn empty_other_header_is_printed_by_default() {
        let reference = word_set(ANSI_CORE_WORDS);
        let report =
            Compliance::compute(&reference, &reference, &CategoryMap::ansi_core()).unwrap();
        let mut ui = MockUI::new();
        render(&report, &ReportConfig::default(), &mut ui);

        let other = ui.position("OTHER MISSING:").unwrap();
        assert_eq!(ui.lines()[other + 1], "");
        assert!(ui.position("Actual compliance: 133/133 = 100%").is_some());
        assert!(!ui.has_line_containing("MISSING ANSI CORE WORDS"));
        assert_eq!(ui.successes(), &["100% ANSI CORE compliance achieved!"]);
    }

    #[test]
    fn empty_other_header_can_be_suppressed() {
        let reference = word_set(ANSI_CORE_WORDS);
        let report =
            Compliance::compute(&reference, &reference, &CategoryMap::ansi_core()).unwrap();
        let config = ReportConfig {
            show_empty_other: false,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        render(&report, &config, &mut ui);

        assert!(ui.position("OTHER MISSING:").is_none());
    }

    #[test]
    fn recent_additions_line_lists_working_words() {
        let reference = word_set(["HERE", "ALLOT", "BL"]);
        let candidates = [Keyword::new("HERE"), Keyword::new("ALLOT"), Keyword::new("BL")];
        let current = word_set(["bl", "here"]);
        let report = Compliance::compute(&reference, &current, &CategoryMap::default())
            .unwrap()
            .with_recent_additions(&candidates);
        let mut ui = MockUI::new();
        render(&report, &ReportConfig::default(), &mut ui);

        assert_eq!(ui.successes(), &["2 new words implemented: HERE, BL"]);
        assert_eq!(ui.lines().last().unwrap(), "2 new words implemented: HERE, BL");
    }

    #[test]
    fn no_recent_section_without_spot_check() {
        let mut ui = MockUI::new();
        render(&literal_report(), &ReportConfig::default(), &mut ui);

        assert!(!ui.has_line_containing("RECENT ADDITIONS"));
    }

    #[test]
    fn custom_title_is_used() {
        let config = ReportConfig {
            title: "UPDATED ANSI COMPLIANCE STATUS".to_string(),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        render(&literal_report(), &config, &mut ui);

        assert_eq!(ui.headers()[0], "UPDATED ANSI COMPLIANCE STATUS");
    }
}
