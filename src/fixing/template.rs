//! Template and raw sentence literal repairs.
//!
//! Templates have typos in their placeholders (`AEGNT-1`, `BRUDGE-1`) and placeholders glued
//! to their neighbours (`AGENT-1is`, `PATIENT-1.AGENT-1`), which break tokenization.
use super::transform::{replace_in_order, Transform};

static TEMPLATE_FIXES: &[(&str, &str)] = &[
    ("AEGNT-1", "AGENT-1"),
    ("AAGENT-1", "AGENT-1"),
    ("AGENT-1(area", "AGENT-1 (area"),
    ("AGENT-1(has", "AGENT-1 (has"),
    ("AGENT-1(mass", "AGENT-1 (mass"),
    ("AGENT-1is", "AGENT-1 is"),
    ("BRUDGE-1", "BRIDGE-1"),
    ("BRIDGE-1which", "BRIDGE-1 which"),
    (" RIDGE-2", " BRIDGE-2"),
    ("PATIENTI-2", "PATIENT-2"),
    ("havePATIENT-3", "have PATIENT-3"),
    ("byPATIENT-1", "by PATIENT-1"),
    ("PATIENT-1.AGENT-1", "PATIENT-1 . AGENT-1"),
    ("PATIENT-2.AGENT-1", "PATIENT-2 . AGENT-1"),
    ("PATIENT-4.BRIDGE-1", "PATIENT-4 . BRIDGE-1"),
    ("PATIENT-2-operated", "PATIENT-2 -operated"),
];

// sentence splitting stops on these periods
static SENTENCE_FIXES: &[(&str, &str)] = &[
    (
        "Sour cream, chopped fruits, condensed milk. granola, raisins and shredded coconut are the main ingredients in Bionico.",
        "Sour cream, chopped fruits, condensed milk, granola, raisins and shredded coconut are the main ingredients in Bionico.",
    ),
    (" (abbrv. Acta Palaeontol. Pol)", " (abbrv Acta Palaeontol Pol)"),
];

/// Repairs placeholder typos and mis-joins in templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateFixer;

impl Transform<String> for TemplateFixer {
    fn transform_own(&self, template: String) -> String {
        replace_in_order(template, TEMPLATE_FIXES)
    }
}

/// Repairs raw texts that would be wrongly split into sentences.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceFixer;

impl Transform<String> for SentenceFixer {
    fn transform_own(&self, sentence: String) -> String {
        replace_in_order(sentence, SENTENCE_FIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glued_placeholders() {
        let t = "AEGNT-1is located in PATIENT-1.AGENT-1 was built byPATIENT-1 .".to_string();
        assert_eq!(
            TemplateFixer.transform_own(t),
            "AGENT-1 is located in PATIENT-1 . AGENT-1 was built by PATIENT-1 ."
        );
    }

    #[test]
    fn order_matters() {
        // AAGENT-1 contains AGENT-1: the typo has to be fixed before the glued forms.
        let t = "AAGENT-1(area is PATIENT-1)".to_string();
        assert_eq!(TemplateFixer.transform_own(t), "AGENT-1 (area is PATIENT-1)");
    }

    #[test]
    fn bridge_typo() {
        let t = "AGENT-1 is in RIDGE-2 .".to_string();
        assert_eq!(TemplateFixer.transform_own(t), "AGENT-1 is in BRIDGE-2 .");
    }

    #[test]
    fn clean_template_untouched() {
        let t = "AGENT-1 is p PATIENT-1 .".to_string();
        assert_eq!(TemplateFixer.transform_own(t.clone()), t);
    }

    #[test]
    fn abbreviation_periods() {
        let s = "It is published in Acta Palaeontologica Polonica (abbrv. Acta Palaeontol. Pol) .";
        assert_eq!(
            SentenceFixer.transform_own(s.to_string()),
            "It is published in Acta Palaeontologica Polonica (abbrv Acta Palaeontol Pol) ."
        );
    }
}
