use crate::scoring::{ScreenerItem, Severity, SeverityBand};
use crate::ScreenerInstrument;

/// GAD-7: Generalized Anxiety Disorder seven-item scale.
/// Seven items rated 0–3 on the frequency scale. Total 0–21.
pub struct Gad7;

impl ScreenerInstrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[ScreenerItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScreenerItem>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervousness", "Feeling nervous, anxious, or on edge"),
                (
                    "uncontrollable_worry",
                    "Not being able to stop or control worrying",
                ),
                ("excessive_worry", "Worrying too much about different things"),
                ("trouble_relaxing", "Trouble relaxing"),
                (
                    "restlessness",
                    "Being so restless that it is hard to sit still",
                ),
                ("irritability", "Becoming easily annoyed or irritable"),
                (
                    "fear_of_catastrophe",
                    "Feeling afraid, as if something awful might happen",
                ),
            ];

            items
                .iter()
                .map(|(id, prompt)| ScreenerItem {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                })
                .collect()
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand {
                    severity: Severity::Minimal,
                    min: 0,
                    max: 4,
                    label: "Minimal".to_string(),
                    guidance: "Your scores suggest minimal anxiety. Continue your wellness routine."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::Mild,
                    min: 5,
                    max: 9,
                    label: "Mild".to_string(),
                    guidance: "You're experiencing mild anxiety. We recommend regular check-ins and self-help tools."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::Moderate,
                    min: 10,
                    max: 14,
                    label: "Moderate".to_string(),
                    guidance: "Moderate anxiety detected. It might be beneficial to speak with one of our counselors."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::ModeratelySevereToSevere,
                    min: 15,
                    max: 21,
                    label: "Severe".to_string(),
                    guidance: "Significant anxiety detected. Please consider booking an urgent session with a professional counselor."
                        .to_string(),
                },
            ]
        });
        &BANDS
    }
}
