use crate::scoring::{ScreenerItem, Severity, SeverityBand};
use crate::ScreenerInstrument;

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// Nine items rated 0–3 on the frequency scale. Total 0–27.
pub struct Phq9;

impl ScreenerInstrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[ScreenerItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScreenerItem>> = std::sync::LazyLock::new(|| {
            let items = [
                ("anhedonia", "Little interest or pleasure in doing things"),
                ("depressed_mood", "Feeling down, depressed, or hopeless"),
                (
                    "sleep_disturbance",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("fatigue", "Feeling tired or having little energy"),
                ("appetite_change", "Poor appetite or overeating"),
                (
                    "worthlessness",
                    "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                ),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead or of hurting yourself in some way",
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
                    guidance: "Your scores suggest minimal symptoms. Continue your wellness routine."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::Mild,
                    min: 5,
                    max: 9,
                    label: "Mild".to_string(),
                    guidance: "You're experiencing mild symptoms. We recommend regular check-ins and self-help tools."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::Moderate,
                    min: 10,
                    max: 14,
                    label: "Moderate".to_string(),
                    guidance: "Moderate symptoms detected. It might be beneficial to speak with one of our counselors."
                        .to_string(),
                },
                SeverityBand {
                    severity: Severity::ModeratelySevereToSevere,
                    min: 15,
                    max: 27,
                    label: "Moderately Severe to Severe".to_string(),
                    guidance: "Significant symptoms detected. Please consider booking an urgent session with a professional counselor."
                        .to_string(),
                },
            ]
        });
        &BANDS
    }
}
