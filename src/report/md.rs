use crate::types::report::HealthReport;

pub fn to_markdown(report: &HealthReport) -> String {
    let mut output = String::new();
    output.push_str("# Machine Health Report\n\n");
    output.push_str(&format!("Machine: {}\n", report.machine));
    output.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Overall health: {:.2}%\n\n", report.overall_health));

    output.push_str("## Part Scores\n\n");
    if report.parts.is_empty() {
        output.push_str("- none\n");
    } else {
        for score in &report.parts {
            output.push_str(&format!(
                "- {}: {:.2}% (reading {})\n",
                score.part, score.health, score.value
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::machine::{MachineType, Part};
    use crate::types::report::PartScore;
    use chrono::Utc;

    #[test]
    fn markdown_report_contains_sections() {
        let report = HealthReport {
            machine: MachineType::PaintingStation,
            generated_at: Utc::now(),
            overall_health: 25.0,
            parts: vec![
                PartScore {
                    part: Part::FlowRate,
                    value: 20.0,
                    health: 50.0,
                },
                PartScore {
                    part: Part::Pressure,
                    value: 0.2,
                    health: 0.0,
                },
            ],
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Machine Health Report"));
        assert!(rendered.contains("Machine: paintingStation"));
        assert!(rendered.contains("Overall health: 25.00%"));
        assert!(rendered.contains("- flowRate: 50.00% (reading 20)"));
        assert!(rendered.contains("- pressure: 0.00% (reading 0.2)"));
    }
}
