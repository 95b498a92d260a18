//! Output formatting module

use pallet_app::app::PlanResult;
use pallet_types::{OutputFormat, Result};

pub fn print_plan(output_format: OutputFormat, plan: &PlanResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
    } else {
        println!("{}", generate_plan_report(plan));
    }
    Ok(())
}

pub fn generate_plan_report(plan: &PlanResult) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              パレット割付レポート                 \n");
    report.push_str("            Pallet Allocation Report               \n");
    report.push_str("==================================================\n\n");

    report.push_str("【サマリー / Summary】\n");
    report.push_str(&format!("  明細行数 / Total lines:       {}\n", plan.lines.len()));
    report.push_str(&format!("  使用パレット / Pallets used:  {}\n", plan.pallet_count()));
    report.push_str(&format!("  積載不可 / Overflow lines:    {}\n", plan.overflow_count()));
    report.push_str(&format!(
        "  マスタ未登録 / Unmatched:     {}\n",
        plan.unmatched_keys.len()
    ));
    report.push_str(&format!(
        "  総重量 / Grand total:         {:.2} kg\n",
        plan.grand_total_kg
    ));
    report.push_str(&format!(
        "  パレット上限 / Capacity:      {:.2} kg\n",
        plan.capacity_kg
    ));
    report.push('\n');

    report.push_str("【明細 / Lines】\n");
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<10} {:<20} {:>8} {:>10} {:>10}\n",
        "パレット", "品名", "数量", "単重(kg)", "重量(kg)"
    ));
    report.push_str(&format!(
        "{:<10} {:<20} {:>8} {:>10} {:>10}\n",
        "Pallet", "Item", "Qty", "Unit wt", "Weight"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for line in &plan.lines {
        let unit_weight = line
            .unit_weight_kg
            .map(|w| format!("{:.2}", w))
            .unwrap_or_else(|| "-".to_string());
        report.push_str(&format!(
            "{:<10} {:<20} {:>8.1} {:>10} {:>10.2}\n",
            line.assignment.label(),
            truncate_str(&line.display_name, 19),
            line.quantity,
            unit_weight,
            line.total_weight_kg
        ));
    }
    report.push('\n');

    report.push_str("【パレット集計 / Pallet Totals】\n");
    report.push_str("-".repeat(40).as_str());
    report.push('\n');
    for summary in &plan.summaries {
        let flag = if summary.over_capacity { "  ⚠ 超過" } else { "" };
        report.push_str(&format!(
            "  パレット {:<4} {:>12.2} kg{}\n",
            summary.pallet_no, summary.total_weight_kg, flag
        ));
    }
    report.push_str(&format!(
        "  総計         {:>12.2} kg\n",
        plan.grand_total_kg
    ));
    report.push('\n');

    if !plan.unmatched_keys.is_empty() {
        report.push_str("【マスタ未登録 / Unmatched Keys】\n");
        report.push_str("  単重が引けず重量0として扱った品目です。マスタを確認してください。\n");
        for key in &plan.unmatched_keys {
            report.push_str(&format!("  - {}\n", key));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pallet_app::app::PlanLine;
    use pallet_domain::model::{PalletAssignment, PalletSummary};

    fn sample_plan() -> PlanResult {
        PlanResult {
            lines: vec![
                PlanLine {
                    assignment: PalletAssignment::Assigned(1),
                    display_name: "部品A".to_string(),
                    quantity: 2.0,
                    unit_weight_kg: Some(150.0),
                    total_weight_kg: 300.0,
                },
                PlanLine {
                    assignment: PalletAssignment::Overflow(1),
                    display_name: "部品C".to_string(),
                    quantity: 1.0,
                    unit_weight_kg: Some(600.0),
                    total_weight_kg: 600.0,
                },
                PlanLine {
                    assignment: PalletAssignment::Assigned(1),
                    display_name: "未登録品".to_string(),
                    quantity: 3.0,
                    unit_weight_kg: None,
                    total_weight_kg: 0.0,
                },
            ],
            summaries: vec![PalletSummary {
                pallet_no: 1,
                total_weight_kg: 300.0,
                over_capacity: false,
            }],
            grand_total_kg: 300.0,
            unmatched_keys: vec!["未登録品".to_string()],
            capacity_kg: 500.0,
        }
    }

    #[test]
    fn test_report_contains_sections() {
        let report = generate_plan_report(&sample_plan());
        assert!(report.contains("パレット割付レポート"));
        assert!(report.contains("超過(1)"));
        assert!(report.contains("未登録品"));
        assert!(report.contains("300.00"));
    }

    #[test]
    fn test_unmatched_unit_weight_shown_as_dash() {
        let report = generate_plan_report(&sample_plan());
        assert!(report.contains(" -"));
    }
}
