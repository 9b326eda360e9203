use budget_core::{
    assignment_export, calculate_project_summary, summary_export, Assignment, ProjectConfig,
};
use rust_decimal_macros::dec;

#[test]
fn assignment_export_renders_header_and_sanitized_rows() {
    let assignments = vec![
        Assignment::new(dec!(15000), dec!(10)).with_member("Somchai", "Designer"),
        Assignment::new(dec!(20000), dec!(5))
            .with_buffer_days(dec!(1.5))
            .with_member("=cmd|' /C calc'!A0", "Dev, Lead"),
    ];

    let csv = assignment_export(&assignments).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Member,Role,Daily Rate,Days Allocated,Buffer Days,Total Mandays,Cost"
    );
    assert_eq!(
        lines[1],
        "Somchai,Designer,15000.00,10.00,0.00,10.00,150000.00"
    );
    assert_eq!(
        lines[2],
        "'=cmd|' /C calc'!A0,\"Dev, Lead\",20000.00,5.00,1.50,6.50,130000.00"
    );
    assert!(!csv.ends_with('\n'));
}

#[test]
fn assignment_export_requires_rates() {
    let mut assignment = Assignment::new(dec!(1), dec!(1));
    assignment.daily_rate = None;
    assert!(assignment_export(&[assignment]).is_err());
}

#[test]
fn summary_export_lists_every_metric() {
    let assignments = vec![
        Assignment::new(dec!(15000), dec!(10)),
        Assignment::new(dec!(20000), dec!(5)),
    ];
    let project = ProjectConfig {
        id: None,
        tax_enabled: true,
        tax_percentage: dec!(7),
        proposed_price: Some(dec!(300000)),
    };
    let summary = calculate_project_summary(&assignments, &project).unwrap();

    let csv = summary_export(&summary);
    assert_eq!(
        csv,
        [
            "Metric,Value",
            "Subtotal,250000.00",
            "Tax,17500.00",
            "Cost,267500.00",
            "Proposed Price,300000.00",
            "ROI %,12.15",
            "Margin %,10.83",
        ]
        .join("\n")
    );
}
