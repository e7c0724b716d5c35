//! Integration specifications for component valuation.
//!
//! Scenarios run through the public `compute_adjusted_price` contract and the `ValuationEngine`
//! facade, covering deduction arithmetic, skip rules, rounding, and the zero floor.

mod common {
    use deal_valuation::valuation::{
        ComponentMetric, ComponentType, ComponentValuationInput, ValuationRuleData,
    };

    pub(super) fn ram_rule() -> ValuationRuleData {
        ValuationRuleData::new(ComponentType::Ram, ComponentMetric::PerGb, 4.0)
            .with_multipliers(1.0, 0.75, 0.6)
    }

    pub(super) fn os_license_rule() -> ValuationRuleData {
        ValuationRuleData::new(ComponentType::OsLicense, ComponentMetric::Flat, 35.0)
    }

    pub(super) fn ssd_rule() -> ValuationRuleData {
        ValuationRuleData::new(ComponentType::Ssd, ComponentMetric::PerTb, 50.0)
    }

    pub(super) fn rules() -> Vec<ValuationRuleData> {
        vec![ram_rule(), os_license_rule(), ssd_rule()]
    }

    pub(super) fn component(
        component_type: ComponentType,
        quantity: f64,
        label: &str,
    ) -> ComponentValuationInput {
        ComponentValuationInput::new(component_type, quantity, label)
    }

    pub(super) fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }
}

use common::*;
use deal_valuation::valuation::{
    compute_adjusted_price, ComponentMetric, ComponentType, Condition, ValuationEngine,
    ValuationRuleData,
};

#[test]
fn used_listing_deducts_ram_and_os_license() {
    let components = vec![
        component(ComponentType::Ram, 32.0, "32GB DDR4"),
        component(ComponentType::OsLicense, 1.0, "Windows 11 Pro"),
    ];

    let result = compute_adjusted_price(
        500.0,
        Condition::Used,
        &[ram_rule(), os_license_rule()],
        &components,
    );

    assert_eq!(result.listing_price_usd, 500.0);
    assert_eq!(result.lines.len(), 2);

    let ram = &result.lines[0];
    assert_eq!(ram.label, "32GB DDR4");
    assert_eq!(ram.component_type, ComponentType::Ram);
    assert_eq!(ram.quantity, 32.0);
    assert_eq!(ram.unit_value, 4.0);
    assert_eq!(ram.condition_multiplier, 0.6);
    assert_eq!(ram.deduction_usd, 76.8);

    let os = &result.lines[1];
    assert_eq!(os.component_type, ComponentType::OsLicense);
    assert_eq!(os.deduction_usd, 21.0);

    assert!(approx_eq(result.total_deductions(), 97.8));
    assert_eq!(result.adjusted_price_usd, 402.2);
}

#[test]
fn per_tb_rule_converts_gigabytes_to_terabytes() {
    let rule = ValuationRuleData::new(ComponentType::Ssd, ComponentMetric::PerTb, 50.0)
        .with_multipliers(1.0, 0.75, 0.6);
    let components = vec![component(ComponentType::Ssd, 2048.0, "2TB NVMe")];

    let result = compute_adjusted_price(300.0, Condition::New, &[rule], &components);

    assert_eq!(result.lines[0].quantity, 2.0);
    assert_eq!(result.lines[0].deduction_usd, 100.0);
    assert_eq!(result.adjusted_price_usd, 200.0);
}

#[test]
fn refurbished_condition_uses_refurb_multiplier() {
    let components = vec![component(ComponentType::Ram, 16.0, "16GB")];

    let result = compute_adjusted_price(200.0, Condition::Refurb, &rules(), &components);

    assert_eq!(result.lines[0].condition_multiplier, 0.75);
    assert_eq!(result.lines[0].deduction_usd, 48.0);
    assert_eq!(result.adjusted_price_usd, 152.0);
}

#[test]
fn no_positive_quantities_leave_price_unchanged() {
    let components = vec![
        component(ComponentType::Ram, 0.0, "empty"),
        component(ComponentType::Ssd, -512.0, "bad scrape"),
        component(ComponentType::OsLicense, 0.0, "no license"),
    ];

    for price in [0.01, 99.99, 500.0, 12_345.67] {
        for condition in [Condition::New, Condition::Refurb, Condition::Used] {
            let result = compute_adjusted_price(price, condition, &rules(), &components);
            assert!(result.lines.is_empty());
            assert_eq!(result.adjusted_price_usd, price);
        }
    }
}

#[test]
fn adjusted_price_never_negative() {
    let components = vec![
        component(ComponentType::Ram, 128.0, "128GB"),
        component(ComponentType::Ssd, 8192.0, "8TB"),
        component(ComponentType::OsLicense, 3.0, "3 licenses"),
    ];

    for price in [-50.0, 0.0, 10.0, 250.0, 1_000.0] {
        let result = compute_adjusted_price(price, Condition::New, &rules(), &components);
        assert!(result.adjusted_price_usd >= 0.0);
    }
}

#[test]
fn total_deductions_is_sum_of_lines_even_when_clamped() {
    let components = vec![
        component(ComponentType::Ram, 64.0, "64GB"),
        component(ComponentType::OsLicense, 1.0, "Windows"),
    ];

    let result = compute_adjusted_price(100.0, Condition::New, &rules(), &components);

    let summed: f64 = result.lines.iter().map(|line| line.deduction_usd).sum();
    assert_eq!(result.total_deductions(), summed);
    assert_eq!(result.total_deductions(), 291.0);
    assert_eq!(result.adjusted_price_usd, 0.0);
    assert!(result.total_deductions() > result.listing_price_usd - result.adjusted_price_usd);
}

#[test]
fn lines_follow_component_order_and_skip_unmatched() {
    let components = vec![
        component(ComponentType::OsLicense, 1.0, "Windows"),
        component(ComponentType::Gpu, 1.0, "GTX 1650"),
        component(ComponentType::Ram, 8.0, "8GB"),
        component(ComponentType::Ssd, 256.0, "256GB SATA"),
    ];

    let result = compute_adjusted_price(400.0, Condition::Used, &rules(), &components);

    let labels: Vec<_> = result.lines.iter().map(|line| line.label.as_str()).collect();
    assert_eq!(labels, vec!["Windows", "8GB", "256GB SATA"]);
    // 256 GB is a quarter terabyte: 0.25 * 50 * 0.6.
    assert_eq!(result.lines[2].deduction_usd, 7.5);
}

#[test]
fn duplicate_rules_resolve_to_the_last_definition() {
    let rules = vec![
        ram_rule(),
        ValuationRuleData::new(ComponentType::Ram, ComponentMetric::PerGb, 2.0)
            .with_multipliers(1.0, 1.0, 1.0),
    ];
    let engine = ValuationEngine::new(&rules);

    let result = engine.appraise(
        100.0,
        Condition::Used,
        &[component(ComponentType::Ram, 10.0, "10GB")],
    );

    assert_eq!(engine.rule_book().duplicates(), &[ComponentType::Ram]);
    assert_eq!(result.lines[0].deduction_usd, 20.0);
    assert_eq!(result.adjusted_price_usd, 80.0);
}

#[test]
fn line_deductions_round_before_summing() {
    let rule = ValuationRuleData::new(ComponentType::Misc, ComponentMetric::Flat, 0.333)
        .with_multipliers(1.0, 0.75, 0.6);
    let components = vec![
        component(ComponentType::Misc, 1.0, "cable"),
        component(ComponentType::Misc, 1.0, "cable"),
        component(ComponentType::Misc, 1.0, "cable"),
    ];

    let result = compute_adjusted_price(10.0, Condition::New, &[rule], &components);

    // Each line rounds 0.333 to 0.33, so the total is 0.99 rather than 1.00.
    assert!(result.lines.iter().all(|line| line.deduction_usd == 0.33));
    assert_eq!(result.adjusted_price_usd, 9.01);
}

#[test]
fn empty_inputs_echo_the_price() {
    let result = compute_adjusted_price(349.99, Condition::Used, &[], &[]);

    assert!(result.lines.is_empty());
    assert_eq!(result.total_deductions(), 0.0);
    assert_eq!(result.adjusted_price_usd, 349.99);
}
