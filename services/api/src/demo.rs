use crate::infra::{load_profile, parse_weight_pair, read_json_file};
use clap::Args;
use deal_valuation::appraisal::{
    AppraisalError, AppraisalRequest, AppraisalService, ListingAppraisal, StaticRuleRepository,
    ValuationProfile,
};
use deal_valuation::config::AppConfig;
use deal_valuation::error::AppError;
use deal_valuation::scoring::{validate_rule_group_weights, ListingMetrics, WeightMap};
use deal_valuation::valuation::{ComponentType, ComponentValuationInput, Condition};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// JSON file containing an appraisal request
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Valuation profile JSON (defaults to APP_VALUATION_PROFILE, then the standard profile)
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Print the appraisal as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WeightsArgs {
    /// Weights as GROUP=WEIGHT pairs
    #[arg(value_parser = parse_weight_pair)]
    pub(crate) pairs: Vec<(String, f64)>,
    /// JSON file holding a group -> weight object, merged before the inline pairs
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Asking price of the sample listing
    #[arg(long)]
    pub(crate) price: Option<f64>,
    /// Condition of the sample listing (new, refurb, used)
    #[arg(long, value_parser = parse_condition)]
    pub(crate) condition: Option<Condition>,
}

fn parse_condition(raw: &str) -> Result<Condition, String> {
    Ok(Condition::from_label(raw))
}

pub(crate) fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let AppraiseArgs {
        request,
        profile,
        json,
    } = args;

    let config = AppConfig::load()?;
    let profile = load_profile(profile, &config.valuation)?;
    let request: AppraisalRequest = read_json_file(&request)?;

    let appraisal = appraise_with(profile, &request)?;
    if json {
        let rendered = serde_json::to_string_pretty(&appraisal).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_appraisal(&request, &appraisal);
    }

    Ok(())
}

pub(crate) fn run_weights(args: WeightsArgs) -> Result<(), AppError> {
    let WeightsArgs { pairs, file } = args;

    let mut weights: WeightMap = match file {
        Some(path) => read_json_file(&path)?,
        None => WeightMap::new(),
    };
    weights.extend(pairs);

    if weights.is_empty() {
        println!("No weights configured; rule groups will be summed unweighted.");
        return Ok(());
    }

    println!("Rule group weights");
    for (group, weight) in &weights {
        println!("- {group}: {weight:.3}");
    }

    match validate_rule_group_weights(&weights) {
        Ok(()) => {
            println!("Weights are valid.");
            Ok(())
        }
        Err(err) => Err(AppError::from(AppraisalError::from(err))),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let request = demo_request(
        args.price.unwrap_or(429.0),
        args.condition.unwrap_or(Condition::Used),
    );

    println!("Deal valuation demo (standard profile)");
    let appraisal = appraise_with(ValuationProfile::standard(), &request)?;
    render_appraisal(&request, &appraisal);
    Ok(())
}

fn appraise_with(
    profile: ValuationProfile,
    request: &AppraisalRequest,
) -> Result<ListingAppraisal, AppError> {
    let service = AppraisalService::new(Arc::new(StaticRuleRepository::new(profile)));
    Ok(service.appraise(request)?)
}

fn demo_request(listing_price_usd: f64, condition: Condition) -> AppraisalRequest {
    AppraisalRequest {
        listing_price_usd,
        condition,
        components: vec![
            ComponentValuationInput::new(ComponentType::Ram, 32.0, "32GB DDR4-3200 (2x16GB)"),
            ComponentValuationInput::new(ComponentType::Ssd, 1024.0, "1TB NVMe SSD"),
            ComponentValuationInput::new(ComponentType::OsLicense, 1.0, "Windows 11 Pro"),
            ComponentValuationInput::new(ComponentType::Wifi, 1.0, "Intel AX201"),
        ],
        metrics: ListingMetrics {
            cpu_mark_multi: Some(17_400.0),
            cpu_mark_single: Some(2_950.0),
            perf_per_watt: Some(268.0),
            ram_capacity: Some(32.0),
            ports_fit: Some(0.8),
            ..ListingMetrics::default()
        },
        rule_group_adjustments: None,
        weights: None,
    }
}

pub(crate) fn render_appraisal(request: &AppraisalRequest, appraisal: &ListingAppraisal) {
    let result = &appraisal.valuation.result;

    println!(
        "Listing price: ${:.2} ({})",
        result.listing_price_usd,
        request.condition.label()
    );

    if result.lines.is_empty() {
        println!("\nComponent deductions: none");
    } else {
        println!("\nComponent deductions");
        for line in &result.lines {
            println!(
                "- {} [{}]: {} x ${:.2} x {:.2} = ${:.2}",
                line.label,
                line.component_type.label(),
                line.quantity,
                line.unit_value,
                line.condition_multiplier,
                line.deduction_usd
            );
        }
    }

    let skipped = request.components.len() - result.lines.len();
    if skipped > 0 {
        println!("({skipped} component(s) without a rule or quantity were skipped)");
    }

    println!(
        "\nTotal deductions: ${:.2}",
        appraisal.valuation.total_deductions_usd
    );
    if result.was_clamped() {
        println!("Adjusted price: ${:.2} (floored at zero)", result.adjusted_price_usd);
    } else {
        println!("Adjusted price: ${:.2}", result.adjusted_price_usd);
    }

    println!("\nComposite score: {:.2}", appraisal.composite_score);
    match appraisal.dollar_per_cpu_mark_multi {
        Some(ratio) => println!("$/CPU mark (multi): {ratio:.4}"),
        None => println!("$/CPU mark (multi): n/a"),
    }
    match appraisal.dollar_per_cpu_mark_single {
        Some(ratio) => println!("$/CPU mark (single): {ratio:.4}"),
        None => println!("$/CPU mark (single): n/a"),
    }
    if let Some(total) = appraisal.rule_group_total {
        println!("Weighted rule group adjustment: ${total:.2}");
    }
}
