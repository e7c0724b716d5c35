use serde::{Deserialize, Deserializer, Serialize};

/// Kind of hardware component valued independently of the base system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Ram,
    Ssd,
    Hdd,
    OsLicense,
    Wifi,
    Gpu,
    Misc,
}

impl ComponentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ram => "RAM",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::OsLicense => "OS License",
            Self::Wifi => "Wi-Fi",
            Self::Gpu => "GPU",
            Self::Misc => "Misc",
        }
    }
}

/// Unit basis a rule prices its component in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentMetric {
    PerGb,
    PerTb,
    Flat,
}

/// Gigabytes per terabyte when converting storage quantities.
pub const GB_PER_TB: f64 = 1024.0;

impl ComponentMetric {
    /// Convert a quantity supplied in gigabytes into this metric's unit.
    ///
    /// Only `PerTb` converts; `PerGb` and `Flat` take the quantity as given, so a flat rule
    /// with quantity 2 values the component twice.
    pub fn normalize_quantity(self, quantity: f64) -> f64 {
        match self {
            Self::PerTb => quantity / GB_PER_TB,
            Self::PerGb | Self::Flat => quantity,
        }
    }
}

/// Physical condition of a listing, selecting which rule multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Refurb,
    Used,
}

impl Condition {
    /// Parse a free-form condition label. Anything unrecognised is valued as used.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Self::New,
            "refurb" | "refurbished" => Self::Refurb,
            _ => Self::Used,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Refurb => "Refurbished",
            Self::Used => "Used",
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

fn default_condition_new() -> f64 {
    1.0
}

fn default_condition_refurb() -> f64 {
    0.75
}

fn default_condition_used() -> f64 {
    0.6
}

/// Pricing rule for one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRuleData {
    pub component_type: ComponentType,
    pub metric: ComponentMetric,
    pub unit_value_usd: f64,
    #[serde(default = "default_condition_new")]
    pub condition_new: f64,
    #[serde(default = "default_condition_refurb")]
    pub condition_refurb: f64,
    #[serde(default = "default_condition_used")]
    pub condition_used: f64,
}

impl ValuationRuleData {
    /// Rule with the standard 1.0 / 0.75 / 0.6 condition multipliers.
    pub fn new(component_type: ComponentType, metric: ComponentMetric, unit_value_usd: f64) -> Self {
        Self {
            component_type,
            metric,
            unit_value_usd,
            condition_new: default_condition_new(),
            condition_refurb: default_condition_refurb(),
            condition_used: default_condition_used(),
        }
    }

    pub fn with_multipliers(mut self, new: f64, refurb: f64, used: f64) -> Self {
        self.condition_new = new;
        self.condition_refurb = refurb;
        self.condition_used = used;
        self
    }

    /// Multiplier applied for `condition`.
    pub fn multiplier_for(&self, condition: Condition) -> f64 {
        match condition {
            Condition::New => self.condition_new,
            Condition::Refurb => self.condition_refurb,
            // Fallback arm: any condition without its own multiplier is valued as used.
            Condition::Used => self.condition_used,
        }
    }
}

/// One component attached to a listing. Quantities are in GB for storage and RAM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentValuationInput {
    pub component_type: ComponentType,
    pub quantity: f64,
    #[serde(default)]
    pub label: String,
}

impl ComponentValuationInput {
    pub fn new(component_type: ComponentType, quantity: f64, label: impl Into<String>) -> Self {
        Self {
            component_type,
            quantity,
            label: label.into(),
        }
    }
}

/// Itemised deduction produced for a matched component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationLine {
    pub label: String,
    pub component_type: ComponentType,
    pub quantity: f64,
    pub unit_value: f64,
    pub condition_multiplier: f64,
    pub deduction_usd: f64,
}

/// Adjusted price and the deductions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub listing_price_usd: f64,
    pub adjusted_price_usd: f64,
    pub lines: Vec<ValuationLine>,
}

impl ValuationResult {
    /// Sum of the rounded line deductions. May exceed the price drop when the adjusted price
    /// was floored at zero.
    pub fn total_deductions(&self) -> f64 {
        self.lines.iter().map(|line| line.deduction_usd).sum()
    }

    pub fn was_clamped(&self) -> bool {
        self.adjusted_price_usd == 0.0 && self.listing_price_usd - self.total_deductions() < 0.0
    }
}
