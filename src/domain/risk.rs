//! Supplier risk scoring - seven-dimension composite risk with tiers.
//!
//! Each dimension is scored 0-100 from supplier indicators (higher is
//! riskier), then combined with normalized dimension weights into a
//! composite. Missing indicators fall back to neutral values rather than
//! failing the assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::ranking::Tier;

/// Upper bound of the Low tier (inclusive).
pub const RISK_LOW_MAX: f64 = 30.0;
/// Upper bound of the Medium tier (inclusive).
pub const RISK_MEDIUM_MAX: f64 = 55.0;
/// Upper bound of the High tier (inclusive).
pub const RISK_HIGH_MAX: f64 = 75.0;

/// Revenue at or above which financial risk bottoms out at 0.
const REVENUE_CAP_USD: f64 = 500_000_000.0;
/// Certifications beyond this count earn no further credit.
const MAX_CREDITED_CERTIFICATIONS: u32 = 4;
/// Neutral value for a missing governance, fragility or ESG score.
const NEUTRAL_SCORE: f64 = 50.0;

/// Risk dimensions, in composite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Financial,
    Operational,
    Geopolitical,
    Compliance,
    Concentration,
    Esg,
    Cyber,
}

impl RiskDimension {
    pub const ALL: [RiskDimension; 7] = [
        RiskDimension::Financial,
        RiskDimension::Operational,
        RiskDimension::Geopolitical,
        RiskDimension::Compliance,
        RiskDimension::Concentration,
        RiskDimension::Esg,
        RiskDimension::Cyber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RiskDimension::Financial => "financial",
            RiskDimension::Operational => "operational",
            RiskDimension::Geopolitical => "geopolitical",
            RiskDimension::Compliance => "compliance",
            RiskDimension::Concentration => "concentration",
            RiskDimension::Esg => "esg",
            RiskDimension::Cyber => "cyber",
        }
    }

    /// Built-in weight. The defaults sum to 1.
    pub fn default_weight(&self) -> f64 {
        match self {
            RiskDimension::Financial => 0.10,
            RiskDimension::Operational => 0.20,
            RiskDimension::Geopolitical => 0.10,
            RiskDimension::Compliance => 0.15,
            RiskDimension::Concentration => 0.15,
            RiskDimension::Esg => 0.15,
            RiskDimension::Cyber => 0.15,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskDimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RiskDimension::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "dimension",
                    format!("unknown risk dimension '{}'", wanted),
                )
                .into()
            })
    }
}

/// Dimension weights, kept raw and normalized on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights([f64; 7]);

impl RiskWeights {
    /// Validates raw weights in [`RiskDimension::ALL`] order.
    ///
    /// # Errors
    /// - `NonFiniteValue` / `ValidationFailed` for a non-finite or negative weight
    /// - `DegenerateWeights` if every weight is zero
    pub fn new(raw: [f64; 7]) -> Result<Self, DomainError> {
        for (dimension, w) in RiskDimension::ALL.iter().zip(raw) {
            if !w.is_finite() {
                return Err(ValidationError::non_finite(dimension.name(), w).into());
            }
            if w < 0.0 {
                return Err(ValidationError::negative(dimension.name(), w).into());
            }
        }
        if raw.iter().sum::<f64>() <= 0.0 {
            return Err(DomainError::new(
                ErrorCode::DegenerateWeights,
                "Risk dimension weights sum to zero",
            ));
        }
        Ok(Self(raw))
    }

    /// Raw weight of `dimension` as configured.
    pub fn raw(&self, dimension: RiskDimension) -> f64 {
        self.0[dimension.index()]
    }

    /// Weights scaled to sum to 1.
    pub fn normalized(&self) -> [f64; 7] {
        let total: f64 = self.0.iter().sum();
        self.0.map(|w| w / total)
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self(RiskDimension::ALL.map(|d| d.default_weight()))
    }
}

/// FX volatility class of a supplier's default currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityClass {
    Low,
    Medium,
    High,
    Extreme,
}

impl VolatilityClass {
    fn base_cyber_risk(&self) -> f64 {
        match self {
            VolatilityClass::Low => 10.0,
            VolatilityClass::Medium => 30.0,
            VolatilityClass::High => 55.0,
            VolatilityClass::Extreme => 75.0,
        }
    }
}

/// Observed supplier indicators. `None` means no data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierRiskIndicators {
    pub annual_revenue_usd: f64,
    /// Mean inspection defect rate, percent (default 3)
    pub defect_rate_pct: Option<f64>,
    /// Share of shipments on time, percent (default 70)
    pub on_time_pct: Option<f64>,
    pub quality_incidents: u32,
    /// Country governance indicator, 0-100 higher is better
    pub governance_score: Option<f64>,
    /// Fragile state index, 0-100 higher is worse
    pub fragile_state_index: Option<f64>,
    pub sanctioned: bool,
    pub non_compliant_checks: u32,
    pub verified_certifications: u32,
    /// ESG assessment, 0-100 higher is better
    pub esg_score: Option<f64>,
    pub supplier_tier: Option<Tier>,
    pub currency_volatility: Option<VolatilityClass>,
}

/// Per-dimension risk, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub financial: f64,
    pub operational: f64,
    pub geopolitical: f64,
    pub compliance: f64,
    pub concentration: f64,
    pub esg: f64,
    pub cyber: f64,
}

impl DimensionScores {
    /// Scores every dimension from raw indicators.
    ///
    /// # Errors
    /// - `NonFiniteValue` if any supplied numeric indicator is NaN or infinite
    pub fn from_indicators(ind: &SupplierRiskIndicators) -> Result<Self, DomainError> {
        let finite = |field: &str, v: f64| -> Result<f64, DomainError> {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ValidationError::non_finite(field, v).into())
            }
        };
        let revenue = finite("annual_revenue_usd", ind.annual_revenue_usd)?;
        let defect = finite("defect_rate_pct", ind.defect_rate_pct.unwrap_or(3.0))?;
        let on_time = finite("on_time_pct", ind.on_time_pct.unwrap_or(70.0))?;
        let governance = finite("governance_score", ind.governance_score.unwrap_or(NEUTRAL_SCORE))?;
        let fragility = finite(
            "fragile_state_index",
            ind.fragile_state_index.unwrap_or(NEUTRAL_SCORE),
        )?;
        let esg = finite("esg_score", ind.esg_score.unwrap_or(NEUTRAL_SCORE))?;

        let missing_certs = f64::from(
            MAX_CREDITED_CERTIFICATIONS
                - ind.verified_certifications.min(MAX_CREDITED_CERTIFICATIONS),
        );
        let sanctions = if ind.sanctioned { 30.0 } else { 0.0 };
        let cyber_base = ind
            .currency_volatility
            .map(|v| v.base_cyber_risk())
            .unwrap_or(VolatilityClass::Medium.base_cyber_risk());

        Ok(Self {
            financial: clip(100.0 - revenue.clamp(0.0, REVENUE_CAP_USD) / 5_000_000.0),
            operational: clip(
                defect * 5.0 + (100.0 - on_time) * 0.5 + f64::from(ind.quality_incidents) * 3.0,
            ),
            geopolitical: clip((100.0 - governance) * 0.6 + fragility * 0.3 + sanctions),
            compliance: clip(f64::from(ind.non_compliant_checks) * 20.0 + missing_certs * 10.0),
            concentration: concentration_risk(ind.supplier_tier),
            esg: clip(100.0 - esg),
            cyber: clip(cyber_base + (100.0 - governance) * 0.2 + missing_certs * 5.0),
        })
    }

    pub fn get(&self, dimension: RiskDimension) -> f64 {
        match dimension {
            RiskDimension::Financial => self.financial,
            RiskDimension::Operational => self.operational,
            RiskDimension::Geopolitical => self.geopolitical,
            RiskDimension::Compliance => self.compliance,
            RiskDimension::Concentration => self.concentration,
            RiskDimension::Esg => self.esg,
            RiskDimension::Cyber => self.cyber,
        }
    }

    /// Weighted composite, rounded to 2 decimals.
    pub fn composite(&self, weights: &RiskWeights) -> f64 {
        let total: f64 = RiskDimension::ALL
            .iter()
            .zip(weights.normalized())
            .map(|(d, w)| self.get(*d) * w)
            .sum();
        (total * 100.0).round() / 100.0
    }
}

/// Tier proxy for spend concentration; unknown tiers are neutral.
fn concentration_risk(tier: Option<Tier>) -> f64 {
    match tier {
        Some(Tier::Strategic) => 15.0,
        Some(Tier::Preferred) => 25.0,
        Some(Tier::Approved) => 40.0,
        Some(Tier::Conditional) => 60.0,
        Some(Tier::Blocked) => 90.0,
        None => NEUTRAL_SCORE,
    }
}

fn clip(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Qualitative band of a composite risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Upper bounds are inclusive: 30 is Low, 30.01 is Medium. NaN is Critical.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= RISK_LOW_MAX => RiskTier::Low,
            s if s <= RISK_MEDIUM_MAX => RiskTier::Medium,
            s if s <= RISK_HIGH_MAX => RiskTier::High,
            _ => RiskTier::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk assessment of one supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub supplier: String,
    pub dimensions: DimensionScores,
    pub composite_risk: f64,
    pub tier: RiskTier,
}

/// Scores a supplier's indicators and bands the weighted composite.
pub fn assess_risk(
    supplier: impl Into<String>,
    indicators: &SupplierRiskIndicators,
    weights: &RiskWeights,
) -> Result<RiskAssessment, DomainError> {
    let dimensions = DimensionScores::from_indicators(indicators)?;
    let composite_risk = dimensions.composite(weights);
    Ok(RiskAssessment {
        supplier: supplier.into(),
        tier: RiskTier::from_score(composite_risk),
        dimensions,
        composite_risk,
    })
}
