use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use crate::ConfigError;

/// Stores user-configurable shell preferences and calculator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub calculator: CalculatorDefaults,
    /// Amount the budget savings progress bar is measured against.
    #[serde(default = "Config::default_savings_target")]
    pub savings_target: f64,
    #[serde(default = "Config::default_budget_kind_value")]
    pub default_budget_kind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            theme: Theme::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            calculator: CalculatorDefaults::default(),
            savings_target: Self::default_savings_target(),
            default_budget_kind: Self::default_budget_kind_value(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 15] = [
        "locale",
        "currency",
        "theme",
        "color",
        "savings_target",
        "budget_kind",
        "fd_amount",
        "fd_rate",
        "fd_months",
        "rd_amount",
        "rd_rate",
        "rd_months",
        "sip_amount",
        "sip_return",
        "sip_years",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_savings_target() -> f64 {
        1_000.0
    }

    pub fn default_budget_kind_value() -> String {
        "household".into()
    }

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "locale" => self.locale = value.trim().to_string(),
            "currency" => self.currency = value.trim().to_uppercase(),
            "theme" => self.theme = Theme::from_str(value),
            "color" => {
                self.ui_color_enabled = match value.trim().to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => return Err(invalid()),
                }
            }
            "savings_target" => {
                let target: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !target.is_finite() || target <= 0.0 {
                    return Err(invalid());
                }
                self.savings_target = target;
            }
            "budget_kind" => {
                let kind = value.trim().to_ascii_lowercase();
                if !matches!(kind.as_str(), "household" | "event" | "festival") {
                    return Err(invalid());
                }
                self.default_budget_kind = kind;
            }
            "fd_amount" | "fd_rate" | "rd_amount" | "rd_rate" | "sip_amount" | "sip_return" => {
                let number = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .ok_or_else(invalid)?;
                let calc = &mut self.calculator;
                let slot = match key {
                    "fd_amount" => &mut calc.fd_amount,
                    "fd_rate" => &mut calc.fd_rate,
                    "rd_amount" => &mut calc.rd_amount,
                    "rd_rate" => &mut calc.rd_rate,
                    "sip_amount" => &mut calc.sip_amount,
                    _ => &mut calc.sip_return,
                };
                *slot = number;
            }
            "fd_months" | "rd_months" | "sip_years" => {
                let count: u32 = value.trim().parse().map_err(|_| invalid())?;
                let calc = &mut self.calculator;
                let slot = match key {
                    "fd_months" => &mut calc.fd_months,
                    "rd_months" => &mut calc.rd_months,
                    _ => &mut calc.sip_years,
                };
                *slot = count;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Values the calculators fall back to when an argument is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub fd_amount: f64,
    pub fd_rate: f64,
    pub fd_months: u32,
    pub rd_amount: f64,
    pub rd_rate: f64,
    pub rd_months: u32,
    pub sip_amount: f64,
    pub sip_return: f64,
    pub sip_years: u32,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            fd_amount: 10_000.0,
            fd_rate: 6.5,
            fd_months: 12,
            rd_amount: 1_000.0,
            rd_rate: 6.5,
            rd_months: 12,
            sip_amount: 2_000.0,
            sip_return: 12.0,
            sip_years: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}
