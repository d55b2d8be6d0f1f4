//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Billing configuration.
    #[serde(default)]
    pub billing: BillingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which GST rates are applied to a bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxPolicyKind {
    /// One flat rate set for every line.
    #[default]
    Flat,
    /// Each line's own catalog rates.
    PerItem,
}

/// Billing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Currency for display.
    #[serde(default)]
    pub currency: Currency,
    /// Tax policy.
    #[serde(default)]
    pub tax_policy: TaxPolicyKind,
    /// Flat SGST rate in percent.
    #[serde(default = "default_sgst_rate")]
    pub sgst_rate: Decimal,
    /// Flat CGST rate in percent.
    #[serde(default = "default_cgst_rate")]
    pub cgst_rate: Decimal,
    /// Flat IGST rate in percent.
    #[serde(default = "default_igst_rate")]
    pub igst_rate: Decimal,
    /// State the pharmacy is registered in; suppliers outside it are interstate.
    #[serde(default = "default_home_state")]
    pub home_state: String,
}

fn default_sgst_rate() -> Decimal {
    Decimal::from(6)
}

fn default_cgst_rate() -> Decimal {
    Decimal::from(6)
}

fn default_igst_rate() -> Decimal {
    Decimal::from(12)
}

fn default_home_state() -> String {
    "Telangana".to_string()
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            tax_policy: TaxPolicyKind::default(),
            sgst_rate: default_sgst_rate(),
            cgst_rate: default_cgst_rate(),
            igst_rate: default_igst_rate(),
            home_state: default_home_state(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "tapza=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TAPZA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Checks that configured rates are usable percentages.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if any rate is outside `[0, 100]`
    /// or the home state is blank.
    pub fn validate(&self) -> AppResult<()> {
        let billing = &self.billing;
        for (name, rate) in [
            ("sgst_rate", billing.sgst_rate),
            ("cgst_rate", billing.cgst_rate),
            ("igst_rate", billing.igst_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(AppError::Configuration(format!(
                    "billing.{name} must be between 0 and 100, got {rate}"
                )));
            }
        }

        if billing.home_state.trim().is_empty() {
            return Err(AppError::Configuration(
                "billing.home_state must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
