use crate::domain::a001_sales_order::catalog::{self, CatalogKind};
use crate::enums::PaymentStatus;
use anyhow::{anyhow, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub page: PageConfig,
    pub defaults: FormDefaults,
}

/// Header shown above the order form
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageConfig {
    pub order_number: String,
    pub operator: String,
}

/// Initial values of the order-level fields
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormDefaults {
    /// Code from the shipping catalog
    pub shipping_method: String,
    /// Payment status code
    pub payment_status: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[page]
order_number = "1547"
operator = "Kadam"

[defaults]
shipping_method = "standard"
payment_status = "pending"
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            page: PageConfig {
                order_number: "1547".to_string(),
                operator: "Kadam".to_string(),
            },
            defaults: FormDefaults {
                shipping_method: "standard".to_string(),
                payment_status: "pending".to_string(),
            },
        }
    }
}

impl FormDefaults {
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        PaymentStatus::from_code(&self.payment_status)
    }
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

/// Parse and check a TOML configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents).context("invalid order page config")?;

    if catalog::resolve(CatalogKind::Shipping, &config.defaults.shipping_method).is_none() {
        return Err(anyhow!(
            "unknown default shipping method: {}",
            config.defaults.shipping_method
        ));
    }
    if config.defaults.payment_status().is_none() {
        return Err(anyhow!(
            "unknown default payment status: {}",
            config.defaults.payment_status
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_default() {
        let config = load_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_shipping_rejected() {
        let doc = DEFAULT_CONFIG.replace("\"standard\"", "\"drone\"");
        let err = parse_config(&doc).unwrap_err();
        assert!(err.to_string().contains("drone"));
    }

    #[test]
    fn test_unknown_payment_rejected() {
        let doc = DEFAULT_CONFIG.replace("\"pending\"", "\"later\"");
        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn test_missing_section_rejected() {
        assert!(parse_config("[page]\norder_number = \"1\"\noperator = \"x\"\n").is_err());
    }
}
