// app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use storefront::{BadgePolicy, FormDefaults, RestConfig};

/// Which data gateway backs the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
  /// The hosted PostgREST service at `STOREFRONT_DATA_URL`.
  Rest,
  /// An in-process table, lost on restart.
  Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  pub gateway: GatewayKind,
  // Only present for `GatewayKind::Rest`.
  pub rest: Option<RestConfig>,

  pub form_defaults: FormDefaults,
  pub badge_policy: BadgePolicy,

  // Seeds the memory gateway with a demo catalog on startup.
  pub seed_demo_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source (`from_env` passes the process environment).
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let gateway = match get_env("STOREFRONT_GATEWAY")
      .unwrap_or_else(|_| "rest".to_string())
      .to_lowercase()
      .as_str()
    {
      "rest" => GatewayKind::Rest,
      "memory" => GatewayKind::Memory,
      other => {
        return Err(AppError::Config(format!(
          "Invalid STOREFRONT_GATEWAY '{}': expected 'rest' or 'memory'",
          other
        )))
      }
    };

    let rest = match gateway {
      GatewayKind::Rest => Some(RestConfig {
        base_url: get_env("STOREFRONT_DATA_URL")?,
        api_key: get_env("STOREFRONT_DATA_KEY")?,
      }),
      GatewayKind::Memory => None,
    };

    let form_defaults = FormDefaults {
      category: get_env("STOREFRONT_DEFAULT_CATEGORY").ok().map(|c| c.trim().to_string()),
    };

    let defaults = BadgePolicy::default();
    let sale_price_ceiling = match get_env("STOREFRONT_SALE_CEILING") {
      Ok(raw) => raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::Config(format!("Invalid STOREFRONT_SALE_CEILING: '{}'", raw)))?,
      Err(_) => defaults.sale_price_ceiling,
    };
    let new_window = match get_env("STOREFRONT_NEW_WINDOW_DAYS") {
      Ok(raw) => raw
        .trim()
        .parse::<u32>()
        .map(|days| chrono::Duration::days(days as i64))
        .map_err(|e| AppError::Config(format!("Invalid STOREFRONT_NEW_WINDOW_DAYS: {}", e)))?,
      Err(_) => defaults.new_window,
    };

    let seed_demo_catalog = get_env("SEED_DEMO_CATALOG")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEMO_CATALOG value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");
    // RestConfig's Debug redacts the API key.
    tracing::debug!(gateway = ?gateway, rest = ?rest, "Loaded config details");

    Ok(Self {
      server_host,
      server_port,
      gateway,
      rest,
      form_defaults,
      badge_policy: BadgePolicy {
        sale_price_ceiling,
        new_window,
      },
      seed_demo_catalog,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| map.get(name).cloned()
  }

  #[test]
  fn memory_gateway_needs_no_service_settings() {
    let config = AppConfig::from_lookup(lookup(&[("STOREFRONT_GATEWAY", "memory")])).unwrap();
    assert_eq!(config.gateway, GatewayKind::Memory);
    assert!(config.rest.is_none());
    assert_eq!(config.server_port, 8080);
    assert_eq!(config.badge_policy, BadgePolicy::default());
    assert!(!config.seed_demo_catalog);
  }

  #[test]
  fn rest_gateway_requires_url_and_key() {
    let err = AppConfig::from_lookup(lookup(&[("STOREFRONT_DATA_URL", "https://demo.supabase.co")])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("STOREFRONT_DATA_KEY")));

    let config = AppConfig::from_lookup(lookup(&[
      ("STOREFRONT_DATA_URL", "https://demo.supabase.co"),
      ("STOREFRONT_DATA_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(config.gateway, GatewayKind::Rest);
    assert_eq!(config.rest.unwrap().base_url, "https://demo.supabase.co");
  }

  #[test]
  fn overrides_and_invalid_values() {
    let config = AppConfig::from_lookup(lookup(&[
      ("STOREFRONT_GATEWAY", "Memory"),
      ("SERVER_PORT", "9000"),
      ("STOREFRONT_DEFAULT_CATEGORY", " general "),
      ("STOREFRONT_SALE_CEILING", "99.5"),
      ("STOREFRONT_NEW_WINDOW_DAYS", "7"),
      ("SEED_DEMO_CATALOG", "true"),
    ]))
    .unwrap();
    assert_eq!(config.server_port, 9000);
    assert_eq!(config.form_defaults.category.as_deref(), Some("general"));
    assert_eq!(config.badge_policy.sale_price_ceiling, 99.5);
    assert_eq!(config.badge_policy.new_window, chrono::Duration::days(7));
    assert!(config.seed_demo_catalog);

    for (name, value) in [
      ("SERVER_PORT", "eighty"),
      ("STOREFRONT_GATEWAY", "sqlite"),
      ("STOREFRONT_SALE_CEILING", "-1"),
      ("STOREFRONT_NEW_WINDOW_DAYS", "1.5"),
      ("SEED_DEMO_CATALOG", "yes"),
    ] {
      let result = AppConfig::from_lookup(lookup(&[("STOREFRONT_GATEWAY", "memory"), (name, value)]));
      assert!(matches!(result, Err(AppError::Config(_))), "{}={} should be rejected", name, value);
    }
  }
}
