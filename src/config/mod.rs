use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::DEFAULT_CITIES;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
    pub page: PageConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Демо-рейс, которым заполняется хранилище при старте
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub base_fare: f64,
    pub seat_rows: u32,
    pub demo_from_city: String,
    pub demo_to_city: String,
}

// Настройки страницы бронирования
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub cities: Vec<String>,
    pub currency_symbol: String,
    pub alert_dismiss_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            currency_symbol: "₹".to_string(),
            alert_dismiss_ms: 5000,
        }
    }
}

fn var_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = var_or(key, default);
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let page_defaults = PageConfig::default();
        let cities = match env::var("BOOKING_CITIES") {
            Ok(raw) => {
                let cities: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                if cities.is_empty() {
                    return Err(ConfigError::Invalid { key: "BOOKING_CITIES", value: raw });
                }
                cities
            }
            Err(_) => page_defaults.cities,
        };

        Ok(Config {
            app: AppConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parse_var("PORT", "8000")?,
                environment: var_or("ENVIRONMENT", "development"),
                rust_log: var_or("RUST_LOG", "bus_booking=debug,tower_http=debug"),
            },
            booking: BookingConfig {
                base_fare: parse_var("BOOKING_BASE_FARE", "500")?,
                seat_rows: parse_var("BOOKING_SEAT_ROWS", "10")?,
                demo_from_city: var_or("BOOKING_DEMO_FROM", "Mumbai"),
                demo_to_city: var_or("BOOKING_DEMO_TO", "Pune"),
            },
            page: PageConfig {
                cities,
                currency_symbol: var_or("BOOKING_CURRENCY_SYMBOL", &page_defaults.currency_symbol),
                alert_dismiss_ms: parse_var("ALERT_DISMISS_MS", "5000")?,
            },
        })
    }
}
