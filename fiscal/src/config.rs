//! Fiscal constants for Romanian sole proprietorships (PFA).

use crate::currency::Currency;

/// All monetary figures are normalized to this currency before display.
pub const BASE_CURRENCY: Currency = Currency::RON;

/// Standard VAT rate, in force since 1 August 2025.
pub const VAT_RATE: f64 = 0.21;

/// VAT registration threshold used until the change below takes effect.
pub const DEFAULT_VAT_THRESHOLD: f64 = 300_000.0;

/// VAT registration threshold applicable from 1 September 2025.
pub const UPCOMING_VAT_THRESHOLD: f64 = 395_000.0;

/// Gross monthly minimum wage.
pub const DEFAULT_MINIMUM_WAGE: f64 = 4_050.0;

/// Health contribution (CASS) annual cap, in minimum wages, before the change.
pub const HEALTH_CAP_MAX_WAGES_BEFORE_CHANGE: u32 = 60;

/// Health contribution (CASS) annual cap, in minimum wages, after the change.
pub const HEALTH_CAP_MAX_WAGES_AFTER_CHANGE: u32 = 72;

/// First income year the new CASS cap applies to.
pub const HEALTH_CAP_CHANGE_YEAR: u32 = 2025;

/// Location of the settings view.
pub const SETTINGS_PATH: &str = "/setari";
