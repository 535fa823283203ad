//! # Transfer fees and taxes
//! Simplified estimates for a real-estate transfer, all in million VND.
//!
//! Reference-only: real bases, exemptions and local land quotas vary by
//! dossier and must be checked with the tax office.

use serde::Serialize;

/// Registration fee rate on land value (0.5%).
pub const DEFAULT_REGISTRATION_FEE_RATE: f64 = 0.005;
/// Personal income tax rate on the transfer price (2%).
pub const DEFAULT_PIT_RATE: f64 = 0.02;

// Non-agricultural land use tax bands (fractions, not percent).
const LAND_TAX_IN_QUOTA: f64 = 0.03 / 100.0;
const LAND_TAX_UP_TO_3X: f64 = 0.07 / 100.0;
const LAND_TAX_OVER_3X: f64 = 0.15 / 100.0;

/// Land registration fee: `area * reference price * rate`, 0 when exempt.
pub fn registration_fee_land(area_m2: f64, gov_price_per_m2: f64, rate: f64, exempt: bool) -> f64 {
    if exempt {
        return 0.0;
    }
    area_m2.max(0.0) * gov_price_per_m2.max(0.0) * rate
}

/// Personal income tax on a transfer: `price * rate`, 0 when exempt.
pub fn pit_real_estate_transfer(transfer_price: f64, rate: f64, exempt: bool) -> f64 {
    if exempt {
        return 0.0;
    }
    transfer_price.max(0.0) * rate
}

/// Band-by-band land use tax, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandUseTaxBreakdown {
    pub area_in_quota_m2: f64,
    pub area_over_quota_up_to_3x_m2: f64,
    pub area_over_3x_m2: f64,
    pub tax_in_quota: f64,
    pub tax_over_quota_up_to_3x: f64,
    pub tax_over_3x: f64,
    pub total: f64,
    pub applied_reduction_factor: f64,
}

/// Progressive non-agricultural (residential) land use tax.
///
/// Bands: within quota 0.03%, quota..3×quota 0.07%, above 3×quota 0.15%.
/// A quota ≤ 0 means the whole area counts as within quota.
pub fn non_agri_land_use_tax(
    area_m2: f64,
    gov_price_per_m2: f64,
    quota_m2: f64,
    exempt: bool,
    reduce_50: bool,
) -> LandUseTaxBreakdown {
    let area = area_m2.max(0.0);
    let price = gov_price_per_m2.max(0.0);
    let mut quota = quota_m2.max(0.0);
    if quota <= 0.0 {
        quota = area;
    }

    if exempt {
        return LandUseTaxBreakdown {
            area_in_quota_m2: area,
            area_over_quota_up_to_3x_m2: 0.0,
            area_over_3x_m2: 0.0,
            tax_in_quota: 0.0,
            tax_over_quota_up_to_3x: 0.0,
            tax_over_3x: 0.0,
            total: 0.0,
            applied_reduction_factor: 0.0,
        };
    }

    let a1 = area.min(quota);
    let a2 = (area.min(3.0 * quota) - quota).max(0.0);
    let a3 = (area - 3.0 * quota).max(0.0);

    let factor = if reduce_50 { 0.5 } else { 1.0 };
    let t1 = a1 * price * LAND_TAX_IN_QUOTA * factor;
    let t2 = a2 * price * LAND_TAX_UP_TO_3X * factor;
    let t3 = a3 * price * LAND_TAX_OVER_3X * factor;

    LandUseTaxBreakdown {
        area_in_quota_m2: a1,
        area_over_quota_up_to_3x_m2: a2,
        area_over_3x_m2: a3,
        tax_in_quota: t1,
        tax_over_quota_up_to_3x: t2,
        tax_over_3x: t3,
        total: t1 + t2 + t3,
        applied_reduction_factor: factor,
    }
}
