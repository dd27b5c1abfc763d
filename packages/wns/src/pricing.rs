use std::convert::TryFrom;

use cosmwasm_std::{StdError, StdResult, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::label_length;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const DEFAULT_GRACE_PERIOD: u64 = 2_592_000;
/// Number of entries in a rent price table: lengths 1, 2, 3, 4, 5 and 6+.
pub const RENT_PRICE_TIERS: usize = 6;
/// `latest_answer` of a price feed carries 8 decimals.
pub const PRICE_FEED_UNIT: u128 = 100_000_000;
const ATTO: u128 = 1_000_000_000_000_000_000;

// 0.5 ^ (2^(i-1) / 65536) scaled by 1e18, for i = 1..=16.
const FRACTION_BITS: [u128; 16] = [
    999_989_423_469_314_432,
    999_978_847_050_491_904,
    999_957_694_548_431_104,
    999_915_390_886_613_504,
    999_830_788_931_929_088,
    999_661_606_496_243_712,
    999_323_327_502_650_752,
    998_647_112_890_970_240,
    997_296_056_085_470_080,
    994_599_423_483_633_152,
    989_228_013_193_975_424,
    978_572_062_087_700_096,
    957_603_280_698_573_696,
    917_004_043_204_671_232,
    840_896_415_253_714_560,
    707_106_781_186_547_584,
];

/// Source of the USD price of the payment asset.
pub trait UsdPriceFeed {
    /// Price of one whole unit of the payment asset in USD, 8 decimals.
    fn latest_answer(&self) -> StdResult<Uint128>;
}

/// A feed pinned to one answer.
pub struct FixedPriceFeed(pub Uint128);

impl UsdPriceFeed for FixedPriceFeed {
    fn latest_answer(&self) -> StdResult<Uint128> {
        Ok(self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema, Default)]
pub struct RentPrice {
    pub base: Uint128,
    pub premium: Uint128,
}

impl RentPrice {
    pub fn total(&self) -> StdResult<Uint128> {
        Ok(self.base.checked_add(self.premium)?)
    }
}

/// Surcharge applied to names re-registered right after their grace period.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PremiumCurve {
    None,
    /// `initial_premium - elapsed * decrease_rate`, both in attoUSD.
    Linear {
        initial_premium: Uint128,
        decrease_rate: Uint128,
    },
    /// Halves every day, reaching zero after `total_days`.
    Exponential {
        start_premium: Uint128,
        total_days: u64,
    },
}

impl PremiumCurve {
    pub fn initial_premium(&self) -> Uint128 {
        match self {
            PremiumCurve::None => Uint128::zero(),
            PremiumCurve::Linear {
                initial_premium, ..
            } => *initial_premium,
            PremiumCurve::Exponential {
                start_premium,
                total_days,
            } => {
                let end_value = shr(start_premium.u128(), *total_days as u128);
                Uint128::from(start_premium.u128() - end_value)
            }
        }
    }

    pub fn decrease_rate(&self) -> Uint128 {
        match self {
            PremiumCurve::Linear { decrease_rate, .. } => *decrease_rate,
            _ => Uint128::zero(),
        }
    }

    /// Premium `elapsed` seconds after the grace period ended.
    pub fn premium_after(&self, elapsed: u64) -> StdResult<Uint128> {
        match self {
            PremiumCurve::None => Ok(Uint128::zero()),
            PremiumCurve::Linear {
                initial_premium,
                decrease_rate,
            } => match decrease_rate.checked_mul(Uint128::from(elapsed)) {
                Ok(discount) if discount <= *initial_premium => Ok(*initial_premium - discount),
                _ => Ok(Uint128::zero()),
            },
            PremiumCurve::Exponential {
                start_premium,
                total_days,
            } => {
                let end_value = shr(start_premium.u128(), *total_days as u128);
                let premium = decayed_premium(start_premium.u128(), elapsed)?;
                if premium > end_value {
                    Ok(Uint128::from(premium - end_value))
                } else {
                    Ok(Uint128::zero())
                }
            }
        }
    }

    /// Seconds after the grace period at which the premium has fallen to `target`.
    pub fn elapsed_until(&self, target: Uint128) -> StdResult<u64> {
        if target > self.initial_premium() {
            return Err(StdError::generic_err(format!(
                "premium {} is above the initial premium {}",
                target,
                self.initial_premium()
            )));
        }
        match self {
            PremiumCurve::None => Ok(0),
            PremiumCurve::Linear {
                initial_premium,
                decrease_rate,
            } => {
                if decrease_rate.is_zero() {
                    return Err(StdError::generic_err("premium never decreases"));
                }
                let seconds = (*initial_premium - target).u128() / decrease_rate.u128();
                u64::try_from(seconds).map_err(|_| {
                    StdError::generic_err(format!("{} seconds does not fit in u64", seconds))
                })
            }
            PremiumCurve::Exponential { total_days, .. } => {
                let mut low = 0u64;
                let mut high = total_days
                    .checked_mul(SECONDS_PER_DAY)
                    .ok_or_else(|| StdError::generic_err("auction window overflows"))?;
                while low < high {
                    let mid = low + (high - low) / 2;
                    if self.premium_after(mid)? <= target {
                        high = mid;
                    } else {
                        low = mid + 1;
                    }
                }
                Ok(low)
            }
        }
    }
}

fn shr(value: u128, bits: u128) -> u128 {
    if bits >= 128 {
        0
    } else {
        value >> bits
    }
}

fn mul_fraction(value: u128, fraction: u128) -> StdResult<u128> {
    let whole = (value / ATTO)
        .checked_mul(fraction)
        .ok_or_else(|| StdError::generic_err("premium overflow"))?;
    let part = (value % ATTO) * fraction / ATTO;
    whole
        .checked_add(part)
        .ok_or_else(|| StdError::generic_err("premium overflow"))
}

/// `start * 0.5 ^ (elapsed / 1 day)` evaluated with 16 fractional bits.
pub fn decayed_premium(start: u128, elapsed: u64) -> StdResult<u128> {
    let days_past = elapsed as u128 * ATTO / SECONDS_PER_DAY as u128;
    let int_days = days_past / ATTO;
    let mut premium = shr(start, int_days);
    let part_day = days_past - int_days * ATTO;
    let fraction = part_day * (1u128 << 16) / ATTO;
    for (i, bit) in FRACTION_BITS.iter().enumerate() {
        if fraction & (1u128 << i) != 0 {
            premium = mul_fraction(premium, *bit)?;
        }
    }
    Ok(premium)
}

pub fn base_price_usd(rent_prices: &[Uint128], name: &str, duration: u64) -> StdResult<Uint128> {
    let len = label_length(name);
    if len == 0 {
        return Ok(Uint128::zero());
    }
    let rate = rent_prices
        .get(len.min(rent_prices.len()).saturating_sub(1))
        .ok_or_else(|| StdError::generic_err("rent price table is empty"))?;
    Ok(rate.checked_mul(Uint128::from(duration))?)
}

pub fn atto_usd_to_amount(atto_usd: Uint128, answer: Uint128) -> StdResult<Uint128> {
    if answer.is_zero() {
        return Err(StdError::generic_err("price feed answered zero"));
    }
    let scaled = atto_usd.checked_mul(Uint128::from(PRICE_FEED_UNIT))?;
    Ok(Uint128::from(scaled.u128() / answer.u128()))
}

pub fn amount_to_atto_usd(amount: Uint128, answer: Uint128) -> StdResult<Uint128> {
    let scaled = amount.checked_mul(answer)?;
    Ok(Uint128::from(scaled.u128() / PRICE_FEED_UNIT))
}

/// Converts attoUSD into the smallest unit of a USD stablecoin with `decimals` decimals.
pub fn atto_usd_to_stablecoin(atto_usd: Uint128, decimals: u8) -> StdResult<Uint128> {
    if decimals > 18 {
        return Err(StdError::generic_err(format!(
            "stablecoin decimals {} exceed 18",
            decimals
        )));
    }
    let divisor = 10u128.pow((18 - decimals) as u32);
    Ok(Uint128::from(atto_usd.u128() / divisor))
}

/// Per-second yearly rate: `usd * 1e18 / 31_536_000`.
pub fn yearly_usd_to_rate(usd: u128) -> StdResult<Uint128> {
    let atto = usd
        .checked_mul(ATTO)
        .ok_or_else(|| StdError::generic_err("yearly price overflows"))?;
    Ok(Uint128::from(atto / SECONDS_PER_YEAR as u128))
}

/// Rent table, premium curve and grace period of one TLD.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PriceSchedule {
    /// attoUSD per second for labels of length 1, 2, 3, 4, 5 and 6+.
    pub rent_prices: Vec<Uint128>,
    pub premium: PremiumCurve,
    pub grace_period: u64,
}

impl PriceSchedule {
    pub fn validate(&self) -> StdResult<()> {
        if self.rent_prices.len() != RENT_PRICE_TIERS {
            return Err(StdError::generic_err(format!(
                "expected {} rent prices, got {}",
                RENT_PRICE_TIERS,
                self.rent_prices.len()
            )));
        }
        Ok(())
    }

    pub fn premium_usd(&self, expires: u64, now: u64) -> StdResult<Uint128> {
        if expires == 0 {
            return Ok(Uint128::zero());
        }
        let grace_end = expires.saturating_add(self.grace_period);
        if grace_end > now {
            return Ok(Uint128::zero());
        }
        self.premium.premium_after(now - grace_end)
    }

    pub fn price_usd(
        &self,
        name: &str,
        expires: u64,
        duration: u64,
        now: u64,
    ) -> StdResult<RentPrice> {
        Ok(RentPrice {
            base: base_price_usd(&self.rent_prices, name, duration)?,
            premium: self.premium_usd(expires, now)?,
        })
    }

    /// Price in the smallest unit of the asset `feed` quotes.
    pub fn price<F: UsdPriceFeed>(
        &self,
        feed: &F,
        name: &str,
        expires: u64,
        duration: u64,
        now: u64,
    ) -> StdResult<RentPrice> {
        let usd = self.price_usd(name, expires, duration, now)?;
        let answer = feed.latest_answer()?;
        Ok(RentPrice {
            base: atto_usd_to_amount(usd.base, answer)?,
            premium: atto_usd_to_amount(usd.premium, answer)?,
        })
    }

    /// Timestamp at which the premium of a name expiring at `expires` drops to `amount`,
    /// given in the asset `feed` quotes.
    pub fn time_until_premium<F: UsdPriceFeed>(
        &self,
        feed: &F,
        expires: u64,
        amount: Uint128,
    ) -> StdResult<u64> {
        let target = amount_to_atto_usd(amount, feed.latest_answer()?)?;
        let elapsed = self.premium.elapsed_until(target)?;
        expires
            .checked_add(self.grace_period)
            .and_then(|t| t.checked_add(elapsed))
            .ok_or_else(|| StdError::generic_err("timestamp overflow"))
    }
}
