//! Exact conversion between decimal text and the ledger's smallest unit (wei).
//!
//! All arithmetic is integer-only; a quantity either converts exactly or is
//! rejected. Formatting follows the usual client convention: trailing zeros
//! are trimmed but at least one fractional digit is kept (`"1.0"`).

use crate::error::TypesError;
use crate::u256::U256;
use std::fmt;
use std::str::FromStr;

/// Decimals of one ether.
pub const ETHER_DECIMALS: u32 = 18;

/// Decimals of one gwei.
pub const GWEI_DECIMALS: u32 = 9;

/// Named denominations of the native token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Wei,
    Gwei,
    Ether,
}

impl Unit {
    pub const fn decimals(self) -> u32 {
        match self {
            Unit::Wei => 0,
            Unit::Gwei => GWEI_DECIMALS,
            Unit::Ether => ETHER_DECIMALS,
        }
    }
}

impl FromStr for Unit {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wei" => Ok(Unit::Wei),
            "gwei" => Ok(Unit::Gwei),
            "ether" | "eth" => Ok(Unit::Ether),
            other => Err(TypesError::UnknownUnit(other.to_string())),
        }
    }
}

fn scale(decimals: u32) -> Result<U256, TypesError> {
    U256::from_u64(10)
        .checked_pow(decimals)
        .ok_or(TypesError::U256Overflow)
}

/// Parse a decimal quantity expressed in units of `10^decimals` wei.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, TypesError> {
    let text = amount.trim();
    let invalid = || TypesError::InvalidAmount(amount.to_string());

    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(TypesError::TooManyDecimals {
            amount: amount.to_string(),
            decimals,
        });
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_decimal_str(whole)?
    };
    let fraction = if fraction.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        U256::from_decimal_str(&padded)?
    };

    whole
        .checked_mul(&scale(decimals)?)
        .and_then(|w| w.checked_add(&fraction))
        .ok_or(TypesError::U256Overflow)
}

/// Format a wei quantity in units of `10^decimals` wei.
pub fn format_units(value: U256, decimals: u32) -> String {
    let Ok(divisor) = scale(decimals) else {
        return format!("0.{}", value);
    };
    let Some((whole, fraction)) = value.checked_div_rem(&divisor) else {
        return value.to_string();
    };

    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Parse an ether quantity (`"1"`, `"0.5"`, `2`) into wei.
pub fn parse_ether<T: fmt::Display>(amount: T) -> Result<U256, TypesError> {
    parse_units(&amount.to_string(), ETHER_DECIMALS)
}

/// Format a wei quantity as ether (`1 ether -> "1.0"`).
pub fn format_ether(value: U256) -> String {
    format_units(value, ETHER_DECIMALS)
}

/// Whole ether to wei. Exact for every `u64`.
pub fn ether(amount: u64) -> U256 {
    U256::from_u128(amount as u128 * 1_000_000_000_000_000_000u128)
}

/// Whole gwei to wei.
pub fn gwei(amount: u64) -> U256 {
    U256::from_u128(amount as u128 * 1_000_000_000u128)
}
