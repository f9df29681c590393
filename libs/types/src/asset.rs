//! Ledger asset identifiers
//!
//! An asset is either the native ledger currency or a credit issued by an
//! account, identified by an alphanumeric code plus the issuer's account id.
//! Equality is structural: two assets are the same asset only if type, code
//! and issuer all match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AssetError;

/// Asset type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The ledger's native currency (no code, no issuer)
    Native,
    /// Credit with a 1-4 character code
    CreditAlphanum4,
    /// Credit with a 5-12 character code
    CreditAlphanum12,
}

impl AssetType {
    /// Canonical string form used by the ledger and its resources
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Native => "native",
            AssetType::CreditAlphanum4 => "credit_alphanum4",
            AssetType::CreditAlphanum12 => "credit_alphanum12",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(AssetType::Native),
            "credit_alphanum4" => Ok(AssetType::CreditAlphanum4),
            "credit_alphanum12" => Ok(AssetType::CreditAlphanum12),
            other => Err(AssetError::UnknownType(other.to_string())),
        }
    }
}

/// An asset class: type tag, code and issuer
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "AssetRepr", into = "AssetRepr")]
pub struct Asset {
    asset_type: AssetType,
    code: String,
    issuer: String,
}

impl Asset {
    /// The native asset
    pub fn native() -> Self {
        Self {
            asset_type: AssetType::Native,
            code: String::new(),
            issuer: String::new(),
        }
    }

    /// A credit asset; the type tag follows from the code length
    pub fn credit(code: &str, issuer: &str) -> Result<Self, AssetError> {
        let asset_type = match code.len() {
            1..=4 => AssetType::CreditAlphanum4,
            5..=12 => AssetType::CreditAlphanum12,
            _ => {
                return Err(AssetError::InvalidCode {
                    code: code.to_string(),
                })
            }
        };
        Self::new(asset_type, code, issuer)
    }

    /// Build an asset from its three parts, validating that they agree
    pub fn new(asset_type: AssetType, code: &str, issuer: &str) -> Result<Self, AssetError> {
        if asset_type == AssetType::Native {
            if !code.is_empty() || !issuer.is_empty() {
                return Err(AssetError::NativeWithCode);
            }
            return Ok(Self::native());
        }

        let valid_len = match asset_type {
            AssetType::CreditAlphanum4 => (1..=4).contains(&code.len()),
            AssetType::CreditAlphanum12 => (5..=12).contains(&code.len()),
            AssetType::Native => false,
        };
        if !valid_len || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AssetError::InvalidCode {
                code: code.to_string(),
            });
        }
        if issuer.is_empty() {
            return Err(AssetError::MissingIssuer {
                code: code.to_string(),
            });
        }

        Ok(Self {
            asset_type,
            code: code.to_string(),
            issuer: issuer.to_string(),
        })
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// Asset code; empty for the native asset
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Issuer account id; empty for the native asset
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn is_native(&self) -> bool {
        self.asset_type == AssetType::Native
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            f.write_str("native")
        } else {
            write!(f, "{}:{}", self.code, self.issuer)
        }
    }
}

/// Wire form: `{asset_type, asset_code, asset_issuer}`
#[derive(Serialize, Deserialize)]
struct AssetRepr {
    asset_type: AssetType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    asset_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    asset_issuer: String,
}

impl TryFrom<AssetRepr> for Asset {
    type Error = AssetError;

    fn try_from(repr: AssetRepr) -> Result<Self, Self::Error> {
        Asset::new(repr.asset_type, &repr.asset_code, &repr.asset_issuer)
    }
}

impl From<Asset> for AssetRepr {
    fn from(asset: Asset) -> Self {
        Self {
            asset_type: asset.asset_type,
            asset_code: asset.code,
            asset_issuer: asset.issuer,
        }
    }
}
