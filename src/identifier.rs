//! Steam ID normalization.

use crate::error::IdentifierError;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use steamid_ng::SteamID;

/// Offset between an account number and its 64-bit Steam ID.
const STEAMID64_BASE: u64 = 76561197960265728;

/// A canonical, purely numeric user identifier. Used both as the cache key for an inventory and
/// as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
    
    /// Converts the identifier into a [`SteamID`]. `None` if the value does not fit in 64 bits.
    pub fn to_steamid(&self) -> Option<SteamID> {
        self.0.parse::<u64>().ok().map(SteamID::from)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;
    
    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize(&value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl From<SteamID> for Identifier {
    fn from(steamid: SteamID) -> Self {
        Self(u64::from(steamid).to_string())
    }
}

/// Converts a possibly legacy-format identifier into its canonical numeric form.
///
/// Surrounding whitespace is ignored. Identifiers made up only of digits are assumed to already
/// be canonical and are returned as-is. Anything else must be in the legacy `universe:type:account`
/// form and is converted to `76561197960265728 + account + 2 * type`, where `type` is the
/// second part and `account` the third. The universe part is not inspected.
///
/// Note that this weighs the parts the other way around from the usual Steam2 to 64-bit
/// conversion (`76561197960265728 + Y + 2 * Z` for `STEAM_X:Y:Z`). The two only agree when
/// both parts are equal, so a real `STEAM_0:1:5` ID maps to `76561197960265739` elsewhere but
/// to `76561197960265735` here. Pass 64-bit IDs where they are available.
///
/// # Examples
/// ```
/// use steam_inventory_cache::normalize;
///
/// assert_eq!(normalize(" 76561198233097000 ").unwrap().as_str(), "76561198233097000");
/// assert_eq!(normalize("STEAM_0:0:0").unwrap().as_str(), "76561197960265728");
/// assert_eq!(normalize("STEAM_0:1:1").unwrap().as_str(), "76561197960265731");
/// ```
pub fn normalize(raw: &str) -> Result<Identifier, IdentifierError> {
    let raw = raw.trim();
    
    if raw.is_empty() {
        return Err(IdentifierError::Empty);
    }
    
    if is_digits(raw) {
        return Ok(Identifier(raw.to_string()));
    }
    
    let parts = raw.split(':').collect::<Vec<_>>();
    
    if parts.len() != 3 {
        return Err(IdentifierError::WrongPartCount(parts.len()));
    }
    
    let r#type = parse_part(parts[1])?;
    let account = parse_part(parts[2])?;
    let steamid = r#type
        .checked_mul(2)
        .and_then(|double_type| double_type.checked_add(account))
        .and_then(|offset| offset.checked_add(STEAMID64_BASE))
        .ok_or(IdentifierError::Overflow)?;
    
    Ok(Identifier(steamid.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_part(part: &str) -> Result<u64, IdentifierError> {
    let part = part.trim();
    
    if !is_digits(part) {
        return Err(IdentifierError::InvalidPart(part.to_string()));
    }
    
    part.parse::<u64>().map_err(|_| IdentifierError::Overflow)
}
