//! Positional line parser for free-text shipping addresses.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use consign_core::{Phone, Pincode, ValidationError};

/// First run of 6 consecutive digits anywhere in a line. A longer digit
/// run also matches (its first 6 digits are taken), mirroring how the
/// address-capture form has always behaved.
fn pincode_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{6})").expect("static pattern compiles"))
}

/// `City, State` split on the locality line: two runs of characters that
/// are neither digits nor commas, separated by a comma.
fn city_state() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([^,\d]+),\s*([^,\d]+)").expect("static pattern compiles"))
}

/// Account-profile values used when the address blob omits the name or
/// phone line.
#[derive(Debug, Clone, Default)]
pub struct ProfileFallback {
    /// Account holder's display name.
    pub name: Option<String>,
    /// Account holder's phone number, already canonicalised.
    pub phone: Option<Phone>,
}

/// A shipping address recovered from a free-text blob.
///
/// `street` is `street_lines` joined with `", "`; both are kept so
/// callers can re-render the address either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAddress {
    /// Recipient name (line 0 or profile fallback).
    pub name: String,
    /// Recipient phone in digits-only form (line 1 or profile fallback).
    pub phone: Phone,
    /// Street lines in original order, locality line excluded.
    pub street_lines: Vec<String>,
    /// Street lines joined with `", "`. May be empty.
    pub street: String,
    /// City extracted from the locality line.
    pub city: String,
    /// State extracted from the locality line.
    pub state: String,
    /// 6-digit postal code extracted from the locality line.
    pub pincode: Pincode,
}

/// Failures while recovering structured fields from a raw address.
///
/// Parsing never silently defaults a missing locality: downstream
/// shipment creation requires pincode, city, and state, so their absence
/// must surface as a validation error to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    /// Address is empty and no profile name is available.
    #[error("address has no name line and no profile name is available")]
    MissingName,

    /// No phone line and no profile phone available.
    #[error("address has no phone line and no profile phone is available")]
    MissingPhone,

    /// No line contains a 6-digit postal code.
    #[error("no line contains a 6-digit pincode")]
    MissingLocality,

    /// The locality line was found but `City, State` could not be split
    /// out of it.
    #[error("could not extract city and state from locality line {line:?}")]
    MissingCityState {
        /// The locality line as it appeared in the address.
        line: String,
    },

    /// A recovered field failed identifier validation (e.g. the phone
    /// line contains no usable digits).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parse a newline-delimited address blob into a [`ParsedAddress`].
///
/// Lines are trimmed and empty lines dropped before indexing. Line 0 is
/// the recipient name and line 1 the phone number, each falling back to
/// the profile value when the line is absent. Among the remaining lines,
/// the first one containing a 6-digit run becomes the locality line
/// (pincode + `City, State`); every other line is a street line.
///
/// # Errors
///
/// Returns an [`AddressParseError`] naming the unrecoverable field; see
/// the variant docs. Partial data is never returned.
pub fn parse_address(
    raw: &str,
    fallback: &ProfileFallback,
) -> Result<ParsedAddress, AddressParseError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = lines
        .first()
        .map(|line| (*line).to_string())
        .or_else(|| fallback.name.clone())
        .ok_or(AddressParseError::MissingName)?;

    let phone = match lines.get(1) {
        Some(line) => Phone::new(*line)?,
        None => fallback
            .phone
            .clone()
            .ok_or(AddressParseError::MissingPhone)?,
    };

    // First line at index >= 2 with a 6-digit run wins the locality slot;
    // everything else accumulates into the street.
    let mut locality: Option<(Pincode, String)> = None;
    let mut street_lines: Vec<String> = Vec::new();

    for line in lines.iter().skip(2) {
        if locality.is_none() {
            if let Some(caps) = pincode_run().captures(line) {
                let pincode = Pincode::new(&caps[1])?;
                locality = Some((pincode, (*line).to_string()));
                continue;
            }
        }
        street_lines.push((*line).to_string());
    }

    let (pincode, locality_line) = locality.ok_or(AddressParseError::MissingLocality)?;

    let (city, state) = city_state()
        .captures(&locality_line)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .filter(|(city, state)| !city.is_empty() && !state.is_empty())
        .ok_or_else(|| AddressParseError::MissingCityState {
            line: locality_line.clone(),
        })?;

    let street = street_lines.join(", ");

    Ok(ParsedAddress {
        name,
        phone,
        street_lines,
        street,
        city,
        state,
        pincode,
    })
}
