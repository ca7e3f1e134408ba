//! # consign-address — Free-Text Shipping Address Parser
//!
//! Customer shipping addresses arrive as a single unstructured text blob,
//! one field per line by convention but with no enforced schema. This
//! crate turns such a blob into a [`ParsedAddress`] suitable for courier
//! shipment creation, or a typed [`AddressParseError`] naming the fields
//! that could not be recovered.
//!
//! ## Line conventions
//!
//! - Line 0: customer name (falls back to the account profile name)
//! - Line 1: phone number (falls back to the account profile phone;
//!   formatting characters are stripped)
//! - Lines 2+: street lines, plus exactly one "locality line" carrying
//!   `City, State Pincode`
//!
//! The locality line is detected as the first line (index >= 2) that
//! contains a run of 6 consecutive digits.
//!
//! ## Known limitation
//!
//! A street line that happens to contain 6 consecutive digits (a flat or
//! plot number, for instance) is mis-detected as the locality line, and
//! the real locality line then lands in the street field. The first match
//! wins. Callers that control address capture should keep unit numbers
//! under 6 digits or put the locality on its own line.

pub mod parser;

pub use parser::{parse_address, AddressParseError, ParsedAddress, ProfileFallback};
