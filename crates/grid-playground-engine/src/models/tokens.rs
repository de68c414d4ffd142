//! Closed value types for every editable grid property.
//!
//! Each token parses from the textual form a front end hands over (a select
//! box value, a command argument) and knows the class name it produces.
//! Anything outside a token's domain is rejected with
//! [`LayoutError::InvalidValue`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::LayoutError;
use crate::models::Breakpoint;

/// Maximum span of a single column
pub const GRID_COLUMNS: u8 = 12;

/// Parse an optional token where an empty string means "unset"
pub fn parse_optional<T>(value: &str) -> Result<Option<T>, LayoutError>
where
    T: FromStr<Err = LayoutError>,
{
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Parse a width token. Besides the empty string, `none` and `inherit` also
/// mean "unset", matching the labels the editor shows for an empty width.
pub fn parse_width(value: &str) -> Result<Option<WidthToken>, LayoutError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "inherit" => Ok(None),
        _ => parse_optional(value),
    }
}

fn parse_bounded(
    field: &'static str,
    raw: &str,
    digits: &str,
    min: u8,
    max: u8,
) -> Result<u8, LayoutError> {
    digits
        .parse::<u8>()
        .ok()
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| LayoutError::invalid(field, raw))
}

fn with_infix(base: &str, bp: Breakpoint, suffix: Option<&str>) -> String {
    let mut class = String::from(base);
    if let Some(infix) = bp.infix() {
        class.push('-');
        class.push_str(infix);
    }
    if let Some(suffix) = suffix {
        class.push('-');
        class.push_str(suffix);
    }
    class
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

// ============ Column tokens ============

/// Column sizing at one breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthToken {
    /// Share the remaining space equally (`col`)
    AutoEqual,
    /// Size to content (`col-auto`)
    AutoContent,
    /// Span 1..=12 grid columns (`col-N`)
    Span(u8),
}

impl WidthToken {
    pub fn class(self, bp: Breakpoint) -> String {
        match self {
            WidthToken::AutoEqual => with_infix("col", bp, None),
            WidthToken::AutoContent => with_infix("col", bp, Some("auto")),
            WidthToken::Span(n) => with_infix("col", bp, Some(&n.to_string())),
        }
    }
}

impl fmt::Display for WidthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthToken::AutoEqual => f.write_str("auto-equal"),
            WidthToken::AutoContent => f.write_str("auto-content"),
            WidthToken::Span(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for WidthToken {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "col" | "auto-equal" => Ok(WidthToken::AutoEqual),
            "col-auto" | "auto" | "auto-content" => Ok(WidthToken::AutoContent),
            other => {
                let digits = other.strip_prefix("col-").unwrap_or(other);
                parse_bounded("width", s, digits, 1, GRID_COLUMNS).map(WidthToken::Span)
            }
        }
    }
}

impl Serialize for WidthToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

/// Empty grid columns inserted before a column, 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(u8);

impl Offset {
    pub fn new(n: u8) -> Result<Self, LayoutError> {
        if n < GRID_COLUMNS {
            Ok(Offset(n))
        } else {
            Err(LayoutError::invalid("offset", n.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn class(self, bp: Breakpoint) -> String {
        with_infix("offset", bp, Some(&self.0.to_string()))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Offset {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bounded("offset", s, s.trim(), 0, GRID_COLUMNS - 1).map(Offset)
    }
}

impl Serialize for Offset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Visual order of a column within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderToken {
    First,
    Last,
    /// Explicit position 0..=5
    Index(u8),
}

impl OrderToken {
    pub fn class(self, bp: Breakpoint) -> String {
        with_infix("order", bp, Some(&self.to_string()))
    }
}

impl fmt::Display for OrderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderToken::First => f.write_str("first"),
            OrderToken::Last => f.write_str("last"),
            OrderToken::Index(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for OrderToken {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(OrderToken::First),
            "last" => Ok(OrderToken::Last),
            other => parse_bounded("order", s, other, 0, 5).map(OrderToken::Index),
        }
    }
}

impl Serialize for OrderToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

/// Explicit minimum height for a column, any CSS length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Height(String);

impl Height {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Height {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = LENGTH_REGEX.get_or_init(|| {
            Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)(?:px|rem|em|%|vh|vw)$")
                .expect("Invalid length regex")
        });

        let value = s.trim().to_ascii_lowercase();
        if regex.is_match(&value) {
            Ok(Height(value))
        } else {
            Err(LayoutError::invalid("height", s))
        }
    }
}

// ============ Row tokens ============

/// Gutter size along one axis, 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gutter(u8);

impl Gutter {
    pub fn new(n: u8) -> Result<Self, LayoutError> {
        if n <= 5 {
            Ok(Gutter(n))
        } else {
            Err(LayoutError::invalid("gutter", n.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Gutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gutter {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bounded("gutter", s, s.trim(), 0, 5).map(Gutter)
    }
}

impl Serialize for Gutter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Cross-axis alignment of a row's columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignItems {
    Start,
    Center,
    End,
}

impl AlignItems {
    pub fn class(self) -> &'static str {
        match self {
            AlignItems::Start => "align-items-start",
            AlignItems::Center => "align-items-center",
            AlignItems::End => "align-items-end",
        }
    }
}

impl FromStr for AlignItems {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.strip_prefix("align-items-").unwrap_or(&lower) {
            "start" => Ok(AlignItems::Start),
            "center" => Ok(AlignItems::Center),
            "end" => Ok(AlignItems::End),
            _ => Err(LayoutError::invalid("align-items", s)),
        }
    }
}

/// Main-axis distribution of a row's columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JustifyContent {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl JustifyContent {
    pub fn class(self) -> &'static str {
        match self {
            JustifyContent::Start => "justify-content-start",
            JustifyContent::Center => "justify-content-center",
            JustifyContent::End => "justify-content-end",
            JustifyContent::Between => "justify-content-between",
            JustifyContent::Around => "justify-content-around",
            JustifyContent::Evenly => "justify-content-evenly",
        }
    }
}

impl FromStr for JustifyContent {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.strip_prefix("justify-content-").unwrap_or(&lower) {
            "start" => Ok(JustifyContent::Start),
            "center" => Ok(JustifyContent::Center),
            "end" => Ok(JustifyContent::End),
            "between" => Ok(JustifyContent::Between),
            "around" => Ok(JustifyContent::Around),
            "evenly" => Ok(JustifyContent::Evenly),
            _ => Err(LayoutError::invalid("justify-content", s)),
        }
    }
}

// ============ Layout tokens ============

/// Outer container: fixed max-width per breakpoint, or full width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    #[default]
    Fixed,
    Fluid,
}

impl ContainerType {
    pub fn class(self) -> &'static str {
        match self {
            ContainerType::Fixed => "container",
            ContainerType::Fluid => "container-fluid",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerType::Fixed => f.write_str("fixed"),
            ContainerType::Fluid => f.write_str("fluid"),
        }
    }
}

impl FromStr for ContainerType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "container" => Ok(ContainerType::Fixed),
            "fluid" | "container-fluid" => Ok(ContainerType::Fluid),
            _ => Err(LayoutError::invalid("container", s)),
        }
    }
}
