use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::LayoutError;

/// Named viewport-width thresholds, ordered from narrowest to widest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint in ascending width order
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Minimum viewport width in pixels at which this breakpoint applies
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 576,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 992,
            Breakpoint::Xl => 1200,
            Breakpoint::Xxl => 1400,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// Class-name infix for this breakpoint. `xs` classes carry no infix.
    pub const fn infix(self) -> Option<&'static str> {
        match self {
            Breakpoint::Xs => None,
            other => Some(other.name()),
        }
    }

    /// The next narrower breakpoint, if any
    pub fn below(self) -> Option<Breakpoint> {
        let idx = self as usize;
        if idx == 0 {
            None
        } else {
            Some(Self::ALL[idx - 1])
        }
    }

    /// The widest breakpoint whose minimum width fits in `width_px`
    pub fn for_viewport(width_px: u32) -> Breakpoint {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width_px >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bp| bp.name() == lower)
            .ok_or_else(|| LayoutError::invalid("breakpoint", s))
    }
}

/// One value per breakpoint.
///
/// Backed by a fixed array so a column can never hold a partial mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerBreakpoint<T> {
    values: [T; 6],
}

impl<T> PerBreakpoint<T> {
    pub fn from_fn(f: impl FnMut(Breakpoint) -> T) -> Self {
        Self {
            values: Breakpoint::ALL.map(f),
        }
    }

    /// Values paired with their breakpoint, ascending
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Breakpoint> for PerBreakpoint<T> {
    type Output = T;

    fn index(&self, bp: Breakpoint) -> &T {
        &self.values[bp as usize]
    }
}

impl<T> IndexMut<Breakpoint> for PerBreakpoint<T> {
    fn index_mut(&mut self, bp: Breakpoint) -> &mut T {
        &mut self.values[bp as usize]
    }
}

impl<T: Serialize> Serialize for PerBreakpoint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (bp, value) in self.iter() {
            map.serialize_entry(bp.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_thresholds_strictly_increase_from_zero() {
        assert_eq!(Breakpoint::Xs.min_width(), 0);
        for pair in Breakpoint::ALL.windows(2) {
            assert!(pair[0].min_width() < pair[1].min_width());
            assert!(pair[0] < pair[1]);
        }
    }

    #[rstest]
    #[case(0, Breakpoint::Xs)]
    #[case(575, Breakpoint::Xs)]
    #[case(576, Breakpoint::Sm)]
    #[case(767, Breakpoint::Sm)]
    #[case(768, Breakpoint::Md)]
    #[case(991, Breakpoint::Md)]
    #[case(992, Breakpoint::Lg)]
    #[case(1200, Breakpoint::Xl)]
    #[case(1399, Breakpoint::Xl)]
    #[case(1400, Breakpoint::Xxl)]
    #[case(3840, Breakpoint::Xxl)]
    fn test_for_viewport(#[case] width: u32, #[case] expected: Breakpoint) {
        assert_eq!(Breakpoint::for_viewport(width), expected);
    }

    #[test]
    fn test_parse_and_display() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.to_string().parse::<Breakpoint>().unwrap(), bp);
        }
        assert_eq!("MD".parse::<Breakpoint>().unwrap(), Breakpoint::Md);
        assert!("xxxl".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn test_infix_omitted_at_xs() {
        assert_eq!(Breakpoint::Xs.infix(), None);
        assert_eq!(Breakpoint::Lg.infix(), Some("lg"));
    }

    #[test]
    fn test_below() {
        assert_eq!(Breakpoint::Xs.below(), None);
        assert_eq!(Breakpoint::Sm.below(), Some(Breakpoint::Xs));
        assert_eq!(Breakpoint::Xxl.below(), Some(Breakpoint::Xl));
    }

    #[test]
    fn test_per_breakpoint_covers_every_breakpoint() {
        let mut values = PerBreakpoint::from_fn(|bp| bp.min_width());
        values[Breakpoint::Md] = 1;

        let collected: Vec<_> = values.iter().map(|(bp, v)| (bp, *v)).collect();
        assert_eq!(collected.len(), 6);
        assert_eq!(collected[0], (Breakpoint::Xs, 0));
        assert_eq!(collected[2], (Breakpoint::Md, 1));
        assert_eq!(collected[5], (Breakpoint::Xxl, 1400));
    }
}
