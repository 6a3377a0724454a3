// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::error::ErrorKind;
use std::convert::TryFrom;
use std::fmt::{self, Display};

/// Returned wherever an average is asked for something nobody rated.
pub const NOT_RATED: f64 = 0.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn abs_diff(self, other: Self) -> u32 {
        (self as i32 - other as i32).abs() as u32
    }
}

impl TryFrom<i64> for Rating {
    type Error = ErrorKind;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let rating = match value {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            _ => return Err(ErrorKind::InvalidRating(value)),
        };

        Ok(rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ErrorKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
