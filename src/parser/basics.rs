// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::bytes::complete::{tag, take_till1, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::{sequence::delimited, IResult};

pub(crate) fn parse_string(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_till1(|c: char| c == '\''), char('\''))(input)
}

pub(crate) fn parse_number(input: &str) -> IResult<&str, i64> {
    map_res(digit1, |s: &str| s.parse::<i64>())(input)
}

pub(crate) fn parse_id(input: &str) -> IResult<&str, i32> {
    map_res(digit1, |s: &str| s.parse::<i32>())(input)
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(|c: char| c == ' '),
        tag(","),
        take_while(|c: char| c == ' '),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string() {
        let parsed = parse_string("'holo, cómo estás?'");
        let expected = ("", "holo, cómo estás?");

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_string("'The Godfather', 4");
        let expected = (", 4", "The Godfather");

        assert_eq!(parsed, Ok(expected))
    }

    #[test]
    fn test_parse_numbers() {
        let parsed = parse_number("12345");
        let expected = ("", 12345);

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_number("12c3");
        let expected = ("c3", 12);
        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_id("42)"), Ok((")", 42)));
        assert!(parse_id("99999999999").is_err());
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn test_parse_separator() {
        assert_eq!(parse_separator(" ,  5"), Ok(("5", ",")));
        assert!(parse_separator("5").is_err());
    }
}
