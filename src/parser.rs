// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod basics;

use basics::{parse_id, parse_number, parse_separator, parse_string};
use controller::SearchBy;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1};
use nom::combinator::map;
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    CreateUser(i32, String),
    CreateMovie(i32, String),
    Rate(SearchBy, SearchBy, i64),
    Recommend(SearchBy),
    Average(SearchBy),
    Similarity(SearchBy, SearchBy),
    QueryUser(SearchBy),
    QueryMovie(SearchBy),
    QueryRatings(SearchBy),
    Watched(SearchBy),
    Users,
    Movies,
}

// name(args)
fn call<'a, O, F>(name: &'static str, args: F) -> impl Fn(&'a str) -> IResult<&'a str, O>
where
    F: Fn(&'a str) -> IResult<&'a str, O>,
{
    preceded(tag(name), delimited(char('('), args, char(')')))
}

fn parse_index(input: &str) -> IResult<&str, SearchBy> {
    alt((
        map(call("id", digit1), SearchBy::id),
        map(call("name", parse_string), SearchBy::name),
    ))(input)
}

fn parse_create_user(input: &str) -> IResult<&str, Statement> {
    map(
        call("user", tuple((parse_id, parse_separator, parse_string))),
        |(id, _, name)| Statement::CreateUser(id, name.into()),
    )(input)
}

fn parse_create_movie(input: &str) -> IResult<&str, Statement> {
    map(
        call("movie", tuple((parse_id, parse_separator, parse_string))),
        |(id, _, title)| Statement::CreateMovie(id, title.into()),
    )(input)
}

fn parse_rate(input: &str) -> IResult<&str, Statement> {
    map(
        call(
            "rate",
            tuple((
                parse_index,
                parse_separator,
                parse_index,
                parse_separator,
                parse_number,
            )),
        ),
        |(user, _, movie, _, score)| Statement::Rate(user, movie, score),
    )(input)
}

fn parse_similarity(input: &str) -> IResult<&str, Statement> {
    map(
        call("similarity", tuple((parse_index, parse_separator, parse_index))),
        |(user_a, _, user_b)| Statement::Similarity(user_a, user_b),
    )(input)
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    alt((
        parse_create_user,
        parse_create_movie,
        parse_rate,
        parse_similarity,
        map(call("recommend", parse_index), Statement::Recommend),
        map(call("average", parse_index), Statement::Average),
        map(call("query_user", parse_index), Statement::QueryUser),
        map(call("query_movie", parse_index), Statement::QueryMovie),
        map(call("query_ratings", parse_index), Statement::QueryRatings),
        map(call("watched", parse_index), Statement::Watched),
        map(tag("users"), |_| Statement::Users),
        map(tag("movies"), |_| Statement::Movies),
    ))(input)
}

pub fn parse_line(input: &str) -> Option<Statement> {
    let input = input.trim();
    let (rest, statement) = parse_statement(input).ok()?;

    if rest.is_empty() {
        Some(statement)
    } else {
        None
    }
}
