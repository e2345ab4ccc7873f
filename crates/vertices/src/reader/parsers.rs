//! Library of parser functions

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_until, take_while, take_while1};
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::error::{Error, ErrorKind};
use nom::sequence::{pair, terminated, tuple};
use nom::{Err, IResult};

// ! Comments

/// Remove every `//` and `/* */` comment from the text
///
/// Done in a single pass from left to right, so whichever comment opens first
/// wins. A `//` inside a block comment is just part of that block, and a `/*`
/// after a `//` is just part of that line. Line comments keep their newline.
///
/// An unterminated `/*` is left in place, but anything after it is still
/// checked for comments.
pub fn strip_comments(i: &str) -> String {
    let mut stripped = String::with_capacity(i.len());
    let mut rest = i;

    while let Some(position) = rest.find('/') {
        stripped.push_str(&rest[..position]);
        rest = &rest[position..];

        match alt((line_comment, block_comment))(rest) {
            Ok((remaining, _)) => rest = remaining,
            Err(_) => {
                stripped.push('/');
                rest = &rest[1..];
            }
        }
    }

    stripped.push_str(rest);
    stripped
}

/// Recognise `//` up to, but not including, the end of the line
fn line_comment(i: &str) -> IResult<&str, &str> {
    recognize(pair(tag("//"), take_till(|c: char| c == '\n')))(i)
}

/// Recognise `/*` through to the first `*/`, newlines included
fn block_comment(i: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(i)
}

// ! Sections

/// Find the vertex-bearing span of a `vertices ( ... );` section
///
/// Returns the text following the closing `);` and the span between the
/// opening bracket and the closing `);`. The span is not line-bounded.
///
/// The first `vertices` keyword followed by an opening bracket is used. The
/// keyword is case sensitive and does not need a word boundary in front.
pub fn vertices_section(i: &str) -> IResult<&str, &str> {
    for (position, _) in i.match_indices("vertices") {
        if let Ok((body, _)) = section_start(&i[position..]) {
            let (rest, span) = take_until(");")(body)?;
            return Ok((&rest[2..], span));
        }
    }

    Err(cause(i))
}

/// Recognise the `vertices` keyword, any whitespace, and the opening bracket
fn section_start(i: &str) -> IResult<&str, &str> {
    terminated(tag("vertices"), pair(ws0, char('(')))(i)
}

// ! Coordinates

/// Every `(x y z)` entry in a span, in order of appearance
///
/// Anything in brackets that is not exactly three numbers separated by
/// whitespace is skipped over and never stops the scan.
pub fn triplets(span: &str) -> Vec<[f64; 3]> {
    let mut found = Vec::new();
    let mut rest = span;

    while let Some(position) = rest.find('(') {
        match triplet(&rest[position..]) {
            Ok((remaining, values)) => {
                found.push(values);
                rest = remaining;
            }
            Err(_) => rest = &rest[position + 1..],
        }
    }

    found
}

/// Parse a single bracketed `(x y z)` entry
///
/// Whitespace is optional just inside the brackets, but required between the
/// numbers. Commas are not separators.
pub fn triplet(i: &str) -> IResult<&str, [f64; 3]> {
    let (i, _) = char('(')(i)?;
    let (i, _) = ws0(i)?;
    let (i, x) = number(i)?;
    let (i, _) = ws1(i)?;
    let (i, y) = number(i)?;
    let (i, _) = ws1(i)?;
    let (i, z) = number(i)?;
    let (i, _) = ws0(i)?;
    let (i, _) = char(')')(i)?;
    Ok((i, [x, y, z]))
}

/// Parse a [decimal] into an f64
pub fn number(i: &str) -> IResult<&str, f64> {
    map_res(decimal, str::parse::<f64>)(i)
}

/// Signed decimal number with optional fraction and exponent
///
/// e.g. `2`, `+2`, `-0.5`, `.5`, `1.5e-3`, `3E+02`
///
/// A trailing `.` with no digits (`1.`) and words like `inf` or `nan` are not
/// recognised, unlike [nom::number::complete::double].
pub fn decimal(i: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(i)
}

// ! Whitespace

/// Optional whitespace, including vertical tabs and form feeds
fn ws0(i: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(i)
}

/// At least one whitespace character
fn ws1(i: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(i)
}

/// More convenient error creation for nom
fn cause(i: &str) -> Err<Error<&str>> {
    Err::Error(Error::new(i, ErrorKind::Fail))
}

#[cfg(test)]
mod comment_tests {
    use super::*;

    #[test]
    fn line_comments_keep_newline() {
        assert_eq!(strip_comments("a // b\nc"), "a \nc");
        assert_eq!(strip_comments("a // b"), "a ");
        assert_eq!(strip_comments("a // b\r\nc"), "a \nc");
    }

    #[test]
    fn block_comments_span_lines() {
        assert_eq!(strip_comments("a /* b\n c */ d"), "a  d");
        assert_eq!(strip_comments("1/**/2"), "12");
    }

    #[test]
    fn first_opened_comment_wins() {
        // line comment marker inside a block comment
        assert_eq!(strip_comments("a /* // */ b"), "a  b");
        // block comment marker inside a line comment
        assert_eq!(strip_comments("a // /* \nb */ c"), "a \nb */ c");
    }

    #[test]
    fn unterminated_block_is_kept() {
        assert_eq!(strip_comments("a /* b // c\nd"), "a /* b \nd");
    }

    #[test]
    fn lone_slashes_are_kept() {
        assert_eq!(strip_comments("1/2 /3"), "1/2 /3");
        assert_eq!(strip_comments("/*/"), "/*/");
    }
}

#[cfg(test)]
mod section_tests {
    use super::*;

    #[test]
    fn span_between_brackets() {
        let (rest, span) = vertices_section("vertices ( (0 0 0) ); blocks ();").unwrap();
        assert_eq!(span, " (0 0 0) ");
        assert_eq!(rest, " blocks ();");
    }

    #[test]
    fn whitespace_and_newlines_before_bracket() {
        let (_, span) = vertices_section("vertices\n\n  \t(\n(1 2 3)\n);").unwrap();
        assert_eq!(span, "\n(1 2 3)\n");
    }

    #[test]
    fn keyword_needs_a_bracket() {
        let text = "// about vertices\nvertices ((1 1 1));";
        let stripped = strip_comments(text);
        let (_, span) = vertices_section(&stripped).unwrap();
        assert_eq!(span, "(1 1 1)");

        let (_, span) = vertices_section("vertices are listed below\nvertices ((2 2 2));").unwrap();
        assert_eq!(span, "(2 2 2)");
    }

    #[test]
    fn keyword_is_case_sensitive() {
        assert!(vertices_section("Vertices ( (0 0 0) );").is_err());
        assert!(vertices_section("VERTICES ( (0 0 0) );").is_err());
    }

    #[test]
    fn missing_terminator() {
        assert!(vertices_section("vertices ( (0 0 0) )").is_err());
        assert!(vertices_section("").is_err());
    }
}

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn decimal_forms() {
        assert_eq!(decimal("2 "), Ok((" ", "2")));
        assert_eq!(decimal("+2)"), Ok((")", "+2")));
        assert_eq!(decimal("-0.5"), Ok(("", "-0.5")));
        assert_eq!(decimal(".5"), Ok(("", ".5")));
        assert_eq!(decimal("-1.5e-3 "), Ok((" ", "-1.5e-3")));
        assert_eq!(decimal("3E+02"), Ok(("", "3E+02")));
        // exponent without digits is not part of the number
        assert_eq!(decimal("1e "), Ok(("e ", "1")));
        assert_eq!(decimal("1. "), Ok((". ", "1")));
        assert!(decimal("inf").is_err());
        assert!(decimal("-").is_err());
    }

    #[test]
    fn single_triplet() {
        assert_eq!(triplet("(0 0 0)"), Ok(("", [0.0, 0.0, 0.0])));
        assert_eq!(
            triplet("(  -1.5e-3\t+2\n0.0 ) rest"),
            Ok((" rest", [-1.5e-3, 2.0, 0.0]))
        );
    }

    #[test]
    fn any_whitespace_separates() {
        assert_eq!(triplet("(1\x0c2\x0b3)"), Ok(("", [1.0, 2.0, 3.0])));
        assert_eq!(triplets("(\x0c1 2 3\x0b)"), vec![[1.0, 2.0, 3.0]]);
        let (_, span) = vertices_section("vertices\x0c((0 0 0));").unwrap();
        assert_eq!(span, "(0 0 0)");
    }

    #[test]
    fn malformed_triplets() {
        assert!(triplet("(1 2)").is_err());
        assert!(triplet("(1 2 3 4)").is_err());
        assert!(triplet("(1,2,3)").is_err());
        assert!(triplet("(1 2 x)").is_err());
        assert!(triplet("(1 2 3").is_err());
        assert!(triplet("(1. 2 3)").is_err());
        assert!(triplet("(1 2 3e)").is_err());
    }

    #[test]
    fn triplets_skip_bad_entries() {
        let found = triplets(" (0 0 0) (bad val here) (1 2) (1 1 1) ");
        assert_eq!(found, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn triplets_inside_nested_brackets() {
        let found = triplets("((0 0 0)(1 0 0)) (2 (3 4 5) 6)");
        assert_eq!(
            found,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [3.0, 4.0, 5.0]]
        );
    }

    #[test]
    fn no_triplets() {
        assert!(triplets("").is_empty());
        assert!(triplets("no brackets at all").is_empty());
    }
}
