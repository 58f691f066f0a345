//! Parsing of vectors written as `TypeName(c0, c1, ...)`.

use crate::error::{ComponentCountError, ParseVectorError};
use std::{num::ParseIntError, str::FromStr};

/// Parses the components of a vector from a string of the form
/// `TypeName(c0, c1, ...)`, `(c0, c1, ...)` or `c0, c1, ...`.
pub(crate) fn parse_components<E, const N: usize>(
    string: &str,
    type_name: &'static str,
) -> Result<[E; N], ParseVectorError>
where
    E: FromStr<Err = ParseIntError>,
{
    let string = string.trim();

    let body = match string.find('(') {
        Some(open) => {
            let prefix = string[..open].trim();
            if !prefix.is_empty() && prefix != type_name {
                return Err(ParseVectorError::UnexpectedTypeName {
                    expected: type_name,
                    found: prefix.to_string(),
                });
            }
            string[open + 1..]
                .trim_end()
                .strip_suffix(')')
                .ok_or(ParseVectorError::UnclosedParenthesis)?
        }
        None => string,
    };

    if body.trim().is_empty() {
        return Err(ComponentCountError {
            expected: N,
            found: 0,
        }
        .into());
    }

    let components = body
        .split(',')
        .enumerate()
        .map(|(index, component)| {
            component
                .trim()
                .parse()
                .map_err(|source| ParseVectorError::InvalidComponent { index, source })
        })
        .collect::<Result<Vec<E>, _>>()?;

    <[E; N]>::try_from(components).map_err(|components: Vec<E>| {
        ComponentCountError {
            expected: N,
            found: components.len(),
        }
        .into()
    })
}
