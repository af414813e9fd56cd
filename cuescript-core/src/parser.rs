use std::fmt;

use crate::record::{ChoiceOption, Cuesheet, Record};

/// Literal first field that marks a choice record.
pub const CHOICE_TOKEN: &str = "[Choice]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub msg: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.msg)
    }
}

impl std::error::Error for ParseError {}

/// Line-oriented parser for the `|`-delimited cuesheet format.
///
/// Fields are taken verbatim: no trimming, and no escape for a literal `|`
/// inside dialogue text. Blank lines are skipped. Every malformed line is
/// collected, so one pass reports all authoring mistakes in a file.
pub struct Parser<'a> {
    src: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    pub fn parse(self) -> Result<Cuesheet, Vec<ParseError>> {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (idx, raw) in self.src.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                log::debug!("skipping blank line {}", line);
                continue;
            }
            match parse_record(line, raw) {
                Ok(record) => records.push(record),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(Cuesheet { records })
        } else {
            Err(errors)
        }
    }
}

fn parse_record(line: usize, raw: &str) -> Result<Record, ParseError> {
    let fields: Vec<&str> = raw.split('|').collect();

    if fields[0] == CHOICE_TOKEN {
        return parse_choice(line, &fields);
    }

    match fields.as_slice() {
        [speaker, expression, text] => Ok(Record::Dialogue {
            line,
            speaker: (*speaker).to_string(),
            expression: (*expression).to_string(),
            text: (*text).to_string(),
        }),
        _ => Err(ParseError {
            line,
            msg: format!(
                "expected `Speaker|Expression|Text` or a `{}` record, got {} field(s)",
                CHOICE_TOKEN,
                fields.len()
            ),
        }),
    }
}

fn parse_choice(line: usize, fields: &[&str]) -> Result<Record, ParseError> {
    // Option/target pairs after the marker: total field count must be odd and >= 3.
    if fields.len() < 3 || fields.len() % 2 == 0 {
        return Err(ParseError {
            line,
            msg: format!(
                "choice record needs label/target pairs after `{}`, got {} field(s)",
                CHOICE_TOKEN,
                fields.len()
            ),
        });
    }

    let options = fields[1..]
        .chunks(2)
        .map(|pair| ChoiceOption {
            label: pair[0].to_string(),
            target: pair[1].to_string(),
        })
        .collect();

    Ok(Record::Choice { line, options })
}
