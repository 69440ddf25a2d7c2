//! Plain text format of objects and flags.
//!
//! An object of size `n` is written as `(n` followed by one line `a b` per
//! marked pair and a closing `)`:
//! ```text
//! (3
//! 0 1
//! 1 2
//! )
//! ```
//! A flag is written as `(`, its object, `,`, the vertex carrying each
//! label in order, and `)`, for instance `((2\n0 1\n), 1)`.
//! Whitespace between tokens is free when reading.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::flag::Flag;
use crate::object::Object;
use canonical_form::Canonize;

/// Text representation of `g`.
pub fn write_object<O: Object>(g: &O) -> String {
    let mut res = format!("({}\n", g.size());
    for (a, b) in g.marked_pairs() {
        res.push_str(&format!("{a} {b}\n"));
    }
    res.push(')');
    res
}

/// Text representation of `flag`.
pub fn write_flag<O: Object>(flag: &Flag<O>) -> String {
    let mut res = String::from("(");
    res.push_str(&write_object(flag.object()));
    res.push(',');
    for v in flag.type_morphism() {
        res.push_str(&format!(" {v}"));
    }
    res.push(')');
    res
}

/// Largest size of an object accepted by the readers.
pub const MAX_SIZE: usize = 1 << 12;

struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn error<T>(&self, expected: &str) -> Result<T> {
        let found: String = self.input[self.pos..].chars().take(10).collect();
        Err(Error::Parse(if found.is_empty() {
            format!("expected {expected} at offset {}, found end of input", self.pos)
        } else {
            format!("expected {expected} at offset {}, found {found:?}", self.pos)
        }))
    }

    fn expect(&mut self, c: char) -> Result<()> {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            self.error(&format!("'{c}'"))
        }
    }

    fn number(&mut self) -> Result<usize> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let len = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        match rest[..len].parse() {
            Ok(n) => {
                self.pos += len;
                Ok(n)
            }
            Err(_) => self.error("a vertex index"),
        }
    }

    // Numbers until the next ')', which is not consumed.
    fn numbers(&mut self) -> Result<Vec<usize>> {
        let mut res = Vec::new();
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            res.push(self.number()?)
        }
        Ok(res)
    }

    fn object<O: Object>(&mut self) -> Result<O> {
        self.expect('(')?;
        let start = self.pos;
        let n = self.number()?;
        if n > MAX_SIZE {
            return Err(Error::Parse(format!(
                "object of size {n} at offset {start}, the largest accepted size is {MAX_SIZE}"
            )));
        }
        let numbers = self.numbers()?;
        if numbers.len() % 2 != 0 {
            return self.error("a second vertex");
        }
        self.expect(')')?;
        let pairs: Vec<_> = numbers.chunks(2).map(|p| (p[0], p[1])).collect();
        O::from_marked_pairs(n, &pairs).map_err(|e| Error::Parse(e.to_string()))
    }

    fn flag<O: Object>(&mut self, engine: &Engine<O>) -> Result<Flag<O>> {
        self.expect('(')?;
        let g: O = self.object()?;
        self.expect(',')?;
        let v = self.numbers()?;
        self.expect(')')?;
        engine.flag(&g, &v).map_err(|e| Error::Parse(e.to_string()))
    }

    fn end(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(_) => self.error("end of input"),
        }
    }
}

/// Parses an object written by [`write_object`].
pub fn read_object<O: Object>(input: &str) -> Result<O> {
    let mut reader = Reader::new(input);
    let g = reader.object()?;
    reader.end()?;
    Ok(g)
}

/// Parses a sequence of objects separated by whitespace.
pub fn read_objects<O: Object>(input: &str) -> Result<Vec<O>> {
    let mut reader = Reader::new(input);
    let mut res = Vec::new();
    while reader.peek().is_some() {
        res.push(reader.object()?)
    }
    Ok(res)
}

/// Parses a flag written by [`write_flag`].
pub fn read_flag<O: Object>(engine: &Engine<O>, input: &str) -> Result<Flag<O>> {
    let mut reader = Reader::new(input);
    let f = reader.flag(engine)?;
    reader.end()?;
    Ok(f)
}
