// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for bouquet problems.
//!
//! Turns a whitespace-delimited text stream into a validated `Instance`, a
//! `Garden` together with the `BouquetRequest` asked of it. The format is
//!
//! ```raw
//! n m k          # plots, bouquets, flowers per bouquet
//! d_1 ... d_n    # bloom day of each plot, in row order
//! ```
//!
//! Tokens may be spread over any number of lines, and `#` starts a comment that
//! runs to the end of the line. The loader accepts any `BufRead`, a raw
//! reader, a file path or a string slice.

use crate::{
    garden::{Garden, GardenError},
    request::{BouquetRequest, RequestError},
};
use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// A garden and the request to answer for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance<T>
where
    T: PrimInt + Signed,
{
    pub garden: Garden<T>,
    pub request: BouquetRequest,
}

impl<T> Instance<T>
where
    T: PrimInt + Signed,
{
    /// Pairs a garden with a request.
    #[inline]
    pub fn new(garden: Garden<T>, request: BouquetRequest) -> Self {
        Self { garden, request }
    }
}

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoaderError<T> {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input ended before all expected tokens were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The bloom days do not form a valid garden.
    Garden(GardenError<T>),
    /// The bouquet counts do not form a valid request.
    Request(RequestError),
    /// Tokens remained after the last bloom day (strict mode only).
    TrailingData(String),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The token that failed to parse.
    pub token: String,
    /// The name of the type it was parsed into (e.g. "i64").
    pub type_name: &'static str,
}

impl Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl<T> Display for InstanceLoaderError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "unexpected end of input while parsing instance"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Garden(e) => write!(f, "invalid garden: {e}"),
            Self::Request(e) => write!(f, "invalid request: {e}"),
            Self::TrailingData(token) => {
                write!(f, "unexpected token '{token}' after the last bloom day")
            }
        }
    }
}

impl<T> std::error::Error for InstanceLoaderError<T>
where
    T: Debug + Display + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Garden(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::UnexpectedEof | Self::TrailingData(_) => None,
        }
    }
}

impl<T> From<std::io::Error> for InstanceLoaderError<T> {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl<T> From<ParseTokenError> for InstanceLoaderError<T> {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl<T> From<GardenError<T>> for InstanceLoaderError<T> {
    fn from(e: GardenError<T>) -> Self {
        Self::Garden(e)
    }
}

impl<T> From<RequestError> for InstanceLoaderError<T> {
    fn from(e: RequestError) -> Self {
        Self::Request(e)
    }
}

/// A configurable loader for bouquet instances.
///
/// # Configuration
///
/// * `strict`: If true, any token after the `n`-th bloom day is an error.
///   Off by default so that files may carry trailing notes or expected answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    strict: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for InstanceLoader<T> {
    fn default() -> Self {
        Self {
            strict: false,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + Signed + FromStr + Display + Debug,
{
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether trailing tokens are rejected.
    #[inline]
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Instance<T>, InstanceLoaderError<T>> {
        let mut sc = Scanner::<R, T>::new(rdr);

        let num_plots: usize = sc.next()?.ok_or(InstanceLoaderError::UnexpectedEof)?;
        let bouquets: usize = sc.next()?.ok_or(InstanceLoaderError::UnexpectedEof)?;
        let flowers_per_bouquet: usize = sc.next()?.ok_or(InstanceLoaderError::UnexpectedEof)?;

        let request = BouquetRequest::new(bouquets, flowers_per_bouquet)?;

        // The header count is untrusted; grow past this as days arrive.
        let mut bloom_days = Vec::with_capacity(num_plots.min(1 << 16));
        for _ in 0..num_plots {
            let day: T = sc.next()?.ok_or(InstanceLoaderError::UnexpectedEof)?;
            bloom_days.push(day);
        }

        if self.strict {
            if let Some(token) = sc.next::<String>()? {
                return Err(InstanceLoaderError::TrailingData(token));
            }
        }

        let garden = Garden::new(bloom_days)?;
        Ok(Instance::new(garden, request))
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance<T>, InstanceLoaderError<T>> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance<T>, InstanceLoaderError<T>> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance<T>, InstanceLoaderError<T>> {
        self.from_bufread(s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens, skipping `#` comments.
struct Scanner<R, T> {
    rdr: R,
    line: String,
    pos: usize,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<R: BufRead, T> Scanner<R, T> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pos: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the next raw token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<&str>, std::io::Error> {
        loop {
            let rest = &self.line[self.pos..];
            let rest = rest.split('#').next().unwrap_or_default();
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                return Ok(Some(&self.line[start..start + len]));
            }

            self.line.clear();
            self.pos = 0;
            if self.rdr.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Reads the next token and parses it into `U`.
    fn next<U>(&mut self) -> Result<Option<U>, InstanceLoaderError<T>>
    where
        U: FromStr,
    {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        token.parse::<U>().map(Some).map_err(|_| {
            InstanceLoaderError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<U>(),
            })
        })
    }
}
