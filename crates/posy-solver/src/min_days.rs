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

use posy_model::{
    garden::{Garden, GardenError},
    request::{BouquetRequest, RequestError},
};
use posy_search::{bisection, num::DayNumeric};

/// Invalid raw input to `min_days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError<T> {
    /// The bloom days do not form a valid garden.
    Garden(GardenError<T>),
    /// The bouquet count or size is invalid.
    Request(RequestError),
}

impl<T> std::fmt::Display for InputError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Garden(e) => write!(f, "invalid garden: {}", e),
            Self::Request(e) => write!(f, "invalid request: {}", e),
        }
    }
}

impl<T> std::error::Error for InputError<T>
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Garden(e) => Some(e),
            Self::Request(e) => Some(e),
        }
    }
}

impl<T> From<GardenError<T>> for InputError<T> {
    fn from(e: GardenError<T>) -> Self {
        Self::Garden(e)
    }
}

impl<T> From<RequestError> for InputError<T> {
    fn from(e: RequestError) -> Self {
        Self::Request(e)
    }
}

/// Returns the earliest day on which `bouquets` bouquets of
/// `flowers_per_bouquet` adjacent flowers can be picked from a row whose
/// plots bloom on `bloom_days`, or `Ok(None)` if no day works.
///
/// # Errors
///
/// Returns `InputError::Garden` for an empty row or a negative bloom day, and
/// `InputError::Request` if either count is zero. The garden is checked first.
///
/// # Examples
///
/// ```rust
/// use posy_solver::min_days;
///
/// assert_eq!(min_days(&[1i64, 10, 3, 10, 2], 3, 1), Ok(Some(3)));
/// assert_eq!(min_days(&[1i64, 10, 3, 10, 2], 3, 2), Ok(None));
/// assert!(min_days::<i64>(&[], 1, 1).is_err());
/// ```
pub fn min_days<T>(
    bloom_days: &[T],
    bouquets: usize,
    flowers_per_bouquet: usize,
) -> Result<Option<T>, InputError<T>>
where
    T: DayNumeric,
{
    let garden = Garden::from_slice(bloom_days)?;
    let request = BouquetRequest::new(bouquets, flowers_per_bouquet)?;
    Ok(bisection::min_days(&garden, &request))
}

/// Like `min_days`, but reports an unreachable request as `-1`.
///
/// ```rust
/// use posy_solver::min_days_or_sentinel;
///
/// assert_eq!(min_days_or_sentinel(&[1i32, 10, 2, 9, 3, 8, 4, 7, 5, 6], 4, 2), Ok(9));
/// assert_eq!(min_days_or_sentinel(&[1i32, 10, 3, 10, 2], 3, 2), Ok(-1));
/// ```
pub fn min_days_or_sentinel<T>(
    bloom_days: &[T],
    bouquets: usize,
    flowers_per_bouquet: usize,
) -> Result<T, InputError<T>>
where
    T: DayNumeric,
{
    min_days(bloom_days, bouquets, flowers_per_bouquet).map(|day| day.unwrap_or(T::MINUS_ONE))
}
