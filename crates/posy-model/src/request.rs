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

/// Why a bouquet request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Zero bouquets were requested.
    ZeroBouquets,
    /// Bouquets of zero flowers were requested.
    ZeroFlowersPerBouquet,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBouquets => write!(f, "at least one bouquet must be requested"),
            Self::ZeroFlowersPerBouquet => {
                write!(f, "a bouquet must consist of at least one flower")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// How many bouquets are wanted and how many adjacent flowers make one.
///
/// # Examples
///
/// ```rust
/// # use posy_model::request::{BouquetRequest, RequestError};
///
/// let request = BouquetRequest::new(4, 2).unwrap();
/// assert_eq!(request.bouquets(), 4);
/// assert_eq!(request.flowers_per_bouquet(), 2);
/// assert_eq!(request.flowers_required(), Some(8));
///
/// assert_eq!(BouquetRequest::new(0, 2), Err(RequestError::ZeroBouquets));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BouquetRequest {
    bouquets: usize,
    flowers_per_bouquet: usize,
}

impl BouquetRequest {
    /// Creates a request for `bouquets` bouquets of `flowers_per_bouquet`
    /// adjacent flowers each.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero.
    #[inline]
    pub fn new(bouquets: usize, flowers_per_bouquet: usize) -> Result<Self, RequestError> {
        if bouquets == 0 {
            return Err(RequestError::ZeroBouquets);
        }
        if flowers_per_bouquet == 0 {
            return Err(RequestError::ZeroFlowersPerBouquet);
        }
        Ok(Self {
            bouquets,
            flowers_per_bouquet,
        })
    }

    /// Number of bouquets wanted (`m`).
    #[inline]
    pub fn bouquets(&self) -> usize {
        self.bouquets
    }

    /// Adjacent flowers per bouquet (`k`).
    #[inline]
    pub fn flowers_per_bouquet(&self) -> usize {
        self.flowers_per_bouquet
    }

    /// Total flowers consumed, `m * k`, or `None` if that overflows `usize`.
    #[inline]
    pub fn flowers_required(&self) -> Option<usize> {
        self.bouquets.checked_mul(self.flowers_per_bouquet)
    }

    /// Returns `true` if a row of `num_plots` plots holds enough flowers for
    /// the request at all, regardless of bloom days.
    #[inline]
    pub fn fits_in(&self, num_plots: usize) -> bool {
        self.flowers_required()
            .is_some_and(|required| required <= num_plots)
    }
}

impl std::fmt::Display for BouquetRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bouquet(s) of {} adjacent flower(s)",
            self.bouquets, self.flowers_per_bouquet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_counts() {
        assert_eq!(BouquetRequest::new(0, 1), Err(RequestError::ZeroBouquets));
        assert_eq!(
            BouquetRequest::new(1, 0),
            Err(RequestError::ZeroFlowersPerBouquet)
        );
        assert_eq!(BouquetRequest::new(0, 0), Err(RequestError::ZeroBouquets));
    }

    #[test]
    fn test_flowers_required_overflow_is_none() {
        let request = BouquetRequest::new(usize::MAX, 2).unwrap();
        assert_eq!(request.flowers_required(), None);
        assert!(!request.fits_in(usize::MAX));
    }

    #[test]
    fn test_fits_in() {
        let request = BouquetRequest::new(3, 2).unwrap();
        assert!(!request.fits_in(5));
        assert!(request.fits_in(6));
        assert!(request.fits_in(7));
    }

    #[test]
    fn test_display() {
        let request = BouquetRequest::new(4, 2).unwrap();
        assert_eq!(format!("{}", request), "4 bouquet(s) of 2 adjacent flower(s)");
        assert_eq!(
            format!("{}", RequestError::ZeroBouquets),
            "at least one bouquet must be requested"
        );
    }
}
