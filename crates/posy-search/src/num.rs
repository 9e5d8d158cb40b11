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

//! # Day Numeric Trait
//!
//! `DayNumeric` collects the integer capabilities the search needs from a day
//! type into a single bound: signed primitive arithmetic from `num_traits`,
//! formatting for diagnostics, and the `posy_core` constants (`MINUS_ONE` is
//! the legacy "no such day" answer).
//!
//! Implemented for every type satisfying the bounds, in practice `i8`, `i16`,
//! `i32`, `i64`, `i128` and `isize`.

use num_traits::{PrimInt, Signed};
use posy_core::num::constants::{MinusOne, PlusOne, Zero};
use std::hash::Hash;

/// A signed primitive integer usable as a bloom day.
pub trait DayNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + MinusOne
    + PlusOne
    + Zero
    + Send
    + Sync
    + Hash
{
}

impl<T> DayNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + MinusOne
        + PlusOne
        + Zero
        + Send
        + Sync
        + Hash
{
}
