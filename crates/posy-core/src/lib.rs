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

//! # Posy Core
//!
//! Foundational numerics, interval math and indexing primitives shared by the
//! Posy crates. Nothing in here knows about gardens or bouquets; the crate only
//! provides the small, well-tested building blocks the model and search crates
//! are written against.
//!
//! ## Modules
//!
//! - `math`: The half-open `[start, end)` interval used to describe bouquet
//!   spans over plot positions, and the closed `[low, high]` search bracket
//!   that drives lower-bound bisection over a monotone predicate.
//! - `num`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`) for the
//!   primitive integers, used for sentinel values in generic code.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).

pub mod math;
pub mod num;
pub mod utils;
