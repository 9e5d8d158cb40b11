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

//! # Posy Search
//!
//! The bouquet-day search: a greedy left-to-right feasibility scan, evaluated
//! inside a lower-bound bisection over the bloom season.
//!
//! ## Modules
//!
//! - `feasibility`: The scan that decides whether `m` bouquets of `k` adjacent
//!   bloomed plots exist on a given day, and the oracle that wraps it for a
//!   garden and request.
//! - `bisection`: `min_days`, the pure search, and `BisectionSearch`, the same
//!   search driven through a `SearchMonitor`.
//! - `monitor`: Observers and controllers for the search lifecycle (logging,
//!   time and probe budgets, external interrupt).
//! - `num`: `DayNumeric`, the integer bounds the search is generic over.
//! - `result`: `SolverResult`, `TerminationReason` and `SolverOutcome`.
//! - `stats`: `SearchStatistics` and its builder.

pub mod bisection;
pub mod feasibility;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
