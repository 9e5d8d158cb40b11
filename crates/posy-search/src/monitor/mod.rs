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

//! # Search Monitors
//!
//! Observers and controllers for the bisection. Every probe of the
//! feasibility scan is reported to the monitor, which may log it, count it or
//! ask the search to stop.
//!
//! ## Submodules
//!
//! - `search_monitor`: The `SearchMonitor<T>` trait and `SearchCommand` enum.
//! - `composite`: Fans events out to several monitors.
//! - `interrupt`: Stops when an external `AtomicBool` is raised.
//! - `time_limit`: Wall-clock budget.
//! - `probe_limit`: Budget on the number of feasibility probes.
//! - `log`: Emits `tracing` events for entry, probes and exit.
//! - `no_op`: Does nothing; the default when no control is needed.
//!
//! A stopped search still returns a valid harvest, because the upper end of
//! the bracket is feasible at every point of the bisection.

pub mod composite;
pub mod index;
pub mod interrupt;
pub mod log;
pub mod no_op;
pub mod probe_limit;
pub mod search_monitor;
pub mod time_limit;
