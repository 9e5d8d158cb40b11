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

//! # Posy Model
//!
//! The validated problem data for the bouquet scheduler and the solution it
//! produces.
//!
//! ## Modules
//!
//! - `index`: Typed indices for plots (`PlotIndex`) and bouquets (`BouquetIndex`).
//! - `garden`: `Garden<T>`, the row of plots with their bloom days.
//! - `request`: `BouquetRequest`, how many bouquets of how many adjacent flowers.
//! - `harvest`: `Harvest<T>`, the day and the plot spans picked on that day.
//! - `loading`: Text loader producing an `Instance<T>` (garden plus request).

pub mod garden;
pub mod harvest;
pub mod index;
pub mod loading;
pub mod request;
