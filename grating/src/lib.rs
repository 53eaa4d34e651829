//! A library for grid references on printed map sheets
//!
//! ## Row and column labels
//!
//! ```rust
//! use grating::{Extent, Grating};
//!
//! let grating = Grating::new(Extent::new(0.0, 0.0, 9.0, 3.0), 3, 3, false).unwrap();
//! // Top row is "A", bottom row is "C"
//! assert_eq!(grating.label_for_row(2), "A");
//! assert_eq!(grating.label_for_row(0), "C");
//! assert_eq!(grating.label_for_col(0), "1");
//! assert_eq!(grating.grid_reference(0, 2), "C3");
//! // Probing outside of the grating yields an empty label
//! assert_eq!(grating.label_for_row(3), "");
//! ```
//!
//! ## Cell geometry
//!
//! ```rust
//! use grating::{Extent, Grating};
//!
//! let grating = Grating::new(Extent::new(0.0, 0.0, 9.0, 3.0), 3, 3, false).unwrap();
//! assert_eq!(
//!     grating.cell_extent(1, 2),
//!     Some(Extent {
//!         minx: 6.0,
//!         miny: 1.0,
//!         maxx: 9.0,
//!         maxy: 2.0,
//!     })
//! );
//! for (row, col) in grating.cells() {
//!     println!("Cell {}", grating.grid_reference(row as i64, col as i64));
//! }
//! ```
//!
//! ## Letter labels
//!
//! ```rust
//! use grating::alphabet;
//!
//! assert_eq!(alphabet::encode(21), "Z");
//! assert_eq!(alphabet::encode(22), "AA");
//! assert_eq!(alphabet::decode("AB"), Some(23));
//! ```

pub mod alphabet;
mod cell_iterator;
mod error;
mod grating;

pub use crate::cell_iterator::CellIterator;
pub use crate::error::GratingError;
pub use crate::grating::{cell_count, ColumnLabels, Extent, Grating};
