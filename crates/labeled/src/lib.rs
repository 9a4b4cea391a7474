//! # skillcast-labeled
//!
//! N-dimensional `f64` arrays with named axes and explicit coordinate values,
//! built on [`ndarray::ArrayD`].
//!
//! Alignment and broadcasting are explicit: [`LabeledArray::align`] performs
//! an inner join over the coordinates of every shared axis, and
//! [`LabeledArray::broadcast_zip`] inserts and replicates the axes an operand
//! lacks. Nothing is matched by position unless the caller asks for it with
//! [`LabeledArray::assign_coord`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["LabeledArray"] -->|"sel / isel / filter_coord"| A
//!     A -->|"align(other)"| B["(left, right) on shared coordinates"]
//!     B -->|"reduce_pair(time)"| C["metric per remaining axes"]
//!     A -->|"mean / std / var"| C
//!     C -->|"concat(L)"| D["lead-indexed metric"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use skillcast_labeled::{CoordValues, Coordinate, LabeledArray};
//!
//! let model = LabeledArray::from_vec(
//!     vec![
//!         Coordinate::new("time", vec![1990_i64, 1991, 1992]),
//!         Coordinate::new("M", CoordValues::range(1, 2)),
//!     ],
//!     vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0],
//! )
//! .unwrap();
//! let obs = LabeledArray::from_vec(
//!     vec![Coordinate::new("time", vec![1991_i64, 1992, 1993])],
//!     vec![3.0, 4.0, 9.0],
//! )
//! .unwrap();
//!
//! let (a, b) = model.align(&obs).unwrap();
//! assert_eq!(a.len_of("time").unwrap(), 2);
//! let ens_mean = a.mean("M").unwrap();
//! assert_eq!(ens_mean.to_vec(), b.to_vec());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `coord` | Typed coordinate values and named axes |
//! | `array` | Construction, selection, renaming, transposition |
//! | `reduce` | NaN-skipping reductions and paired lane reductions |
//! | `combine` | Broadcasting, inner-join alignment, concatenation, masking |
//! | `rolling` | Centred moving means |
//! | `error` | Error types |

mod array;
mod combine;
mod coord;
mod error;
mod reduce;
mod rolling;

pub use array::LabeledArray;
pub use coord::{CoordValue, CoordValues, Coordinate};
pub use error::LabeledError;
