//! Local polynomial interpolation over tabulated data.
//!
//! Only Newton's divided-difference form is provided. A query picks the
//! `order + 1` table points around the nearest abscissa and evaluates the
//! interpolating polynomial through them, so the fit stays local even for
//! long tables.

mod newton;

pub use newton::NewtonInterpolator;
