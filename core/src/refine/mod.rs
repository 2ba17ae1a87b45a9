//! Panel refinement through external programs.
//!
//! [`PanelRefiner`](crate::prelude::PanelRefiner) is the seam; [`Xfoil`] is
//! the production implementation.

pub mod xfoil;

pub use xfoil::Xfoil;

/// Largest panel count a stock xfoil build accepts.
pub const STOCK_XFOIL_MAX_PANELS: usize = 350;
