//! Analytical (closed-form) pricing.
//!
//! - [`black_scholes`]: Black-Scholes prices and Greeks for European options
//! - [`distributions`]: Normal distribution functions used by the formulas

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{AnalyticalPricer, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_inv, norm_pdf};
