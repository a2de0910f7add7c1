//! Fold summary types and helpers.

mod fold_summary;

pub use fold_summary::FoldSummary;
