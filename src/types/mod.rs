pub mod classification;
pub mod error;
pub mod node;
pub mod symbols;

pub use classification::{Classification, MatchKind, Provenance};
pub use error::{ConfscopeError, Result, ResultExt};
pub use node::{NodeKind, TreeIter, TreeNode};
pub use symbols::{FileSymbols, ScanStatus};
