//! Classical fuzzy set operations over sampled domains: membership functions,
//! alpha-cuts, unions and intersections, fuzzy relations with max-min
//! composition, and the extension principle.
//!
//! ```rust
//! use fuzzy_primer::{LabeledSet, Relation};
//!
//! let a = LabeledSet::from_pairs([("x1", 0.2), ("x2", 0.5)]).unwrap();
//! let b = LabeledSet::from_pairs([("y1", 0.3), ("y2", 0.6)]).unwrap();
//! let r = Relation::cartesian(&a, &b).relation;
//!
//! assert_eq!(r.to_rows(), vec![vec![0.2, 0.2], vec![0.3, 0.5]]);
//!
//! let s = Relation::from_rows([[1.0, 0.4], [0.4, 1.0]]).unwrap();
//!
//! assert!(s.is_reflexive().unwrap());
//! assert_eq!(r.max_min(&s).unwrap()[(1, 1)], 0.5);
//! ```

mod error;
mod extension;
mod linspace;
mod membership;
mod ops;
mod relation;
mod set;

pub use error::{FuzzyError, Result};
pub use extension::extension_principle;
pub use linspace::{linspace, Linspace};
pub use membership::MembershipFn;
pub use ops::{AndOp, CompositionOp, OrOp};
pub use relation::{CartesianRelation, Relation, RelationProperties};
pub use set::{alpha_cut, complement, intersection, union, LabeledSet};
