#![deny(missing_docs)]
#![doc = "Simple undirected graphs, deterministic generators and canonical hashing for clique cover searches."]

mod generators;
mod hash;
mod simple;

pub use generators::{barbell, complete, cycle, empty, gnp, path};
pub use hash::canonical_hash;
pub use simple::SimpleGraph;
