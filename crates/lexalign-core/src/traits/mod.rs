mod lexicon;
mod sink;

pub use lexicon::Lexicon;
pub use sink::{AxisSink, ClusterSink};
