use crate::errors::LexAlignResult;
use crate::models::{Axis, Cluster, Metadata};

/// Receives the axis set of one run, exactly once.
pub trait AxisSink {
    fn accept_axes(&mut self, metadata: &Metadata, axes: &[Axis]) -> LexAlignResult<()>;
}

/// Receives the final clusters of one run.
///
/// `header` holds comment/header lines of the input, passed through unchanged.
pub trait ClusterSink {
    fn accept_clusters(&mut self, header: &[String], clusters: &[Cluster]) -> LexAlignResult<()>;
}
