//! Middleware contract.
//!
//! A middleware looks at a node and either builds a renderable for it or
//! passes it on with [`Next::run`]. Middleware that own children translate
//! them through the pipeline they are handed.

use crate::error::Result;
use crate::primitives::Renderable;

use super::Pipeline;
use super::node::TreeNode;

/// One link in the translation chain.
///
/// Implementations must be `Send + Sync` so a built pipeline can be shared
/// across threads.
pub trait Middleware: Send + Sync {
    /// Name used in trace output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Translate `node`, or delegate it with `next.run(node)`.
    fn translate(
        &self,
        pipeline: &Pipeline,
        node: &TreeNode,
        next: Next<'_>,
    ) -> Result<Box<dyn Renderable>>;
}

/// Plain functions and closures work as middleware.
impl<F> Middleware for F
where
    F: Fn(&Pipeline, &TreeNode, Next<'_>) -> Result<Box<dyn Renderable>> + Send + Sync,
{
    fn translate(
        &self,
        pipeline: &Pipeline,
        node: &TreeNode,
        next: Next<'_>,
    ) -> Result<Box<dyn Renderable>> {
        self(pipeline, node, next)
    }
}

/// Continuation to the middleware registered after the current one.
///
/// Past the last middleware it reaches the terminal handler, which fails
/// with [`Error::UnhandledNode`](crate::Error::UnhandledNode).
#[derive(Clone, Copy)]
pub struct Next<'a> {
    pipeline: &'a Pipeline,
    index: usize,
}

impl<'a> Next<'a> {
    pub(super) fn new(pipeline: &'a Pipeline, index: usize) -> Self {
        Self { pipeline, index }
    }

    /// Hand `node` to the rest of the chain.
    pub fn run(self, node: &TreeNode) -> Result<Box<dyn Renderable>> {
        self.pipeline.dispatch(self.index, node)
    }
}
