//! Translation Pipeline
//!
//! Converts generic [`TreeNode`]s into [`Renderable`]s through an ordered
//! chain of [`Middleware`].
//!
//! # Dispatch
//!
//! ```text
//! translate(node) → middleware[0] → next → middleware[1] → ... → unhandled
//! ```
//!
//! Middleware are walked by index. Each one either builds a renderable or
//! calls [`Next::run`] to hand the node to the one registered after it.
//! Earlier registration wins. Falling off the end of the chain is an
//! [`Error::UnhandledNode`] and always reaches the caller.
//!
//! A pipeline is immutable once built and holds only `Send + Sync`
//! middleware, so one instance can serve any number of threads.
//!
//! # Example
//!
//! ```
//! use spark_flex::pipeline::{Pipeline, TreeNode};
//! use spark_flex::renderer::to_plain_string;
//!
//! let pipeline = Pipeline::standard();
//! let tree = TreeNode::element()
//!     .attr("class", "flexbox")
//!     .attr("data-justify", "center")
//!     .child(TreeNode::text("AB"));
//!
//! let renderable = pipeline.translate(&tree).unwrap();
//! assert_eq!(to_plain_string(&renderable.render(10).unwrap()), "    AB    ");
//! ```

mod flex_translator;
mod middleware;
mod node;
mod text_translator;

pub use flex_translator::FlexTranslator;
pub use middleware::{Middleware, Next};
pub use node::{NodeKind, TreeNode};
pub use text_translator::TextTranslator;

use tracing::trace;

use crate::error::{Error, Result};
use crate::primitives::Renderable;

// =============================================================================
// Pipeline
// =============================================================================

/// Ordered middleware chain.
pub struct Pipeline {
    middleware: Vec<Box<dyn Middleware>>,
}

impl Pipeline {
    /// Build a pipeline from middleware in precedence order.
    ///
    /// Fails with [`Error::EmptyPipeline`] when `middleware` is empty.
    pub fn new(middleware: Vec<Box<dyn Middleware>>) -> Result<Self> {
        if middleware.is_empty() {
            return Err(Error::EmptyPipeline);
        }
        Ok(Self { middleware })
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Flex translator first, then the text translator.
    pub fn standard() -> Self {
        Self {
            middleware: vec![Box::new(FlexTranslator), Box::new(TextTranslator)],
        }
    }

    /// Translate a node through the whole chain.
    pub fn translate(&self, node: &TreeNode) -> Result<Box<dyn Renderable>> {
        self.dispatch(0, node)
    }

    /// Number of registered middleware.
    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    /// Always false for a built pipeline.
    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    /// Middleware names in precedence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.middleware.iter().map(|m| m.name())
    }

    fn dispatch(&self, index: usize, node: &TreeNode) -> Result<Box<dyn Renderable>> {
        match self.middleware.get(index) {
            Some(middleware) => {
                trace!(index, middleware = middleware.name(), kind = %node.kind(), "dispatch");
                middleware.translate(self, node, Next::new(self, index + 1))
            }
            None => Err(Error::UnhandledNode {
                kind: node.kind(),
                class: node.class().map(str::to_string),
            }),
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// =============================================================================
// PipelineBuilder
// =============================================================================

/// Collects middleware in registration order.
#[derive(Default)]
pub struct PipelineBuilder {
    middleware: Vec<Box<dyn Middleware>>,
}

impl PipelineBuilder {
    /// Register a middleware after all previously registered ones.
    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        Pipeline::new(self.middleware)
    }
}

// =============================================================================
// Tests
// =============================================================================
