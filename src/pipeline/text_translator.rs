//! Text translator - turns text nodes into [`Text`] leaves.

use crate::error::Result;
use crate::primitives::{Renderable, Text};

use super::middleware::{Middleware, Next};
use super::node::{NodeKind, TreeNode};
use super::Pipeline;

/// Middleware for text nodes. Elements go to the next middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTranslator;

impl Middleware for TextTranslator {
    fn name(&self) -> &str {
        "TextTranslator"
    }

    fn translate(
        &self,
        _pipeline: &Pipeline,
        node: &TreeNode,
        next: Next<'_>,
    ) -> Result<Box<dyn Renderable>> {
        match node.kind() {
            NodeKind::Text => Ok(Box::new(Text::new(node.content()))),
            NodeKind::Element => next.run(node),
        }
    }
}
