//! Flex translator - builds [`FlexNode`]s from `class="flexbox"` elements.
//!
//! Recognized attributes (values are case-insensitive):
//!
//! | Attribute | Values | Default |
//! |-----------|--------|---------|
//! | `data-direction` | `row`, `column` | `row` |
//! | `data-justify` | `start`, `end`, `center`, `space-between`, `space-around`, `space-evenly` | `start` |
//! | `data-align` | `start`, `end`, `center`, `stretch` | `start` |
//! | `data-wrap` | `nowrap`, `wrap` | `nowrap` |
//! | `data-gap` | integer, negatives clamp to 0 | `0` |
//! | `data-width`, `data-height` | positive integer | none |
//!
//! Malformed values never fail translation; they fall back to the default.

use std::fmt::Debug;

use tracing::debug;

use crate::error::Result;
use crate::layout::{FlexNode, FlexStyle};
use crate::primitives::Renderable;
use crate::types::{AlignItems, FlexDirection, FlexWrap, JustifyContent};

use super::middleware::{Middleware, Next};
use super::node::{NodeKind, TreeNode};
use super::Pipeline;

const FLEX_CLASS: &str = "flexbox";

const ATTR_DIRECTION: &str = "data-direction";
const ATTR_JUSTIFY: &str = "data-justify";
const ATTR_ALIGN: &str = "data-align";
const ATTR_WRAP: &str = "data-wrap";
const ATTR_GAP: &str = "data-gap";
const ATTR_WIDTH: &str = "data-width";
const ATTR_HEIGHT: &str = "data-height";

// =============================================================================
// Mapping tables
// =============================================================================

const DIRECTIONS: &[(&str, FlexDirection)] = &[
    ("row", FlexDirection::Row),
    ("column", FlexDirection::Column),
    ("col", FlexDirection::Column),
];

const JUSTIFIES: &[(&str, JustifyContent)] = &[
    ("start", JustifyContent::Start),
    ("flex-start", JustifyContent::Start),
    ("end", JustifyContent::End),
    ("flex-end", JustifyContent::End),
    ("center", JustifyContent::Center),
    ("spacebetween", JustifyContent::SpaceBetween),
    ("space-between", JustifyContent::SpaceBetween),
    ("spacearound", JustifyContent::SpaceAround),
    ("space-around", JustifyContent::SpaceAround),
    ("spaceevenly", JustifyContent::SpaceEvenly),
    ("space-evenly", JustifyContent::SpaceEvenly),
];

const ALIGNS: &[(&str, AlignItems)] = &[
    ("start", AlignItems::Start),
    ("flex-start", AlignItems::Start),
    ("end", AlignItems::End),
    ("flex-end", AlignItems::End),
    ("center", AlignItems::Center),
    ("stretch", AlignItems::Stretch),
];

const WRAPS: &[(&str, FlexWrap)] = &[
    ("nowrap", FlexWrap::NoWrap),
    ("no-wrap", FlexWrap::NoWrap),
    ("wrap", FlexWrap::Wrap),
];

/// Look `attr` up in `table`, falling back to `T::default()`.
fn lookup<T: Copy + Default + Debug>(node: &TreeNode, attr: &str, table: &[(&str, T)]) -> T {
    let Some(raw) = node.get_attr(attr) else {
        return T::default();
    };

    let value = raw.trim();
    for (name, variant) in table {
        if name.eq_ignore_ascii_case(value) {
            return *variant;
        }
    }

    let fallback = T::default();
    debug!(attr, value = raw, ?fallback, "unrecognized flex attribute value");
    fallback
}

/// Parse an integer attribute; missing or malformed yields `None`.
fn parse_int(node: &TreeNode, attr: &str) -> Option<i64> {
    let raw = node.get_attr(attr)?;
    match raw.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(attr, value = raw, "malformed integer attribute");
            None
        }
    }
}

/// Parse a positive size attribute; anything else is 0 (unset).
fn parse_size(node: &TreeNode, attr: &str) -> usize {
    parse_int(node, attr)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(0)
}

/// Build a [`FlexStyle`] from a node's `data-*` attributes.
pub fn parse_style(node: &TreeNode) -> FlexStyle {
    FlexStyle::default()
        .direction(lookup(node, ATTR_DIRECTION, DIRECTIONS))
        .justify(lookup(node, ATTR_JUSTIFY, JUSTIFIES))
        .align(lookup(node, ATTR_ALIGN, ALIGNS))
        .wrap(lookup(node, ATTR_WRAP, WRAPS))
        .gap(parse_int(node, ATTR_GAP).unwrap_or(0))
        .width(parse_size(node, ATTR_WIDTH))
        .height(parse_size(node, ATTR_HEIGHT))
}

fn is_flexbox(node: &TreeNode) -> bool {
    node.kind() == NodeKind::Element
        && node
            .class()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case(FLEX_CLASS))
}

// =============================================================================
// FlexTranslator
// =============================================================================

/// Middleware for flexbox elements.
///
/// Children are translated first. If any child fails, the whole node goes to
/// the next middleware instead of building a partial container.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexTranslator;

impl Middleware for FlexTranslator {
    fn name(&self) -> &str {
        "FlexTranslator"
    }

    fn translate(
        &self,
        pipeline: &Pipeline,
        node: &TreeNode,
        next: Next<'_>,
    ) -> Result<Box<dyn Renderable>> {
        if !is_flexbox(node) {
            return next.run(node);
        }

        let items: Result<Vec<Box<dyn Renderable>>> = node
            .children()
            .iter()
            .map(|child| pipeline.translate(child))
            .collect();

        let items = match items {
            Ok(items) => items,
            Err(err) => {
                debug!(error = %err, "flexbox child failed to translate, delegating");
                return next.run(node);
            }
        };

        Ok(Box::new(FlexNode::new(items, parse_style(node))))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::primitives::{Measurement, Text};
    use crate::pipeline::TextTranslator;
    use crate::renderer::to_plain_lines;

    fn flexbox() -> TreeNode {
        TreeNode::element().attr("class", "flexbox")
    }

    fn fallback(_pipeline: &Pipeline, node: &TreeNode, next: Next<'_>) -> Result<Box<dyn Renderable>> {
        if node.kind() == NodeKind::Element {
            return Ok(Box::new(Text::new("fallback")));
        }
        next.run(node)
    }

    #[test]
    fn test_parse_style_defaults() {
        let style = parse_style(&flexbox());
        assert_eq!(style, FlexStyle::default());
        assert_eq!(style.get_direction(), FlexDirection::Row);
        assert_eq!(style.get_justify(), JustifyContent::Start);
        assert_eq!(style.get_align(), AlignItems::Start);
        assert_eq!(style.get_wrap(), FlexWrap::NoWrap);
        assert_eq!(style.gap_cells(), 0);
        assert_eq!(style.get_width(), None);
        assert_eq!(style.get_height(), None);
    }

    #[test]
    fn test_parse_style_all_attributes() {
        let node = flexbox()
            .attr("data-direction", "Column")
            .attr("data-justify", "SPACE-EVENLY")
            .attr("data-align", "stretch")
            .attr("data-wrap", "Wrap")
            .attr("data-gap", "2")
            .attr("data-width", "30")
            .attr("data-height", " 12 ");
        let style = parse_style(&node);

        assert_eq!(style.get_direction(), FlexDirection::Column);
        assert_eq!(style.get_justify(), JustifyContent::SpaceEvenly);
        assert_eq!(style.get_align(), AlignItems::Stretch);
        assert_eq!(style.get_wrap(), FlexWrap::Wrap);
        assert_eq!(style.gap_cells(), 2);
        assert_eq!(style.get_width(), Some(30));
        assert_eq!(style.get_height(), Some(12));
    }

    #[test]
    fn test_parse_style_enum_spellings() {
        let justify = |v: &str| parse_style(&flexbox().attr("data-justify", v)).get_justify();
        assert_eq!(justify("SpaceBetween"), JustifyContent::SpaceBetween);
        assert_eq!(justify("space-around"), JustifyContent::SpaceAround);
        assert_eq!(justify("flex-end"), JustifyContent::End);
        assert_eq!(justify("Center"), JustifyContent::Center);
    }

    #[test]
    fn test_parse_style_malformed_values_fall_back() {
        let node = flexbox()
            .attr("data-direction", "diagonal")
            .attr("data-justify", "")
            .attr("data-align", "baseline")
            .attr("data-wrap", "sometimes")
            .attr("data-gap", "lots")
            .attr("data-width", "-4")
            .attr("data-height", "0");
        assert_eq!(parse_style(&node), FlexStyle::default());
    }

    #[test]
    fn test_parse_style_negative_gap_clamped() {
        let style = parse_style(&flexbox().attr("data-gap", "-3"));
        assert_eq!(style.gap_cells(), 0);
    }

    #[test]
    fn test_class_match_is_case_insensitive() {
        assert!(is_flexbox(&TreeNode::element().attr("class", "FlexBox")));
        assert!(is_flexbox(&TreeNode::element().attr("class", " flexbox ")));
        assert!(!is_flexbox(&TreeNode::element().attr("class", "flex")));
        assert!(!is_flexbox(&TreeNode::element()));
        assert!(!is_flexbox(&TreeNode::text("flexbox").attr("class", "flexbox")));
    }

    #[test]
    fn test_translates_flexbox() {
        let pipeline = Pipeline::standard();
        let node = flexbox()
            .attr("data-gap", "1")
            .child(TreeNode::text("AAAA"))
            .child(TreeNode::text("BB"));

        let renderable = pipeline.translate(&node).unwrap();
        assert_eq!(renderable.measure(40), Measurement { min: 4, max: 7 });
        assert_eq!(to_plain_lines(&renderable.render(8).unwrap()), vec!["AAAA BB "]);
    }

    #[test]
    fn test_non_flexbox_delegates() {
        let pipeline = Pipeline::builder()
            .with(FlexTranslator)
            .with(fallback)
            .build()
            .unwrap();
        let renderable = pipeline.translate(&TreeNode::element()).unwrap();
        assert_eq!(to_plain_lines(&renderable.render(10).unwrap()), vec!["fallback"]);
    }

    #[test]
    fn test_child_failure_delegates_whole_node() {
        // No text translator, so the text child cannot be translated
        let pipeline = Pipeline::builder()
            .with(FlexTranslator)
            .with(fallback)
            .build()
            .unwrap();
        let node = flexbox().child(TreeNode::text("orphan"));

        let renderable = pipeline.translate(&node).unwrap();
        assert_eq!(to_plain_lines(&renderable.render(10).unwrap()), vec!["fallback"]);
    }

    #[test]
    fn test_child_failure_without_fallback_is_unhandled() {
        let pipeline = Pipeline::builder().with(FlexTranslator).build().unwrap();
        let node = flexbox().child(TreeNode::text("orphan"));

        let err = pipeline.translate(&node).unwrap_err();
        assert!(matches!(
            err,
            Error::UnhandledNode { kind: NodeKind::Element, .. }
        ));
    }

    #[test]
    fn test_nested_flexboxes() {
        let pipeline = Pipeline::builder()
            .with(FlexTranslator)
            .with(TextTranslator)
            .build()
            .unwrap();
        let node = flexbox()
            .attr("data-direction", "column")
            .child(flexbox().attr("data-justify", "end").child(TreeNode::text("top")))
            .child(TreeNode::text("bottom"));

        let renderable = pipeline.translate(&node).unwrap();
        assert_eq!(
            to_plain_lines(&renderable.render(8).unwrap()),
            vec!["     top", "bottom  "]
        );
    }
}
