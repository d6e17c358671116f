//! Canonical serialization of a rendered-tree node's opening tag.

use crate::ast::{ComponentNode, JsxAttrValue, JsxAttribute};

/// Serialize a JSX element without its subtree:
/// `<tag a="x" flag b={expr} {...rest}>`, ` />` when self-closing, `<>` for
/// fragments. Returns `None` for any other node.
pub fn structural_signature(node: &ComponentNode) -> Option<String> {
    let ComponentNode::JsxElement {
        tag,
        attributes,
        self_closing,
        ..
    } = node
    else {
        return None;
    };

    let mut out = String::from("<");
    out.push_str(tag.as_deref().unwrap_or(""));
    for attr in attributes {
        out.push(' ');
        out.push_str(&attribute_signature(attr));
    }
    out.push_str(if *self_closing { " />" } else { ">" });
    Some(out)
}

fn attribute_signature(attr: &JsxAttribute) -> String {
    match attr {
        JsxAttribute::Spread { expression, .. } => format!("{{{expression}}}"),
        JsxAttribute::Named { name, value } => match value {
            JsxAttrValue::Flag => name.clone(),
            JsxAttrValue::StringLiteral(s) => format!("{name}=\"{s}\""),
            JsxAttrValue::Expression { text, .. } => format!("{name}={{{text}}}"),
            JsxAttrValue::Element(element) => {
                let inner = structural_signature(element).unwrap_or_default();
                format!("{name}={{{inner}}}")
            }
        },
    }
}
