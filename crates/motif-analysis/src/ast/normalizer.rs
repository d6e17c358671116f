//! Tree-sitter TSX tree → `ComponentNode` normalization.

use tree_sitter::Node;

use super::types::{ComponentNode, FunctionKind, JsxAttrValue, JsxAttribute, ParamPattern};
use crate::parsers::error_tolerant::tag_name;

/// Normalizes a validated TSX tree into `ComponentNode`s.
pub struct ComponentNormalizer<'s> {
    source: &'s [u8],
}

impl<'s> ComponentNormalizer<'s> {
    pub fn new(source: &'s [u8]) -> Self {
        Self { source }
    }

    pub fn normalize(&self, root: &Node) -> ComponentNode {
        self.normalize_node(root)
    }

    fn text(&self, node: &Node) -> &'s str {
        node.utf8_text(self.source).unwrap_or("")
    }

    fn normalize_node(&self, node: &Node) -> ComponentNode {
        match node.kind() {
            "program" => ComponentNode::Program {
                body: self.normalize_children(node, &[]),
            },
            "export_statement" => self.normalize_export(node),
            "function_declaration" | "generator_function_declaration" => {
                self.normalize_function(node, FunctionKind::Declaration)
            }
            "function_expression" | "function" | "generator_function" => {
                self.normalize_function(node, FunctionKind::Expression)
            }
            "arrow_function" => self.normalize_function(node, FunctionKind::Arrow),
            "method_definition" => self.normalize_function(node, FunctionKind::Method),
            "class_declaration" | "abstract_class_declaration" | "class" => {
                let name_node = node.child_by_field_name("name");
                let skip: Vec<usize> = name_node.iter().map(|n| n.id()).collect();
                ComponentNode::Class {
                    name: name_node.map(|n| self.text(&n).to_string()),
                    children: self.normalize_children(node, &skip),
                }
            }
            "identifier" => ComponentNode::Identifier {
                name: self.text(node).to_string(),
            },
            "jsx_element" => self.normalize_jsx_element(node),
            "jsx_self_closing_element" => ComponentNode::JsxElement {
                tag: non_empty(tag_name(node, self.source)),
                attributes: self.normalize_attributes(node),
                self_closing: true,
                children: Vec::new(),
            },
            "jsx_fragment" => ComponentNode::JsxElement {
                tag: None,
                attributes: Vec::new(),
                self_closing: false,
                children: self.normalize_children(node, &[]),
            },
            kind => ComponentNode::Other {
                kind: kind.to_string(),
                children: self.normalize_children(node, &[]),
            },
        }
    }

    /// Normalize named children, skipping the node ids in `skip`.
    fn normalize_children(&self, node: &Node, skip: &[usize]) -> Vec<ComponentNode> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !skip.contains(&child.id()))
            .map(|child| self.normalize_node(&child))
            .collect()
    }

    fn normalize_export(&self, node: &Node) -> ComponentNode {
        let mut cursor = node.walk();
        let is_default = node.children(&mut cursor).any(|c| c.kind() == "default");
        let target = node
            .child_by_field_name("declaration")
            .or_else(|| node.child_by_field_name("value"));

        match target {
            Some(target) if is_default => {
                let target = match self.normalize_node(&target) {
                    // `export default function () {}` declares a function.
                    ComponentNode::Function {
                        kind: FunctionKind::Expression,
                        name,
                        params,
                        children,
                    } => ComponentNode::Function {
                        kind: FunctionKind::Declaration,
                        name,
                        params,
                        children,
                    },
                    other => other,
                };
                ComponentNode::ExportDefault {
                    target: Box::new(target),
                }
            }
            _ => ComponentNode::Other {
                kind: node.kind().to_string(),
                children: self.normalize_children(node, &[]),
            },
        }
    }

    fn normalize_function(&self, node: &Node, kind: FunctionKind) -> ComponentNode {
        let name_node = node.child_by_field_name("name");
        let name = match kind {
            FunctionKind::Arrow => None,
            _ => name_node.map(|n| self.text(&n).to_string()),
        };

        let params = if let Some(list) = node.child_by_field_name("parameters") {
            let mut cursor = list.walk();
            list.named_children(&mut cursor)
                .filter(|p| p.kind() != "comment")
                .map(|p| self.normalize_param(&p))
                .collect()
        } else if let Some(single) = node.child_by_field_name("parameter") {
            vec![self.param_pattern(&single)]
        } else {
            Vec::new()
        };

        let skip: Vec<usize> = name_node.iter().map(|n| n.id()).collect();
        ComponentNode::Function {
            kind,
            name,
            params,
            children: self.normalize_children(node, &skip),
        }
    }

    fn normalize_param(&self, param: &Node) -> ParamPattern {
        match param.kind() {
            "required_parameter" | "optional_parameter" => param
                .child_by_field_name("pattern")
                .map(|p| self.param_pattern(&p))
                .unwrap_or(ParamPattern::Unsupported),
            _ => self.param_pattern(param),
        }
    }

    fn param_pattern(&self, pattern: &Node) -> ParamPattern {
        match pattern.kind() {
            "identifier" => ParamPattern::Identifier(self.text(pattern).to_string()),
            "object_pattern" => ParamPattern::Object(self.object_pattern_keys(pattern)),
            "assignment_pattern" => pattern
                .child_by_field_name("left")
                .map(|left| self.param_pattern(&left))
                .unwrap_or(ParamPattern::Unsupported),
            _ => ParamPattern::Unsupported,
        }
    }

    fn object_pattern_keys(&self, pattern: &Node) -> Vec<String> {
        let mut cursor = pattern.walk();
        pattern
            .named_children(&mut cursor)
            .filter_map(|prop| match prop.kind() {
                "shorthand_property_identifier_pattern" => Some(self.text(&prop).to_string()),
                "pair_pattern" => prop
                    .child_by_field_name("key")
                    .and_then(|key| self.property_key(&key)),
                "object_assignment_pattern" => prop
                    .child_by_field_name("left")
                    .filter(|left| left.kind() == "shorthand_property_identifier_pattern")
                    .map(|left| self.text(&left).to_string()),
                _ => None,
            })
            .collect()
    }

    fn property_key(&self, key: &Node) -> Option<String> {
        match key.kind() {
            "property_identifier" | "private_property_identifier" | "number" => {
                Some(self.text(key).to_string())
            }
            "string" => Some(strip_quotes(self.text(key)).to_string()),
            _ => None,
        }
    }

    fn normalize_jsx_element(&self, node: &Node) -> ComponentNode {
        let open = node.child_by_field_name("open_tag");
        let close = node.child_by_field_name("close_tag");
        let skip: Vec<usize> = open.iter().chain(close.iter()).map(|n| n.id()).collect();

        let (tag, attributes) = match open {
            Some(open) => (
                non_empty(tag_name(&open, self.source)),
                self.normalize_attributes(&open),
            ),
            None => (None, Vec::new()),
        };

        ComponentNode::JsxElement {
            tag,
            attributes,
            self_closing: false,
            children: self.normalize_children(node, &skip),
        }
    }

    fn normalize_attributes(&self, element: &Node) -> Vec<JsxAttribute> {
        let mut cursor = element.walk();
        element
            .named_children(&mut cursor)
            .filter_map(|attr| match attr.kind() {
                "jsx_attribute" => Some(self.normalize_attribute(&attr)),
                "jsx_expression" => Some(JsxAttribute::Spread {
                    expression: expression_text(self.text(&attr)),
                    inner: self.normalize_children(&attr, &[]),
                }),
                _ => None,
            })
            .collect()
    }

    fn normalize_attribute(&self, attr: &Node) -> JsxAttribute {
        let mut cursor = attr.walk();
        let mut parts = attr.named_children(&mut cursor).filter(|n| n.kind() != "comment");
        let name = parts
            .next()
            .map(|n| self.text(&n).to_string())
            .unwrap_or_default();

        let value = match parts.next() {
            None => JsxAttrValue::Flag,
            Some(value) => match value.kind() {
                "string" => {
                    JsxAttrValue::StringLiteral(strip_quotes(self.text(&value)).to_string())
                }
                "jsx_expression" => JsxAttrValue::Expression {
                    text: expression_text(self.text(&value)),
                    inner: self.normalize_children(&value, &[]),
                },
                "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => {
                    JsxAttrValue::Element(Box::new(self.normalize_node(&value)))
                }
                _ => JsxAttrValue::Expression {
                    text: collapse_whitespace(self.text(&value)),
                    inner: vec![self.normalize_node(&value)],
                },
            },
        };

        JsxAttribute::Named { name, value }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn strip_quotes(text: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| text.strip_prefix(*q).and_then(|t| t.strip_suffix(*q)))
        .unwrap_or(text)
}

/// `{ a  +  b }` → `a + b`.
fn expression_text(text: &str) -> String {
    let inner = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(text);
    collapse_whitespace(inner)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ParserManager;

    fn normalize(source: &str) -> ComponentNode {
        let parsed = ParserManager::new().parse(source).unwrap();
        ComponentNormalizer::new(parsed.bytes()).normalize(&parsed.root())
    }

    fn find_first<'a>(node: &'a ComponentNode, kind: &str) -> Option<&'a ComponentNode> {
        if node.kind() == kind {
            return Some(node);
        }
        let children: Vec<&ComponentNode> = match node {
            ComponentNode::Program { body } => body.iter().collect(),
            ComponentNode::ExportDefault { target } => vec![target.as_ref()],
            ComponentNode::Function { children, .. }
            | ComponentNode::Class { children, .. }
            | ComponentNode::Other { children, .. }
            | ComponentNode::JsxElement { children, .. } => children.iter().collect(),
            ComponentNode::Identifier { .. } => Vec::new(),
        };
        children.into_iter().find_map(|c| find_first(c, kind))
    }

    #[test]
    fn test_destructured_params() {
        let root = normalize(
            "function Card({ title, body: content, footer = null, 'data-id': id, ...rest }: Props) {
                return null;
            }",
        );
        match find_first(&root, "function") {
            Some(ComponentNode::Function { kind, name, params, .. }) => {
                assert_eq!(*kind, FunctionKind::Declaration);
                assert_eq!(name.as_deref(), Some("Card"));
                assert_eq!(
                    params[0],
                    ParamPattern::Object(vec![
                        "title".to_string(),
                        "body".to_string(),
                        "footer".to_string(),
                        "data-id".to_string(),
                    ])
                );
            }
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_anonymous_default_export_is_declaration() {
        let root = normalize("export default function (props) { return <div />; }");
        match find_first(&root, "export_default") {
            Some(ComponentNode::ExportDefault { target }) => match target.as_ref() {
                ComponentNode::Function { kind, params, .. } => {
                    assert_eq!(*kind, FunctionKind::Declaration);
                    assert_eq!(params[0], ParamPattern::Identifier("props".to_string()));
                }
                other => panic!("expected function target, got {other:?}"),
            },
            other => panic!("expected default export, got {other:?}"),
        }
    }

    #[test]
    fn test_jsx_attributes() {
        let root = normalize(
            r#"const el = <Panel className="panel" open style={{ color: "red" }} {...rest} />;"#,
        );
        match find_first(&root, "jsx_element") {
            Some(ComponentNode::JsxElement { tag, attributes, self_closing, .. }) => {
                assert_eq!(tag.as_deref(), Some("Panel"));
                assert!(*self_closing);
                assert_eq!(attributes.len(), 4);
                assert_eq!(
                    attributes[0],
                    JsxAttribute::Named {
                        name: "className".to_string(),
                        value: JsxAttrValue::StringLiteral("panel".to_string()),
                    }
                );
                assert!(matches!(
                    &attributes[1],
                    JsxAttribute::Named { value: JsxAttrValue::Flag, .. }
                ));
                assert!(matches!(
                    &attributes[2],
                    JsxAttribute::Named { value: JsxAttrValue::Expression { text, .. }, .. }
                        if text == r#"{ color: "red" }"#
                ));
                assert!(matches!(
                    &attributes[3],
                    JsxAttribute::Spread { expression, .. } if expression == "...rest"
                ));
            }
            other => panic!("expected jsx element, got {other:?}"),
        }
    }

    #[test]
    fn test_strip_quotes_and_collapse() {
        assert_eq!(strip_quotes("\"btn\""), "btn");
        assert_eq!(strip_quotes("'btn'"), "btn");
        assert_eq!(strip_quotes("btn"), "btn");
        assert_eq!(expression_text("{ a  +\n  b }"), "a + b");
    }
}
