//! Source fingerprinter: parse, normalize, then one pre-order visit that
//! collects the default-export name, props, style tokens, and signature.

use std::collections::BTreeSet;

use motif_core::config::{AnalysisConfig, PropScope};
use motif_core::errors::ParseError;

use super::signature::structural_signature;
use super::types::ComponentFingerprint;
use crate::ast::{
    ComponentNode, ComponentNormalizer, FunctionKind, JsxAttrValue, JsxAttribute, ParamPattern,
};
use crate::parsers::ParserManager;

/// Turns component source text into a `ComponentFingerprint`.
#[derive(Debug, Clone)]
pub struct SourceFingerprinter {
    parser: ParserManager,
    style_attributes: Vec<String>,
    prop_scope: PropScope,
}

impl Default for SourceFingerprinter {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl SourceFingerprinter {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            parser: ParserManager::with_max_depth(config.effective_max_depth()),
            style_attributes: config.effective_style_attributes(),
            prop_scope: config.effective_prop_scope(),
        }
    }

    /// Fingerprint one component source. Pure: no I/O, no shared state.
    pub fn fingerprint(&self, source: &str) -> Result<ComponentFingerprint, ParseError> {
        let parsed = self.parser.parse(source)?;
        let root = ComponentNormalizer::new(parsed.bytes()).normalize(&parsed.root());
        let fingerprint = self.fingerprint_tree(&root);
        tracing::trace!(
            name = %fingerprint.name,
            props = fingerprint.props.len(),
            style_tokens = fingerprint.style_tokens.len(),
            "fingerprinted component"
        );
        Ok(fingerprint)
    }

    /// Fingerprint an already-normalized tree.
    pub fn fingerprint_tree(&self, root: &ComponentNode) -> ComponentFingerprint {
        let mut visitor = FingerprintVisitor::new(&self.style_attributes);
        visitor.visit(root);

        let name = visitor
            .default_export
            .and_then(ComponentNode::exported_name)
            .unwrap_or_default()
            .to_string();

        let props = match self.prop_scope {
            PropScope::AllFunctions => visitor
                .declarations
                .iter()
                .flat_map(|decl| first_param_names(decl.params))
                .cloned()
                .collect(),
            PropScope::DefaultExport => visitor.default_export_props(),
        };

        ComponentFingerprint {
            name,
            props,
            style_tokens: visitor.style_tokens,
            structural_signature: visitor.signature.unwrap_or_default(),
        }
    }
}

/// Fingerprint with the default configuration.
pub fn fingerprint(source: &str) -> Result<ComponentFingerprint, ParseError> {
    SourceFingerprinter::default().fingerprint(source)
}

fn first_param_names(params: &[ParamPattern]) -> &[String] {
    params.first().map(ParamPattern::prop_names).unwrap_or(&[])
}

struct FunctionDecl<'a> {
    name: Option<&'a str>,
    params: &'a [ParamPattern],
}

struct FingerprintVisitor<'a> {
    style_attributes: &'a [String],
    default_export: Option<&'a ComponentNode>,
    declarations: Vec<FunctionDecl<'a>>,
    style_tokens: BTreeSet<String>,
    signature: Option<String>,
}

impl<'a> FingerprintVisitor<'a> {
    fn new(style_attributes: &'a [String]) -> Self {
        Self {
            style_attributes,
            default_export: None,
            declarations: Vec::new(),
            style_tokens: BTreeSet::new(),
            signature: None,
        }
    }

    fn visit_all(&mut self, nodes: &'a [ComponentNode]) {
        for node in nodes {
            self.visit(node);
        }
    }

    fn visit(&mut self, node: &'a ComponentNode) {
        match node {
            ComponentNode::Program { body } => self.visit_all(body),
            ComponentNode::ExportDefault { target } => {
                if self.default_export.is_none() {
                    self.default_export = Some(target.as_ref());
                }
                self.visit(target);
            }
            ComponentNode::Function {
                kind,
                name,
                params,
                children,
            } => {
                if *kind == FunctionKind::Declaration {
                    self.declarations.push(FunctionDecl {
                        name: name.as_deref(),
                        params,
                    });
                }
                self.visit_all(children);
            }
            ComponentNode::Class { children, .. } | ComponentNode::Other { children, .. } => {
                self.visit_all(children)
            }
            ComponentNode::Identifier { .. } => {}
            ComponentNode::JsxElement {
                attributes,
                children,
                ..
            } => {
                if self.signature.is_none() {
                    self.signature = structural_signature(node);
                }
                for attr in attributes {
                    self.visit_attribute(attr);
                }
                self.visit_all(children);
            }
        }
    }

    fn visit_attribute(&mut self, attr: &'a JsxAttribute) {
        match attr {
            JsxAttribute::Spread { inner, .. } => self.visit_all(inner),
            JsxAttribute::Named { name, value } => match value {
                JsxAttrValue::StringLiteral(token) => {
                    if self.style_attributes.iter().any(|a| a == name) {
                        self.style_tokens.insert(token.clone());
                    }
                }
                JsxAttrValue::Expression { inner, .. } => self.visit_all(inner),
                JsxAttrValue::Element(element) => self.visit(element),
                JsxAttrValue::Flag => {}
            },
        }
    }

    /// Props of the default-exported function, following a bare identifier
    /// to the function declaration it names.
    fn default_export_props(&self) -> BTreeSet<String> {
        let params: &[ParamPattern] = match self.default_export {
            Some(ComponentNode::Function { params, .. }) => params.as_slice(),
            Some(ComponentNode::Identifier { name }) => self
                .declarations
                .iter()
                .find(|decl| decl.name == Some(name.as_str()))
                .map(|decl| decl.params)
                .unwrap_or(&[]),
            _ => &[],
        };
        first_param_names(params).iter().cloned().collect()
    }
}
