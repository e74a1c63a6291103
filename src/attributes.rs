// src/attributes.rs

use crate::symlib_models::{SymComponent, SymFootprint};

/// Name of the generic field copied into the component description.
pub const DESCRIPTION_FIELD: &str = "Description";

/// Display text and visibility for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    pub text: String,
    pub hidden: bool,
}

/// Resolves a symbol-level attribute.
///
/// Text comes from the record itself, then the footprint, then the
/// component's generic fields, and is empty when none of them has it.
pub fn resolve_attribute(
    name: &str,
    own_text: &str,
    visible: bool,
    component: &SymComponent,
    footprint: Option<&SymFootprint>,
    force_hide: bool,
) -> ResolvedAttribute {
    ResolvedAttribute {
        text: resolve_text(name, own_text, component, footprint),
        hidden: force_hide || !visible,
    }
}

pub fn resolve_text(
    name: &str,
    own_text: &str,
    component: &SymComponent,
    footprint: Option<&SymFootprint>,
) -> String {
    if !own_text.is_empty() {
        return own_text.to_string();
    }
    footprint
        .and_then(|fp| fp.attribute(name))
        .filter(|text| !text.is_empty())
        .or_else(|| component.field_value(name))
        .unwrap_or_default()
        .to_string()
}

pub fn is_description(name: &str) -> bool {
    name.eq_ignore_ascii_case(DESCRIPTION_FIELD)
}
