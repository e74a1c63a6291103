// src/symlib_models.rs

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed symbol-library document: components, the symbols they attach and
/// the footprints consulted for attribute fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymDocument {
    #[serde(default)]
    pub components: Vec<SymComponent>,
    #[serde(default)]
    pub symbols: Vec<SymSymbol>,
    #[serde(default)]
    pub footprints: Vec<SymFootprint>,
}

impl SymDocument {
    /// Looks up a symbol drawing by name.
    pub fn symbol(&self, name: &str) -> Option<&SymSymbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Looks up a footprint by name. Only its attribute values are ever used.
    pub fn footprint(&self, name: &str) -> Option<&SymFootprint> {
        self.footprints.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymComponent {
    pub name: String,
    #[serde(default)]
    pub ref_des_prefix: String,
    #[serde(default)]
    pub fields: Vec<SymField>,
    #[serde(default)]
    pub attachments: Vec<SymAttachment>,
    #[serde(default)]
    pub footprint: Option<String>,
}

impl SymComponent {
    /// Value of the first generic attribute or variable called `name`.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(SymField::value)
    }
}

/// Component-level (generic) attribute or variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymField {
    Attribute {
        name: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        visible: bool,
    },
    Variable {
        name: String,
        #[serde(default)]
        value: String,
    },
}

impl SymField {
    pub fn name(&self) -> &str {
        match self {
            SymField::Attribute { name, .. } | SymField::Variable { name, .. } => name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SymField::Attribute { value, .. } | SymField::Variable { value, .. } => value,
        }
    }
}

/// Binds a named symbol drawing to a 1-based part of its component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymAttachment {
    pub part_number: u32,
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymSymbol {
    pub name: String,
    #[serde(default)]
    pub records: Vec<SymRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymFootprint {
    pub name: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl SymFootprint {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

// All coordinates and lengths are in mils, angles in degrees.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymRecord {
    Line(SymLine),
    Polyline(SymPolyline),
    Arc(SymArc),
    Text(SymText),
    Pin(SymPin),
    Attribute(SymAttribute),
    Variable(SymVariable),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymLine {
    pub origin: DVec2,
    pub endpoint: DVec2,
    #[serde(default)]
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymPolyline {
    pub points: Vec<DVec2>,
    #[serde(default)]
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymArc {
    pub origin: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    #[serde(default)]
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymText {
    pub origin: DVec2,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub justify: i32, // horizontal 0/1/2 + vertical 0/4/8
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymPin {
    pub origin: DVec2,
    #[serde(default)]
    pub designator_text: String,
    #[serde(default)]
    pub designator_visible: bool,
    #[serde(default)]
    pub name_text: Option<String>,
    #[serde(default)]
    pub name_visible: bool,
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub pin_length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymAttribute {
    pub origin: DVec2,
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub justify: i32,
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymVariable {
    pub origin: DVec2,
    pub name: String,
    #[serde(default)]
    pub value: String,
}
