// src/schlib_models.rs

use serde::{Deserialize, Serialize};

// --- Units ---

/// Internal units per mil.
pub const UNITS_PER_MIL: f64 = 10_000.0;

/// Fixed-point schematic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Coord(pub i64);

impl Coord {
    pub fn from_mils(mils: f64) -> Self {
        Coord((mils * UNITS_PER_MIL).round() as i64)
    }

    pub fn to_mils(self) -> f64 {
        self.0 as f64 / UNITS_PER_MIL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CoordPoint {
    pub x: Coord,
    pub y: Coord,
}

impl CoordPoint {
    pub fn from_mils(x: f64, y: f64) -> Self {
        CoordPoint {
            x: Coord::from_mils(x),
            y: Coord::from_mils(y),
        }
    }
}

// --- Style enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineWidth {
    Smallest,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    None,
    Rotated,
    Flipped,
    RotatedFlipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Justification {
    #[default]
    BottomLeft,
    BottomCenter,
    BottomRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    TopLeft,
    TopCenter,
    TopRight,
}

// --- Fonts ---

pub type FontId = u32;

/// Name of the font entry every library starts with.
pub const DEFAULT_FONT: &str = "Default";

/// Library-wide font table. Text-style names are interned to 1-based ids.
#[derive(Debug, Clone, Serialize)]
pub struct FontTable {
    names: Vec<String>,
}

impl Default for FontTable {
    fn default() -> Self {
        FontTable {
            names: vec![DEFAULT_FONT.to_string()],
        }
    }
}

impl FontTable {
    pub const DEFAULT_ID: FontId = 1;

    /// Returns the id for `style`, registering it on first use.
    /// An empty style maps to the default font.
    pub fn intern(&mut self, style: &str) -> FontId {
        if style.is_empty() {
            return Self::DEFAULT_ID;
        }
        match self.names.iter().position(|n| n == style) {
            Some(idx) => idx as FontId + 1,
            None => {
                self.names.push(style.to_string());
                self.names.len() as FontId
            }
        }
    }

    pub fn name(&self, id: FontId) -> Option<&str> {
        let idx = (id as usize).checked_sub(1)?;
        self.names.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// --- Primitives ---

/// Which part and display mode a primitive is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Owner {
    /// 1-based part index, or [`Owner::ALL_PARTS`].
    pub part: u32,
    /// 0-based display mode index.
    pub display_mode: u32,
}

impl Owner {
    pub const ALL_PARTS: u32 = 0;

    /// Owner of component-level primitives shared by every part.
    pub fn component() -> Self {
        Owner {
            part: Self::ALL_PARTS,
            display_mode: 0,
        }
    }

    /// Whether a primitive with this owner is drawn for `part` in `display_mode`.
    /// Component-level primitives are drawn everywhere.
    pub fn covers(&self, part: u32, display_mode: u32) -> bool {
        self.part == Self::ALL_PARTS || (self.part == part && self.display_mode == display_mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchPrimitive {
    pub owner: Owner,
    pub kind: SchPrimitiveKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SchPrimitiveKind {
    Line(SchLine),
    Polyline(SchPolyline),
    Arc(SchArc),
    Label(SchLabel),
    Pin(SchPin),
    Parameter(SchParameter),
    Rectangle(SchRectangle),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchLine {
    pub location: CoordPoint,
    pub corner: CoordPoint,
    pub width: LineWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchPolyline {
    pub vertices: Vec<CoordPoint>,
    pub width: LineWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchArc {
    pub location: CoordPoint,
    pub radius: Coord,
    pub start_angle: f64,
    pub end_angle: f64,
    pub width: LineWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchLabel {
    pub location: CoordPoint,
    pub text: String,
    pub font_id: FontId,
    pub justification: Justification,
    pub orientation: Orientation,
    pub mirrored: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchPin {
    pub location: CoordPoint,
    pub designator: String,
    pub name: String,
    pub name_visible: bool,
    pub designator_visible: bool,
    pub orientation: Orientation,
    pub pin_length: Coord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchParameter {
    pub location: CoordPoint,
    pub name: String,
    pub text: String,
    pub font_id: FontId,
    pub justification: Justification,
    pub orientation: Orientation,
    pub mirrored: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchRectangle {
    pub location: CoordPoint,
    pub corner: CoordPoint,
    pub width: LineWidth,
}

// --- Components ---

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchComponent {
    pub lib_reference: String,
    pub designator: String,
    pub description: String,
    pub part_count: u32,
    pub display_mode_count: u32,
    pub primitives: Vec<SchPrimitive>,
}

impl SchComponent {
    /// Primitives drawn for one part in one display mode, shared ones included.
    pub fn primitives_for(
        &self,
        part: u32,
        display_mode: u32,
    ) -> impl Iterator<Item = &SchPrimitive> {
        self.primitives
            .iter()
            .filter(move |p| p.owner.covers(part, display_mode))
    }

    pub fn parameter(&self, name: &str) -> Option<&SchParameter> {
        self.primitives.iter().find_map(|p| match &p.kind {
            SchPrimitiveKind::Parameter(param) if param.name == name => Some(param),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchLibrary {
    pub components: Vec<SchComponent>,
    pub fonts: FontTable,
}

impl SchLibrary {
    pub fn component(&self, lib_reference: &str) -> Option<&SchComponent> {
        self.components
            .iter()
            .find(|c| c.lib_reference == lib_reference)
    }
}
