// src/converter.rs

use crate::{
    attributes::{is_description, resolve_attribute},
    error::Result,
    pin_name::normalize_pin_name,
    rectangle::detect_rectangle,
    schlib_models::*,
    style::{map_justification, map_line_width, map_orientation, map_point},
    symlib_models::*,
};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Options applied uniformly to one conversion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Hide every parameter regardless of its source visibility.
    pub force_hide_all_parameters: bool,
    /// Stroke used for detected rectangles instead of the first line's width.
    pub rectangle_line_width: Option<LineWidth>,
    /// Rewrite active-low pin name markers as overlines.
    pub convert_overlines: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            force_hide_all_parameters: false,
            rectangle_line_width: None,
            convert_overlines: true,
        }
    }
}

/// Converts a whole symbol-library document into a schematic library.
///
/// Components come out in source order. A style value with no mapping aborts
/// the pass with an error naming the component it belongs to.
pub fn convert(document: &SymDocument, options: &ConvertOptions) -> Result<SchLibrary> {
    let mut library = SchLibrary::default();
    for source in &document.components {
        let component = ComponentBuilder::new(source, document, options, &mut library.fonts)
            .build()
            .map_err(|e| e.in_component(&source.name))?;
        debug!(
            "Converted '{}': {} part(s), {} display mode(s), {} primitive(s)",
            component.lib_reference,
            component.part_count,
            component.display_mode_count,
            component.primitives.len()
        );
        library.components.push(component);
    }
    Ok(library)
}

/// Accumulates one target component. Everything mutable during the pass lives here.
struct ComponentBuilder<'a> {
    source: &'a SymComponent,
    document: &'a SymDocument,
    footprint: Option<&'a SymFootprint>,
    options: &'a ConvertOptions,
    fonts: &'a mut FontTable,
    component: SchComponent,
    seen_names: HashSet<String>,
}

impl<'a> ComponentBuilder<'a> {
    fn new(
        source: &'a SymComponent,
        document: &'a SymDocument,
        options: &'a ConvertOptions,
        fonts: &'a mut FontTable,
    ) -> Self {
        let footprint = source
            .footprint
            .as_deref()
            .and_then(|name| document.footprint(name));
        ComponentBuilder {
            source,
            document,
            footprint,
            options,
            fonts,
            component: SchComponent {
                lib_reference: source.name.clone(),
                designator: format!("{}?", source.ref_des_prefix),
                ..Default::default()
            },
            seen_names: HashSet::new(),
        }
    }

    fn build(mut self) -> Result<SchComponent> {
        let document = self.document;
        self.convert_fields();

        for (part, symbols) in self.group_attachments() {
            self.component.part_count = self.component.part_count.max(part);
            let mut display_mode = 0;
            for name in symbols {
                let Some(symbol) = document.symbol(name) else {
                    warn!(
                        "Component '{}' attaches unknown symbol '{}', skipping",
                        self.source.name, name
                    );
                    continue;
                };
                self.component.display_mode_count =
                    self.component.display_mode_count.max(display_mode + 1);
                self.convert_symbol(symbol, Owner { part, display_mode })?;
                display_mode += 1;
            }
        }

        Ok(self.component)
    }

    /// Attachments grouped by part number, in encounter order within each part.
    fn group_attachments(&self) -> BTreeMap<u32, Vec<&'a str>> {
        let source = self.source;
        let mut groups: BTreeMap<u32, Vec<&'a str>> = BTreeMap::new();
        for attachment in &source.attachments {
            if attachment.part_number == 0 {
                warn!(
                    "Component '{}' attaches '{}' to part 0, skipping",
                    source.name, attachment.symbol
                );
                continue;
            }
            groups
                .entry(attachment.part_number)
                .or_default()
                .push(attachment.symbol.as_str());
        }
        groups
    }

    /// Generic component fields become parameters shared by all parts.
    fn convert_fields(&mut self) {
        let source = self.source;
        let force_hide = self.options.force_hide_all_parameters;
        for field in &source.fields {
            let (name, value) = (field.name(), field.value());
            if is_description(name) {
                if self.component.description.is_empty() {
                    self.component.description = value.to_string();
                }
                continue;
            }
            let hidden = match field {
                SymField::Attribute { .. } => true,
                SymField::Variable { .. } => force_hide,
            };
            if self.claim_name(name) {
                let parameter = SchParameter {
                    location: CoordPoint::default(),
                    name: name.to_string(),
                    text: value.to_string(),
                    font_id: FontTable::DEFAULT_ID,
                    justification: Justification::default(),
                    orientation: Orientation::None,
                    mirrored: false,
                    hidden,
                };
                self.push(Owner::component(), SchPrimitiveKind::Parameter(parameter));
            }
        }
    }

    fn convert_symbol(&mut self, symbol: &SymSymbol, owner: Owner) -> Result<()> {
        let records = &symbol.records;
        let mut consumed = vec![false; records.len()];

        // Rectangles go in first so they sit behind the rest of the symbol.
        let mut index = 0;
        while index + 4 <= records.len() {
            match detect_rectangle(records, index, self.options.rectangle_line_width) {
                Some(rectangle) => {
                    trace!(
                        "Symbol '{}': lines {}..{} form a rectangle",
                        symbol.name,
                        index,
                        index + 4
                    );
                    self.push(owner, SchPrimitiveKind::Rectangle(rectangle));
                    consumed[index..index + 4].fill(true);
                    index += 4;
                }
                None => index += 1,
            }
        }

        for (record, _) in records.iter().zip(&consumed).filter(|(_, used)| !**used) {
            if let Some(kind) = self.map_record(record)? {
                self.push(owner, kind);
            }
        }
        Ok(())
    }

    /// Maps one record. `None` means a parameter whose name is already taken.
    fn map_record(&mut self, record: &SymRecord) -> Result<Option<SchPrimitiveKind>> {
        let kind = match record {
            SymRecord::Line(line) => SchPrimitiveKind::Line(SchLine {
                location: map_point(line.origin),
                corner: map_point(line.endpoint),
                width: map_line_width(line.width),
            }),
            SymRecord::Polyline(polyline) => SchPrimitiveKind::Polyline(SchPolyline {
                vertices: polyline.points.iter().copied().map(map_point).collect(),
                width: map_line_width(polyline.width),
            }),
            SymRecord::Arc(arc) => SchPrimitiveKind::Arc(map_arc(arc)),
            SymRecord::Text(text) => SchPrimitiveKind::Label(SchLabel {
                location: map_point(text.origin),
                text: text.text.clone(),
                font_id: self.fonts.intern(&text.style),
                justification: map_justification(text.justify)?,
                orientation: map_orientation(text.rotate)?,
                mirrored: text.flipped,
                hidden: !text.visible,
            }),
            SymRecord::Pin(pin) => SchPrimitiveKind::Pin(SchPin {
                location: map_point(pin.origin),
                designator: pin.designator_text.clone(),
                name: normalize_pin_name(pin.name_text.as_deref(), self.options.convert_overlines),
                name_visible: pin.name_visible,
                designator_visible: pin.designator_visible,
                orientation: map_orientation(pin.rotate)?,
                pin_length: Coord::from_mils(pin.pin_length),
            }),
            SymRecord::Attribute(attribute) => {
                if !self.claim_name(&attribute.name) {
                    return Ok(None);
                }
                let resolved = resolve_attribute(
                    &attribute.name,
                    &attribute.text,
                    attribute.visible,
                    self.source,
                    self.footprint,
                    self.options.force_hide_all_parameters,
                );
                SchPrimitiveKind::Parameter(SchParameter {
                    location: map_point(attribute.origin),
                    name: attribute.name.clone(),
                    text: resolved.text,
                    font_id: self.fonts.intern(&attribute.style),
                    justification: map_justification(attribute.justify)?,
                    orientation: map_orientation(attribute.rotate)?,
                    mirrored: attribute.flipped,
                    hidden: resolved.hidden,
                })
            }
            SymRecord::Variable(variable) => {
                if !self.claim_name(&variable.name) {
                    return Ok(None);
                }
                SchPrimitiveKind::Parameter(SchParameter {
                    location: map_point(variable.origin),
                    name: variable.name.clone(),
                    text: variable.value.clone(),
                    font_id: FontTable::DEFAULT_ID,
                    justification: Justification::default(),
                    orientation: Orientation::None,
                    mirrored: false,
                    hidden: self.options.force_hide_all_parameters,
                })
            }
        };
        Ok(Some(kind))
    }

    /// Reserves a parameter name. Returns false if an earlier parameter already holds it.
    fn claim_name(&mut self, name: &str) -> bool {
        if self.seen_names.contains(name) {
            debug!(
                "Component '{}': dropping duplicate parameter '{}'",
                self.source.name, name
            );
            return false;
        }
        self.seen_names.insert(name.to_string());
        true
    }

    fn push(&mut self, owner: Owner, kind: SchPrimitiveKind) {
        self.component.primitives.push(SchPrimitive { owner, kind });
    }
}

/// Arcs always sweep counter-clockwise from `start_angle` to `end_angle`.
fn map_arc(arc: &SymArc) -> SchArc {
    let (start, end) = if arc.sweep_angle.abs() >= 360.0 {
        (0.0, 360.0)
    } else {
        let (start, end) = if arc.sweep_angle >= 0.0 {
            (arc.start_angle, arc.start_angle + arc.sweep_angle)
        } else {
            (arc.start_angle + arc.sweep_angle, arc.start_angle)
        };
        (start.rem_euclid(360.0), end.rem_euclid(360.0))
    };
    SchArc {
        location: map_point(arc.origin),
        radius: Coord::from_mils(arc.radius),
        start_angle: start,
        end_angle: end,
        width: map_line_width(arc.width),
    }
}
