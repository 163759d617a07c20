//! Exporters turn stored color sets into something outside of the panel can consume. Every target
//! implements [`Exporter`]: all of them can render to text, and targets that map onto a compositing
//! node tree can additionally describe that tree as a [`NodeGraph`] for a host integration to
//! instantiate. Nothing here talks to a host application or the clipboard; text is returned and
//! the caller puts it where it belongs.
//!
//! Colors are always exported as RGB floats without alpha, base color first, in rule order.

use std::fmt::{self, Write as FmtWrite};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::color::RgbColor;
use crate::error::ExportError;
use crate::store::StoreEntry;

/// A target color sets can be exported to.
pub trait Exporter {
    /// Renders the entries as text in this target's format.
    ///
    /// # Errors
    /// Returns an `ExportError` if the underlying writer fails.
    fn render_to_text(&self, entries: &[StoreEntry]) -> Result<String, ExportError>;

    /// Describes the entries as a node tree, for targets that have one. The default is `None`.
    fn render_to_nodes(&self, _entries: &[StoreEntry]) -> Option<NodeGraph> {
        None
    }
}

/// One line per color set, colors separated by a delimiter and written as `r, g, b`:
///
/// ```text
/// 1.0, 0.0, 0.0|0.0, 1.0, 0.0|0.0, 0.0, 1.0
/// ```
///
/// This is both the CSV file format and the clipboard format.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DelimitedText {
    /// The byte separating colors on a line.
    pub delimiter: u8,
}

impl Default for DelimitedText {
    fn default() -> DelimitedText {
        DelimitedText { delimiter: b'|' }
    }
}

/// Formats one color as `r, g, b`. Floats always carry a decimal point, so `1` is written `1.0`.
fn rgb_field(color: &RgbColor) -> String {
    format!("{:?}, {:?}, {:?}", color.r, color.g, color.b)
}

impl DelimitedText {
    /// Creates the exporter with a custom delimiter.
    pub fn new(delimiter: u8) -> DelimitedText {
        DelimitedText { delimiter }
    }

    /// Writes the rendered text to `writer`.
    ///
    /// # Errors
    /// Returns an `ExportError` if writing fails.
    pub fn write<W: Write>(&self, writer: W, entries: &[StoreEntry]) -> Result<(), ExportError> {
        // color sets have different lengths, and "r, g, b" never needs quoting
        let mut wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .from_writer(writer);
        for entry in entries {
            let fields: Vec<String> = entry.colors().to_rgb().iter().map(rgb_field).collect();
            wtr.write_record(&fields)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes the rendered text to a CSV file at `path`, replacing it.
    ///
    /// # Errors
    /// Returns an `ExportError` if the file can't be created or written.
    pub fn write_csv<P: AsRef<Path>>(
        &self,
        path: P,
        entries: &[StoreEntry],
    ) -> Result<(), ExportError> {
        let file = File::create(path.as_ref())?;
        self.write(file, entries)?;
        info!("exported {} color sets to {}", entries.len(), path.as_ref().display());
        Ok(())
    }
}

impl Exporter for DelimitedText {
    fn render_to_text(&self, entries: &[StoreEntry]) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write(&mut buf, entries)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// A constant color source feeding a box reformat, one per color of a set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorNode {
    /// RGBA, with alpha always 1.
    pub color: [f64; 4],
    /// Width of the box the color is reformatted to.
    pub box_width: f64,
    /// Height of the box the color is reformatted to.
    pub box_height: f64,
}

/// A contact sheet laying the colors of one set out in a single row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSheet {
    /// Output width.
    pub width: u32,
    /// Output height.
    pub height: u32,
    /// Always 1.
    pub rows: usize,
    /// One column per color.
    pub columns: usize,
    /// Gap between cells in pixels.
    pub gap: u32,
    /// Whether cells are centered.
    pub center: bool,
}

/// A group node wrapping one color set: the colors, the contact sheet combining them, and an
/// output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeGroup {
    /// The group label: the harmony name.
    pub label: String,
    /// The colors, base first.
    pub colors: Vec<ColorNode>,
    /// The sheet combining them.
    pub contact_sheet: ContactSheet,
}

/// The node tree for a list of color sets: one group per set. A host integration creates the
/// nodes from this; [`NukeScript`] writes it as script text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeGraph {
    /// One group per color set, in store order.
    pub groups: Vec<NodeGroup>,
}

/// Gap between contact sheet cells.
const SHEET_GAP: u32 = 20;
/// Horizontal spacing of nodes in the script.
const NODE_SPACING: usize = 110;

impl NodeGraph {
    /// Builds the graph for the entries, with every contact sheet sized `width` x `height` and each
    /// color taking an equal share of the width.
    pub fn build(entries: &[StoreEntry], width: u32, height: u32) -> NodeGraph {
        let groups = entries
            .iter()
            .map(|entry| {
                let rgb = entry.colors().to_rgb();
                let box_width = f64::from(width) / rgb.len() as f64;
                let colors = rgb
                    .iter()
                    .map(|c| ColorNode {
                        color: [c.r, c.g, c.b, 1.],
                        box_width,
                        box_height: f64::from(height),
                    })
                    .collect();
                NodeGroup {
                    label: entry.harmony().name().to_string(),
                    colors,
                    contact_sheet: ContactSheet {
                        width,
                        height,
                        rows: 1,
                        columns: rgb.len(),
                        gap: SHEET_GAP,
                        center: true,
                    },
                }
            })
            .collect();
        NodeGraph { groups }
    }
}

/// Writes color sets as a Nuke script that can be pasted into the node graph. Each set becomes a
/// postage-stamp group labelled with its harmony; the group exposes every constant's color as a
/// user knob named `color1`, `color2`, ... so that the colors can be edited from the group.
#[derive(Debug, Clone, PartialEq)]
pub struct NukeScript {
    /// The version line written at the top of the script, e.g. `13.0 v1`.
    pub version: String,
    /// Width of the project format the sheets are sized to.
    pub width: u32,
    /// Height of the project format the sheets are sized to.
    pub height: u32,
}

impl Default for NukeScript {
    fn default() -> NukeScript {
        NukeScript {
            version: "13.0 v1".to_string(),
            width: 1920,
            height: 1080,
        }
    }
}

impl NukeScript {
    fn write_group(out: &mut String, group_index: usize, group: &NodeGroup) -> fmt::Result {
        writeln!(out, "Group {{")?;
        writeln!(out, "  inputs 0")?;
        writeln!(out, "  name Group{}", group_index)?;
        writeln!(out, "  label {}", group.label)?;
        writeln!(out, "  xpos {}", (group_index - 1) * NODE_SPACING)?;
        writeln!(out, "  ypos 9")?;
        writeln!(out, "  postage_stamp true")?;
        writeln!(out, "  addUserKnob {{20 nuke_color_harmony}}")?;
        writeln!(out, "  addUserKnob {{26 harmony l  {} }}", group.label)?;
        for i in 1..=group.colors.len() {
            writeln!(
                out,
                "  addUserKnob {{41 color{i} T Group{g}.Constant{i}.color}}",
                i = i,
                g = group_index
            )?;
        }
        writeln!(out, " }}")?;
        for (i, node) in group.colors.iter().enumerate() {
            let index = i + 1;
            let xpos = i * NODE_SPACING;
            let [r, g, b, a] = node.color;
            writeln!(out, "Constant {{")?;
            writeln!(out, "  inputs 0")?;
            writeln!(out, "  channels rgb")?;
            writeln!(out, "  color {{{} {} {} {}}}", r, g, b, a)?;
            writeln!(out, "  name Constant{}", index)?;
            writeln!(out, "  xpos {}", xpos)?;
            writeln!(out, "  ypos -33")?;
            writeln!(out, "}}")?;
            writeln!(out, "Reformat {{")?;
            writeln!(out, "  type \"to box\"")?;
            writeln!(out, "  box_width {}", node.box_width)?;
            writeln!(out, "  box_height {}", node.box_height)?;
            writeln!(out, "  box_fixed true")?;
            writeln!(out, "  resize distort")?;
            writeln!(out, "  name Reformat{}", index)?;
            writeln!(out, "  xpos {}", xpos)?;
            writeln!(out, "  ypos 67}}")?;
        }
        let sheet = &group.contact_sheet;
        writeln!(out, "ContactSheet {{")?;
        writeln!(out, "  inputs {}", sheet.columns)?;
        writeln!(out, "  width {}", sheet.width)?;
        writeln!(out, "  height {}", sheet.height)?;
        writeln!(out, "  rows {}", sheet.rows)?;
        writeln!(out, "  columns {}", sheet.columns)?;
        writeln!(out, "  gap {}", sheet.gap)?;
        writeln!(out, "  center {}", sheet.center)?;
        writeln!(out, "  name ContactSheet1")?;
        writeln!(out, "  ypos 267")?;
        writeln!(out, "}}")?;
        writeln!(out, "Output {{")?;
        writeln!(out, "  name Output1")?;
        writeln!(out, "}}")?;
        writeln!(out, "end_group")
    }

    /// Writes the script to a file at `path`, replacing it.
    ///
    /// # Errors
    /// Returns an `ExportError` if the file can't be created or written.
    pub fn write_script<P: AsRef<Path>>(
        &self,
        path: P,
        entries: &[StoreEntry],
    ) -> Result<(), ExportError> {
        let text = self.render_to_text(entries)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(text.as_bytes())?;
        info!("exported {} color sets to {}", entries.len(), path.as_ref().display());
        Ok(())
    }
}

impl Exporter for NukeScript {
    fn render_to_text(&self, entries: &[StoreEntry]) -> Result<String, ExportError> {
        let graph = NodeGraph::build(entries, self.width, self.height);
        let mut out = String::new();
        writeln!(out, "set cut_paste_input [stack 0]")?;
        writeln!(out, "version {}", self.version)?;
        for (i, group) in graph.groups.iter().enumerate() {
            NukeScript::write_group(&mut out, i + 1, group)?;
        }
        Ok(out)
    }

    fn render_to_nodes(&self, entries: &[StoreEntry]) -> Option<NodeGraph> {
        Some(NodeGraph::build(entries, self.width, self.height))
    }
}
