// src/apps/cmdview.rs

//! Command inspector: a header line plus stdout and stderr panels for the
//! currently selected command.

use crate::commands::{panel_rows, CapturedCommand};
use crate::config::CommandPanelConfig;
use crate::display::{DisplayDriver, Point};
use crate::input::{Action, Selection};
use crate::objects::{DisplayObject, TextLabel};
use crate::orchestrator::Scene;
use crate::rasterizer::FontDriver;
use anyhow::{bail, Result};
use log::{debug, info};

pub struct CommandInspector<'f, F, D: DisplayDriver> {
    outputs: Vec<CapturedCommand>,
    selection: Selection,
    rows: usize,
    header: TextLabel<'f, F, D>,
    stdout_rows: Vec<TextLabel<'f, F, D>>,
    stderr_rows: Vec<TextLabel<'f, F, D>>,
}

/// Header text for the command at `index`.
pub fn header_text(index: usize, command: &CapturedCommand) -> String {
    format!(
        "{}: {} ({}, {})",
        index,
        command.name,
        command.stdout.len(),
        command.stderr.len()
    )
}

impl<'f, F, D> CommandInspector<'f, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    /// Lays out the panels and shows the first command. Fails when there is
    /// nothing to inspect.
    pub fn new(outputs: Vec<CapturedCommand>, config: &CommandPanelConfig, font: &'f F) -> Result<Self> {
        let Some(selection) = Selection::new(outputs.len()) else {
            bail!("No commands configured");
        };
        let label_at = |top: i32| -> TextLabel<'f, F, D> {
            TextLabel::new(Point::new(config.left_px, top), config.text_color, font)
        };
        let panel = |top: i32| -> Vec<TextLabel<'f, F, D>> {
            (0..config.rows)
                .map(|i| label_at(top + i as i32 * config.row_height_px))
                .collect()
        };

        let mut inspector = CommandInspector {
            header: label_at(config.header_top_px),
            stdout_rows: panel(config.stdout_top_px),
            stderr_rows: panel(config.stderr_top_px),
            outputs,
            selection,
            rows: config.rows,
        };
        inspector.refresh();
        Ok(inspector)
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub fn header(&self) -> &str {
        self.header.text()
    }

    pub fn stdout_texts(&self) -> Vec<&str> {
        self.stdout_rows.iter().map(TextLabel::text).collect()
    }

    pub fn stderr_texts(&self) -> Vec<&str> {
        self.stderr_rows.iter().map(TextLabel::text).collect()
    }

    /// Points every label at the selected command's output.
    fn refresh(&mut self) {
        let index = self.selection.index();
        let command = &self.outputs[index];
        debug!("CommandInspector: showing '{}'", command.name);
        self.header.set_text(&header_text(index, command));
        for (label, row) in self
            .stdout_rows
            .iter_mut()
            .zip(panel_rows(&command.stdout, self.rows))
        {
            label.set_text(&row);
        }
        for (label, row) in self
            .stderr_rows
            .iter_mut()
            .zip(panel_rows(&command.stderr, self.rows))
        {
            label.set_text(&row);
        }
    }
}

impl<F, D> Scene<D> for CommandInspector<'_, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    fn render(&mut self, driver: &mut D) {
        self.header.render(driver);
        for label in self.stdout_rows.iter_mut().chain(self.stderr_rows.iter_mut()) {
            label.render(driver);
        }
    }

    fn apply(&mut self, action: Action) {
        if action == Action::AdvanceSelection {
            let index = self.selection.advance();
            info!("Selected command {} of {}", index, self.selection.count());
            self.refresh();
        }
    }
}
