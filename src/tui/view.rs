//! # Drawing the workflow
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::algorithm::Solver;
use crate::render::Region;
use crate::workflow::{Stage, Workflow};
use crate::workflow::chooser::FileChooser;

/// Draw the four stage regions stacked on top of each other, with the status regions below them.
///
/// The region of the active stage is highlighted.
pub fn draw<S: Solver, C: FileChooser>(frame: &mut Frame, workflow: &Workflow<S, C>) {
    let [load, precision, process, output, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(4),
    ]).areas(frame.area());
    let [cost, elapsed, error] = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(50),
    ]).areas(status);

    let focus = workflow.active_stage();
    for (stage, area) in [(Stage::Load, load), (Stage::Precision, precision), (Stage::Process, process)] {
        let paragraph = Paragraph::new(workflow.regions().text(workflow.stage_region(stage)))
            .block(block(workflow.stage_region(stage), stage == focus));
        frame.render_widget(paragraph, area);
    }

    let regions = workflow.regions();
    let paragraph = Paragraph::new(regions.text(Region::Output))
        .block(block(Region::Output, focus == Stage::Output))
        .scroll(regions.scroll());
    frame.render_widget(paragraph, output);

    draw_status(frame, workflow, Region::Cost, cost);
    draw_status(frame, workflow, Region::Elapsed, elapsed);
    draw_status(frame, workflow, Region::Error, error);
}

fn draw_status<S: Solver, C: FileChooser>(
    frame: &mut Frame,
    workflow: &Workflow<S, C>,
    region: Region,
    area: Rect,
) {
    let style = match region {
        Region::Error => Style::new().fg(Color::Red),
        _ => Style::new(),
    };
    let paragraph = Paragraph::new(workflow.regions().text(region))
        .style(style)
        .wrap(Wrap { trim: true })
        .block(block(region, false));
    frame.render_widget(paragraph, area);
}

fn block(region: Region, focused: bool) -> Block<'static> {
    let block = Block::bordered().title(region.title());
    if focused {
        block.border_style(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        block
    }
}
