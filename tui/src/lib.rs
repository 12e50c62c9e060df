//! TUI rendering for Pulse using ratatui.
//!
//! Rendering is a pure function of engine state: widget class lists decide
//! styling, pending removal progress decides highlight decay, and the
//! activity feed fills the log panel. No state lives in this crate.

mod effects;
mod input;
mod theme;

pub use effects::{blend, highlight_intensity};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use pulse_engine::{
    ANIM_BOX, App, CALC_RESULT, CARD, CLASS_ACTIVE, CLASS_ANIMATED, CLASS_FLIPPED, COUNTER_READOUT,
    LOADING, control_specs,
};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // Board
            Constraint::Length(4), // Readouts
            Constraint::Min(1),    // Activity
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_board(frame, app, chunks[0], &palette, &glyphs);
    draw_readouts(frame, app, chunks[1], &palette);
    draw_activity(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, chunks[3], &palette);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    draw_anim_box(frame, app, cells[0], palette);
    draw_card(frame, app, cells[1], palette);
    draw_loading(frame, app, cells[2], palette, glyphs);
}

fn draw_anim_box(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(widget) = app.widget(&ANIM_BOX) else {
        return;
    };
    let options = app.ui_options();
    let accent = palette.class_accent(&CLASS_ANIMATED);

    // Full intensity at trigger, decaying as the removal timer runs out.
    let intensity = if widget.has_class(&CLASS_ANIMATED) {
        highlight_intensity(
            app.animation_progress(&ANIM_BOX, &CLASS_ANIMATED),
            options.reduced_motion,
        )
    } else {
        0.0
    };

    let border = blend(palette.bg_border, accent, intensity);
    let mut text_style = Style::default().fg(blend(palette.text_secondary, accent, intensity));
    if intensity > 0.0 {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" Box ", Style::default().fg(palette.text_primary)))
        .padding(Padding::new(0, 0, 1, 0))
        .style(Style::default().bg(palette.bg_panel));

    let body = Paragraph::new(widget.text())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);
    frame.render_widget(body, area);
}

fn draw_card(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(widget) = app.widget(&CARD) else {
        return;
    };
    let flipped = widget.has_class(&CLASS_FLIPPED);
    let accent = palette.class_accent(&CLASS_FLIPPED);

    let (face, border_type, face_style) = if flipped {
        (
            "back",
            BorderType::Double,
            Style::default().fg(accent).add_modifier(Modifier::REVERSED),
        )
    } else {
        (
            "front",
            BorderType::Rounded,
            Style::default().fg(palette.text_secondary),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(if flipped { accent } else { palette.bg_border }))
        .title(Span::styled(" Card ", Style::default().fg(palette.text_primary)))
        .padding(Padding::new(0, 0, 1, 0))
        .style(Style::default().bg(palette.bg_panel));

    let body = Paragraph::new(face)
        .alignment(Alignment::Center)
        .style(face_style)
        .block(block);
    frame.render_widget(body, area);
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(widget) = app.widget(&LOADING) else {
        return;
    };
    let options = app.ui_options();
    let active = widget.has_class(&CLASS_ACTIVE);
    let accent = palette.class_accent(&CLASS_ACTIVE);

    let line = if active {
        Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count(), options),
                Style::default().fg(accent),
            ),
            Span::raw(" "),
            Span::styled(widget.text(), Style::default().fg(accent)),
        ])
    } else {
        Line::from(vec![
            Span::styled(glyphs.idle, Style::default().fg(palette.text_muted)),
            Span::raw(" "),
            Span::styled("idle", Style::default().fg(palette.text_muted)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if active { accent } else { palette.bg_border }))
        .title(Span::styled(
            " Loading ",
            Style::default().fg(palette.text_primary),
        ))
        .padding(Padding::new(0, 0, 1, 0))
        .style(Style::default().bg(palette.bg_panel));

    let body = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, area);
}

fn draw_readouts(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let calc = app
        .widget(&CALC_RESULT)
        .map(|w| w.text().to_string())
        .unwrap_or_default();
    let counter = app
        .widget(&COUNTER_READOUT)
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(calc, Style::default().fg(palette.text_primary))),
        Line::from(Span::styled(
            counter,
            Style::default().fg(palette.text_secondary),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(
            " Readouts ",
            Style::default().fg(palette.text_primary),
        ))
        .style(Style::default().bg(palette.bg_highlight));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_activity(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // Keep the newest lines visible in whatever height the panel got.
    let visible = area.height.saturating_sub(2) as usize;
    let all: Vec<&str> = app.activity().lines().collect();
    let start = all.len().saturating_sub(visible);

    let lines: Vec<Line> = all[start..]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(glyphs.bullet, Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::styled(*entry, Style::default().fg(palette.text_secondary)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(
            " Activity ",
            Style::default().fg(palette.text_primary),
        ))
        .style(Style::default().bg(palette.bg_panel));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut spans = Vec::new();
    for spec in control_specs() {
        spans.push(Span::styled(
            format!(" {} ", spec.key),
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}  ", spec.label),
            Style::default().fg(palette.text_secondary),
        ));
    }
    spans.push(Span::styled(
        " q ",
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.error)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        " Quit",
        Style::default().fg(palette.text_secondary),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
