//! Status bar: step counter, list summary, message, keybindings and badge

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key label and what it does, in display order
const KEYBINDS: &[(&str, &str)] = &[
    (" ←/→ ", " step "),
    (" ⎵ ", " play "),
    (" ↵ / ⌫ ", " end/start "),
    (" q ", " quit "),
];

/// What the status bar needs to know about the current position
pub struct StatusInfo<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub list_len: usize,
    pub is_cyclic: bool,
    pub is_error: bool,
    pub is_playing: bool,
}

impl StatusInfo<'_> {
    fn badge(&self) -> Option<(&'static str, Color)> {
        let is_at_end = self.current_step + 1 >= self.total_steps;

        if self.is_playing {
            Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if self.is_error && is_at_end {
            Some((" ERROR ", DEFAULT_THEME.error))
        } else if is_at_end {
            Some((" END ", DEFAULT_THEME.comment))
        } else if self.current_step == 0 {
            Some((" START ", DEFAULT_THEME.success))
        } else {
            None
        }
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo<'_>) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let step_bg = if info.is_error {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.primary
    };

    let list_summary = if info.is_cyclic {
        Span::styled(
            format!(" {} nodes ↺ ", info.list_len),
            bar.fg(DEFAULT_THEME.back_link).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} nodes ", info.list_len),
            bar.fg(DEFAULT_THEME.handle),
        )
    };

    let left = Line::from(vec![
        Span::styled(
            format!(" Step {}/{} ", info.current_step + 1, info.total_steps),
            Style::default()
                .bg(step_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        list_summary,
        Span::styled("│", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!(" {} ", info.message),
            bar.fg(if info.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(left).style(bar).alignment(Alignment::Left),
        halves[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let mut right = Vec::with_capacity(KEYBINDS.len() * 3 + 2);
    for (i, (key, action)) in KEYBINDS.iter().enumerate() {
        if i > 0 {
            right.push(Span::styled(" ", bar));
        }
        right.push(Span::styled(*key, key_style));
        right.push(Span::styled(*action, bar.fg(DEFAULT_THEME.fg)));
    }

    if let Some((label, color)) = info.badge() {
        right.push(Span::styled("│", bar.fg(DEFAULT_THEME.comment)));
        right.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right))
            .style(bar)
            .alignment(Alignment::Right),
        halves[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(current_step: usize, is_error: bool, is_playing: bool) -> StatusInfo<'static> {
        StatusInfo {
            message: "",
            current_step,
            total_steps: 5,
            list_len: 0,
            is_cyclic: false,
            is_error,
            is_playing,
        }
    }

    #[test]
    fn test_badges() {
        assert_eq!(info(0, false, false).badge().map(|b| b.0), Some(" START "));
        assert_eq!(info(2, false, false).badge(), None);
        assert_eq!(info(4, false, false).badge().map(|b| b.0), Some(" END "));
        assert_eq!(info(4, true, false).badge().map(|b| b.0), Some(" ERROR "));
        assert_eq!(info(4, true, true).badge().map(|b| b.0), Some(" ▶ PLAYING "));
    }
}
