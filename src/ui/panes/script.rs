//! Script pane rendering with command highlighting
//!
//! Shows the script being stepped through with line numbers, a highlighted
//! current line, and the failing line in red when execution stopped on an
//! error.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlight one script line: keyword, integer arguments, echo text, comment
fn highlight_script_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();

    let indent_len = line.len() - line.trim_start().len();
    let (indent, body) = line.split_at(indent_len);
    if !indent.is_empty() {
        spans.push(Span::raw(indent));
    }

    if body.starts_with('#') {
        spans.push(Span::styled(body, Style::default().fg(DEFAULT_THEME.comment)));
        return Line::from(spans);
    }

    let (keyword, rest) = match body.find(char::is_whitespace) {
        Some(pos) => body.split_at(pos),
        None => (body, ""),
    };

    spans.push(Span::styled(
        keyword,
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
    ));

    if keyword.eq_ignore_ascii_case("echo") {
        spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.string)));
        return Line::from(spans);
    }

    let (args, comment) = match rest.find('#') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };

    for (i, word) in args.split(' ').enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if word.parse::<i64>().is_ok() {
            Style::default().fg(DEFAULT_THEME.number)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(word, style));
    }

    if !comment.is_empty() {
        spans.push(Span::styled(comment, Style::default().fg(DEFAULT_THEME.comment)));
    }

    Line::from(spans)
}

/// Scroll state for the script pane
pub struct ScriptScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the script pane
pub fn render_script_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    current_line: usize,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut ScriptScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Script ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Start with the current line centered
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        let target_line_idx = current_line - 1;
        scroll_state.offset = target_line_idx.saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let mut content_line = highlight_script_line(line);

            let num_style = if is_current && is_error {
                // White on red so the failing command stands out
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                let current_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(current_style);
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        for source in ["insert 15 2", "  append -3   # note", "echo a # b", "# only", "print"] {
            assert_eq!(joined(&highlight_script_line(source)), source);
        }
    }

    #[test]
    fn test_keyword_and_number_styles() {
        let line = highlight_script_line("append 10");
        assert_eq!(line.spans[0].content, "append");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));

        let number = line.spans.iter().find(|s| s.content == "10").unwrap();
        assert_eq!(number.style.fg, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_comment_line_is_dimmed() {
        let line = highlight_script_line("# header");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.comment));
    }
}
