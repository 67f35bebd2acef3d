//! List pane rendering: the node chain and the arena behind it
//!
//! # Layout
//!
//! ```text
//! head ─▶ #3
//!  pos  node   value  next
//!    0    #3       5  #0
//!    1    #0      10  #1
//!    2    #1      20  null
//!
//! arena: 3 live / 4 slots
//!   #0 ■  #1 ■  #2 □  #3 ■
//! ```
//!
//! For a cyclic chain the tail's `next` column names the node it links back
//! to, and that node's row is marked as the cycle entry.

use crate::list::NodeId;
use crate::snapshot::ChainState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rustc_hash::FxHashMap;

/// Slots per row in the arena map
const SLOTS_PER_ROW: usize = 6;

/// Scroll state for the list pane
pub struct ListScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

fn handle_style() -> Style {
    Style::default().fg(DEFAULT_THEME.handle)
}

/// Build the pane content for one chain state
pub fn build_list_lines(chain: &ChainState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let arena = chain.arena();
    let ids = chain.node_ids();
    let back_link = chain.back_link();

    let positions: FxHashMap<NodeId, usize> =
        ids.iter().enumerate().map(|(pos, id)| (*id, pos)).collect();

    match chain.head() {
        Some(head) => lines.push(Line::from(vec![
            Span::styled("head ─▶ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(head.to_string(), handle_style()),
        ])),
        None => lines.push(Line::from(Span::styled(
            "head ─▶ null  (empty list)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }

    if !ids.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {:>4}  {:>4}  {:>8}  next", "pos", "node", "value"),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        )));
    }

    for (pos, id) in ids.iter().enumerate() {
        let value = arena
            .value(*id)
            .map_or_else(|| "?".to_string(), |v| v.to_string());
        let is_entry = back_link == Some(*id);

        let mut spans = vec![
            Span::raw(format!(" {:>4}  ", pos)),
            Span::styled(format!("{:>4}", id.to_string()), handle_style()),
            Span::styled(
                format!("  {:>8}  ", value),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ];

        let is_tail = pos + 1 == ids.len();
        match arena.next_of(*id) {
            Some(next) if is_tail && back_link.is_some() => {
                let target_pos = positions
                    .get(&next)
                    .map_or_else(String::new, |p| format!(" (pos {})", p));
                spans.push(Span::styled(
                    format!("{} ↺{}", next, target_pos),
                    Style::default()
                        .fg(DEFAULT_THEME.back_link)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Some(next) => spans.push(Span::styled(next.to_string(), handle_style())),
            None => spans.push(Span::styled(
                "null",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        }

        if is_entry {
            spans.push(Span::styled(
                "  ◀ cycle entry",
                Style::default().fg(DEFAULT_THEME.back_link),
            ));
        }

        lines.push(Line::from(spans));
    }

    // Arena occupancy map
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("arena: {} live / {} slots", arena.live(), arena.slot_count()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    let slots: Vec<(NodeId, bool)> = arena.slot_states().collect();
    for row in slots.chunks(SLOTS_PER_ROW) {
        let mut spans = vec![Span::raw("  ")];
        for (id, occupied) in row {
            spans.push(Span::styled(format!("{:>3}", id.to_string()), handle_style()));
            spans.push(if *occupied {
                Span::styled(" ■  ", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled(" □  ", Style::default().fg(DEFAULT_THEME.comment))
            });
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the list pane
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    chain: &ChainState,
    is_focused: bool,
    scroll_state: &mut ListScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if chain.is_cyclic() {
        format!(" List ({} nodes, cyclic) ", chain.len())
    } else {
        format!(" List ({} nodes) ", chain.len())
    };

    let title_style = if chain.is_cyclic() {
        Style::default()
            .fg(DEFAULT_THEME.back_link)
            .add_modifier(Modifier::BOLD)
    } else {
        border_style
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let all_items: Vec<ListItem> = build_list_lines(chain)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Reset scroll when the chain grows or shrinks between steps
    if total_items != scroll_state.prev_item_count {
        scroll_state.offset = 0;
        scroll_state.prev_item_count = total_items;
    }

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::LinkedList;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_empty_chain() {
        let lines = plain(&build_list_lines(&ChainState::default()));
        assert!(lines[0].contains("empty list"));
        assert!(lines.iter().any(|l| l.contains("0 live / 0 slots")));
    }

    #[test]
    fn test_linear_chain_rows() {
        let list: LinkedList<i64> = [10, 20, 30].into_iter().collect();
        let lines = plain(&build_list_lines(&ChainState::Linear(list)));

        assert_eq!(lines[0], "head ─▶ #0");
        // header + 3 node rows
        assert!(lines[2].contains("10") && lines[2].ends_with("#1"));
        assert!(lines[4].contains("30") && lines[4].ends_with("null"));
        assert!(!lines.iter().any(|l| l.contains("cycle entry")));
    }

    #[test]
    fn test_cyclic_chain_marks_back_link() {
        let list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
        let fixture = list.into_cyclic(1).unwrap();
        let lines = plain(&build_list_lines(&ChainState::Cyclic(fixture)));

        assert!(lines[3].contains("cycle entry"));
        assert!(lines[4].contains("↺ (pos 1)"));
    }
}
