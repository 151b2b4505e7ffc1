use crate::ui::node::{Node, Role};
use crate::ui::theme::{ACCENT, BODY_TEXT, BUTTON_BG, GLOBAL_BORDER, HINT_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Draw an element tree into `area`.
pub fn draw_in(frame: &mut Frame<'_>, root: &Node, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(tree_widget(root), area);
}

/// The element tree as a framed, centered paragraph.
pub fn tree_widget(root: &Node) -> Paragraph<'static> {
    Paragraph::new(tree_lines(root))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// One-line key hints shown under the counter in interactive mode, or the
/// last activation error when there is one.
pub fn draw_hints(frame: &mut Frame<'_>, area: Rect, error: Option<&str>) {
    let line = match error {
        Some(error) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(ACCENT),
        )),
        None => Line::from(Span::styled(
            " +/Up: Increment │ -/Down: Decrement │ q: Quit",
            Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Containers stack their children; everything else occupies one line.
pub fn tree_lines(node: &Node) -> Vec<Line<'static>> {
    match node.role() {
        Role::Container => node.children().iter().flat_map(tree_lines).collect(),
        _ => vec![Line::from(inline_spans(node))],
    }
}

fn inline_spans(node: &Node) -> Vec<Span<'static>> {
    let text = node.own_text().unwrap_or_default().to_string();
    match node.role() {
        Role::Heading => vec![Span::styled(
            text,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )],
        Role::Button => vec![Span::styled(
            format!("[ {text} ]"),
            Style::default().fg(BODY_TEXT).bg(BUTTON_BG),
        )],
        Role::Text => vec![Span::styled(text, Style::default().fg(BODY_TEXT))],
        Role::Row | Role::Container => {
            let mut spans = Vec::new();
            for (idx, child) in node.children().iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.extend(inline_spans(child));
            }
            spans
        }
    }
}
