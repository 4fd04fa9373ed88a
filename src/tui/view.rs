use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::SessionSnapshot;
use crate::domain::{Message, Sender};

const TITLE: &str = " NilAI ";
const THINKING: &str = "AI is thinking...";
const HINT: &str = "Enter to send, Esc to quit";

pub fn render(frame: &mut Frame, snapshot: &SessionSnapshot<'_>) {
    let [history_area, status_area, input_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_history(frame, history_area, snapshot.messages);
    render_status(frame, status_area, snapshot);
    render_input(frame, input_area, snapshot);
}

fn render_history(frame: &mut Frame, area: Rect, messages: &[Message]) {
    let block = Block::default().borders(Borders::ALL).title(TITLE);
    let inner = block.inner(area);
    let lines = history_lines(messages, inner.width as usize);

    // Keep the newest entry in view.
    let overflow = lines.len().saturating_sub(inner.height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot<'_>) {
    let line = if snapshot.busy {
        Line::styled(
            THINKING,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )
    } else if let Some(error) = snapshot.last_error {
        Line::styled(error, Style::default().fg(Color::Red))
    } else {
        Line::styled(HINT, Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot<'_>) {
    let (title, style) = if snapshot.busy {
        (" Sending ", Style::default().fg(Color::DarkGray))
    } else {
        (" Send ", Style::default())
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    let input = tail_fit(snapshot.pending_input, inner.width as usize);
    let cursor_x = inner.x + u16::try_from(input.width()).unwrap_or(inner.width);

    frame.render_widget(Paragraph::new(input).style(style).block(block), area);
    if !snapshot.busy {
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

/// Display lines for the whole conversation, hard-wrapped to `width`.
pub fn history_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let (label, color) = match message.sender() {
            Sender::User => ("You", Color::Cyan),
            Sender::Bot => ("NilAI", Color::Green),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrap_text(message.text(), width).into_iter().map(Line::from));
    }
    lines
}

/// Splits `text` on newlines, then into chunks no wider than `width`
/// display columns. A single glyph wider than `width` gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for c in raw.chars() {
            let w = char_width(c);
            if used + w > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(c);
            used += w;
        }
        out.push(line);
    }
    out
}

/// The trailing part of `input` that fits in `width` columns, leaving one
/// column free for the cursor.
fn tail_fit(input: &str, width: usize) -> String {
    let visible = width.saturating_sub(1);
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in input.chars().rev() {
        let w = char_width(c);
        if used + w > visible {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ChatSession;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn wrap_text_splits_on_width_and_newlines() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("ab\n\ncd", 10), vec!["ab", "", "cd"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn wrap_text_measures_display_columns() {
        assert_eq!(wrap_text("你好世界", 5), vec!["你好", "世界"]);
        assert_eq!(wrap_text("ab你", 3), vec!["ab", "你"]);
        assert_eq!(wrap_text("你", 1), vec!["你"]);
    }

    #[test]
    fn history_lines_label_each_message() {
        let messages = vec![Message::bot("hi"), Message::user("hello")];
        let lines = history_lines(&messages, 20);

        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, vec!["NilAI", "hi", "", "You", "hello"]);
    }

    #[test]
    fn tail_fit_keeps_end_of_input() {
        assert_eq!(tail_fit("hello world", 6), "world");
        assert_eq!(tail_fit("hi", 10), "hi");
        assert_eq!(tail_fit("你好世界", 6), "世界");
    }

    #[test]
    fn render_shows_welcome_and_hint() {
        let session = ChatSession::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Welcome! How can I help you today?"));
        assert!(text.contains(HINT));
    }

    #[test]
    fn render_shows_thinking_while_busy() {
        let mut session = ChatSession::new();
        session.begin_submit("question");
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(THINKING));
        assert!(text.contains("question"));
    }

    #[test]
    fn render_scrolls_to_newest_message() {
        let mut session = ChatSession::new();
        for i in 0..10 {
            session.begin_submit(&format!("question {i}"));
            session.receive(Some(format!("answer {i}")));
        }
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("answer 9"));
        assert!(!text.contains("Welcome!"));
    }

    #[test]
    fn render_keeps_every_wide_character_of_a_reply() {
        let reply = format!("{}完", "你好世界".repeat(8));
        let mut session = ChatSession::new();
        session.begin_submit("q");
        session.receive(Some(reply.clone()));
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .unwrap();

        let wide: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .filter(|symbol| symbol.width() == 2)
            .collect();
        assert_eq!(wide, reply);
    }

    #[test]
    fn render_scrolls_to_end_of_one_long_message() {
        let reply: String = (0..60).map(|i| format!("w{i:02} ")).collect();
        let mut session = ChatSession::new();
        session.begin_submit("q");
        session.receive(Some(reply));
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("w59"));
        assert!(!text.contains("w00"));
        assert!(!text.contains("Welcome!"));
    }
}
