//! Stateless UI rendering for the game screen.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_rewind_core::{GameView, Player, Position};

const HELP: &str = "arrows/1-9 play · [ ] step · Home/End jump · s sort · r restart · q quit";

/// Renders the board, status line and move list.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board + history
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_board(frame, columns[0], &view, app.cursor());
    draw_moves(frame, columns[1], &view);
    draw_status(frame, rows[2], &view, app.notice());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (slot, pos) in Position::ALL[row * 3..row * 3 + 3].iter().enumerate() {
        draw_cell(frame, cols[slot * 2], view, cursor, *pos);
        if slot < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[slot * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let (symbol, mut style) = match view.cells[pos.to_index()] {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if view.is_winning(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(symbol, style))])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("History ({})", view.order_label))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, notice: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        view.status.clone(),
        Style::default().fg(Color::Yellow),
    ))];
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_rewind_core::MoveOrder;

    fn render(app: &App) -> String {
        render_rows(app).join("\n")
    }

    fn render_rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(MoveOrder::Ascending);
        app.handle(Action::PlayCell(7));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("You are at move #1"));
        assert!(screen.contains("Sort list Ascending"));
    }

    #[test]
    fn test_board_separators_line_up() {
        let app = App::new(MoveOrder::Ascending);
        let rows: Vec<Vec<char>> = render_rows(&app)
            .iter()
            .map(|row| row.chars().collect())
            .collect();

        let sep_y = rows.iter().position(|row| row.contains(&'┼')).unwrap();
        let sep = &rows[sep_y];
        let crosses: Vec<usize> = (0..sep.len()).filter(|&x| sep[x] == '┼').collect();
        assert_eq!(crosses.len(), 2);
        assert_eq!(crosses[1] - crosses[0], 8);

        // Column separators sit on the first line of each 3-line cell row.
        let cell_row = &rows[sep_y - 3];
        for &x in &crosses {
            assert_eq!(cell_row[x], '│', "column separator misaligned at x={}", x);
        }
        assert_eq!(sep[crosses[0] - 7], '─');
        assert_eq!(sep[crosses[0] - 8], ' ');
        assert_eq!(sep[crosses[1] + 7], '─');
        assert_eq!(sep[crosses[1] + 8], ' ');
    }
}
