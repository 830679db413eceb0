//! Stateless rendering of the three screens from a [`ViewState`].

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::ops::Range;
use strictly_hanoi::{Disk, PegId};

use crate::{GameConfig, LeaderboardEntry, Rgb, ViewMode, ViewState, format_time};

const INSTRUCTIONS: [&str; 3] = [
    "Only one disk may be moved at a time.",
    "Each move takes the upper disk from one peg and places it on another peg.",
    "No disk may be placed on top of a smaller disk.",
];

/// Renders whichever screen the view-state is on.
///
/// `status` is a one-line message shown under the timer on the game screen.
pub fn draw(frame: &mut Frame, view: &ViewState, config: &GameConfig, status: Option<&str>) {
    match view.mode {
        ViewMode::Playing => draw_game(frame, view, config, status),
        ViewMode::Solved => draw_congratulations(frame, view),
        ViewMode::ViewingLeaderboard => draw_leaderboard(frame, view),
    }
}

fn draw_game(frame: &mut Frame, view: &ViewState, config: &GameConfig, status: Option<&str>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + timer
            Constraint::Min(6),    // Pegs
            Constraint::Length(8), // Instructions + leaderboard
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let timer_style = if view.timer_running {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tower of Hanoi",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Time: {}", format_time(view.elapsed_ms)),
            timer_style,
        )),
        Line::from(Span::styled(
            status.unwrap_or_default().to_string(),
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    for peg in PegId::ALL {
        draw_peg(frame, columns[peg.to_index()], view, config, peg);
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let instructions = Paragraph::new(
        INSTRUCTIONS
            .iter()
            .map(|rule| Line::from(format!("- {}", rule)))
            .collect::<Vec<_>>(),
    )
    .wrap(Wrap { trim: true })
    .block(Block::default().title("Instructions").borders(Borders::ALL));
    frame.render_widget(instructions, bottom[0]);

    frame.render_widget(
        leaderboard_list(&view.leaderboard_top, "No scores yet.").block(
            Block::default()
                .title("Leaderboard")
                .borders(Borders::ALL),
        ),
        bottom[1],
    );

    let start_label = if view.timer_running { "stop" } else { "start" };
    let help = Paragraph::new(format!(
        "1-3 pick/place  s {}  r reset  l leaderboard  q quit",
        start_label
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_peg(frame: &mut Frame, area: Rect, view: &ViewState, config: &GameConfig, peg: PegId) {
    let sizes = view.peg(peg);
    let selected = view.selection == Some(peg);
    // Borders take two columns; borders plus the base take three rows.
    let inner = area.width.saturating_sub(2) as usize;
    let rows = area.height.saturating_sub(3) as usize;
    let levels = visible_levels(sizes.len(), view.disk_count as usize, rows);

    let mut lines = Vec::with_capacity(levels.len() + 1);
    for level in levels.rev() {
        let line = match sizes.get(level) {
            Some(&size) => {
                let width = disk_width(size, view.disk_count, inner);
                let mut style = config
                    .palette()
                    .color_for(Disk::new(size))
                    .map(|rgb| Style::default().fg(to_color(rgb)))
                    .unwrap_or_default();
                if selected && level + 1 == sizes.len() {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Line::from(Span::styled(format!("{:^inner$}", "█".repeat(width)), style))
            }
            None => Line::from(Span::styled(
                format!("{:^inner$}", "│"),
                Style::default().fg(Color::DarkGray),
            )),
        };
        lines.push(line);
    }
    lines.push(Line::from(Span::styled(
        "▀".repeat(inner),
        Style::default().fg(Color::Gray),
    )));

    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else if view.legal_targets.contains(&peg) {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let title = format!("{} {}", peg.to_index() + 1, peg.label());

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

fn draw_congratulations(frame: &mut Frame, view: &ViewState) {
    let area = center_rect(frame.area(), 50, 11);

    let text = vec![
        Line::from(Span::styled(
            "Congratulations!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You completed the puzzle in:"),
        Line::from(Span::styled(
            format_time(view.elapsed_ms),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Enter name (optional): "),
            Span::styled(
                format!("{}_", view.player_name),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to return to main",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_leaderboard(frame: &mut Frame, view: &ViewState) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        leaderboard_list(&view.leaderboard, "No scores have been recorded yet.").block(
            Block::default()
                .title("Global Leaderboard")
                .borders(Borders::ALL),
        ),
        chunks[0],
    );

    let help = Paragraph::new("Esc return to main  q quit")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn leaderboard_list<'a>(entries: &'a [LeaderboardEntry], empty: &'a str) -> List<'a> {
    if entries.is_empty() {
        return List::new([ListItem::new(Span::styled(
            empty,
            Style::default().fg(Color::DarkGray),
        ))]);
    }

    List::new(entries.iter().enumerate().map(|(rank, entry)| {
        let style = if rank % 2 == 0 {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        };
        ListItem::new(Line::from(vec![
            Span::styled(format!("{:>2}. ", rank + 1), style),
            Span::styled(entry.name().clone(), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", format_time(*entry.time_ms())), style),
        ]))
    }))
}

/// Stack levels that fit in `rows`, keeping the top disk in view.
fn visible_levels(stacked: usize, disk_count: usize, rows: usize) -> Range<usize> {
    let rows = rows.min(disk_count);
    let end = stacked.max(rows);
    end - rows..end
}

/// Width of a disk in cells, scaled down when the widest disk does not fit.
fn disk_width(size: u32, disk_count: u32, inner: usize) -> usize {
    let widest = disk_count as usize * 2 + 1;
    if widest <= inner {
        size as usize * 2 + 1
    } else {
        ((u64::from(size) * inner as u64) / u64::from(disk_count.max(1))).max(1) as usize
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, ManualClock};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(view: &ViewState, config: &GameConfig) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, view, config, None)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_game_screen_shows_pegs_and_timer() {
        let config = GameConfig::default();
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let screen = render(&game.view_state(), &config);
        assert!(screen.contains("Tower of Hanoi"));
        assert!(screen.contains("Time: 0:00"));
        assert!(screen.contains("Target"));
        assert!(screen.contains("No scores yet."));
    }

    #[test]
    fn test_congratulations_screen_shows_name() {
        let config = GameConfig::default();
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let mut view = game.view_state();
        view.mode = ViewMode::Solved;
        view.player_name = "Ada".to_string();
        view.elapsed_ms = 12_345;

        let screen = render(&view, &config);
        assert!(screen.contains("Congratulations!"));
        assert!(screen.contains("0:12"));
        assert!(screen.contains("Ada_"));
    }

    #[test]
    fn test_leaderboard_screen_lists_entries() {
        let config = GameConfig::default();
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let mut view = game.view_state();
        view.mode = ViewMode::ViewingLeaderboard;
        view.leaderboard = vec![LeaderboardEntry::new("Grace", 61_000)];

        let screen = render(&view, &config);
        assert!(screen.contains("Global Leaderboard"));
        assert!(screen.contains("Grace"));
        assert!(screen.contains("1:01"));
    }

    #[test]
    fn test_status_line_shown_on_game_screen() {
        let config = GameConfig::default();
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| draw(f, &game.view_state(), &config, Some("Illegal move")))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Illegal move"));
    }

    #[test]
    fn test_visible_levels_keep_top_disk() {
        assert_eq!(visible_levels(3, 4, 25), 0..4);
        assert_eq!(visible_levels(0, 4_000, 25), 0..25);
        assert_eq!(visible_levels(4_000, 4_000, 25), 3_975..4_000);
        assert_eq!(visible_levels(30, 100, 10), 20..30);
        assert_eq!(visible_levels(2, 5, 0), 2..2);
    }

    #[test]
    fn test_disk_width_scales_to_fit() {
        assert_eq!(disk_width(3, 4, 24), 7);
        assert_eq!(disk_width(4_000, 4_000, 24), 24);
        assert_eq!(disk_width(1, 4_000, 24), 1);
        assert_eq!(disk_width(2_000, 4_000, 24), 12);
    }

    #[test]
    fn test_many_disks_render_within_bounds() {
        let config = GameConfig::default().with_disk_count(4_000);
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let screen = render(&game.view_state(), &config);
        assert!(screen.contains("Target"));
        assert!(screen.contains("█"));
    }

    #[test]
    fn test_preview_lists_only_top_entries() {
        let config = GameConfig::default();
        let game = GameController::with_clock(config.clone(), ManualClock::new()).unwrap();
        let mut view = game.view_state();
        view.leaderboard_top = vec![LeaderboardEntry::new("Grace", 61_000)];
        view.leaderboard = vec![
            LeaderboardEntry::new("Grace", 61_000),
            LeaderboardEntry::new("Linus", 90_000),
        ];

        let screen = render(&view, &config);
        assert!(screen.contains("Grace"));
        assert!(!screen.contains("Linus"));
    }
}
