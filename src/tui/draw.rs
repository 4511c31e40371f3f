use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Row, Table};

use crate::tui::app::App;
use crate::vehicle::fleet::summarize_fleet;
use crate::vehicle::vehicle::{Vehicle, VehicleStatus};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let fleet_rows = summarize_fleet(app.engine.vehicles()).len();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length((fleet_rows + 3) as u16),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(frame.area());

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_fleet_table(app), chunks[2]);
    frame.render_widget(build_vehicle_table(app), chunks[4]);
}

fn status_style(status: VehicleStatus) -> Style {
    match status {
        VehicleStatus::EnRoute => Style::default().fg(Color::Green),
        VehicleStatus::Idle => Style::default().add_modifier(Modifier::DIM),
        VehicleStatus::Stranded => Style::default().fg(Color::Red),
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Routesim ").style(Style::default().bold().cyan()),
            Span::raw("—").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", app.engine.scenario_name()))
                .style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Turn: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", app.engine.turn())).style(Style::default().bold()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_fleet_table(app: &'_ App) -> Table<'_> {
    let summaries = summarize_fleet(app.engine.vehicles());

    Table::new(
        summaries.into_iter().map(|summary| {
            Row::new(vec![
                Cell::from(format!("{} {}", summary.model().icon(), summary.model().name())),
                Cell::from(format!("{:>5}", summary.count())),
                Cell::from(format!("{:>8}", summary.en_route())),
                Cell::from(format!("{:>8}", summary.stranded())),
                Cell::from(format!("{:>10}", summary.deliveries())),
                Cell::from(format!("{:>8}", summary.odometer())),
            ])
        }),
        [
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new([
            Cell::from("Fleet"),
            Cell::from("Count"),
            Cell::from("En route"),
            Cell::from("Stranded"),
            Cell::from("Deliveries"),
            Cell::from("Odometer"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Fleet ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn vehicle_row(vehicle: &Vehicle) -> Row<'_> {
    let position = vehicle.position();
    let coordinates = position.coordinates();
    let destination = vehicle
        .destination()
        .map_or("-".to_string(), |n| n.location().to_string());
    let next_hop = vehicle
        .next_hop()
        .map_or("-".to_string(), |n| n.location().to_string());
    let status = match vehicle.status() {
        VehicleStatus::EnRoute => "en route",
        VehicleStatus::Idle => "idle",
        VehicleStatus::Stranded => "stranded",
    };

    Row::new(vec![
        Cell::from(vehicle.id().to_string()),
        Cell::from(vehicle.model().icon()),
        Cell::from(position.location().to_string()),
        Cell::from(format!(
            "{:>6.1},{:>6.1}",
            coordinates.latitude(),
            coordinates.longitude()
        )),
        Cell::from(destination),
        Cell::from(next_hop),
        Cell::from(format!("{:>6}", vehicle.odometer())),
        Cell::from(format!("{:>4}", vehicle.deliveries())),
        Cell::from(status).style(status_style(vehicle.status())),
    ])
}

fn build_vehicle_table(app: &'_ App) -> Table<'_> {
    Table::new(
        app.engine.vehicles().iter().map(vehicle_row),
        [
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(15),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new([
            Cell::from("ID"),
            Cell::from(""),
            Cell::from("At"),
            Cell::from("Coords"),
            Cell::from("Dest"),
            Cell::from("Next"),
            Cell::from("    Km"),
            Cell::from("Dlv"),
            Cell::from("Status"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Vehicles ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}
