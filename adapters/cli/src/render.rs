//! Plain-text rendering of levels and session summaries.

use std::fmt::Write as _;

use hexmaze_core::{Cell, CellCoord, GameSnapshot, LevelSnapshot};

/// Glyph used for a single maze cell, highest priority first.
fn glyph(level: &LevelSnapshot, cell: CellCoord) -> char {
    if level.player.cell() == cell {
        return '@';
    }
    if level.hazards.moving_walls.iter().any(|wall| wall.cell == cell) {
        return 'W';
    }
    if let Some(instance) = level.mini_games.iter().find(|instance| instance.cell == cell) {
        return if instance.completed { 'm' } else { 'M' };
    }
    if cell == level.goal {
        return 'G';
    }
    if cell == level.maze.start() {
        return 'S';
    }
    match level.maze.cell(cell) {
        Cell::Wall => '#',
        Cell::Path if level.hazards.glitch_active_at(cell) => '%',
        Cell::Path if in_glitch_zone(level, cell) => '~',
        Cell::Path => '.',
    }
}

fn in_glitch_zone(level: &LevelSnapshot, cell: CellCoord) -> bool {
    level
        .hazards
        .glitch_zones
        .iter()
        .any(|zone| zone.area.contains(cell))
}

/// Draws the maze grid followed by a legend of its mini-games and hazards.
pub(crate) fn level(level: &LevelSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Level {} - {} ({}x{}, {}s)",
        level.number,
        level.name,
        level.maze.columns(),
        level.maze.rows(),
        level.time_left.as_secs(),
    );

    for row in 0..level.maze.rows() {
        let line: String = (0..level.maze.columns())
            .map(|column| glyph(level, CellCoord::new(column, row)))
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    for instance in &level.mini_games {
        let _ = writeln!(
            out,
            "mini-game {:>2} {:<7} at ({}, {}) budget {}s{}",
            instance.id.get(),
            instance.kind().label(),
            instance.cell.column(),
            instance.cell.row(),
            instance.time_budget.as_secs(),
            if instance.completed { " [done]" } else { "" },
        );
    }
    for wall in &level.hazards.moving_walls {
        let _ = writeln!(
            out,
            "moving wall at ({}, {}) facing {:?} every {}ms",
            wall.cell.column(),
            wall.cell.row(),
            wall.facing,
            wall.step_interval.as_millis(),
        );
    }
    for zone in &level.hazards.glitch_zones {
        let origin = zone.area.origin();
        let _ = writeln!(
            out,
            "glitch zone at ({}, {}) {}x{}",
            origin.column(),
            origin.row(),
            zone.area.width(),
            zone.area.height(),
        );
    }
    out
}

/// One-screen summary of a session snapshot.
pub(crate) fn summary(snapshot: &GameSnapshot, ticks: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ticks: {ticks}");
    let _ = writeln!(out, "mode: {:?}", snapshot.mode);
    let _ = writeln!(out, "score: {}", snapshot.score);

    if let Some(level) = &snapshot.level {
        let cell = level.player.cell();
        let _ = writeln!(out, "level: {} ({})", level.number, level.name);
        let _ = writeln!(out, "time left: {:.1}s", level.time_left.as_secs_f32());
        let _ = writeln!(
            out,
            "player: cell ({}, {}) energy {} checkpoints {}",
            cell.column(),
            cell.row(),
            level.player.energy,
            level.player.checkpoints,
        );
        let _ = writeln!(
            out,
            "mini-games: {}/{} completed",
            level.completed_mini_games(),
            level.mini_games.len(),
        );
    }

    if let Some(attempt) = &snapshot.active_mini_game {
        let _ = writeln!(
            out,
            "active mini-game: {} with {:.1}s left",
            attempt.kind().label(),
            attempt.time_left.as_secs_f32(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hexmaze_core::{
        Cell, CellCoord, GameSnapshot, Hazards, LevelSnapshot, Maze, PlayMode, Player,
    };

    fn tiny_level() -> LevelSnapshot {
        let mut maze = Maze::filled(5, 5, Cell::Wall);
        for column in 1..=3 {
            maze.set(CellCoord::new(column, 1), Cell::Path);
            maze.set(CellCoord::new(column, 3), Cell::Path);
        }
        maze.set(CellCoord::new(3, 2), Cell::Path);
        LevelSnapshot {
            number: 1,
            name: "Tiny".to_owned(),
            goal: maze.goal(),
            player: Player::spawn_at(CellCoord::new(2, 1)),
            maze,
            hazards: Hazards::default(),
            mini_games: Vec::new(),
            time_left: Duration::from_secs(90),
        }
    }

    #[test]
    fn level_grid_marks_start_goal_and_player() {
        let text = super::level(&tiny_level());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Level 1 - Tiny (5x5, 90s)");
        assert_eq!(&lines[1..6], ["#####", "#S@.#", "###.#", "#..G#", "#####"]);
    }

    #[test]
    fn summary_reports_the_level() {
        let snapshot = GameSnapshot {
            mode: PlayMode::Playing,
            score: 500,
            level: Some(tiny_level()),
            active_mini_game: None,
        };
        let text = super::summary(&snapshot, 12);
        assert!(text.contains("ticks: 12"));
        assert!(text.contains("mode: Playing"));
        assert!(text.contains("score: 500"));
        assert!(text.contains("player: cell (2, 1) energy 100 checkpoints 0"));
        assert!(text.contains("mini-games: 0/0 completed"));
    }
}
