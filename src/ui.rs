use macroquad::prelude::*;

use crate::config::{Config, Metrics};
use crate::game::{Command, Game, GameState};
use crate::geometry::{Direction, Position};

const SNAKE_COLOR: Color = WHITE;
const FOOD_COLOR: Color = GREEN;
const SCORE_COLOR: Color = Color::new(0.2, 0.6, 0.84, 1.0);
const LOST_COLOR: Color = Color::new(0.84, 0.2, 0.31, 1.0);
const BUTTON_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);

pub const WINDOW_TITLE: &str = "Snake";
pub const LOST_MESSAGE: &str = "You lost!";
pub const RESTART_LABEL: &str = "Restart";
pub const QUIT_LABEL: &str = "Quit";

pub fn window_conf(config: &Config) -> Conf {
    let m = config.metrics();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: m.width,
        window_height: m.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// The two clickable buttons shown after a crash.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameOverMenu {
    pub restart: Rect,
    pub quit: Rect,
}

impl GameOverMenu {
    /// Both buttons share one row at half height, centered as a pair.
    pub fn new(m: &Metrics) -> Self {
        let restart_x =
            ((m.width as f32 - 2.0 * m.button_width - m.button_spacing) / 2.0).floor();
        let quit_x = restart_x + m.button_width + m.button_spacing;
        let y = (m.height / 2) as f32;
        Self {
            restart: Rect::new(restart_x, y, m.button_width, m.button_height),
            quit: Rect::new(quit_x, y, m.button_width, m.button_height),
        }
    }

    pub fn hit(&self, point: Vec2) -> Option<Command> {
        if self.restart.contains(point) {
            Some(Command::Restart)
        } else if self.quit.contains(point) {
            Some(Command::Quit)
        } else {
            None
        }
    }
}

/// Drawing state built once at startup.
pub struct Renderer {
    metrics: Metrics,
    menu: GameOverMenu,
}

impl Renderer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            menu: GameOverMenu::new(&metrics),
            metrics,
        }
    }

    pub fn menu(&self) -> &GameOverMenu {
        &self.menu
    }

    pub fn draw_playfield<R>(&self, game: &Game<R>) {
        clear_background(BLACK);
        self.fill_cell(game.food().position(), FOOD_COLOR);
        for segment in game.snake().body() {
            self.fill_cell(*segment, SNAKE_COLOR);
        }
        self.draw_text_top_left(&format!("Score: {}", game.score()), 10.0, 10.0, SCORE_COLOR);
    }

    pub fn draw_game_over(&self) {
        let m = &self.metrics;
        clear_background(WHITE);
        self.draw_text_top_left(
            LOST_MESSAGE,
            (m.width / 3) as f32,
            (m.height / 4) as f32,
            LOST_COLOR,
        );
        self.draw_button(self.menu.restart, RESTART_LABEL);
        self.draw_button(self.menu.quit, QUIT_LABEL);
    }

    fn fill_cell(&self, pos: Position, color: Color) {
        let size = self.metrics.cell_size as f32;
        draw_rectangle(pos.x as f32, pos.y as f32, size, size, color);
    }

    fn draw_button(&self, rect: Rect, label: &str) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, BUTTON_COLOR);
        let dims = measure_text(label, None, self.metrics.font_size, 1.0);
        let x = rect.x + (rect.w - dims.width) / 2.0;
        let y = rect.y + (rect.h - dims.height) / 2.0;
        self.draw_text_top_left(label, x, y, BLACK);
    }

    /// Text positioned by its top-left corner rather than its baseline.
    fn draw_text_top_left(&self, text: &str, x: f32, y: f32, color: Color) {
        let dims = measure_text(text, None, self.metrics.font_size, 1.0);
        let params = TextParams {
            font_size: self.metrics.font_size,
            color,
            ..Default::default()
        };
        draw_text_ex(text, x, y + dims.offset_y, params);
    }
}

/// Translates this frame's host events into commands for `state`.
pub fn poll_commands(state: GameState, menu: &GameOverMenu) -> Vec<Command> {
    let mut commands = Vec::new();
    if is_quit_requested() {
        commands.push(Command::Close);
    }
    match state {
        GameState::Running => {
            if is_key_pressed(KeyCode::Left) {
                commands.push(Command::Turn(Direction::Left));
            } else if is_key_pressed(KeyCode::Right) {
                commands.push(Command::Turn(Direction::Right));
            } else if is_key_pressed(KeyCode::Up) {
                commands.push(Command::Turn(Direction::Up));
            } else if is_key_pressed(KeyCode::Down) {
                commands.push(Command::Turn(Direction::Down));
            }
        }
        GameState::GameOver => {
            if is_mouse_button_pressed(MouseButton::Left) {
                let (x, y) = mouse_position();
                commands.extend(menu.hit(vec2(x, y)));
            }
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;

    #[test]
    fn classic_buttons_match_the_original_layout() {
        let menu = GameOverMenu::new(&Layout::Classic.metrics());
        assert_eq!(menu.restart, Rect::new(175.0, 300.0, 200.0, 50.0));
        assert_eq!(menu.quit, Rect::new(425.0, 300.0, 200.0, 50.0));
    }

    #[test]
    fn clicks_map_to_buttons() {
        let menu = GameOverMenu::new(&Layout::Classic.metrics());
        assert_eq!(menu.hit(vec2(275.0, 325.0)), Some(Command::Restart));
        assert_eq!(menu.hit(vec2(525.0, 325.0)), Some(Command::Quit));
        // Gap between the buttons, above them, and below them.
        assert_eq!(menu.hit(vec2(400.0, 325.0)), None);
        assert_eq!(menu.hit(vec2(275.0, 290.0)), None);
        assert_eq!(menu.hit(vec2(525.0, 360.0)), None);
    }

    #[test]
    fn compact_buttons_fit_the_window() {
        let m = Layout::Compact.metrics();
        let menu = GameOverMenu::new(&m);
        assert!(menu.restart.x >= 0.0);
        assert!(menu.quit.x + menu.quit.w <= m.width as f32);
        assert!(!menu.restart.overlaps(&menu.quit));
        assert_eq!(menu.hit(menu.quit.center()), Some(Command::Quit));
    }

    #[test]
    fn window_matches_layout() {
        let conf = window_conf(&Config::default());
        assert_eq!(conf.window_title, "Snake");
        assert_eq!((conf.window_width, conf.window_height), (800, 600));
        assert!(!conf.window_resizable);
    }
}
