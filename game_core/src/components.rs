use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // Left
    Ai,     // Right
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Horizontal sign pointing at this side's goal line
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Ai => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Centre Y (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn top(&self, config: &Config) -> f32 {
        self.y - config.paddle_height / 2.0
    }

    pub fn bottom(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Marks the paddle driven by the computer opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on the centre spot heading toward `toward`.
    ///
    /// The launch angle is within `serve_angle_spread` of horizontal and the
    /// speed is `ball_base_speed` plus up to `ball_speed_spread`.
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        self.pos = config.arena_center();

        let spread = config.serve_angle_spread;
        let angle: f32 = rng.0.gen_range(-spread..spread);
        let speed = config.ball_base_speed + rng.0.gen_range(0.0..config.ball_speed_spread);

        self.vel = Vec2::new(
            toward.direction() * speed * angle.cos(),
            speed * angle.sin(),
        );
    }
}

/// Recent ball positions, newest first
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2, capacity: usize) {
        self.points.push_front(pos);
        self.points.truncate(capacity);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}
