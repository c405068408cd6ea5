//! Static drawing tables for the gallows and the figure.
//!
//! Coordinates are in canvas pixels for a 200x250 canvas. A step is drawn once per life lost, in table order, and
//! only ever erased by the full clear at the start of a round.

use serde::{Deserialize, Serialize};

use crate::MAX_LIVES;

/// Canvas size the stroke coordinates are laid out for.
pub const CANVAS_SIZE: (u32, u32) = (200, 250);

/// Stroke width used for every primitive.
pub const LINE_WIDTH: f64 = 4.0;

pub type Point = (f64, f64);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Stroke {
    Line { from: Point, to: Point },
    Circle { center: Point, radius: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    LeftEye,
    RightEye,
    Mouth,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FigureStep {
    pub part: BodyPart,
    pub strokes: &'static [Stroke],
}

const fn line(from: Point, to: Point) -> Stroke {
    Stroke::Line { from, to }
}

const fn circle(center: Point, radius: f64) -> Stroke {
    Stroke::Circle { center, radius }
}

/// Backdrop drawn at the start of every round: base, pole, beam and rope.
pub static GALLOWS: [Stroke; 4] = [
    line((20.0, 230.0), (180.0, 230.0)),
    line((60.0, 230.0), (60.0, 20.0)),
    line((60.0, 20.0), (150.0, 20.0)),
    line((150.0, 20.0), (150.0, 50.0)),
];

/// Indexed by lives lost minus one.
pub static FIGURE_STEPS: [FigureStep; 9] = [
    FigureStep {
        part: BodyPart::Head,
        strokes: &[circle((150.0, 70.0), 20.0)],
    },
    FigureStep {
        part: BodyPart::Torso,
        strokes: &[line((150.0, 90.0), (150.0, 150.0))],
    },
    FigureStep {
        part: BodyPart::LeftArm,
        strokes: &[line((150.0, 100.0), (120.0, 130.0))],
    },
    FigureStep {
        part: BodyPart::RightArm,
        strokes: &[line((150.0, 100.0), (180.0, 130.0))],
    },
    FigureStep {
        part: BodyPart::LeftLeg,
        strokes: &[line((150.0, 150.0), (120.0, 190.0))],
    },
    FigureStep {
        part: BodyPart::RightLeg,
        strokes: &[line((150.0, 150.0), (180.0, 190.0))],
    },
    FigureStep {
        part: BodyPart::LeftEye,
        strokes: &[circle((140.0, 65.0), 2.0)],
    },
    FigureStep {
        part: BodyPart::RightEye,
        strokes: &[circle((160.0, 65.0), 2.0)],
    },
    FigureStep {
        part: BodyPart::Mouth,
        strokes: &[line((140.0, 85.0), (160.0, 85.0))],
    },
];

/// Step that appears when the player drops to `lives_remaining`, if any.
pub fn step_for_lives(lives_remaining: u8) -> Option<&'static FigureStep> {
    let lives_lost = MAX_LIVES.checked_sub(lives_remaining)?;
    step_for_lives_lost(lives_lost)
}

pub fn step_for_lives_lost(lives_lost: u8) -> Option<&'static FigureStep> {
    FIGURE_STEPS.get(usize::from(lives_lost).checked_sub(1)?)
}

/// Every step visible after `lives_lost` misses, in drawing order.
pub fn cumulative_steps(lives_lost: u8) -> impl Iterator<Item = &'static FigureStep> {
    FIGURE_STEPS.iter().take(usize::from(lives_lost))
}

pub fn cumulative_strokes(lives_lost: u8) -> impl Iterator<Item = &'static Stroke> {
    cumulative_steps(lives_lost).flat_map(|step| step.strokes.iter())
}

/// Tracks which steps already landed on the canvas for the current round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FigureProgress {
    drawn: u8,
}

impl FigureProgress {
    pub const fn new() -> Self {
        Self { drawn: 0 }
    }

    pub const fn drawn(&self) -> u8 {
        self.drawn
    }

    /// Forget everything drawn, to be paired with a full canvas clear.
    pub fn reset(&mut self) {
        self.drawn = 0;
    }

    /// Steps not yet drawn for `lives_lost`, marking them as drawn.
    pub fn advance(&mut self, lives_lost: u8) -> impl Iterator<Item = &'static FigureStep> + use<> {
        let target = lives_lost.min(FIGURE_STEPS.len() as u8);
        let start = self.drawn.min(target);
        self.drawn = self.drawn.max(target);
        FIGURE_STEPS[usize::from(start)..usize::from(target)].iter()
    }
}
