use crate::models::{Point, Shape};
use crate::pipeline::DrawStep;

use super::{
    BODY_COLOR, BODY_RADIUS, BODY_X, BODY_Y, EYE_CENTERS, EYE_COLOR, EYE_RADIUS, HEAD_CENTER,
    HEAD_RADIUS, LEG_COLOR, LEG_INSET, LEG_LENGTH, LEG_THICKNESS,
};

/// Main body, shifted 3px below the anchor
pub struct BodyStep;

impl DrawStep for BodyStep {
    fn name(&self) -> &str {
        "Body"
    }

    fn shapes(&self) -> Vec<Shape> {
        vec![Shape::circle(Point::new(BODY_X, BODY_Y + 3), BODY_RADIUS, BODY_COLOR)]
    }
}

/// Smaller circle above the body
pub struct HeadStep;

impl DrawStep for HeadStep {
    fn name(&self) -> &str {
        "Head"
    }

    fn shapes(&self) -> Vec<Shape> {
        vec![Shape::circle(HEAD_CENTER, HEAD_RADIUS, BODY_COLOR)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegPair {
    Front,
    Back,
}

impl LegPair {
    /// Vertical offsets from the anchor
    pub fn offsets(&self) -> [i32; 2] {
        match self {
            LegPair::Front => [-8, -2],
            LegPair::Back => [2, 8],
        }
    }
}

/// Two straight legs on one side of the body
pub struct LegsStep {
    side: Side,
    pair: LegPair,
    name: String,
}

impl LegsStep {
    pub fn new(side: Side, pair: LegPair) -> Self {
        let name = format!("{:?} {:?} Legs", side, pair);
        Self { side, pair, name }
    }

    fn leg(&self, y_offset: i32) -> Shape {
        let (x0, x1) = match self.side {
            Side::Left => (BODY_X - LEG_LENGTH - LEG_INSET, BODY_X - LEG_INSET),
            Side::Right => (BODY_X + LEG_INSET, BODY_X + LEG_LENGTH + LEG_INSET),
        };
        let y0 = BODY_Y + y_offset;
        Shape::rect(
            Point::new(x0, y0),
            Point::new(x1, y0 + LEG_THICKNESS),
            LEG_COLOR,
        )
    }
}

impl DrawStep for LegsStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn shapes(&self) -> Vec<Shape> {
        self.pair.offsets().iter().map(|&dy| self.leg(dy)).collect()
    }
}

/// Eye dots, drawn last so they sit on top of the head
pub struct EyesStep;

impl DrawStep for EyesStep {
    fn name(&self) -> &str {
        "Eyes"
    }

    fn shapes(&self) -> Vec<Shape> {
        EYE_CENTERS
            .iter()
            .map(|&center| Shape::circle(center, EYE_RADIUS, EYE_COLOR))
            .collect()
    }
}
