use rand::Rng;

use crate::question_engine::{
    diversity::{pick_template, DiversityTracker},
    helpers::{self, shuffle},
    models::{Answer, Category, DisplayKind, Level, Question},
};

/// A teachable shape: the client maps `name` to its own artwork, and the
/// description feeds explanation text after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const BASIC_2D: [ShapeInfo; 5] = [
    ShapeInfo {
        name: "Circle",
        description: "A perfectly round shape with all points at equal distance from the center",
    },
    ShapeInfo {
        name: "Square",
        description: "A four-sided shape with equal sides and four right angles",
    },
    ShapeInfo {
        name: "Triangle",
        description: "A three-sided polygon with three angles",
    },
    ShapeInfo {
        name: "Rectangle",
        description:
            "A four-sided shape with opposite sides of equal length and four right angles",
    },
    ShapeInfo {
        name: "Oval",
        description: "An elongated circle, shaped like an egg",
    },
];

const POLYGONS_2D: [ShapeInfo; 5] = [
    ShapeInfo {
        name: "Pentagon",
        description: "A five-sided polygon with five angles",
    },
    ShapeInfo {
        name: "Hexagon",
        description: "A six-sided polygon with six angles",
    },
    ShapeInfo {
        name: "Octagon",
        description: "An eight-sided polygon with eight angles",
    },
    ShapeInfo {
        name: "Rhombus",
        description:
            "A four-sided shape with all sides of equal length, but angles are not right angles",
    },
    ShapeInfo {
        name: "Trapezoid",
        description: "A four-sided shape with one pair of parallel sides",
    },
];

const SOLIDS_3D: [ShapeInfo; 5] = [
    ShapeInfo {
        name: "Cube",
        description: "A 3D shape with six equal square faces",
    },
    ShapeInfo {
        name: "Sphere",
        description: "A perfectly round 3D shape like a ball",
    },
    ShapeInfo {
        name: "Cylinder",
        description: "A 3D shape with circular bases and a curved surface",
    },
    ShapeInfo {
        name: "Cone",
        description: "A 3D shape with a circular base and a point at the top",
    },
    ShapeInfo {
        name: "Pyramid",
        description:
            "A 3D shape with a square base and triangular faces that meet at a point",
    },
];

/// The catalog a level teaches from.
pub fn shapes_for(level: Level) -> &'static [ShapeInfo] {
    match level {
        Level::Beginner     => &BASIC_2D,
        Level::Intermediate => &POLYGONS_2D,
        Level::Advanced     => &SOLIDS_3D,
    }
}

fn templates_for(level: Level) -> &'static [&'static str] {
    match level {
        Level::Beginner => &[
            "What shape is this?",
            "Can you identify this shape?",
            "Name this shape:",
            "Which shape do you see?",
        ],
        Level::Intermediate => &[
            "Identify this geometric shape:",
            "What do we call this shape?",
            "Name this geometric figure:",
            "Which polygon is shown here?",
        ],
        Level::Advanced => &[
            "What 3D shape is represented here?",
            "Identify this three-dimensional shape:",
            "Name this 3D geometric form:",
            "Which 3D geometric solid is shown?",
        ],
    }
}

pub fn generate<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let catalog = shapes_for(level);

    let shape = *tracker
        .pick_non_repeating(rng, catalog, Category::Shapes, |s| s.name.to_string())
        .expect("shape catalogs are never empty");

    // Three wrong names from the same catalog plus the right one.
    let mut others: Vec<&ShapeInfo> = catalog.iter().filter(|s| s.name != shape.name).collect();
    shuffle(rng, &mut others);
    let mut options: Vec<Answer> = others
        .into_iter()
        .take(3)
        .map(|s| Answer::Text(s.name.to_string()))
        .collect();
    options.push(Answer::Text(shape.name.to_string()));
    shuffle(rng, &mut options);

    helpers::question(
        question_id,
        Category::Shapes,
        format!("Identify:{}", shape.name),
        pick_template(rng, templates_for(level)),
        shape.name.to_string(),
        DisplayKind::Shape,
        Answer::Text(shape.name.to_string()),
        options,
    )
}
