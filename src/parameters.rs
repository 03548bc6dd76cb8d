// Parameter slots and their fixed domains
// colours are unit intervals, tree measurements are in world units

use std::f32::consts::FRAC_PI_4;

use crate::bounded::Domain;

pub const PARAM_COUNT: usize = 16;

/// One named slot of the generated style vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    // colours
    Red,
    Green,
    Blue,
    Alpha,

    // tree shape
    Depth,
    Width,
    Height,
    Scale,
    SplitAngle,
    BranchR,
    BranchG,
    BranchB,
    LeafR,
    LeafG,
    LeafB,
    LeafSize,
}

pub static PARAMETER_DOMAINS: [Domain; PARAM_COUNT] = [
    Domain::continuous(0.0, 1.0),       // red
    Domain::continuous(0.0, 1.0),       // green
    Domain::continuous(0.0, 1.0),       // blue
    Domain::continuous(0.0, 1.0),       // alpha
    Domain::integral(1.0, 8.0),         // depth
    Domain::continuous(0.1, 2.0),       // width
    Domain::continuous(0.2, 20.0),      // height
    Domain::continuous(0.1, 0.98),      // scale
    Domain::continuous(0.1, FRAC_PI_4), // split angle
    Domain::continuous(0.0, 1.0),       // branch r
    Domain::continuous(0.0, 1.0),       // branch g
    Domain::continuous(0.0, 1.0),       // branch b
    Domain::continuous(0.0, 1.0),       // leaf r
    Domain::continuous(0.0, 1.0),       // leaf g
    Domain::continuous(0.0, 1.0),       // leaf b
    Domain::continuous(0.5, 2.0),       // leaf size
];

impl ParamId {
    pub const ALL: [ParamId; PARAM_COUNT] = [
        ParamId::Red,
        ParamId::Green,
        ParamId::Blue,
        ParamId::Alpha,
        ParamId::Depth,
        ParamId::Width,
        ParamId::Height,
        ParamId::Scale,
        ParamId::SplitAngle,
        ParamId::BranchR,
        ParamId::BranchG,
        ParamId::BranchB,
        ParamId::LeafR,
        ParamId::LeafG,
        ParamId::LeafB,
        ParamId::LeafSize,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn domain(self) -> Domain {
        PARAMETER_DOMAINS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamId::Red => "red",
            ParamId::Green => "green",
            ParamId::Blue => "blue",
            ParamId::Alpha => "alpha",
            ParamId::Depth => "depth",
            ParamId::Width => "width",
            ParamId::Height => "height",
            ParamId::Scale => "scale",
            ParamId::SplitAngle => "split angle",
            ParamId::BranchR => "branch r",
            ParamId::BranchG => "branch g",
            ParamId::BranchB => "branch b",
            ParamId::LeafR => "leaf r",
            ParamId::LeafG => "leaf g",
            ParamId::LeafB => "leaf b",
            ParamId::LeafSize => "leaf size",
        }
    }
}
