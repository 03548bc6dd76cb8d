use crate::parameters::ParamId;
use crate::vector::ParameterVector;

/// Typed view of a parameter vector, as consumed by tree mesh generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeStyle {
    pub color: [f32; 4],
    pub depth: u32,
    pub width: f32,
    pub height: f32,
    pub scale: f32, // child branch length relative to its parent
    pub split_angle: f32,
    pub branch_color: [f32; 3],
    pub leaf_color: [f32; 3],
    pub leaf_size: f32,
}

impl From<&ParameterVector> for TreeStyle {
    fn from(v: &ParameterVector) -> Self {
        Self {
            color: [v[ParamId::Red], v[ParamId::Green], v[ParamId::Blue], v[ParamId::Alpha]],
            depth: v[ParamId::Depth].round().max(0.0) as u32,
            width: v[ParamId::Width],
            height: v[ParamId::Height],
            scale: v[ParamId::Scale],
            split_angle: v[ParamId::SplitAngle],
            branch_color: [v[ParamId::BranchR], v[ParamId::BranchG], v[ParamId::BranchB]],
            leaf_color: [v[ParamId::LeafR], v[ParamId::LeafG], v[ParamId::LeafB]],
            leaf_size: v[ParamId::LeafSize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_named_fields() {
        let v = ParameterVector::from_fn(|i| i as f32 / 10.0);
        let style = TreeStyle::from(&v);
        assert_eq!(style.color, [0.0, 0.1, 0.2, 0.3]);
        assert_eq!(style.depth, 0);
        assert_eq!(style.split_angle, 0.8);
        assert_eq!(style.leaf_color, [1.2, 1.3, 1.4]);
        assert_eq!(style.leaf_size, 1.5);
    }

    #[test]
    fn depth_is_rounded() {
        let mut v = ParameterVector::zeros();
        v[ParamId::Depth] = 4.6;
        assert_eq!(TreeStyle::from(&v).depth, 5);
    }
}
